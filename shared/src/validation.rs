//! Field-level schema checks run before every submission.

use std::fmt;

use tracing::debug;
use validator::Validate;

use crate::{Draft, UpdatePostRequest};

/// Upper bound on the title, in characters.
pub const TITLE_MAX_CHARS: usize = 50;
/// Upper bound on the content, in characters.
pub const CONTENT_MAX_CHARS: usize = 500;

/// Editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// `title`
    Title,
    /// `content`
    Content,
    /// `categoryId`
    CategoryId,
}

impl Field {
    /// Name of the field in the JSON body.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::CategoryId => "categoryId",
        }
    }

    fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Field::Title),
            "content" => Some(Field::Content),
            "category_id" => Some(Field::CategoryId),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field that failed.
    pub field: Field,
    /// Message suitable for display under the input.
    pub message: String,
}

/// Draft that passed the schema. Only obtainable from [`validate_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft(Draft);

impl ValidatedDraft {
    /// The checked values.
    pub fn draft(&self) -> &Draft {
        &self.0
    }

    /// PATCH body carrying the checked values.
    pub fn into_request(self) -> UpdatePostRequest {
        let Draft {
            title,
            content,
            category_id,
        } = self.0;
        UpdatePostRequest {
            title,
            content,
            category_id,
        }
    }
}

/// Check `draft` against the schema.
///
/// Violations come back ordered by field (title, content, category) so the
/// result is stable across runs.
pub fn validate_draft(draft: &Draft) -> Result<ValidatedDraft, Vec<FieldViolation>> {
    let errors = match draft.validate() {
        Ok(()) => return Ok(ValidatedDraft(draft.clone())),
        Err(errors) => errors,
    };

    let mut violations = Vec::new();
    for (name, field_errors) in errors.field_errors() {
        let Some(field) = Field::from_schema_name(&name) else {
            continue;
        };
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));
            violations.push(FieldViolation {
                field,
                message,
            });
        }
    }
    violations.sort_by_key(|v| v.field);
    debug!(count = violations.len(), "draft rejected by schema");
    Err(violations)
}
