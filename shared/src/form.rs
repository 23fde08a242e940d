//! Edit form state machine.
//!
//! [`EditForm::transition`] is the only way the form changes. It is a pure
//! `(state, event) -> state` function so the UI layer can keep it in a reducer
//! and tests can drive it without a renderer.

use tracing::debug;

use crate::{
    counter::{counter_view, CounterView},
    draft::character_count,
    validation::{Field, FieldViolation},
    Draft, Post, PostId,
};

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing loaded yet, or reset after a successful save.
    #[default]
    Uninitialized,
    /// Draft mirrors the loaded post.
    Populated,
    /// The user changed a field.
    Dirty,
    /// A submission asked for a full validation pass.
    Validating,
    /// Last validation pass found no violations.
    Valid,
    /// Last validation pass found violations.
    Invalid,
}

/// A single keystroke-level change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// New title value.
    Title(String),
    /// New content value.
    Content(String),
    /// New category id as emitted by the picker.
    CategoryId(String),
}

impl FieldEdit {
    /// Field this edit touches.
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::Title(_) => Field::Title,
            FieldEdit::Content(_) => Field::Content,
            FieldEdit::CategoryId(_) => Field::CategoryId,
        }
    }
}

/// Inputs of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The loader produced the authoritative post.
    Loaded(Post),
    /// The user edited a field.
    Edited(FieldEdit),
    /// A submission started a validation pass.
    ValidationRequested,
    /// Result of the validation pass; empty means valid.
    ValidationCompleted(Vec<FieldViolation>),
    /// The update was saved; drop the draft.
    Reset,
}

/// Draft plus everything derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    phase: FormPhase,
    draft: Draft,
    char_count: usize,
    violations: Vec<FieldViolation>,
    // Survives `Reset` so a saved form does not fall back to the old category.
    loaded_from: Option<PostId>,
}

impl EditForm {
    /// Empty, uninitialized form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Current field values.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Live content length. Always equals `character_count(&draft.content)`.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Violations from the last validation pass still relevant to the draft.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// First violation recorded against `field`.
    pub fn violation_for(&self, field: Field) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    /// Counter to render under the content field.
    pub fn counter(&self) -> Option<CounterView> {
        counter_view(self.char_count)
    }

    /// Category the picker shows when the bound field is empty.
    ///
    /// `loaded` is the loader's post. Its category is offered only until the
    /// form has been populated from that post, so a reset form shows no
    /// selection and matches its empty `categoryId`.
    pub fn category_fallback(&self, loaded: Option<&Post>) -> String {
        match loaded {
            Some(post)
                if self.draft.category_id.is_empty() && self.loaded_from != Some(post.id) =>
            {
                post.category_id.to_string()
            },
            _ => String::new(),
        }
    }

    /// Apply `event` and return the next state.
    pub fn transition(mut self, event: FormEvent) -> Self {
        let from = self.phase;
        match event {
            FormEvent::Loaded(post) => {
                // Overwrites whatever the user typed before the load resolved.
                self.draft = Draft::from_post(&post);
                self.char_count = self.draft.character_count();
                self.violations.clear();
                self.loaded_from = Some(post.id);
                self.phase = FormPhase::Populated;
            },
            FormEvent::Edited(edit) => {
                let field = edit.field();
                match edit {
                    FieldEdit::Title(value) => self.draft.title = value,
                    FieldEdit::Content(value) => {
                        self.char_count = character_count(&value);
                        self.draft.content = value;
                    },
                    FieldEdit::CategoryId(value) => self.draft.category_id = value,
                }
                self.violations.retain(|v| v.field != field);
                self.phase = FormPhase::Dirty;
            },
            FormEvent::ValidationRequested => {
                self.phase = FormPhase::Validating;
            },
            FormEvent::ValidationCompleted(violations) => {
                self.phase = if violations.is_empty() {
                    FormPhase::Valid
                } else {
                    FormPhase::Invalid
                };
                self.violations = violations;
            },
            FormEvent::Reset => {
                self = Self {
                    loaded_from: self.loaded_from,
                    ..Self::default()
                };
            },
        }
        debug!(?from, to = ?self.phase, "edit form transition");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{EditForm, FieldEdit, FormEvent, FormPhase};
    use crate::{
        counter::CounterTier,
        validation::{Field, FieldViolation},
        Draft, Post,
    };

    fn post() -> Post {
        Post {
            id: 1,
            title: "Hello".to_string(),
            content: "World".to_string(),
            category_id: 7,
        }
    }

    #[test]
    fn starts_empty_and_uninitialized() {
        let form = EditForm::new();
        assert_eq!(form.phase(), FormPhase::Uninitialized);
        assert_eq!(form.draft(), &Draft::default());
        assert_eq!(form.char_count(), 0);
        assert!(form.counter().is_none());
    }

    #[test]
    fn load_populates_draft_and_counter() {
        let form = EditForm::new().transition(FormEvent::Loaded(post()));
        assert_eq!(form.phase(), FormPhase::Populated);
        assert_eq!(form.draft().title, "Hello");
        assert_eq!(form.draft().content, "World");
        assert_eq!(form.draft().category_id, "7");
        assert_eq!(form.char_count(), 5);
    }

    #[test]
    fn content_edit_tracks_length() {
        let mut form = EditForm::new().transition(FormEvent::Loaded(post()));
        for len in [0usize, 1, 200, 201, 400, 401] {
            form = form.transition(FormEvent::Edited(FieldEdit::Content("a".repeat(len))));
            assert_eq!(form.char_count(), len);
            assert_eq!(form.char_count(), form.draft().content.chars().count());
            let tier = form.counter().map(|c| c.tier);
            let expected = match len {
                0 => None,
                l if l > 400 => Some(CounterTier::Alert),
                l if l > 200 => Some(CounterTier::Warning),
                _ => Some(CounterTier::Neutral),
            };
            assert_eq!(tier, expected, "len {len}");
        }
        assert_eq!(form.phase(), FormPhase::Dirty);
    }

    #[test]
    fn late_load_clobbers_edits() {
        let form = EditForm::new()
            .transition(FormEvent::Edited(FieldEdit::Title("typed early".to_string())))
            .transition(FormEvent::Loaded(post()));
        assert_eq!(form.draft().title, "Hello");
        assert_eq!(form.phase(), FormPhase::Populated);
    }

    #[test]
    fn validation_outcome_sets_phase() {
        let violation = FieldViolation {
            field: Field::Title,
            message: "title must be between 1 and 50 characters".to_string(),
        };
        let form = EditForm::new()
            .transition(FormEvent::ValidationRequested)
            .transition(FormEvent::ValidationCompleted(vec![violation.clone()]));
        assert_eq!(form.phase(), FormPhase::Invalid);
        assert_eq!(form.violation_for(Field::Title), Some(&violation));

        let form = form.transition(FormEvent::ValidationCompleted(Vec::new()));
        assert_eq!(form.phase(), FormPhase::Valid);
        assert!(form.violations().is_empty());
    }

    #[test]
    fn category_fallback_stops_after_reset() {
        let loaded = post();
        let form = EditForm::new();
        assert_eq!(form.category_fallback(Some(&loaded)), "7");
        assert_eq!(form.category_fallback(None), "");

        let form = form.transition(FormEvent::Loaded(loaded.clone()));
        assert_eq!(form.category_fallback(Some(&loaded)), "");

        let form = form.transition(FormEvent::Reset);
        assert_eq!(form.phase(), FormPhase::Uninitialized);
        assert_eq!(form.draft().category_id, "");
        assert_eq!(form.category_fallback(Some(&loaded)), "");

        // A different post is offered again.
        let other = Post { id: 2, category_id: 9, ..post() };
        assert_eq!(form.category_fallback(Some(&other)), "9");
    }

    #[test]
    fn editing_a_field_clears_only_its_violation() {
        let violations = vec![
            FieldViolation {
                field: Field::Title,
                message: "title".to_string(),
            },
            FieldViolation {
                field: Field::Content,
                message: "content".to_string(),
            },
        ];
        let form = EditForm::new()
            .transition(FormEvent::ValidationCompleted(violations))
            .transition(FormEvent::Edited(FieldEdit::Title("x".to_string())));
        assert!(form.violation_for(Field::Title).is_none());
        assert!(form.violation_for(Field::Content).is_some());
    }

    #[test]
    fn reset_empties_everything() {
        let form = EditForm::new()
            .transition(FormEvent::Loaded(post()))
            .transition(FormEvent::Reset);
        assert_eq!(form, EditForm::new());
    }
}
