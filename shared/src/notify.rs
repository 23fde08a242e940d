//! Notification sink contract.

/// Visual variant of a notification. `None` on [`Notification`] is the
/// default, non-alarming style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Error styling.
    Destructive,
}

/// Transient message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Detail line.
    pub description: String,
    /// Styling variant.
    pub variant: Option<Variant>,
}

impl Notification {
    /// Plain success message.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: None,
        }
    }

    /// Error message.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Some(Variant::Destructive),
        }
    }

    /// Whether this is an error message.
    pub fn is_destructive(&self) -> bool {
        self.variant == Some(Variant::Destructive)
    }
}

/// Fire-and-forget sink for [`Notification`]s.
pub trait Notifier {
    /// Show `notification` to the user.
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
