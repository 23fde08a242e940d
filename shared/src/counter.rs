//! Presentation rule for the content character counter.

use crate::validation::CONTENT_MAX_CHARS;

const WARNING_ABOVE: usize = 200;
const ALERT_ABOVE: usize = 400;

/// Severity styling of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTier {
    /// Plenty of room left.
    Neutral,
    /// More than 200 characters used.
    Warning,
    /// More than 400 characters used.
    Alert,
}

impl CounterTier {
    /// Tier for a given character count.
    pub fn for_count(count: usize) -> Self {
        if count > ALERT_ABOVE {
            CounterTier::Alert
        } else if count > WARNING_ABOVE {
            CounterTier::Warning
        } else {
            CounterTier::Neutral
        }
    }
}

/// What the counter shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    /// `count/500`
    pub label: String,
    /// Styling tier.
    pub tier: CounterTier,
}

/// Counter for `count` characters, or `None` when nothing has been typed.
pub fn counter_view(count: usize) -> Option<CounterView> {
    if count == 0 {
        return None;
    }
    Some(CounterView {
        label: format!("{count}/{CONTENT_MAX_CHARS}"),
        tier: CounterTier::for_count(count),
    })
}
