//! Badge tones for status values
//!
//! The renderer maps a tone to its own colours; the mapping from backend
//! status strings to tones lives here so every view agrees on it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Warning,
    Attention,
    Danger,
    Info,
    Neutral,
}

/// Overall welfare check status.
pub fn welfare_status_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "ok" => Tone::Positive,
        "critical" => Tone::Danger,
        "pending" => Tone::Warning,
        "overdue" => Tone::Attention,
        _ => Tone::Neutral,
    }
}

/// Physical health / social support style assessments.
pub fn health_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "ok" => Tone::Positive,
        "fair" => Tone::Warning,
        "poor" | "critical" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

/// Mental and emotional state assessments.
pub fn mental_state_tone(state: &str) -> Tone {
    match state.to_lowercase().as_str() {
        "ok" | "positive" | "stable" => Tone::Positive,
        "anxious" | "fair" => Tone::Warning,
        "distressed" | "poor" | "critical" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

pub fn basket_status_tone(status: &str) -> Tone {
    match status.to_lowercase().as_str() {
        "active" => Tone::Positive,
        "pending" => Tone::Warning,
        "completed" => Tone::Info,
        "on hold" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

/// Removal request status. Case-sensitive, as the backend sends it.
pub fn removal_status_tone(status: &str) -> Tone {
    match status {
        "pending" => Tone::Info,
        "requested" | "Transferred" => Tone::Warning,
        _ => Tone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welfare_status_is_case_insensitive() {
        assert_eq!(welfare_status_tone("OK"), Tone::Positive);
        assert_eq!(welfare_status_tone("Critical"), Tone::Danger);
        assert_eq!(welfare_status_tone("overdue"), Tone::Attention);
        assert_eq!(welfare_status_tone(""), Tone::Neutral);
    }

    #[test]
    fn test_mental_state() {
        assert_eq!(mental_state_tone("Stable"), Tone::Positive);
        assert_eq!(mental_state_tone("anxious"), Tone::Warning);
        assert_eq!(mental_state_tone("distressed"), Tone::Danger);
        assert_eq!(health_tone("poor"), Tone::Danger);
    }

    #[test]
    fn test_removal_status_is_case_sensitive() {
        assert_eq!(removal_status_tone("pending"), Tone::Info);
        assert_eq!(removal_status_tone("Pending"), Tone::Neutral);
    }
}
