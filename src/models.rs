//! Data models for the audit configuration.
//!
//! This module contains the typed vocabulary shared by the persona catalog
//! and the feedback-scoring components: device categories, proficiency and
//! time-pressure qualifiers, sentiment labels, and the persona record itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device category a persona is expected to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Mobile,
    Tablet,
    Desktop,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Mobile => write!(f, "mobile"),
            DeviceKind::Tablet => write!(f, "tablet"),
            DeviceKind::Desktop => write!(f, "desktop"),
        }
    }
}

/// Technical proficiency of a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechLevel::Low => write!(f, "low"),
            TechLevel::Medium => write!(f, "medium"),
            TechLevel::High => write!(f, "high"),
        }
    }
}

/// How much time pressure a persona operates under during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePressure {
    Low,
    Medium,
    High,
}

impl fmt::Display for TimePressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimePressure::Low => write!(f, "low"),
            TimePressure::Medium => write!(f, "medium"),
            TimePressure::High => write!(f, "high"),
        }
    }
}

/// Three-way sentiment classification for persona feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in scoring order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Numeric score attached to the label.
    pub fn score(&self) -> i8 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }

    /// Upper-case wire name of the label.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }

    /// Parse a label name, case-insensitively.
    #[allow(dead_code)] // Used by the feedback-scoring pipeline
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "POSITIVE" => Some(Sentiment::Positive),
            "NEUTRAL" => Some(Sentiment::Neutral),
            "NEGATIVE" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A synthetic user profile used to simulate an audit session.
///
/// Personas are static reference data; the free-text fields (names, traits,
/// goals, pain points, behavioral prompt) are carried verbatim in the
/// language the audited sites are written in and handed to the LLM as-is.
#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    /// Short identifier used to select the persona.
    pub key: &'static str,
    /// Localized display name.
    pub name: &'static str,
    /// English display name.
    pub name_en: &'static str,
    /// Age in years.
    pub age: u8,
    /// Technical proficiency.
    pub tech_level: TechLevel,
    /// Characteristic traits.
    pub characteristics: &'static [&'static str],
    /// What the persona is trying to accomplish.
    pub goals: &'static [&'static str],
    /// Known frustrations.
    pub pain_points: &'static [&'static str],
    /// Device categories the persona uses.
    pub devices: &'static [DeviceKind],
    /// Time pressure during a session.
    pub time_pressure: TimePressure,
    /// Behavioral prompt passed verbatim to the simulation LLM.
    pub system_prompt: &'static str,
}

impl Persona {
    /// Whether the persona is expected to use the given device category.
    #[allow(dead_code)] // Used when scheduling per-device audit runs
    pub fn supports_device(&self, device: DeviceKind) -> bool {
        self.devices.contains(&device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_scores() {
        assert_eq!(Sentiment::Positive.score(), 1);
        assert_eq!(Sentiment::Neutral.score(), 0);
        assert_eq!(Sentiment::Negative.score(), -1);
    }

    #[test]
    fn test_sentiment_labels_round_trip() {
        for sentiment in Sentiment::ALL {
            assert_eq!(Sentiment::from_label(sentiment.label()), Some(sentiment));
        }
    }

    #[test]
    fn test_sentiment_from_label_case_insensitive() {
        assert_eq!(Sentiment::from_label("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("Neutral"), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_label("NEGATIVE"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label("mixed"), None);
    }

    #[test]
    fn test_qualifier_ordering() {
        assert!(TechLevel::Low < TechLevel::Medium);
        assert!(TechLevel::Medium < TechLevel::High);
        assert!(TimePressure::Low < TimePressure::High);
    }

    #[test]
    fn test_device_display() {
        assert_eq!(DeviceKind::Mobile.to_string(), "mobile");
        assert_eq!(DeviceKind::Desktop.to_string(), "desktop");
    }
}
