//! Color and CSS class buckets for AI percentages.

use serde::{Deserialize, Serialize};

/// Five-step classification of an AI involvement percentage.
///
/// | Range | Bucket | Color | Class |
/// |-------|--------|-------|-------|
/// | 0 | `Human` | `#10B981` | `ait-percentage--human` |
/// | 1–30 | `Low` | `#84CC16` | `ait-percentage--low` |
/// | 31–50 | `Medium` | `#F59E0B` | `ait-percentage--medium` |
/// | 51–70 | `High` | `#EF4444` | `ait-percentage--high` |
/// | 71–100 | `Full` | `#DC2626` | `ait-percentage--full` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentageBucket {
    /// No AI involvement.
    Human,
    /// Light AI involvement.
    Low,
    /// Moderate AI involvement.
    Medium,
    /// Heavy AI involvement.
    High,
    /// Predominantly AI.
    Full,
}

impl PercentageBucket {
    /// Classify a percentage. Values above 100 fall into [`Self::Full`].
    ///
    /// # Example
    ///
    /// ```
    /// use ai_transparency::catalog::PercentageBucket;
    ///
    /// assert_eq!(PercentageBucket::from_percentage(0), PercentageBucket::Human);
    /// assert_eq!(PercentageBucket::from_percentage(30).class_name(), "ait-percentage--low");
    /// assert_eq!(PercentageBucket::from_percentage(51).color(), "#EF4444");
    /// ```
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => Self::Human,
            1..=30 => Self::Low,
            31..=50 => Self::Medium,
            51..=70 => Self::High,
            _ => Self::Full,
        }
    }

    /// Display color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Human => "#10B981",
            Self::Low => "#84CC16",
            Self::Medium => "#F59E0B",
            Self::High => "#EF4444",
            Self::Full => "#DC2626",
        }
    }

    /// CSS class name.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Human => "ait-percentage--human",
            Self::Low => "ait-percentage--low",
            Self::Medium => "ait-percentage--medium",
            Self::High => "ait-percentage--high",
            Self::Full => "ait-percentage--full",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, PercentageBucket::Human ; "zero is human")]
    #[test_case(1, PercentageBucket::Low ; "one is low")]
    #[test_case(30, PercentageBucket::Low ; "thirty is low")]
    #[test_case(31, PercentageBucket::Medium ; "thirty one is medium")]
    #[test_case(50, PercentageBucket::Medium ; "fifty is medium")]
    #[test_case(51, PercentageBucket::High ; "fifty one is high")]
    #[test_case(70, PercentageBucket::High ; "seventy is high")]
    #[test_case(71, PercentageBucket::Full ; "seventy one is full")]
    #[test_case(100, PercentageBucket::Full ; "hundred is full")]
    #[test_case(255, PercentageBucket::Full ; "out of range is full")]
    fn test_bucket_boundaries(percentage: u8, expected: PercentageBucket) {
        assert_eq!(PercentageBucket::from_percentage(percentage), expected);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(
            PercentageBucket::from_percentage(0).class_name(),
            "ait-percentage--human"
        );
        assert_eq!(
            PercentageBucket::from_percentage(30).class_name(),
            "ait-percentage--low"
        );
        assert_eq!(
            PercentageBucket::from_percentage(51).class_name(),
            "ait-percentage--high"
        );
        assert_eq!(
            PercentageBucket::from_percentage(100).class_name(),
            "ait-percentage--full"
        );
    }

    #[test]
    fn test_colors() {
        assert_eq!(PercentageBucket::Human.color(), "#10B981");
        assert_eq!(PercentageBucket::Medium.color(), "#F59E0B");
        assert_eq!(PercentageBucket::Full.color(), "#DC2626");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PercentageBucket::Medium).unwrap_or_default();
        assert_eq!(json, "\"medium\"");
    }
}
