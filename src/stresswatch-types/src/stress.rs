use std::fmt::Display;

/// Closed set of stress levels the suggestion table is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Bradycardia,
    High,
    Moderate,
    Low,
}

impl StressLevel {
    pub const ALL: [StressLevel; 4] = [
        StressLevel::Bradycardia,
        StressLevel::High,
        StressLevel::Moderate,
        StressLevel::Low,
    ];

    /// Resolves a free-form classifier label, falling back to `Low`.
    pub fn from_label(label: &str) -> Self {
        Self::match_label(label).unwrap_or(StressLevel::Low)
    }

    /// Keywords are matched case-insensitively as substrings, first match wins:
    /// `bradycardia`, then `high`, then `moderate`. A bare `low` label is
    /// recognized too. `None` means the label takes the fallback.
    pub fn match_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();

        if label.contains("bradycardia") {
            Some(StressLevel::Bradycardia)
        } else if label.contains("high") {
            Some(StressLevel::High)
        } else if label.contains("moderate") {
            Some(StressLevel::Moderate)
        } else if label.trim() == "low" {
            Some(StressLevel::Low)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StressLevel::Bradycardia => "Bradycardia",
            StressLevel::High => "High",
            StressLevel::Moderate => "Moderate",
            StressLevel::Low => "Low",
        }
    }
}

impl Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label as decoded by the classifier, together with the level it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressLabel {
    pub raw: String,
    pub level: StressLevel,
}

impl StressLabel {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let level = StressLevel::from_label(&raw);
        Self { raw, level }
    }

    /// True when no keyword matched and `level` is the fallback.
    pub fn is_fallback(&self) -> bool {
        StressLevel::match_label(&self.raw).is_none()
    }
}

impl From<StressLevel> for StressLabel {
    fn from(level: StressLevel) -> Self {
        Self {
            raw: level.as_str().to_owned(),
            level,
        }
    }
}

impl Display for StressLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(StressLevel::from_label("HIGH"), StressLevel::High);
        assert_eq!(StressLevel::from_label("moderate"), StressLevel::Moderate);
        assert_eq!(
            StressLevel::from_label("Bradycardia (Low HR)"),
            StressLevel::Bradycardia
        );
    }

    #[test]
    fn bradycardia_wins_over_other_keywords() {
        assert_eq!(
            StressLevel::from_label("bradycardia with high moderate stress"),
            StressLevel::Bradycardia
        );
    }

    #[test]
    fn high_wins_over_moderate() {
        assert_eq!(
            StressLevel::from_label("Moderate to High"),
            StressLevel::High
        );
    }

    #[test]
    fn unrecognized_label_falls_back_to_low() {
        assert_eq!(
            StressLevel::from_label("Something Unrecognized"),
            StressLevel::Low
        );
        assert_eq!(StressLevel::from_label(""), StressLevel::Low);
    }

    #[test]
    fn unrecognized_label_has_no_match() {
        assert_eq!(StressLevel::match_label("Something Unrecognized"), None);
        assert_eq!(StressLevel::match_label("Slow breathing"), None);
        assert_eq!(StressLevel::match_label("Yellow"), None);
        assert_eq!(StressLevel::match_label(" LOW "), Some(StressLevel::Low));
        assert_eq!(StressLevel::from_label("Slow breathing"), StressLevel::Low);
    }

    #[test]
    fn fallback_flag_follows_keyword_match() {
        assert!(StressLabel::new("Yellow").is_fallback());
        assert!(!StressLabel::new("Low").is_fallback());
        assert!(!StressLabel::new("Moderate").is_fallback());
        for level in StressLevel::ALL {
            assert!(!StressLabel::from(level).is_fallback());
        }
    }

    #[test]
    fn high_stress_heart_rate_label() {
        assert_eq!(
            StressLevel::from_label("High Stress (HR too high)"),
            StressLevel::High
        );
    }

    #[test]
    fn label_keeps_raw_text() {
        let label = StressLabel::new("Moderate");
        assert_eq!(label.raw, "Moderate");
        assert_eq!(label.level, StressLevel::Moderate);
        assert_eq!(label.to_string(), "Moderate");
    }

    #[test]
    fn level_names_resolve_to_themselves() {
        for level in StressLevel::ALL {
            assert_eq!(StressLevel::from_label(level.as_str()), level);
        }
    }
}
