use serde::{Deserialize, Serialize};

/// Unique identifier for a pathology in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathologyId(pub String);

impl PathologyId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PathologyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Confidence level derived from a match percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Exact,
}

impl Confidence {
    /// Classify an unrounded match percentage (0-100)
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exact
        } else if percentage >= 80.0 {
            Self::High
        } else if percentage > 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_from_percentage() {
        assert_eq!(Confidence::from_percentage(0.0), Confidence::Low);
        assert_eq!(Confidence::from_percentage(50.0), Confidence::Low);
        assert_eq!(Confidence::from_percentage(50.1), Confidence::Medium);
        assert_eq!(Confidence::from_percentage(80.0), Confidence::High);
        assert_eq!(Confidence::from_percentage(100.0), Confidence::Exact);
    }
}
