use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed age-classification set for videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "L")]
    Free,
    #[serde(rename = "10")]
    Age10,
    #[serde(rename = "12")]
    Age12,
    #[serde(rename = "14")]
    Age14,
    #[serde(rename = "16")]
    Age16,
    #[serde(rename = "18")]
    Age18,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Free => "L",
            Rating::Age10 => "10",
            Rating::Age12 => "12",
            Rating::Age14 => "14",
            Rating::Age16 => "16",
            Rating::Age18 => "18",
        }
    }

    /// Lenient lookup by label. Unrecognized labels behave as an absent
    /// rating so the validator reports them instead of the parser.
    pub fn from_label(label: &str) -> Option<Rating> {
        match label.trim().to_uppercase().as_str() {
            "L" => Some(Rating::Free),
            "10" => Some(Rating::Age10),
            "12" => Some(Rating::Age12),
            "14" => Some(Rating::Age14),
            "16" => Some(Rating::Age16),
            "18" => Some(Rating::Age18),
            _ => None,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
