use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an audio-video asset in the encoding pipeline.
///
/// Freshly stored media is always `Pending`. Later transitions come from the
/// external encoding-completion signal; `Completed` and `Error` are terminal
/// and never regress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl MediaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaStatus::Pending => "pending",
            MediaStatus::Processing => "processing",
            MediaStatus::Completed => "completed",
            MediaStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MediaStatus::Completed | MediaStatus::Error)
    }

    pub fn from_label(label: &str) -> Option<MediaStatus> {
        match label.trim().to_lowercase().as_str() {
            "pending" => Some(MediaStatus::Pending),
            "processing" => Some(MediaStatus::Processing),
            "completed" => Some(MediaStatus::Completed),
            "error" => Some(MediaStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_and_error_are_terminal() {
        assert!(!MediaStatus::Pending.is_terminal());
        assert!(!MediaStatus::Processing.is_terminal());
        assert!(MediaStatus::Completed.is_terminal());
        assert!(MediaStatus::Error.is_terminal());
    }
}
