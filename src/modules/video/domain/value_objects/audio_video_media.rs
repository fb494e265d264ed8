use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::media_status::MediaStatus;

/// Stored audio-video asset, identified by content.
///
/// Identity is `(checksum, raw_location)`; name, encoded location and status
/// do not participate. Status transitions return new values and terminal
/// states are idempotent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioVideoMedia {
    checksum: String,
    name: String,
    raw_location: String,
    encoded_location: String,
    status: MediaStatus,
}

impl AudioVideoMedia {
    /// A freshly stored asset: not yet encoded, status `Pending`.
    pub fn with(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: String::new(),
            status: MediaStatus::Pending,
        }
    }

    pub fn with_status(
        checksum: impl Into<String>,
        name: impl Into<String>,
        raw_location: impl Into<String>,
        encoded_location: impl Into<String>,
        status: MediaStatus,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            raw_location: raw_location.into(),
            encoded_location: encoded_location.into(),
            status,
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_location(&self) -> &str {
        &self.raw_location
    }

    pub fn encoded_location(&self) -> &str {
        &self.encoded_location
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }

    /// Mark as picked up by the encoder. Identity on terminal states.
    pub fn processing(self) -> Self {
        if self.status.is_terminal() {
            return self;
        }
        Self {
            status: MediaStatus::Processing,
            ..self
        }
    }

    /// Mark as encoded. Identity on terminal states.
    pub fn completed(self, encoded_location: impl Into<String>) -> Self {
        if self.status.is_terminal() {
            return self;
        }
        Self {
            encoded_location: encoded_location.into(),
            status: MediaStatus::Completed,
            ..self
        }
    }
}

impl PartialEq for AudioVideoMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.raw_location == other.raw_location
    }
}

impl Eq for AudioVideoMedia {}

impl Hash for AudioVideoMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.raw_location.hash(state);
    }
}
