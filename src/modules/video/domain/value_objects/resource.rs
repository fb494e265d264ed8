use serde::{Deserialize, Serialize};

use super::media_type::MediaType;

/// Command-side input bundle: raw bytes plus the metadata needed to store
/// them under one of the five media slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    checksum: String,
    content: Vec<u8>,
    content_type: String,
    name: String,
    media_type: MediaType,
}

impl Resource {
    pub fn with(
        checksum: impl Into<String>,
        content: Vec<u8>,
        content_type: impl Into<String>,
        name: impl Into<String>,
        media_type: MediaType,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            content,
            content_type: content_type.into(),
            name: name.into(),
            media_type,
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }
}
