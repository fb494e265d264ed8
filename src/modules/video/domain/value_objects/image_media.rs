use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Stored image asset, identified by content.
///
/// Identity is `(checksum, location)`: two uploads of identical bytes to the
/// same location are indistinguishable regardless of the file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMedia {
    checksum: String,
    name: String,
    location: String,
}

impl ImageMedia {
    pub fn with(
        checksum: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            checksum: checksum.into(),
            name: name.into(),
            location: location.into(),
        }
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl PartialEq for ImageMedia {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum && self.location == other.location
    }
}

impl Eq for ImageMedia {}

impl Hash for ImageMedia {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.checksum.hash(state);
        self.location.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_name() {
        let a = ImageMedia::with("abc123", "banner.png", "videos/1/banner");
        let b = ImageMedia::with("abc123", "renamed.png", "videos/1/banner");
        assert_eq!(a, b);
    }

    #[test]
    fn different_checksum_or_location_differ() {
        let a = ImageMedia::with("abc123", "banner.png", "videos/1/banner");
        assert_ne!(a, ImageMedia::with("def456", "banner.png", "videos/1/banner"));
        assert_ne!(a, ImageMedia::with("abc123", "banner.png", "videos/2/banner"));
    }
}
