use crate::modules::video::domain::value_objects::Resource;

/// Raw media content as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMediaResult {
    pub name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl From<Resource> for GetMediaResult {
    fn from(resource: Resource) -> Self {
        Self {
            name: resource.name().to_string(),
            content_type: resource.content_type().to_string(),
            content: resource.content().to_vec(),
        }
    }
}
