use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque cast-member identity referenced by videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CastMemberId(Uuid);

impl CastMemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CastMemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CastMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastMemberKind {
    Actor,
    Director,
}

impl CastMemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastMemberKind::Actor => "actor",
            CastMemberKind::Director => "director",
        }
    }
}

impl std::fmt::Display for CastMemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: CastMemberId,
    pub name: String,
    pub kind: CastMemberKind,
    pub created_at: DateTime<Utc>,
}

impl CastMember {
    pub fn new(name: impl Into<String>, kind: CastMemberKind) -> Self {
        Self {
            id: CastMemberId::new(),
            name: name.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for CastMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
