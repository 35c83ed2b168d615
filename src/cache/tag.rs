//! Invalidation tags attached to cached reads.

use std::fmt;

/// Entity family a tag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// User accounts.
    User,
    /// Tasks.
    Task,
    /// Projects.
    Project,
    /// The caller's session.
    Auth,
}

impl EntityKind {
    /// Returns the tag type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Task => "Task",
            Self::Project => "Project",
            Self::Auth => "Auth",
        }
    }
}

/// Identifier part of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagId {
    /// A single entity.
    Id(u64),
    /// The collection view of an entity kind.
    PartialList,
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::PartialList => f.write_str("PARTIAL-LIST"),
        }
    }
}

/// Cache-invalidation label: an entity kind plus an optional id.
///
/// When invalidating, a tag without an id matches every tag of its kind,
/// while a tag with an id matches only that exact tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryTag {
    kind: EntityKind,
    id: Option<TagId>,
}

impl QueryTag {
    /// Tag covering every read of a kind.
    #[must_use]
    pub const fn kind(kind: EntityKind) -> Self {
        Self { kind, id: None }
    }

    /// Tag of the collection view of a kind.
    #[must_use]
    pub const fn list(kind: EntityKind) -> Self {
        Self {
            kind,
            id: Some(TagId::PartialList),
        }
    }

    /// Tag of a single entity.
    #[must_use]
    pub const fn entity(kind: EntityKind, id: u64) -> Self {
        Self {
            kind,
            id: Some(TagId::Id(id)),
        }
    }

    /// Returns whether invalidating `self` invalidates a read that
    /// provides `provided`.
    #[must_use]
    pub fn covers(self, provided: Self) -> bool {
        self.kind == provided.kind && (self.id.is_none() || self.id == provided.id)
    }
}

impl fmt::Display for QueryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}:{id}", self.kind.as_str()),
            None => f.write_str(self.kind.as_str()),
        }
    }
}
