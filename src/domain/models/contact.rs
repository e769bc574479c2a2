//! Contact Domain Model
//!
//! Represents a single contact record. Every field besides the identifier is
//! optional free text.

use uuid::Uuid;

/// Newtype wrapper for Contact ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Create a new random ContactId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a ContactId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ContactId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for ContactId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Contact fields supplied by a caller, used for both creation and updates.
///
/// `None` means "not supplied". On update, unsupplied fields keep their
/// stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFields {
    /// True when no field was supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// Contact domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl Contact {
    /// Build a Contact from an identifier assigned by the store and the supplied fields
    #[must_use]
    pub fn new(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Restore a Contact from persisted data
    #[must_use]
    pub fn restore(
        id: ContactId,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
        }
    }

    /// Merge supplied fields over this record, returning the merged record.
    /// The identifier never changes.
    #[must_use]
    pub fn merge(self, fields: ContactFields) -> Self {
        Self {
            id: self.id,
            name: fields.name.or(self.name),
            email: fields.email.or(self.email),
            phone: fields.phone.or(self.phone),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
