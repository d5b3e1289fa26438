//! Document paths (`collection/id`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Marker preceding the relative path in a fully qualified Firestore name.
const DOCUMENTS_MARKER: &str = "/documents/";

/// A document's location: its collection path and its ID.
///
/// Accepts relative paths (`bookings/abc`), nested paths
/// (`tenants/t1/bookings/abc`), and fully qualified resource names
/// (`projects/p/databases/(default)/documents/bookings/abc`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentPath {
    collection: String,
    id: String,
}

impl DocumentPath {
    /// Build a path from its parts.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// The collection path (everything before the last segment).
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// The document ID (the last segment).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The last collection segment, e.g. `bookings` for `tenants/t1/bookings/abc`.
    pub fn collection_name(&self) -> &str {
        self.collection
            .rsplit('/')
            .next()
            .unwrap_or(&self.collection)
    }
}

impl FromStr for DocumentPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let relative = match s.find(DOCUMENTS_MARKER) {
            Some(pos) => &s[pos + DOCUMENTS_MARKER.len()..],
            None => s,
        };
        let relative = relative.trim_matches('/');

        let segments: Vec<&str> = relative.split('/').collect();
        if segments.len() < 2
            || segments.len() % 2 != 0
            || segments.iter().any(|seg| seg.is_empty())
        {
            return Err(AppError::validation(format!(
                "Invalid document path: '{s}'"
            )));
        }

        let (collection, id) = relative
            .rsplit_once('/')
            .ok_or_else(|| AppError::validation(format!("Invalid document path: '{s}'")))?;

        Ok(Self::new(collection, id))
    }
}

impl TryFrom<String> for DocumentPath {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentPath> for String {
    fn from(path: DocumentPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}
