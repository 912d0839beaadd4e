//! Lenient display views of upstream records.
//!
//! DESIGN
//! ======
//! The upstream dataset is the system of record; nothing here validates it.
//! Every field defaults when missing so a partial or evolved payload still
//! renders, and the raw `serde_json::Value` remains what gets cached.

use serde::{Deserialize, Serialize};

use crate::EntityId;

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;

/// A `{ name, url }` reference to another upstream resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: NamedResource,
    pub location: NamedResource,
    pub image: String,
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

impl Character {
    /// Liveness bucket used to color the status badge.
    #[must_use]
    pub fn vital_sign(&self) -> VitalSign {
        match self.status.to_ascii_lowercase().as_str() {
            "alive" => VitalSign::Alive,
            "dead" => VitalSign::Dead,
            _ => VitalSign::Unknown,
        }
    }

    /// Status text for display; blank statuses read as `Unknown`.
    #[must_use]
    pub fn status_label(&self) -> &str {
        if self.status.trim().is_empty() { "Unknown" } else { &self.status }
    }

    /// Calendar date portion of the `created` timestamp, if present.
    #[must_use]
    pub fn created_date(&self) -> Option<&str> {
        self.created.get(..10)
    }
}

/// Coarse liveness of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VitalSign {
    Alive,
    Dead,
    Unknown,
}

impl VitalSign {
    /// CSS modifier suffix for the badge dot.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    pub id: EntityId,
    pub name: String,
    pub air_date: String,
    /// Season/episode code such as `S01E01`.
    pub episode: String,
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
    pub residents: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Batch endpoints answer a single ID with an object and several IDs with an
/// array. This normalizes both.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}
