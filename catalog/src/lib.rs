//! Shared catalog model for the explorer proxy and browser client.
//!
//! This crate owns the vocabulary both sides of the proxy agree on: which
//! entity kinds exist, how each kind is addressed on the proxy (`/api/...`)
//! and on the upstream dataset, how identifiers are coerced and joined, and
//! the lenient record/page shapes the client renders. Payloads stay
//! pass-through JSON everywhere else.

pub mod page;
pub mod records;

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use std::fmt;

pub use page::{PageInfo, Paginated};
pub use records::{Character, Episode, Location, NamedResource, OneOrMany, VitalSign};

/// Numeric identifier shared by every upstream entity.
pub type EntityId = u32;

/// Errors raised while interpreting catalog identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The text is not a usable entity identifier.
    #[error("invalid entity id: {0:?}")]
    InvalidId(String),
}

// =============================================================================
// ENTITY KIND
// =============================================================================

/// The three resource families exposed by the upstream dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Character,
    Episode,
    Location,
}

impl EntityKind {
    /// Every kind, in navigation order.
    pub const ALL: [Self; 3] = [Self::Character, Self::Episode, Self::Location];

    /// Plural path segment used by the proxy (`/api/characters`).
    #[must_use]
    pub fn api_segment(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Episode => "episodes",
            Self::Location => "locations",
        }
    }

    /// Singular path segment used by the upstream dataset (`/character`).
    #[must_use]
    pub fn upstream_segment(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Episode => "episode",
            Self::Location => "location",
        }
    }

    /// Human-readable plural label for headings and navigation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Characters",
            Self::Episode => "Episodes",
            Self::Location => "Locations",
        }
    }

    /// Proxy path for the paginated list endpoint, without a query string.
    #[must_use]
    pub fn list_path(self) -> String {
        format!("/api/{}", self.api_segment())
    }

    /// Proxy path for one entity or a comma-joined batch.
    #[must_use]
    pub fn detail_path(self, ids: &str) -> String {
        format!("/api/{}/{ids}", self.api_segment())
    }

    /// In-memory cache key for one entity (`character:42`).
    #[must_use]
    pub fn cache_key(self, id: EntityId) -> String {
        format!("{}:{id}", self.upstream_segment())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upstream_segment())
    }
}

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Coerce loosely-typed identifier text (route params, stored values) to an
/// [`EntityId`].
///
/// Mirrors a numeric conversion of the string: surrounding whitespace is
/// ignored and integral decimals such as `"5.0"` are accepted. Blank text,
/// fractions, negatives and non-numbers are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_id(raw: &str) -> Result<EntityId, CatalogError> {
    let trimmed = raw.trim();
    let invalid = || CatalogError::InvalidId(raw.to_owned());
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        return Err(invalid());
    };
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(EntityId::MAX) {
        return Err(invalid());
    }
    Ok(value as EntityId)
}

/// Join identifiers with commas in the given order (`1,2,3`).
#[must_use]
pub fn join_ids(ids: &[EntityId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Order-insensitive key for an identifier set: ascending, comma-joined.
///
/// Two favorite lists holding the same IDs in different order produce the
/// same key, so the batch request is only reissued when membership changes.
#[must_use]
pub fn sorted_id_key(ids: &[EntityId]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    join_ids(&sorted)
}
