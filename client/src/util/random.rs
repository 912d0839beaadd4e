//! Random character pick for the header shortcut.

#[cfg(test)]
#[path = "random_test.rs"]
mod random_test;

use catalog::EntityId;

/// Highest character identifier offered by the random shortcut.
pub const CHARACTER_COUNT: EntityId = 826;

/// Map a uniform sample in `[0, 1)` onto `1..=CHARACTER_COUNT`. Out-of-range
/// samples are clamped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn id_from_unit(sample: f64) -> EntityId {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    let id = (sample * f64::from(CHARACTER_COUNT)).floor() as EntityId + 1;
    id.min(CHARACTER_COUNT)
}

/// A uniformly random character identifier.
pub fn random_character_id() -> EntityId {
    #[cfg(feature = "csr")]
    {
        id_from_unit(js_sys::Math::random())
    }
    #[cfg(not(feature = "csr"))]
    {
        id_from_unit(0.0)
    }
}
