//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (URL state, fetch tickets,
//! subscriptions) and delegates rendering details to `components`. The
//! state machines themselves live in `state` so they are testable without a
//! reactive runtime.

pub mod characters;
pub mod details;
pub mod episodes;
pub mod favorites;
pub(crate) mod list;
pub mod locations;
