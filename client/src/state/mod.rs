//! Client state and shared services.
//!
//! DESIGN
//! ======
//! Page state machines are plain structs held in `RwSignal`s by the pages,
//! so every transition is testable without a reactive runtime. Shared
//! services (`EntityCache`, `FavoritesStore`, `Toasts`) are cloneable
//! handles created once at the app root and provided through context.

pub mod cache;
pub mod detail_page;
pub mod favorites;
pub mod favorites_page;
pub mod list_page;
pub mod prefetch;
pub mod query;
pub mod request;
pub mod toasts;
pub mod trending;
