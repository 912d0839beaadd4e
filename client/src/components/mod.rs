//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog cards, list controls and app chrome, reading
//! shared services (`AppServices`, `Toasts`, the theme signal) from Leptos
//! context providers.

pub mod cards;
pub mod fav_button;
pub mod list_controls;
pub mod nav_header;
pub mod status_panels;
pub mod toast_host;
pub mod trending_strip;
