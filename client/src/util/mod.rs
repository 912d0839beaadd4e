//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, events,
//! randomness, the document theme) from page and component logic so the
//! stores built on them stay testable natively.

pub mod channel;
pub mod random;
pub mod storage;
pub mod theme;
