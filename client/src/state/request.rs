//! Load lifecycle shared by every page.
//!
//! DESIGN
//! ======
//! Pages never cancel in-flight requests. Each fetch is issued a `Ticket`
//! from the page's `RequestGeneration`; a result is committed only while its
//! ticket is still the latest, so a slow stale response cannot overwrite a
//! newer one.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::net::api::ApiError;

/// Proof of which fetch a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    /// Start a new fetch, superseding every earlier ticket.
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

/// A fetch the page wants performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub path: String,
}

/// `idle → loading → {success | error}`; `loading` is re-entered on any
/// parameter change or retry.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(ApiError),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }
}
