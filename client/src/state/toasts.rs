//! Transient notifications.
//!
//! `ToastQueue` is the plain bookkeeping; `Toasts` is the service handed to
//! components through context. It pushes into a signal and, in the browser,
//! schedules each toast's dismissal.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

pub const MAX_VISIBLE: usize = 3;
pub const TOAST_TTL_MS: u32 = 2200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Newest first, capped at [`MAX_VISIBLE`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.insert(0, Toast { id, message: message.into() });
        self.items.truncate(MAX_VISIBLE);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Toast service provided at the app root.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()) }
    }

    pub fn queue(self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn show(self, message: impl Into<String>) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(message));
        #[cfg(feature = "csr")]
        {
            let queue = self.queue;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                queue.try_update(|q| q.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("toast {id} shown");
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}
