//! Bottom-right stack of transient notifications.

use leptos::prelude::*;

use crate::state::toasts::{Toast, Toasts};

#[component]
pub fn ToastHost() -> impl IntoView {
    let queue = expect_context::<Toasts>().queue();

    view! {
        <Show when=move || queue.with(|q| !q.items().is_empty())>
            <div class="toast-host" aria-live="polite">
                <For
                    each=move || queue.with(|q| q.items().to_vec())
                    key=|toast: &Toast| toast.id
                    children=move |toast: Toast| view! { <div class="card toast">{toast.message}</div> }
                />
            </div>
        </Show>
    }
}
