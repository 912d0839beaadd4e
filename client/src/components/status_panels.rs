//! Loading, error and empty-result panels shared by every page.

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Placeholder grid shown while a list loads.
#[component]
pub fn SkeletonGrid(count: usize, #[prop(optional)] with_image: bool) -> impl IntoView {
    view! {
        <div class="grid">
            {(0..count)
                .map(|_| {
                    view! {
                        <div class="card skeleton-card">
                            {with_image.then(|| view! { <div class="skeleton skeleton--image"></div> })}
                            <div class="skeleton skeleton--title"></div>
                            <div class="skeleton skeleton--line"></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Failure panel with the raw error and a retry action.
#[component]
pub fn ErrorPanel(
    title: &'static str,
    error: ApiError,
    on_retry: Callback<()>,
    #[prop(optional)] on_reset: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="card panel panel--error" role="alert">
            <div class="panel__title">{title}</div>
            <div class="panel__actions">
                <button class="btn btn-primary" on:click=move |_| on_retry.run(())>"Retry"</button>
                {on_reset.map(|reset| view! {
                    <button class="btn" on:click=move |_| reset.run(())>"Reset search"</button>
                })}
            </div>
            <pre class="panel__details">{error.to_pretty_json()}</pre>
        </div>
    }
}

/// Nothing-to-show panel with an optional clear action.
#[component]
pub fn EmptyPanel(
    title: &'static str,
    hint: &'static str,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="card panel">
            <div class="panel__title">{title}</div>
            <div class="panel__hint">{hint}</div>
            {on_clear.map(|clear| view! {
                <button class="btn" on:click=move |_| clear.run(())>"Clear"</button>
            })}
        </div>
    }
}
