//! Favorites page: every favorited character in one batch request.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page subscribes to the favorites store, so toggles from the cards on
//! this page and from other tabs both reach `set_ids`. The state only issues
//! a request when the set of IDs changed, not merely its order.

use catalog::{Character, EntityId, OneOrMany};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppServices;
use crate::components::cards::CharacterCard;
use crate::components::status_panels::{ErrorPanel, SkeletonGrid};
use crate::net::api::ApiClient;
use crate::state::favorites_page::FavoritesPageState;
use crate::state::request::{FetchRequest, LoadState};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let AppServices { api, favorites, .. } = expect_context::<AppServices>();
    let state = RwSignal::new(FavoritesPageState::default());

    let sync_api = api.clone();
    let sync = move |ids: &[EntityId]| {
        if let Some(request) = state.try_update(|s| s.set_ids(ids)).flatten() {
            spawn_fetch(sync_api.clone(), state, request);
        }
    };
    sync(&favorites.ids());
    let subscription = favorites.subscribe(sync);
    on_cleanup(move || drop(subscription));

    let retry = Callback::new(move |()| {
        if let Some(request) = state.try_update(FavoritesPageState::retry).flatten() {
            spawn_fetch(api.clone(), state, request);
        }
    });

    let count = move || state.with(|s| s.ids.len());
    let load = Memo::new(move |_| state.with(|s| s.load.clone()));
    let body = move || match load.get() {
        LoadState::Idle | LoadState::Loading => {
            view! { <SkeletonGrid count=state.with_untracked(|s| s.ids.len().max(1)) with_image=true/> }.into_any()
        }
        LoadState::Error(error) => {
            view! { <ErrorPanel title="Failed to load favorites" error on_retry=retry/> }.into_any()
        }
        LoadState::Success(characters) if characters.is_empty() => view! {
            <div class="card panel">
                <div class="panel__title">"No favorites yet"</div>
                <div class="panel__hint">"Tap the heart on any character to keep it here."</div>
                <A href="/characters">"Browse characters"</A>
            </div>
        }
        .into_any(),
        LoadState::Success(characters) => view! {
            <div class="grid">
                {characters.into_iter().map(|character| view! { <CharacterCard character/> }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="card page">
            <div class="page__header">
                <h2>"Favorites"</h2>
                <span class="badge">{count} " saved"</span>
            </div>
            {body}
        </section>
    }
}

fn spawn_fetch(api: ApiClient, state: RwSignal<FavoritesPageState>, request: FetchRequest) {
    leptos::task::spawn_local(async move {
        let result = api.get_as::<OneOrMany<Character>>(&request.path).await;
        state.try_update(|s| s.finish(request.ticket, result));
    });
}
