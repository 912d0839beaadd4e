//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_header::NavHeader;
use crate::components::toast_host::ToastHost;
use crate::net::api::ApiClient;
use crate::pages::characters::CharactersPage;
use crate::pages::details::{CharacterDetailPage, EpisodeDetailPage, LocationDetailPage};
use crate::pages::episodes::EpisodesPage;
use crate::pages::favorites::FavoritesPage;
use crate::pages::locations::LocationsPage;
use crate::state::cache::EntityCache;
use crate::state::favorites::FavoritesStore;
use crate::state::toasts::Toasts;
use crate::util::storage::KeyValueStorage;
use crate::util::theme;

/// Services constructed once at startup and shared through context.
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub cache: EntityCache,
    pub favorites: FavoritesStore,
    pub storage: Arc<dyn KeyValueStorage>,
}

impl AppServices {
    pub fn new(api: ApiClient, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            cache: EntityCache::new(),
            favorites: FavoritesStore::new(Arc::clone(&storage)),
            storage,
        }
    }

    /// Browser wiring: `fetch` transport and `localStorage`.
    #[cfg(feature = "csr")]
    pub fn browser() -> Self {
        let storage = crate::util::storage::BrowserStorage::install();
        Self::new(ApiClient::browser(), Arc::new(storage))
    }
}

/// Root application component.
///
/// Provides the shared services, toast service and theme signal, then sets
/// up client-side routing.
#[component]
pub fn App(services: AppServices) -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(theme::init(services.storage.as_ref()));
    provide_context(theme);
    provide_context(Toasts::new());
    provide_context(services);

    view! {
        <Title text="Rick & Morty Explorer"/>

        <Router>
            <div class="container">
                <NavHeader/>
                <main>
                    <Routes fallback=|| view! { <p class="card page">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/characters"/> }/>
                        <Route path=StaticSegment("characters") view=CharactersPage/>
                        <Route path=(StaticSegment("characters"), ParamSegment("id")) view=CharacterDetailPage/>
                        <Route path=StaticSegment("episodes") view=EpisodesPage/>
                        <Route path=(StaticSegment("episodes"), ParamSegment("id")) view=EpisodeDetailPage/>
                        <Route path=StaticSegment("locations") view=LocationsPage/>
                        <Route path=(StaticSegment("locations"), ParamSegment("id")) view=LocationDetailPage/>
                        <Route path=StaticSegment("favorites") view=FavoritesPage/>
                    </Routes>
                </main>
                <ToastHost/>
            </div>
        </Router>
    }
}
