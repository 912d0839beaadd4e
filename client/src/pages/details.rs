//! Detail routes for characters, episodes and locations.
//!
//! All three share `use_detail_page`: the route parameter drives
//! `DetailState::open`, which paints from the cache before the network
//! answers.

use catalog::{Character, EntityKind, Episode, Location};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use serde::de::DeserializeOwned;

use crate::app::AppServices;
use crate::components::cards::StatusBadge;
use crate::components::fav_button::FavButton;
use crate::components::status_panels::{ErrorPanel, SkeletonGrid};
use crate::net::api::ApiClient;
use crate::state::cache::EntityCache;
use crate::state::detail_page::DetailState;
use crate::state::request::{FetchRequest, LoadState};

trait DetailRecord: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {}

impl<T> DetailRecord for T where T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {}

struct DetailPage<T: DetailRecord> {
    state: RwSignal<DetailState<T>>,
    retry: Callback<()>,
}

fn use_detail_page<T: DetailRecord>(kind: EntityKind) -> DetailPage<T> {
    let AppServices { api, cache, .. } = expect_context::<AppServices>();
    let params = use_params_map();
    let raw_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let state = RwSignal::new(DetailState::<T>::new(kind));

    let (open_api, open_cache) = (api.clone(), cache.clone());
    Effect::new(move || {
        let id = raw_id.get();
        if let Some(request) = state.try_update(|s| s.open(&id, &open_cache)) {
            spawn_fetch(open_api.clone(), open_cache.clone(), state, request);
        }
    });

    let retry = Callback::new(move |()| {
        if let Some(request) = state.try_update(DetailState::retry) {
            spawn_fetch(api.clone(), cache.clone(), state, request);
        }
    });

    DetailPage { state, retry }
}

fn spawn_fetch<T: DetailRecord>(
    api: ApiClient,
    cache: EntityCache,
    state: RwSignal<DetailState<T>>,
    request: FetchRequest,
) {
    leptos::task::spawn_local(async move {
        let result = api.get(&request.path).await;
        state.try_update(|s| s.finish(request.ticket, result, &cache));
    });
}

/// Back link, refresh indicator and the load-state switch around `render`.
fn detail_screen<T: DetailRecord>(
    page: DetailPage<T>,
    back_href: &'static str,
    error_title: &'static str,
    render: fn(T) -> AnyView,
) -> impl IntoView {
    let DetailPage { state, retry } = page;
    let revalidating = move || state.with(|s| s.revalidating);
    let load = Memo::new(move |_| state.with(|s| s.load.clone()));

    let body = move || match load.get() {
        LoadState::Idle | LoadState::Loading => view! { <SkeletonGrid count=1 with_image=true/> }.into_any(),
        LoadState::Error(error) => view! { <ErrorPanel title=error_title error on_retry=retry/> }.into_any(),
        LoadState::Success(record) => render(record),
    };

    view! {
        <section class="card page detail">
            <div class="detail__toolbar">
                <A href=back_href>"← Back"</A>
                <Show when=revalidating>
                    <span class="badge detail__refreshing">"Refreshing…"</span>
                </Show>
            </div>
            {body}
        </section>
    }
}

// =============================================================================
// PAGES
// =============================================================================

#[component]
pub fn CharacterDetailPage() -> impl IntoView {
    let page = use_detail_page::<Character>(EntityKind::Character);
    detail_screen(page, "/characters", "Failed to load character", |character| {
        view! { <CharacterDetail character/> }.into_any()
    })
}

#[component]
pub fn EpisodeDetailPage() -> impl IntoView {
    let page = use_detail_page::<Episode>(EntityKind::Episode);
    detail_screen(page, "/episodes", "Failed to load episode", |episode| {
        view! {
            <div class="detail__body">
                <h2>{episode.name}</h2>
                <dl class="detail__facts">
                    <dt>"Episode"</dt><dd>{episode.episode}</dd>
                    <dt>"Air date"</dt><dd>{episode.air_date}</dd>
                    <dt>"Characters"</dt><dd>{episode.characters.len()}</dd>
                </dl>
            </div>
        }
        .into_any()
    })
}

#[component]
pub fn LocationDetailPage() -> impl IntoView {
    let page = use_detail_page::<Location>(EntityKind::Location);
    detail_screen(page, "/locations", "Failed to load location", |location| {
        let kind = if location.kind.is_empty() { "Unknown type".to_owned() } else { location.kind };
        view! {
            <div class="detail__body">
                <h2>{location.name}</h2>
                <dl class="detail__facts">
                    <dt>"Type"</dt><dd>{kind}</dd>
                    <dt>"Dimension"</dt><dd>{location.dimension}</dd>
                    <dt>"Residents"</dt><dd>{location.residents.len()}</dd>
                </dl>
            </div>
        }
        .into_any()
    })
}

#[component]
fn CharacterDetail(character: Character) -> impl IntoView {
    let vital = character.vital_sign();
    let status = character.status_label().to_owned();
    let created = character.created_date().unwrap_or("—").to_owned();
    let Character { id, name, species, kind, gender, origin, location, image, episode, .. } = character;
    let kind = if kind.is_empty() { "—".to_owned() } else { kind };

    view! {
        <div class="detail__body detail__body--character">
            <img class="detail__image" src=image alt=name.clone()/>
            <div>
                <div class="detail__title">
                    <h2>{name}</h2>
                    <FavButton id/>
                </div>
                <StatusBadge vital label=status/>
                <dl class="detail__facts">
                    <dt>"Species"</dt><dd>{species}</dd>
                    <dt>"Type"</dt><dd>{kind}</dd>
                    <dt>"Gender"</dt><dd>{gender}</dd>
                    <dt>"Origin"</dt><dd>{origin.name}</dd>
                    <dt>"Last known location"</dt><dd>{location.name}</dd>
                    <dt>"Episodes"</dt><dd>{episode.len()}</dd>
                    <dt>"Created"</dt><dd>{created}</dd>
                </dl>
            </div>
        </div>
    }
}
