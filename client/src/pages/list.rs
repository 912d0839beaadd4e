//! Shared wiring for the three searchable list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The URL is read once on mount. From then on the page state is the source
//! of truth and the URL follows it with `replace` navigations, so reload and
//! back-navigation restore the same filter and page without polluting
//! history. A memo over the fetch path is the only fetch trigger.

use catalog::{EntityKind, Paginated};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use serde::de::DeserializeOwned;

use crate::app::AppServices;
use crate::components::list_controls::{Pager, SearchForm};
use crate::components::status_panels::{EmptyPanel, ErrorPanel, SkeletonGrid};
use crate::net::api::ApiClient;
use crate::state::list_page::ListPageState;
use crate::state::query::ListQuery;
use crate::state::request::{FetchRequest, LoadState};

const SKELETON_CARDS: usize = 12;

/// Bounds every list record type satisfies.
pub(crate) trait ListRecord: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {}

impl<T> ListRecord for T where T: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {}

/// Reactive handle to one list page.
pub(crate) struct ListPage<T: ListRecord> {
    pub state: RwSignal<ListPageState<T>>,
    pub retry: Callback<()>,
}

/// Create the page state for `kind`, keep the URL in sync and fetch on every
/// change of the derived query.
pub(crate) fn use_list_page<T: ListRecord>(kind: EntityKind) -> ListPage<T> {
    let api = expect_context::<AppServices>().api;
    let location = use_location();
    let navigate = use_navigate();

    let initial = ListQuery::from_url_query(&location.search.get_untracked());
    let state = RwSignal::new(ListPageState::<T>::new(kind, initial));

    // URL follows state.
    let route = format!("/{}", kind.api_segment());
    let url_query = Memo::new(move |_| state.with(|s| s.query.url_query()));
    Effect::new(move || {
        let canonical = url_query.get();
        let current = location.search.get_untracked();
        if current.trim_start_matches('?') == canonical {
            return;
        }
        let href = state.with_untracked(|s| s.query.href(&route));
        navigate(&href, NavigateOptions { replace: true, ..Default::default() });
    });

    // Fetch follows the derived query.
    let endpoint = Memo::new(move |_| state.with(ListPageState::endpoint));
    let fetch_api = api.clone();
    Effect::new(move || {
        endpoint.track();
        if let Some(request) = state.try_update(ListPageState::begin_fetch) {
            spawn_fetch(fetch_api.clone(), state, request);
        }
    });

    let retry = Callback::new(move |()| {
        if let Some(request) = state.try_update(ListPageState::begin_fetch) {
            spawn_fetch(api.clone(), state, request);
        }
    });

    ListPage { state, retry }
}

fn spawn_fetch<T: ListRecord>(api: ApiClient, state: RwSignal<ListPageState<T>>, request: FetchRequest) {
    leptos::task::spawn_local(async move {
        let result = api.get_as::<Paginated<T>>(&request.path).await;
        state.try_update(|s| s.finish(request.ticket, result));
    });
}

/// Search form, result grid and pager for one kind.
pub(crate) fn list_screen<T: ListRecord>(
    page: ListPage<T>,
    placeholder: &'static str,
    with_images: bool,
    render: fn(T) -> AnyView,
) -> impl IntoView {
    let ListPage { state, retry } = page;
    let title = state.with_untracked(|s| s.kind.label());

    let draft = Signal::derive(move || state.with(|s| s.draft.clone()));
    let show_clear = Signal::derive(move || state.with(|s| s.is_filtered() || !s.draft.trim().is_empty()));
    let on_input = Callback::new(move |text: String| state.update(|s| s.draft = text));
    let on_submit = Callback::new(move |()| state.update(ListPageState::submit));
    let on_clear = Callback::new(move |()| state.update(ListPageState::clear));

    let page_number = Signal::derive(move || state.with(|s| s.query.page));
    let total_pages = Signal::derive(move || state.with(ListPageState::total_pages));
    let filter = Signal::derive(move || state.with(|s| s.query.name.clone()));
    let can_prev = Signal::derive(move || state.with(ListPageState::can_prev));
    let can_next = Signal::derive(move || state.with(ListPageState::can_next));
    let on_prev = Callback::new(move |()| state.update(ListPageState::prev_page));
    let on_next = Callback::new(move |()| state.update(ListPageState::next_page));

    let load = Memo::new(move |_| state.with(|s| s.load.clone()));
    let results = move || match load.get() {
        LoadState::Idle | LoadState::Loading => {
            view! { <SkeletonGrid count=SKELETON_CARDS with_image=with_images/> }.into_any()
        }
        LoadState::Error(error) => {
            view! { <ErrorPanel title="Failed to load" error on_retry=retry on_reset=on_clear/> }.into_any()
        }
        LoadState::Success(found) if found.is_empty() => view! {
            <EmptyPanel title="No results" hint="Try a different name or clear the search." on_clear/>
        }
        .into_any(),
        LoadState::Success(found) => {
            view! { <div class="grid">{found.results.into_iter().map(render).collect_view()}</div> }.into_any()
        }
    };

    view! {
        <section class="card page">
            <div class="page__header">
                <h2>{title}</h2>
                <SearchForm placeholder draft on_input on_submit on_clear show_clear/>
            </div>
            {results}
            <Show when=move || state.with(ListPageState::has_results)>
                <Pager page=page_number total_pages filter can_prev can_next on_prev on_next/>
            </Show>
        </section>
    }
}
