//! "Popular today" strip of fixed characters.

use leptos::prelude::*;

use crate::app::AppServices;
use crate::components::cards::CharacterCard;
use crate::state::trending::{TrendingState, load_trending};

#[component]
pub fn TrendingStrip() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let trending = RwSignal::new(TrendingState::Loading);

    leptos::task::spawn_local(async move {
        let loaded = load_trending(&services.api, &services.cache).await;
        trending.try_set(loaded);
    });

    view! {
        <section class="card trending">
            <div class="trending__header">
                <div>
                    <div class="trending__title">"Popular today"</div>
                    <div class="trending__hint">"Quick picks, cached for instant opening"</div>
                </div>
            </div>
            {move || match trending.get() {
                TrendingState::Loading => view! { <div class="trending__row skeleton skeleton--strip"></div> }.into_any(),
                TrendingState::Unavailable => {
                    view! { <div class="trending__hint">"Trending is unavailable right now; search still works."</div> }
                        .into_any()
                }
                TrendingState::Ready(characters) => view! {
                    <div class="trending__row">
                        {characters
                            .into_iter()
                            .map(|character| view! { <CharacterCard character compact=true/> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
