//! App header: section navigation, favorites counter, theme toggle and the
//! random character shortcut.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppServices;
use crate::util::random::random_character_id;
use crate::util::theme::{self, Theme};

#[component]
pub fn NavHeader() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let theme_signal = expect_context::<RwSignal<Theme>>();
    let navigate = use_navigate();

    let favorite_count = RwSignal::new(services.favorites.ids().len());
    let subscription = services.favorites.subscribe(move |ids| favorite_count.set(ids.len()));
    on_cleanup(move || drop(subscription));

    let storage = services.storage.clone();
    let on_toggle_theme = move |_| {
        let next = theme::toggle(storage.as_ref(), theme_signal.get_untracked());
        theme_signal.set(next);
    };

    let on_random = move |_| {
        navigate(&format!("/characters/{}", random_character_id()), NavigateOptions::default());
    };

    view! {
        <header class="card hero">
            <div>
                <h1>"Rick & Morty Explorer"</h1>
                <p class="hero__tagline">"Search characters, episodes and locations."</p>
                <nav class="topnav">
                    <A href="/characters">"Characters"</A>
                    <A href="/episodes">"Episodes"</A>
                    <A href="/locations">"Locations"</A>
                    <A href="/favorites">
                        "Favorites " <span class="topnav__count">"(" {move || favorite_count.get()} ")"</span>
                    </A>
                </nav>
            </div>
            <div class="hero__actions">
                <button class="btn" on:click=on_toggle_theme>
                    "Theme: " {move || theme_signal.get().label()}
                </button>
                <button class="btn btn-primary" on:click=on_random>"Random character"</button>
            </div>
        </header>
    }
}
