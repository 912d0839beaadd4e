//! Heart toggle for a favorite character.

use catalog::EntityId;
use leptos::prelude::*;

use crate::app::AppServices;
use crate::state::toasts::Toasts;

#[component]
pub fn FavButton(id: EntityId) -> impl IntoView {
    let favorites = expect_context::<AppServices>().favorites;
    let toasts = expect_context::<Toasts>();

    let active = RwSignal::new(favorites.is_favorite(id));
    let subscription = favorites.subscribe(move |ids| active.set(ids.contains(&id)));
    on_cleanup(move || drop(subscription));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // Cards are links; the heart must not navigate.
        ev.prevent_default();
        ev.stop_propagation();
        let now_favorite = favorites.toggle(id).contains(&id);
        toasts.show(if now_favorite { "Added to favorites" } else { "Removed from favorites" });
    };

    let label = move || if active.get() { "Remove from favorites" } else { "Add to favorites" };

    view! {
        <button
            class="btn fav-button"
            class:fav-button--active=move || active.get()
            on:click=on_click
            title=label
            aria-label=label
            aria-pressed=move || active.get().to_string()
        >
            {move || if active.get() { "❤️" } else { "🤍" }}
        </button>
    }
}
