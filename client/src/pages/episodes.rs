use catalog::{EntityKind, Episode};
use leptos::prelude::*;

use crate::components::cards::EpisodeCard;
use crate::pages::list::{list_screen, use_list_page};

#[component]
pub fn EpisodesPage() -> impl IntoView {
    let page = use_list_page::<Episode>(EntityKind::Episode);
    list_screen(page, "Search episodes by name", false, |episode| view! { <EpisodeCard episode/> }.into_any())
}
