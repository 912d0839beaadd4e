//! Character search with the trending strip.

use catalog::{Character, EntityKind};
use leptos::prelude::*;

use crate::components::cards::CharacterCard;
use crate::components::trending_strip::TrendingStrip;
use crate::pages::list::{list_screen, use_list_page};

#[component]
pub fn CharactersPage() -> impl IntoView {
    let page = use_list_page::<Character>(EntityKind::Character);

    view! {
        <TrendingStrip/>
        {list_screen(page, "Search characters by name", true, |character| {
            view! { <CharacterCard character/> }.into_any()
        })}
    }
}
