use catalog::{EntityKind, Location};
use leptos::prelude::*;

use crate::components::cards::LocationCard;
use crate::pages::list::{list_screen, use_list_page};

#[component]
pub fn LocationsPage() -> impl IntoView {
    let page = use_list_page::<Location>(EntityKind::Location);
    list_screen(page, "Search locations by name", false, |location| view! { <LocationCard location/> }.into_any())
}
