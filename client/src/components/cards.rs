//! Result cards for the three entity kinds.
//!
//! DESIGN
//! ======
//! Cards are plain links to the detail route. Hovering a card prefetches its
//! record into the cache so the detail page paints at once.

use catalog::{Character, EntityId, EntityKind, Episode, Location, VitalSign};
use leptos::prelude::*;

use crate::app::AppServices;
use crate::components::fav_button::FavButton;
use crate::state::prefetch::prefetch;

/// `mouseenter` handler warming the cache for one entity.
fn prefetch_on_hover(kind: EntityKind, id: EntityId) -> impl Fn(leptos::ev::MouseEvent) + 'static {
    let services = expect_context::<AppServices>();
    move |_| {
        let api = services.api.clone();
        let cache = services.cache.clone();
        leptos::task::spawn_local(async move {
            prefetch(&api, &cache, kind, id).await;
        });
    }
}

/// Colored liveness dot plus status text.
#[component]
pub fn StatusBadge(vital: VitalSign, label: String) -> impl IntoView {
    view! {
        <span class="badge">
            <span class=format!("status-dot status-dot--{}", vital.css_modifier())></span>
            {label}
        </span>
    }
}

#[component]
pub fn CharacterCard(character: Character, #[prop(optional)] compact: bool) -> impl IntoView {
    let vital = character.vital_sign();
    let status = character.status_label().to_owned();
    let Character { id, name, species, gender, image, origin, location, .. } = character;

    let on_hover = prefetch_on_hover(EntityKind::Character, id);

    let meta = if compact { species } else { format!("{species} • {gender}") };
    let badges = (!compact).then(|| {
        view! {
            <div class="entity-card__badges">
                <span class="badge">"Origin: " {origin.name}</span>
                <span class="badge">"Last: " {location.name}</span>
            </div>
        }
    });

    view! {
        <a
            class="card entity-card"
            class:entity-card--compact=compact
            href=format!("/characters/{id}")
            title="Open details"
            on:mouseenter=on_hover
        >
            <img class="thumb" src=image alt=name.clone()/>
            <div class="entity-card__row">
                <span class="entity-card__name">{name}</span>
                <span class="entity-card__actions">
                    <StatusBadge vital label=status/>
                    <FavButton id/>
                </span>
            </div>
            <div class="entity-card__meta">{meta}</div>
            {badges}
        </a>
    }
}

#[component]
pub fn EpisodeCard(episode: Episode) -> impl IntoView {
    let on_hover = prefetch_on_hover(EntityKind::Episode, episode.id);

    view! {
        <a
            class="card entity-card"
            href=format!("/episodes/{}", episode.id)
            title="Open details"
            on:mouseenter=on_hover
        >
            <div class="entity-card__row">
                <span class="entity-card__name">{episode.name}</span>
                <span class="badge">{episode.episode}</span>
            </div>
            <div class="entity-card__meta">"Air date: " {episode.air_date}</div>
            <div class="entity-card__badges">
                <span class="badge">"Characters: " {episode.characters.len()}</span>
            </div>
        </a>
    }
}

#[component]
pub fn LocationCard(location: Location) -> impl IntoView {
    let kind = if location.kind.is_empty() { "Unknown type".to_owned() } else { location.kind };
    let dimension = if location.dimension.is_empty() { "—".to_owned() } else { location.dimension };
    let on_hover = prefetch_on_hover(EntityKind::Location, location.id);

    view! {
        <a
            class="card entity-card"
            href=format!("/locations/{}", location.id)
            title="Open details"
            on:mouseenter=on_hover
        >
            <div class="entity-card__row">
                <span class="entity-card__name">{location.name}</span>
                <span class="badge">{kind}</span>
            </div>
            <div class="entity-card__meta">"Dimension: " <b>{dimension}</b></div>
            <div class="entity-card__badges">
                <span class="badge">"Residents: " {location.residents.len()}</span>
            </div>
        </a>
    }
}
