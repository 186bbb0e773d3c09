//! Curated hunting-location list shown under the Artifact Hunting category.

use leptos::prelude::*;

use crate::components::location_card::LocationCard;
use crate::data::hunting_locations::{GUIDELINES, INTRO, LEGAL_NOTICE};
use crate::state::category::ViewMode;
use crate::state::hunting::{HuntingState, filter_locations};

/// Heading, legal notice, one card per matching location, then general guidelines.
///
/// `query` narrows the list by name, location, description or tribe.
#[component]
pub fn ArtifactHunting(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] view_mode: Signal<ViewMode>,
) -> impl IntoView {
    let accordion = RwSignal::new(HuntingState::default());
    let locations = Memo::new(move |_| query.with(|q| filter_locations(q)));
    let list_class = move || format!("location-list {}", view_mode.get().class());

    view! {
        <section class="paper artifact-hunting">
            <header class="artifact-hunting__header">
                <h2 class="artifact-hunting__title">
                    <span class="icon icon--large" aria-hidden="true">"\u{26f0}"</span>
                    "Artifact Hunting Locations"
                </h2>
                <p class="text-secondary">{INTRO}</p>
                <div class="alert alert--warning" role="note">
                    <strong>"Legal Notice: "</strong>
                    {LEGAL_NOTICE}
                </div>
            </header>

            <div class=list_class>
                {move || {
                    let list = locations.get();
                    if list.is_empty() {
                        view! { <p class="empty-state">"No locations match your search."</p> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|location| view! { <LocationCard location=location accordion=accordion/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>

            <hr class="divider"/>

            <section class="guidelines">
                <h3 class="guidelines__title">"General Hunting Guidelines"</h3>
                <ul class="list">
                    {GUIDELINES
                        .iter()
                        .map(|g| {
                            let icon_class = format!("list__icon tone--{}", g.tone.class_suffix());
                            view! {
                                <li class="list__item">
                                    <span class=icon_class aria-hidden="true">{g.glyph}</span>
                                    <div>
                                        <div class="list__primary">{g.primary}</div>
                                        <div class="list__secondary">{g.secondary}</div>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </section>
    }
}
