//! Card for one hunting location with an expandable detail panel.

use leptos::prelude::*;

use crate::components::chip::Chip;
use crate::components::star_rating::StarRating;
use crate::data::hunting_locations::{HuntingLocation, Tone, difficulty_tone};
use crate::state::hunting::HuntingState;

#[component]
pub fn LocationCard(location: &'static HuntingLocation, accordion: RwSignal<HuntingState>) -> impl IntoView {
    let id = location.id;
    let expanded = move || accordion.with(|s| s.is_expanded(id));
    let panel_id = format!("location-{id}-details");
    let controls = panel_id.clone();
    let accordion_class = move || if expanded() { "accordion accordion--open" } else { "accordion" };

    let on_toggle = move |_| {
        accordion.update(|s| s.toggle(id));
        log::debug!("location {id} expanded: {}", accordion.with_untracked(|s| s.is_expanded(id)));
    };

    view! {
        <article class="location-card">
            <div class="location-card__top">
                <div>
                    <h3 class="location-card__name">{location.name}</h3>
                    <p class="location-card__meta">
                        <span class="icon" aria-hidden="true">"\u{1f4cd}"</span>
                        {location.location}
                    </p>
                    <p class="location-card__meta location-card__meta--small">
                        <span class="icon" aria-hidden="true">"\u{23f1}"</span>
                        {location.distance}
                    </p>
                </div>
                <div class="location-card__badges">
                    <Chip
                        label=format!("Crowd Level: {}", location.crowd_level.label())
                        tone=location.crowd_level.tone()
                    />
                    <Chip
                        label=format!("Difficulty: {}/5", location.difficulty)
                        tone=difficulty_tone(location.difficulty)
                    />
                </div>
            </div>

            <div class="location-card__significance">
                <strong>"Historical Significance:"</strong>
                <StarRating value=location.historical_significance/>
            </div>

            <p class="location-card__description">{location.description}</p>

            <div class="location-card__group">
                <span class="location-card__label">"Native Tribes:"</span>
                <ChipRow items=location.native_tribes outlined=true/>
            </div>

            <section class=accordion_class>
                <button
                    class="accordion__summary"
                    aria-expanded=move || expanded().to_string()
                    aria-controls=controls
                    on:click=on_toggle
                >
                    <span>"Detailed Information & Tips"</span>
                    <span class="accordion__chevron" aria-hidden="true">"\u{25be}"</span>
                </button>
                <Show when=expanded>
                    <div class="accordion__details" id=panel_id.clone()>
                        <div class="accordion__column">
                            <h4 class="accordion__heading">
                                <span class="icon" aria-hidden="true">"\u{1f4a1}"</span>
                                "Hunting Tips"
                            </h4>
                            <ul class="list list--dense">
                                {location
                                    .tips
                                    .iter()
                                    .map(|tip| {
                                        view! {
                                            <li class="list__item">
                                                <span class="list__icon star" aria-hidden="true">"\u{2605}"</span>
                                                <span>{*tip}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>

                            <h4 class="accordion__heading">"Best Seasons"</h4>
                            <ChipRow items=location.best_seasons tone=Tone::Primary outlined=true/>
                        </div>

                        <div class="accordion__column">
                            <h4 class="accordion__heading">"Location Details"</h4>
                            <dl class="details">
                                <dt>"Coordinates"</dt>
                                <dd>{location.coordinates}</dd>
                                <dt>"Accessibility"</dt>
                                <dd>{location.accessibility}</dd>
                                <dt>"Permits Required"</dt>
                                <dd>{location.permits}</dd>
                            </dl>

                            <h4 class="accordion__heading">"Geological Features"</h4>
                            <ChipRow items=location.geological_features outlined=true/>

                            <h4 class="accordion__heading">"Historical Finds"</h4>
                            <ChipRow items=location.historical_finds tone=Tone::Secondary outlined=true/>
                        </div>
                    </div>
                </Show>
            </section>
        </article>
    }
}

/// Wrapping row of chips for a static string list.
#[component]
fn ChipRow(
    items: &'static [&'static str],
    #[prop(optional)] tone: Option<Tone>,
    #[prop(optional)] outlined: bool,
) -> impl IntoView {
    view! {
        <div class="chip-row">
            {items
                .iter()
                .map(|item| {
                    match tone {
                        Some(tone) => view! { <Chip label=*item tone=tone outlined=outlined/> }.into_any(),
                        None => view! { <Chip label=*item outlined=outlined/> }.into_any(),
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
