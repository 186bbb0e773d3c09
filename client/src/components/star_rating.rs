//! Read-only star rating.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

#[component]
pub fn StarRating(value: u8, #[prop(default = 5)] max: u8) -> impl IntoView {
    let label = format!("{} out of {max}", value.min(max));

    view! {
        <span class="rating" role="img" aria-label=label>
            {star_states(value, max)
                .into_iter()
                .map(|filled| {
                    let class = if filled { "rating__star rating__star--filled" } else { "rating__star" };
                    view! { <span class=class aria-hidden="true">"\u{2605}"</span> }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}

/// Filled flag per star; values above `max` saturate.
pub fn star_states(value: u8, max: u8) -> Vec<bool> {
    (0..max).map(|i| i < value).collect()
}
