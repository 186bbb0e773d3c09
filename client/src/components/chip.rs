//! Small rounded label used for tags, difficulty and status.

#[cfg(test)]
#[path = "chip_test.rs"]
mod chip_test;

use leptos::prelude::*;

use crate::data::hunting_locations::Tone;

/// A compact label. `tone` picks a palette color; `outlined` draws only the border.
#[component]
pub fn Chip(
    #[prop(into)] label: String,
    #[prop(optional)] tone: Option<Tone>,
    #[prop(optional)] outlined: bool,
    #[prop(optional, into)] style: Option<String>,
) -> impl IntoView {
    view! {
        <span class=chip_class(tone, outlined) style=style.unwrap_or_default()>
            {label}
        </span>
    }
}

/// Class list for a chip with the given tone and variant.
pub fn chip_class(tone: Option<Tone>, outlined: bool) -> String {
    let mut class = String::from("chip");
    if let Some(tone) = tone {
        class.push_str(" chip--");
        class.push_str(tone.class_suffix());
    }
    if outlined {
        class.push_str(" chip--outlined");
    }
    class
}
