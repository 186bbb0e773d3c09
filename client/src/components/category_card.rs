//! Clickable card for one category on the dashboard.
//!
//! Hover styling (gradient fill, white text, stronger border) is pure CSS
//! driven by the custom properties from `util::color::accent_style`.

#[cfg(test)]
#[path = "category_card_test.rs"]
mod category_card_test;

use leptos::prelude::*;

use crate::components::category_avatar::CategoryAvatar;
use crate::components::chip::Chip;
use crate::data::categories::Category;
use crate::util::color::accent_style;
use crate::util::date::updated_caption;

/// Tags shown before collapsing the rest into a "+N" chip.
pub const VISIBLE_TAGS: usize = 3;

/// Seconds between the entry animations of consecutive cards.
const STAGGER_SECS: f32 = 0.1;

#[component]
pub fn CategoryCard(
    category: &'static Category,
    /// Position across both dashboard sections; drives the entry delay.
    index: usize,
    on_select: Callback<String>,
) -> impl IntoView {
    let style = format!("{} {}", accent_style(category.color, category.gradient), stagger_style(index));
    let (tags, overflow) = visible_tags(category.tags);
    let difficulty_style = format!("background: {}; color: white;", category.difficulty.color());

    let on_click = move |_| on_select.run(category.id.to_owned());

    view! {
        <article class="category-card" style=style on:click=on_click>
            <div class="category-card__halo"></div>
            <div class="category-card__content">
                <header class="category-card__header">
                    <CategoryAvatar icon=category.icon/>
                    <div class="category-card__heading">
                        <h3 class="category-card__title">{category.title}</h3>
                        <Chip label=category.difficulty.label() style=difficulty_style/>
                    </div>
                </header>

                <p class="category-card__description">{category.description}</p>

                <div class="category-card__tags">
                    {tags
                        .iter()
                        .map(|tag| view! { <span class="chip chip--outlined category-card__tag">{*tag}</span> })
                        .collect::<Vec<_>>()}
                    {overflow.map(|more| view! { <span class="chip chip--outlined category-card__more">{more}</span> })}
                </div>

                <footer class="category-card__footer">
                    <span class="category-card__count">
                        <span class="star" aria-hidden="true">"\u{2605}"</span>
                        {format!("{} items", category.item_count)}
                    </span>
                    <span class="category-card__updated">{updated_caption(category.last_updated)}</span>
                </footer>
            </div>
        </article>
    }
}

/// First `VISIBLE_TAGS` tags plus an optional "+N" label for the remainder.
pub fn visible_tags(tags: &'static [&'static str]) -> (&'static [&'static str], Option<String>) {
    if tags.len() > VISIBLE_TAGS {
        (&tags[..VISIBLE_TAGS], Some(format!("+{}", tags.len() - VISIBLE_TAGS)))
    } else {
        (tags, None)
    }
}

/// Inline `animation-delay` for the card at `index`.
#[allow(clippy::cast_precision_loss)]
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {:.1}s;", index as f32 * STAGGER_SECS)
}
