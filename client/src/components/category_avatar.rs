//! Round icon badge for a category.

use leptos::prelude::*;

use crate::data::categories::CategoryIcon;

/// Icon inside a circle. Color comes from the enclosing `--accent` property.
#[component]
pub fn CategoryAvatar(icon: CategoryIcon, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "avatar avatar--large" } else { "avatar" };

    view! {
        <span class=class data-icon=icon.name() aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}
