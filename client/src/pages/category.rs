//! Category detail page: gradient header, toolbar and category content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the dashboard via `/category/{id}`. The id is resolved against
//! the static category table; unknown ids render a placeholder with a way back.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::artifact_hunting::ArtifactHunting;
use crate::components::category_avatar::CategoryAvatar;
use crate::data::categories::{Category, CategoryContent, find_category};
use crate::state::category::{CategoryTab, CategoryViewState, ViewMode};
use crate::util::color::accent_style;

/// Route path for a category id.
pub fn category_path(id: &str) -> String {
    format!("/category/{id}")
}

/// Text shown under the title when a category only has a placeholder.
pub fn coming_soon_text(blurb: &str) -> String {
    format!("Coming soon - {blurb}")
}

/// Route wrapper: reads `:id` and wires the back action to `/`.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let on_back = Callback::new(move |()| {
        log::debug!("back to dashboard");
        navigate("/", NavigateOptions::default());
    });

    view! {
        {move || {
            let id = params.read().get("id").unwrap_or_default();
            view! { <CategoryView category_id=id on_back=on_back/> }
        }}
    }
}

/// Full category view, or a "Category not found" placeholder.
#[component]
pub fn CategoryView(#[prop(into)] category_id: String, on_back: Callback<()>) -> impl IntoView {
    let Some(category) = find_category(&category_id) else {
        log::warn!("unknown category id: {category_id}");
        return view! {
            <div class="not-found">
                <h2>"Category not found"</h2>
                <button class="icon-button" title="Back" on:click=move |_| on_back.run(())>
                    "\u{2190}"
                </button>
            </div>
        }
        .into_any();
    };

    let ui = RwSignal::new(CategoryViewState::default());

    view! {
        <div class="category-view" style=accent_style(category.color, category.gradient)>
            <CategoryHeader category=category on_back=on_back/>
            <CategoryToolbar ui=ui/>
            <div class="category-view__content fade-up">
                {match category.content {
                    CategoryContent::ArtifactHunting => {
                        let query = Signal::derive(move || ui.with(|s| s.content_query.clone()));
                        let view_mode = Signal::derive(move || ui.with(|s| s.view_mode));
                        view! { <ArtifactHunting query=query view_mode=view_mode/> }.into_any()
                    }
                    CategoryContent::ComingSoon(blurb) => {
                        view! {
                            <div class="placeholder">
                                <h2>{category.title}</h2>
                                <p class="text-secondary">{coming_soon_text(blurb)}</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
    .into_any()
}

/// Gradient banner with breadcrumbs, avatar, tags, item count and difficulty.
#[component]
fn CategoryHeader(category: &'static Category, on_back: Callback<()>) -> impl IntoView {
    view! {
        <header class="category-header">
            <div class="category-header__halo"></div>
            <div class="fade-up">
                <nav class="breadcrumbs" aria-label="Breadcrumb">
                    <button class="icon-button icon-button--light" title="Back" on:click=move |_| on_back.run(())>
                        "\u{2190}"
                    </button>
                    <a class="breadcrumbs__link" href="/" on:click=move |ev| {
                        ev.prevent_default();
                        on_back.run(());
                    }>
                        <span aria-hidden="true">"\u{2302}"</span>
                        "Dashboard"
                    </a>
                    <span class="breadcrumbs__separator" aria-hidden="true">"/"</span>
                    <span class="breadcrumbs__current">{category.title}</span>
                </nav>

                <div class="category-header__body">
                    <CategoryAvatar icon=category.icon large=true/>
                    <div class="category-header__text">
                        <h1 class="category-header__title">{category.title}</h1>
                        <p class="category-header__description">{category.description}</p>
                        <div class="chip-row">
                            {category
                                .tags
                                .iter()
                                .map(|tag| view! { <span class="chip chip--glass">{*tag}</span> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="category-header__count">
                        <div class="category-header__number">{category.item_count}</div>
                        <div class="category-header__unit">"Items"</div>
                        <span class="chip chip--glass">{category.difficulty.label()}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Tabs, content search and the grid/list toggle.
#[component]
fn CategoryToolbar(ui: RwSignal<CategoryViewState>) -> impl IntoView {
    let on_toggle_view = move |_| {
        ui.update(CategoryViewState::toggle_view_mode);
        log::debug!("view mode: {:?}", ui.with_untracked(|s| s.view_mode));
    };

    view! {
        <div class="toolbar">
            <div class="tabs" role="tablist">
                {CategoryTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let selected = move || ui.with(|s| s.tab == tab);
                        let class = move || if selected() { "tabs__tab tabs__tab--active" } else { "tabs__tab" };
                        view! {
                            <button
                                class=class
                                role="tab"
                                aria-selected=move || selected().to_string()
                                on:click=move |_| {
                                    log::debug!("tab: {}", tab.label());
                                    ui.update(|s| s.tab = tab);
                                }
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="toolbar__actions">
                <label class="search search--small">
                    <span class="search__icon" aria-hidden="true">"\u{1f50d}"</span>
                    <input
                        class="search__input"
                        type="search"
                        placeholder="Search content..."
                        aria-label="Search content"
                        prop:value=move || ui.with(|s| s.content_query.clone())
                        on:input=move |ev| {
                            let query = event_target_value(&ev);
                            ui.update(|s| s.content_query = query);
                        }
                    />
                </label>
                <button
                    class="icon-button"
                    title=move || view_toggle_title(ui.with(|s| s.view_mode))
                    on:click=on_toggle_view
                >
                    {move || view_toggle_glyph(ui.with(|s| s.view_mode))}
                </button>
            </div>
        </div>
    }
}

/// Glyph for the toggle button, showing the current layout.
pub fn view_toggle_glyph(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "\u{25a6}",
        ViewMode::List => "\u{2630}",
    }
}

pub fn view_toggle_title(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Grid => "Switch to list view",
        ViewMode::List => "Switch to grid view",
    }
}
