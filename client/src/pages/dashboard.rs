//! Dashboard: searchable grid of knowledge-bank categories.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It filters the static category table by a live
//! query and hands the chosen category id to the router.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::category_card::CategoryCard;
use crate::data::categories::Category;
use crate::pages::category::category_path;
use crate::state::dashboard::{DashboardState, DashboardStats, split_featured};

/// Route wrapper: selecting a card navigates to `/category/{id}`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_select = Callback::new(move |id: String| {
        log::debug!("category selected: {id}");
        navigate(&category_path(&id), NavigateOptions::default());
    });

    view! { <Dashboard on_select=on_select/> }
}

/// Hero, search, stats and the featured / remaining category sections.
#[component]
pub fn Dashboard(on_select: Callback<String>) -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let filtered = Memo::new(move |_| state.with(DashboardState::filtered));
    let sections = Memo::new(move |_| filtered.with(|list| split_featured(list)));
    let stats = Memo::new(move |_| filtered.with(|list| DashboardStats::compute(list)));

    let on_input = move |ev: leptos::ev::Event| {
        let query = event_target_value(&ev);
        state.update(|s| s.query = query);
    };

    view! {
        <div class="dashboard">
            <section class="hero fade-down">
                <h1 class="hero__title">"Knowledge Universe"</h1>
                <p class="hero__subtitle">
                    "Explore curated research, insights, and discoveries across diverse fields of knowledge"
                </p>

                <label class="search">
                    <span class="search__icon" aria-hidden="true">"\u{1f50d}"</span>
                    <input
                        class="search__input"
                        type="search"
                        placeholder="Search categories, tags, or topics..."
                        aria-label="Search categories"
                        prop:value=move || state.with(|s| s.query.clone())
                        on:input=on_input
                    />
                </label>

                <div class="stats">
                    <Stat value=move || stats.get().categories.to_string() label="Categories" tone="primary"/>
                    <Stat value=move || stats.get().total_items.to_string() label="Total Items" tone="secondary"/>
                    <Stat value=move || stats.get().featured.to_string() label="Featured" tone="success"/>
                </div>
            </section>

            {move || {
                let (featured, other) = sections.get();
                let offset = featured.len();
                let nothing = featured.is_empty() && other.is_empty();
                view! {
                    {(!featured.is_empty()).then(|| view! {
                        <section class="dashboard__section fade-in">
                            <h2 class="section-title">
                                <span class="star" aria-hidden="true">"\u{2605}"</span>
                                "Featured Categories"
                            </h2>
                            <CardGrid categories=featured offset=0 on_select=on_select/>
                        </section>
                    })}
                    {(!other.is_empty()).then(|| view! {
                        <section class="dashboard__section fade-in fade-in--late">
                            <h2 class="section-title">"All Categories"</h2>
                            <CardGrid categories=other offset=offset on_select=on_select/>
                        </section>
                    })}
                    {nothing.then(|| view! {
                        <p class="empty-state">"No categories match your search."</p>
                    })}
                }
            }}
        </div>
    }
}

/// One hero statistic.
#[component]
fn Stat(#[prop(into)] value: Signal<String>, label: &'static str, tone: &'static str) -> impl IntoView {
    let value_class = format!("stat__value tone--{tone}");

    view! {
        <div class="stat">
            <div class=value_class>{move || value.get()}</div>
            <div class="stat__label">{label}</div>
        </div>
    }
}

/// Responsive card grid. `offset` continues the entry stagger across sections.
#[component]
fn CardGrid(categories: Vec<&'static Category>, offset: usize, on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {categories
                .into_iter()
                .enumerate()
                .map(|(i, category)| {
                    view! { <CategoryCard category=category index=offset + i on_select=on_select/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
