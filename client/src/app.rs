//! Root application component with app bar and routing.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{category::CategoryPage, dashboard::DashboardPage};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

pub const APP_TITLE: &str = "JG Knowledge Bank";
pub const PAGE_HEADING: &str = "Personal Knowledge & Interest Bank";
pub const PAGE_SUBTITLE: &str = "A curated collection of research, findings, and interests";

/// Root application component.
///
/// Renders the app bar and sets up client-side routing between the dashboard
/// and category pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Meta name="description" content=PAGE_SUBTITLE/>

        <Router>
            <header class="app-bar">
                <a class="app-bar__title" href="/">{APP_TITLE}</a>
            </header>
            <main class="container">
                <div class="page-heading">
                    <h1 class="page-heading__title">{PAGE_HEADING}</h1>
                    <p class="page-heading__subtitle text-secondary">{PAGE_SUBTITLE}</p>
                </div>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("category"), ParamSegment("id")) view=CategoryPage/>
                </Routes>
            </main>
        </Router>
    }
}
