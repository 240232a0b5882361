use crate::routes::routes::MainRoutes;
use crate::shared::theme::resolve_startup_theme;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Theme is fixed for the lifetime of the page
    let theme = resolve_startup_theme();

    view! {
        <MainRoutes theme=theme />
    }
}
