use crate::routes::routes::{AppRoute, ADMIN_PATH};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Espaço de Festas"</span>
                <nav class="header__nav">
                    {AppRoute::all()
                        .into_iter()
                        .map(|route| {
                            view! {
                                <A href=route.path() attr:class="header__link">
                                    {route.label()}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <A href=ADMIN_PATH attr:class="button button--ghost">"Admin"</A>
                <ThemeToggle />
            </div>
        </header>
    }
}
