//! Admin landing page for events.

use crate::routes::routes::NEW_EVENT_PATH;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AdminEvents() -> impl IntoView {
    view! {
        <section class="page page--admin">
            <PageHeader title="Eventos" subtitle="Painel administrativo">
                <A href=NEW_EVENT_PATH attr:class="button button--primary">
                    {icon("plus")}
                    " Novo evento"
                </A>
            </PageHeader>
        </section>
    }
}
