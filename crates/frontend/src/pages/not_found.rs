use crate::shared::components::PageHeader;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader title="Página não encontrada" />
            <A href="/">"Voltar para o início"</A>
        </section>
    }
}
