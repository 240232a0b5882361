use crate::routes::routes::AppRoute;
use crate::shared::components::PageHeader;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    // Home itself is not a card
    let sections = AppRoute::all().into_iter().skip(1);

    view! {
        <section class="page page--home">
            <PageHeader
                title="Bem-vindo ao Espaço de Festas"
                subtitle="Aniversários, casamentos e confraternizações em um só lugar."
            />
            <div class="card-grid">
                {sections
                    .map(|route| {
                        view! {
                            <A href=route.path() attr:class="card card--link">
                                <h2 class="card__title">{route.label()}</h2>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
