use crate::shared::components::PageHeader;
use leptos::prelude::*;

const ENVIRONMENTS: [(&str, &str); 4] = [
    ("Salão principal", "Capacidade para até 200 convidados, pista de dança e palco."),
    ("Área externa", "Jardim com gazebo, ideal para cerimônias ao ar livre."),
    ("Espaço kids", "Brinquedoteca monitorada para as crianças."),
    ("Churrasqueira", "Área coberta com churrasqueira e mesas."),
];

#[component]
pub fn Environments() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader title="Ambientes" />
            <div class="card-grid">
                {ENVIRONMENTS
                    .iter()
                    .map(|(name, text)| {
                        view! {
                            <article class="card">
                                <h2 class="card__title">{*name}</h2>
                                <p>{*text}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
