use crate::shared::components::PageHeader;
use leptos::prelude::*;

const FAQ: [(&str, &str); 3] = [
    (
        "Posso levar minha própria decoração?",
        "Sim, desde que não danifique paredes e pisos.",
    ),
    (
        "O espaço possui estacionamento?",
        "Sim, com vagas para até 40 carros.",
    ),
    (
        "Com quanto tempo de antecedência devo reservar?",
        "Recomendamos pelo menos 60 dias.",
    ),
];

#[component]
pub fn Doubts() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader title="Dúvidas" />
            <dl class="faq">
                {FAQ
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <dt>{*question}</dt>
                            <dd>{*answer}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
