use crate::shared::components::PageHeader;
use leptos::prelude::*;

const RULES: [&str; 5] = [
    "O horário de término deve ser respeitado.",
    "É proibido o uso de fogos de artifício.",
    "Som alto somente até as 22h.",
    "Danos ao espaço serão cobrados do contratante.",
    "Menores devem estar acompanhados de um responsável.",
];

#[component]
pub fn Rules() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader title="Regras" />
            <ul class="rules">
                {RULES.iter().map(|rule| view! { <li>{*rule}</li> }).collect_view()}
            </ul>
        </section>
    }
}
