use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn Reservations() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader title="Reservas" />
            <ol class="steps">
                <li>"Escolha a data e o ambiente desejado."</li>
                <li>"Entre em contato para confirmar a disponibilidade."</li>
                <li>"Assine o contrato e pague o sinal para garantir a reserva."</li>
            </ol>
        </section>
    }
}
