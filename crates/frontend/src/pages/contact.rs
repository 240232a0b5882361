use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader title="Contato e Localização" />
            <address class="contact">
                <p>"Telefone: (00) 0000-0000"</p>
                <p>"E-mail: contato@espacodefestas.com.br"</p>
                <p>"Endereço: Rua das Festas, 100 - Centro"</p>
            </address>
        </section>
    }
}
