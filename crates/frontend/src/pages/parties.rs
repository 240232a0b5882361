use crate::shared::components::PageHeader;
use leptos::prelude::*;

#[component]
pub fn Parties() -> impl IntoView {
    view! {
        <section class="page">
            <PageHeader
                title="Festas"
                subtitle="Confira os eventos abertos ao público."
            />
            <p>"A agenda de festas é atualizada pela nossa equipe. Volte em breve para novidades!"</p>
        </section>
    }
}
