use crate::routes::routes::AppRoute;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer data-zone="footer" class="footer" data-theme=theme.as_str()>
            <span>{format!("© {} Espaço de Festas", current_year())}</span>
            <a class="footer__link" href=AppRoute::Contact.path()>
                {AppRoute::Contact.label()}
            </a>
        </footer>
    }
}
