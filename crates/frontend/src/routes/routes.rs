use crate::domain::a001_event::ui::create::NewEvent;
use crate::domain::a001_event::ui::list::AdminEvents;
use crate::layout::Shell;
use crate::pages::{Contact, Doubts, Environments, Home, NotFound, Parties, Reservations, Rules};
use crate::shared::theme::{Theme, ThemeProvider};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Public pages of the site, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Environments,
    Parties,
    Reservations,
    Rules,
    Doubts,
    Contact,
}

impl AppRoute {
    pub fn all() -> [AppRoute; 7] {
        [
            AppRoute::Home,
            AppRoute::Environments,
            AppRoute::Parties,
            AppRoute::Reservations,
            AppRoute::Rules,
            AppRoute::Doubts,
            AppRoute::Contact,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Environments => "/ambientes",
            AppRoute::Parties => "/festas",
            AppRoute::Reservations => "/reservas",
            AppRoute::Rules => "/regras",
            AppRoute::Doubts => "/duvidas",
            AppRoute::Contact => "/contato_localizacao",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            AppRoute::Home => "Início",
            AppRoute::Environments => "Ambientes",
            AppRoute::Parties => "Festas",
            AppRoute::Reservations => "Reservas",
            AppRoute::Rules => "Regras",
            AppRoute::Doubts => "Dúvidas",
            AppRoute::Contact => "Contato e Localização",
        }
    }
}

/// Admin landing page, also the redirect target after creating an event.
pub const ADMIN_PATH: &str = "/admin";
/// New-event form.
pub const NEW_EVENT_PATH: &str = "/admin/eventos/novo";

#[component]
pub fn MainRoutes(theme: Theme) -> impl IntoView {
    view! {
        <ThemeProvider theme=theme>
            <thaw::ToasterProvider>
                <Router>
                    <Shell>
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/ambientes") view=Environments />
                            <Route path=path!("/festas") view=Parties />
                            <Route path=path!("/reservas") view=Reservations />
                            <Route path=path!("/regras") view=Rules />
                            <Route path=path!("/duvidas") view=Doubts />
                            <Route path=path!("/contato_localizacao") view=Contact />
                            <Route path=path!("/admin") view=AdminEvents />
                            <Route path=path!("/admin/eventos/novo") view=NewEvent />
                        </Routes>
                    </Shell>
                </Router>
            </thaw::ToasterProvider>
        </ThemeProvider>
    }
}
