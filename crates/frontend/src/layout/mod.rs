pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Application shell: persistent header and footer around the routed page.
///
/// ```text
/// +------------------------------------------+
/// |                Header                    |
/// +------------------------------------------+
/// |              Page content                |
/// +------------------------------------------+
/// |                Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
