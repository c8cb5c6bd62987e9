use leptos::*;
use leptos_meta::*;
use serde_json::Value;
use terminal_app::{PortfolioTicker, TerminalApp};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Jonathan | Terminal Portfolio" />
        <Meta name="description" content="An interactive terminal-style personal portfolio." />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />

        <main class="site-root">
            <PortfolioPage />
        </main>
    }
}

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <PortfolioTicker />
        <div class="container">
            <TerminalApp launch_params=Value::Null />
        </div>
    }
}
