use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Dashboard configuration is invalid: {:#}", e);
            return view! {
                <div class="alert alert--error">
                    "The dashboard configuration could not be read: " {e.to_string()}
                </div>
            }
            .into_any();
        }
    };
    log::info!(
        "{} for {}, reference date {}",
        config.app.title,
        config.app.organisation,
        config.today()
    );

    // Provide the AppGlobalContext store and the configuration to the whole app.
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <AppShell />
    }
    .into_any()
}
