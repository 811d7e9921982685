// Astra landing page - Leptos 0.8 browser entry
// Developed by the Astra Studio web team (c)2026

use astra_landing::{App, config::PageConfig, telemetry};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();

    let config = PageConfig::embedded();
    tracing::debug!(scene = config.scene.is_active(), "mounting landing page");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
