use softsell::backend::Services;
use softsell::config::SiteConfig;

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A missing .env is normal outside desktop development.
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("ignoring malformed .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

fn main() {
    load_dotenv();
    let config = SiteConfig::load();
    if let Err(err) = softsell::logging::init(&config.log_filter) {
        eprintln!("logging disabled: {err:#}");
    }
    tracing::info!(
        contact_wired = config.contact_endpoint.is_some(),
        "starting SoftSell"
    );
    dioxus::LaunchBuilder::new()
        .with_context(Services::from_config(&config))
        .launch(softsell::ui::App);
}
