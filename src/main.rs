use todo_assistant::config::ClientConfig;

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // .env for desktop dev; bundled defaults are applied by `ClientConfig::from_env`
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt().with_target(true).init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    init_tracing();
    load_dotenv();
    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, user_id = %config.user_id, "starting chat client");
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(todo_assistant::ui::App);
}
