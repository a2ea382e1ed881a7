use gopherlife_shared::config::ClientConfig;
use web_sys::UrlSearchParams;

/// Read client settings from the page's query string, e.g.
/// `?server=http://localhost:8080&retries=10`.
pub fn load_config() -> ClientConfig {
    let params = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok());

    let config = ClientConfig::from_lookup(|key| params.as_ref()?.get(key));
    tracing::info!(
        server = config.server_url.as_deref().unwrap_or("<page origin>"),
        max_attempts = config.retry.max_attempts,
        "client config loaded"
    );
    config
}
