use gopherlife_shared::error::ApiError;
use gopherlife_shared::protocol::{Command, UpdateResponse, UPDATE_ENDPOINT};
use gopherlife_shared::update_loop::WorldApi;

/// Join a base URL and an endpoint name.
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint)
}

/// Origin of the page, e.g. `http://localhost:8080`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

fn transport(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Transport(err.to_string())
    }
}

/// HTTP client for the simulation server.
#[derive(Debug, Clone)]
pub struct HttpWorldApi {
    base: String,
    client: reqwest::Client,
}

impl PartialEq for HttpWorldApi {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl HttpWorldApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn send(&self, command: Command) -> Result<(), ApiError> {
        let resp = self
            .client
            .get(endpoint_url(&self.base, command.endpoint()))
            .query(&command.query())
            .send()
            .await
            .map_err(transport)?;

        match ApiError::from_status(resp.status().as_u16()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Fire-and-forget command. Failures are logged, never retried.
    pub fn send_fire(&self, command: Command) {
        let api = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = api.send(command).await {
                tracing::warn!(endpoint = command.endpoint(), error = %err, "command failed");
            }
        });
    }
}

impl WorldApi for HttpWorldApi {
    async fn update(&self) -> Result<UpdateResponse, ApiError> {
        let resp = self
            .client
            .get(endpoint_url(&self.base, UPDATE_ENDPOINT))
            .send()
            .await
            .map_err(transport)?;

        if let Some(err) = ApiError::from_status(resp.status().as_u16()) {
            return Err(err);
        }

        resp.json::<UpdateResponse>().await.map_err(transport)
    }
}
