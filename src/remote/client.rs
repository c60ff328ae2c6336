use crate::grid::{dataset_from_json, Dataset};
use crate::remote::chat::{decode_chat_reply, ChatRequest, CHAT_PATH};
use crate::remote::join_url;
use crate::remote::minion::Minion;
use crate::remote::users::USERS_PATH;
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

/// Default origin of the local backend.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Default base of the third-party item API (ids are appended).
pub const DEFAULT_ITEM_API_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Where each service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub backend_url: String,
    pub item_api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            item_api_url: DEFAULT_ITEM_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn users_url(&self) -> String {
        join_url(&self.backend_url, USERS_PATH)
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.backend_url, CHAT_PATH)
    }

    pub fn minion_url(&self, id: u32) -> String {
        join_url(&self.item_api_url, &id.to_string())
    }
}

/// Thin wrapper over a shared `reqwest::Client`. Cheap to clone.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl RemoteClient {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("evilcorp/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch every user known to the backend.
    pub async fn fetch_users(&self) -> Result<Dataset> {
        let url = self.endpoints.users_url();
        info!(%url, "fetching users");

        let body: Value = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("Failed to fetch users from {}", url))?
            .json()
            .await
            .with_context(|| format!("Failed to decode users from {}", url))?;

        let users = dataset_from_json(body);
        debug!(count = users.len(), "users received");
        Ok(users)
    }

    /// Fetch the item with the given id from the third-party API.
    pub async fn fetch_minion(&self, id: u32) -> Result<Minion> {
        let url = self.endpoints.minion_url(id);
        info!(%url, id, "fetching minion");

        let minion: Minion = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("Failed to fetch minion {} from {}", id, url))?
            .json()
            .await
            .with_context(|| format!("Failed to decode minion {} from {}", id, url))?;

        debug!(name = %minion.name, "minion received");
        Ok(minion)
    }

    /// Post one chat message and return the assistant's reply text.
    pub async fn send_chat(&self, input: &str) -> Result<String> {
        let url = self.endpoints.chat_url();
        info!(%url, chars = input.chars().count(), "sending chat message");

        let body: Value = self
            .http
            .post(&url)
            .json(&ChatRequest { input })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .with_context(|| format!("Failed to send chat message to {}", url))?
            .json()
            .await
            .with_context(|| format!("Failed to decode chat reply from {}", url))?;

        decode_chat_reply(body).with_context(|| format!("Unexpected chat reply from {}", url))
    }
}
