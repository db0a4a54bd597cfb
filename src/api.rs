use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// A single community server as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub map: String,
    #[serde(default, deserialize_with = "deserialize_players")]
    pub players: String, // "current/max"
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub region: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub address: String,
}

/// Body of `GET /servers`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerListResponse {
    pub servers: Vec<ServerRecord>,
    #[serde(default)]
    pub from_cache: bool,
    #[serde(default)]
    pub cache_age: Option<String>,
}

/// The backend sends ids as either numbers or strings
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Helper function to deserialize null as empty string
fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Player counts arrive as "current/max", a bare number, or junk
///
/// Junk becomes an empty string so the filter drops that one server instead
/// of the whole list failing to decode.
fn deserialize_players<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Build the server list URL, asking the backend to bypass its cache when forced
pub fn servers_url(base_url: &str, force_refresh: bool) -> String {
    let base = base_url.trim_end_matches('/');
    if force_refresh {
        format!("{}/servers?refresh=true", base)
    } else {
        format!("{}/servers", base)
    }
}

#[derive(Debug, Clone)]
pub struct QuickplayClient {
    base_url: String,
    client: Client,
}

impl QuickplayClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the tagged server list
    ///
    /// Without `force_refresh` the backend may answer from its own cache.
    pub async fn get_servers(&self, force_refresh: bool) -> Result<ServerListResponse> {
        let url = servers_url(&self.base_url, force_refresh);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch server list")?
            .error_for_status()
            .context("Server list request was rejected")?;

        let body: ServerListResponse = response
            .json()
            .await
            .context("Failed to parse server list")?;

        Ok(body)
    }
}
