//! Asset model and operations.

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::api::{ApiError, ApiResult};
use crate::http::{ClientError, ClientResult, HttpClient, Params};

const ASSETS_PATH: &str = "/assets.json";

/// A single theme asset.
///
/// Text content travels in `value`, binary content base64-encoded in
/// `attachment`; the remaining fields are populated by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Asset {
    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Asset {
    /// A text asset ready for upload.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct AssetPayload<'a> {
    asset: &'a Asset,
}

#[derive(Deserialize)]
struct AssetEnvelope {
    asset: Asset,
}

#[derive(Deserialize)]
struct AssetListEnvelope {
    assets: Vec<Asset>,
}

/// Typed asset operations over an [`HttpClient`].
#[derive(Debug)]
pub struct AssetClient {
    http: HttpClient,
}

impl AssetClient {
    /// Wrap an already-constructed client.
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Construct the underlying client and wrap it.
    pub fn from_params(params: Params) -> ClientResult<Self> {
        Ok(Self::new(HttpClient::new(params)?))
    }

    /// List all assets of the theme.
    pub async fn list(&self) -> ApiResult<Vec<Asset>> {
        let response = self.http.get(ASSETS_PATH).await?;
        let envelope: AssetListEnvelope = decode(response).await?;
        Ok(envelope.assets)
    }

    /// Fetch a single asset by key.
    pub async fn get(&self, key: &str) -> ApiResult<Asset> {
        let response = self.http.get(&asset_path(key)).await?;
        let envelope: AssetEnvelope = decode(response).await?;
        Ok(envelope.asset)
    }

    /// Create or update an asset.
    pub async fn update(&self, asset: &Asset) -> ApiResult<Asset> {
        let response = self.http.put(ASSETS_PATH, &AssetPayload { asset }).await?;
        let envelope: AssetEnvelope = decode(response).await?;
        Ok(envelope.asset)
    }

    /// Delete an asset by key.
    pub async fn delete(&self, key: &str) -> ApiResult<()> {
        let response = self.http.delete(&asset_path(key)).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(ClientError::from)?;
            return Err(ApiError::Status { status, body });
        }
        Ok(())
    }

    /// The raw client, for requests outside the asset surface.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Path for a single-asset operation, key carried in the query string.
fn asset_path(key: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("asset[key]", key)
        .finish();
    format!("{ASSETS_PATH}?{query}")
}

/// Check the status, then decode the body into the expected envelope.
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(ClientError::from)?;

    if !status.is_success() {
        return Err(ApiError::Status { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}
