use reqwest::{header::HeaderValue, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{errors::StoreError, settings::AppConfig};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin client for the hosted platform: table API, storage and identity
/// all live under the same project URL and accept the same API key.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        Self::from_parts(&config.supabase_url, &config.supabase_key)
    }

    pub fn from_parts(base_url: &str, api_key: &str) -> Result<Self, StoreError> {
        HeaderValue::from_str(api_key)
            .map_err(|_| StoreError::Configuration("API key is not a valid header value".into()))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(SupabaseClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request carrying the project API key as both `apikey` and bearer token.
    pub fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Request authenticated as an end user; the API key still identifies the project.
    pub fn as_user(&self, method: Method, path: &str, user_token: &str) -> RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.api_key)
            .bearer_auth(user_token)
    }

    pub fn table(&self, name: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: name.to_string(),
            filters: Vec::new(),
            order: None,
        }
    }
}

/// Builder over one table of the REST API: equality filters plus ordering,
/// finished by one of the terminal verbs.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
}

impl<'a> TableQuery<'a> {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// Ascending order on `column`.
    pub fn order(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        pairs.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        pairs
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .authorized(method, &format!("rest/v1/{}", self.table))
            .query(&self.query_pairs())
    }

    pub async fn select<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        debug!(table = %self.table, filters = ?self.filters, "select");
        execute(self.request(Method::GET)).await
    }

    pub async fn insert<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(table = %self.table, "insert");
        let request = self.request(Method::POST)
            .header("Prefer", "return=representation")
            .json(body);
        execute(request).await
    }

    pub async fn update<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(table = %self.table, filters = ?self.filters, "update");
        let request = self.request(Method::PATCH)
            .header("Prefer", "return=representation")
            .json(body);
        execute(request).await
    }

    pub async fn upsert<B, T>(self, body: &B) -> Result<Vec<T>, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(table = %self.table, "upsert");
        let request = self.request(Method::POST)
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(body);
        execute(request).await
    }

    pub async fn delete<T: DeserializeOwned>(self) -> Result<Vec<T>, StoreError> {
        debug!(table = %self.table, filters = ?self.filters, "delete");
        let request = self.request(Method::DELETE)
            .header("Prefer", "return=representation");
        execute(request).await
    }
}

async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<Vec<T>, StoreError> {
    let response = request.send().await?;
    let response = ensure_success(response).await?;

    let body = response.bytes().await?;
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(&body)?)
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected {
        status: status.as_u16(),
        message: error_message(&raw),
    })
}

/// Pulls the human-readable part out of a platform error body.
pub fn error_message(raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|body| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| body.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| raw.trim().to_string())
}
