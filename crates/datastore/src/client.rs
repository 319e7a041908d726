//! Generic REST client for the hosted data store.
//!
//! The store exposes one endpoint per table with row-oriented semantics:
//! equality-filtered reads with ordering and a row limit, bulk insert,
//! update-by-identifier, and delete-by-identifier. Authentication is an
//! API key sent both as an `apikey` header and as a bearer token.

use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::config::DatastoreConfig;
use crate::error::DatastoreError;

/// An equality-filtered, ordered, limited read against one table.
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl SelectQuery {
    /// Match all rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter on a column.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_owned(), format!("eq.{}", value.to_string())));
        self
    }

    /// Order results by a column, newest-style descending.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    /// Order results by a column, ascending.
    #[must_use]
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.asc"));
        self
    }

    /// Cap the number of returned rows.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.filters.clone();
        if let Some(order) = &self.order {
            pairs.push(("order".to_owned(), order.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }
}

/// REST client bound to one hosted data store instance.
pub struct RestDatastore {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl RestDatastore {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::Http`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &DatastoreConfig) -> Result<Self, DatastoreError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let key = self.api_key.expose_secret();
        self.http
            .request(method, format!("{}/{table}", self.base_url))
            .header("apikey", key)
            .bearer_auth(key)
    }

    /// Read rows matching a query.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] on transport failure, a non-success
    /// status, or a payload that does not decode as `Vec<T>`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<T>, DatastoreError> {
        let response = self
            .request(Method::GET, table)
            .query(&query.query_pairs())
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Read at most one row matching a query.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::select`].
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: SelectQuery,
    ) -> Result<Option<T>, DatastoreError> {
        let mut rows = self.select::<T>(table, &query.limit(1)).await?;
        Ok(rows.pop())
    }

    /// Insert rows into a table.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] on transport failure or a non-success
    /// status.
    pub async fn insert<T: Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
    ) -> Result<(), DatastoreError> {
        let response = self
            .request(Method::POST, table)
            .json(rows)
            .send()
            .await?;
        Self::success_body(response).await?;
        Ok(())
    }

    /// Patch the row with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::NotFound`] when no row carries the
    /// identifier, otherwise the usual transport/status/decode failures.
    pub async fn update<P: Serialize + Sync>(
        &self,
        table: &str,
        id: Uuid,
        patch: &P,
    ) -> Result<(), DatastoreError> {
        let response = self
            .request(Method::PATCH, table)
            .query(&[("id", format!("eq.{id}"))])
            // Ask for the touched rows back so a zero-row match is visible.
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        let body = Self::success_body(response).await?;
        let touched: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        if touched.is_empty() {
            return Err(DatastoreError::NotFound);
        }
        Ok(())
    }

    /// Delete the row with the given identifier.
    ///
    /// Deleting an already-absent row is not an error; the store treats
    /// it as a no-op and so do we.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError`] on transport failure or a non-success
    /// status.
    pub async fn delete(&self, table: &str, id: Uuid) -> Result<(), DatastoreError> {
        let response = self
            .request(Method::DELETE, table)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        Self::success_body(response).await?;
        Ok(())
    }

    async fn success_body(response: reqwest::Response) -> Result<String, DatastoreError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DatastoreError::NotFound);
        }
        if !status.is_success() {
            return Err(DatastoreError::UnexpectedStatus(status));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve exactly one canned JSON response on an ephemeral port and
    /// hand back the raw request for assertions.
    async fn serve_once(body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(buf.get(..n).unwrap()).into_owned();
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            request
        });
        (format!("http://{addr}"), handle)
    }

    fn client_for(base_url: String) -> RestDatastore {
        let config = DatastoreConfig {
            base_url,
            api_key: "test-key".to_owned().into(),
        };
        RestDatastore::new(&config).unwrap()
    }

    #[derive(Debug, serde::Deserialize)]
    struct Row {
        value: u32,
    }

    #[tokio::test]
    async fn test_select_one_returns_the_single_row() {
        let (base_url, handle) = serve_once(r#"[{"value": 7}]"#).await;
        let client = client_for(base_url);

        let row: Option<Row> = client
            .select_one("books", SelectQuery::new().eq("id", "abc"))
            .await
            .unwrap();
        assert_eq!(row.unwrap().value, 7);

        let request = handle.await.unwrap();
        // The read is capped at one row and carries the auth headers.
        assert!(request.contains("limit=1"));
        assert!(request.contains("id=eq.abc"));
        assert!(request.contains("apikey: test-key"));
        assert!(request.contains("authorization: Bearer test-key"));
    }

    #[tokio::test]
    async fn test_select_one_empty_result_is_none() {
        let (base_url, _handle) = serve_once("[]").await;
        let client = client_for(base_url);

        let row: Option<Row> = client
            .select_one("books", SelectQuery::new())
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[test]
    fn test_select_query_pairs() {
        let query = SelectQuery::new()
            .eq("user_id", "abc")
            .order_desc("created_at")
            .limit(20);

        assert_eq!(
            query.query_pairs(),
            vec![
                ("user_id".to_owned(), "eq.abc".to_owned()),
                ("order".to_owned(), "created_at.desc".to_owned()),
                ("limit".to_owned(), "20".to_owned()),
            ]
        );
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(SelectQuery::new().query_pairs().is_empty());
    }
}
