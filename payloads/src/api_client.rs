use crate::{Summary, Transaction, TransactionId, UserId};
use reqwest::{StatusCode, Url};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the transactions backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    /// Join path segments onto the configured address, percent-encoding
    /// each segment.
    fn format_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.address)
            .map_err(|e| ClientError::Address(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Address(format!(
                    "{} cannot be used as a base url",
                    self.address
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn empty_get(&self, url: Url) -> ReqwestResult {
        let request = self.inner_client.get(url);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_delete(&self, url: Url) -> ReqwestResult {
        let request = self.inner_client.delete(url);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let url = self.format_url(&["health_check"])?;
        let response = self.empty_get(url).await?;
        ok_empty(response).await
    }

    /// All transactions belonging to a user, in server order.
    pub async fn get_transactions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Transaction>, ClientError> {
        let url = self.format_url(&["transactions", &user_id.0])?;
        let response = self.empty_get(url).await?;
        ok_body(response).await
    }

    /// Balance, income and expenses for a user.
    pub async fn get_summary(
        &self,
        user_id: &UserId,
    ) -> Result<Summary, ClientError> {
        let url =
            self.format_url(&["transactions", "summary", &user_id.0])?;
        let response = self.empty_get(url).await?;
        ok_body(response).await
    }

    /// Delete a single transaction. Any response body is ignored.
    pub async fn delete_transaction(
        &self,
        id: &TransactionId,
    ) -> Result<(), ClientError> {
        let url = self.format_url(&["transactions", &id.to_string()])?;
        let response = self.empty_delete(url).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The server answered 2xx but the body was not what we expected.
    #[error("Unexpected response body")]
    Decode(#[source] reqwest::Error),
    #[error("Invalid API address: {0}")]
    Address(String),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    response.json::<T>().await.map_err(ClientError::Decode)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
