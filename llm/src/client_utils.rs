use crate::ChatError;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// Create a JSON request, parse the response.
/// Returns an error on any non-success status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<R, ChatError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(ChatError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}
