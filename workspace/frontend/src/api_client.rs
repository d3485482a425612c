pub mod models;
pub mod prediction;
pub mod reports;
pub mod stations;

use ::common::ClientError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Common GET request handler.
///
/// One attempt, no retry. Transport failures, non-success statuses and
/// undecodable bodies come back as the matching [`ClientError`]; callers
/// pick their own fallback.
pub async fn get_json<'a, I>(url: &str, params: I) -> Result<Value, ClientError>
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| {
            let error = ClientError::Transport(e.to_string());
            log::error!("GET {} - {}", url, error);
            error
        })?;

    if !response.ok() {
        let error = ClientError::Status(response.status());
        log::error!("GET {} - {}", url, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let body: Value = response.json().await.map_err(|e| {
        let error = ClientError::payload(e.to_string());
        log::error!("GET {} - {}", url, error);
        error
    })?;

    log::info!("GET {} - Success", url);
    Ok(body)
}

/// GET that decodes straight into `T`
pub async fn get<T>(url: &str) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let body = get_json(url, std::iter::empty()).await?;
    serde_json::from_value(body).map_err(|e| {
        let error = ClientError::from(e);
        log::error!("GET {} - {}", url, error);
        error
    })
}
