use crate::error::Result;
use crate::http::headers::payload_headers;
use crate::http::query::build_query_url;
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Build the client every send operation goes through.
pub fn build_client(
    timeout_secs: u64,
    user_agent: &str,
    default_headers: HeaderMap,
) -> Result<Client> {
    let client = Client::builder()
        .default_headers(default_headers)
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;

    Ok(client)
}

/// POST the pairs as an application/x-www-form-urlencoded body.
pub async fn post_form(
    client: &Client,
    endpoint: &str,
    pairs: &[(String, String)],
) -> Result<Response> {
    let response = client.post(endpoint).form(pairs).send().await?;
    Ok(response)
}

/// POST a JSON document as the request body.
pub async fn post_json(client: &Client, endpoint: &str, body: &Value) -> Result<Response> {
    let response = client.post(endpoint).json(body).send().await?;
    Ok(response)
}

/// GET with the pairs appended to the endpoint's query string.
pub async fn get_with_query(
    client: &Client,
    endpoint: &str,
    pairs: &[(String, String)],
) -> Result<Response> {
    let url = build_query_url(endpoint, pairs)?;
    let response = client.get(url).send().await?;
    Ok(response)
}

/// POST with the payload carried in the request headers and an empty form
/// body.
pub async fn post_with_header_payload(
    client: &Client,
    endpoint: &str,
    pairs: &[(String, String)],
) -> Result<Response> {
    let headers = payload_headers(pairs)?;
    let empty: [(String, String); 0] = [];

    let response = client
        .post(endpoint)
        .headers(headers)
        .form(&empty)
        .send()
        .await?;

    Ok(response)
}
