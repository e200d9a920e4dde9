use crate::error::Result;
use colored::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use std::io::{self, Write};

/// Print the response: status line, headers when asked for, then the body.
///
/// With `headers_only` the body is never read, so this returns as soon as
/// the response headers arrive.
pub async fn print_response(
    response: Response,
    pretty: bool,
    headers_only: bool,
    verbose: bool,
) -> Result<()> {
    let status = response.status();
    let status_line = match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_string(),
    };

    if status.is_success() {
        println!("{}", status_line.green());
    } else {
        println!("{}", status_line.red());
    }

    if headers_only || verbose {
        for (name, value) in response.headers() {
            let value = value.to_str().unwrap_or("<non-ascii value>");
            println!("{}", format!("{}: {}", name, value).dimmed());
        }
    }

    if headers_only {
        io::stdout().flush()?;
        return Ok(());
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);

    let body = response.text().await?;
    if body.is_empty() {
        return Ok(());
    }

    if verbose {
        println!();
    }

    if pretty && is_json {
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            Err(_) => println!("{}", body),
        }
    } else {
        println!("{}", body);
    }

    io::stdout().flush()?;
    Ok(())
}

/// Dimmed request summary on stderr, printed before sending.
pub fn print_request_verbose(
    method: &str,
    endpoint: &str,
    kind: &str,
    pair_count: usize,
    timeout: u64,
) {
    eprintln!("{}", format!("[FPOST] {} {}", method, endpoint).dimmed());
    eprintln!(
        "{}",
        format!("[FPOST] Payload: {} pair(s) as {}", pair_count, kind).dimmed()
    );
    eprintln!("{}", format!("[FPOST] Timeout: {}s", timeout).dimmed());
}
