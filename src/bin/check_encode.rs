use colored::*;
use formpost::http::build_query_url;
use formpost::payload::{parse_pairs, to_json_object};
use std::env;

// Dry-run encoder: prints the wire form of a payload without sending anything.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} key=value [key=value ...]", args[0]);
        std::process::exit(1);
    }

    let pairs = match parse_pairs(&args[1..]) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };

    println!("{}", format!("Payload: {} pair(s)", pairs.len()).cyan());
    println!("{}", "-".repeat(80).dimmed());

    println!("{}", "Form body (application/x-www-form-urlencoded):".bold());
    let request = reqwest::Client::new()
        .post("http://localhost/")
        .form(&pairs)
        .build()?;
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .unwrap_or_default();
    println!("{}", String::from_utf8_lossy(body));
    println!("{}", "-".repeat(80).dimmed());

    println!("{}", "JSON body (application/json):".bold());
    println!("{}", serde_json::to_string_pretty(&to_json_object(&pairs))?);
    println!("{}", "-".repeat(80).dimmed());

    println!("{}", "Query URL (against http://localhost/):".bold());
    println!("{}", build_query_url("http://localhost/", &pairs)?);

    Ok(())
}
