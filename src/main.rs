use clap::Parser;
use colored::*;
use std::process;

use formpost::cli::Args;
use formpost::config::{Config, FileConfig};
use formpost::http::{
    build_client, config_headers, get_with_query, parse_header_arg, post_form, post_json,
    post_with_header_payload,
};
use formpost::payload::{parse_pairs, to_json_object, Channel};
use formpost::ui::output::{print_request_verbose, print_response};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Handle --config-init option
    if args.config_init {
        match FileConfig::write_example() {
            Ok(path) => {
                println!(
                    "{}",
                    format!("Wrote example config to {}", path.display()).green()
                );
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", format!("Error writing config: {}", e).red());
                process::exit(1);
            }
        }
    }

    let endpoint = match args.endpoint {
        Some(ref endpoint) => endpoint.clone(),
        None => {
            print_usage();
            process::exit(1);
        }
    };

    // Load configuration
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let channel = match args.via.as_deref() {
        Some(raw) => match Channel::parse(raw) {
            Ok(channel) => channel,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        },
        None => Channel::Body,
    };

    let pairs = match parse_pairs(&args.data) {
        Ok(pairs) => pairs,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    // Default headers: config file first, then -H overrides on top
    let mut default_headers = match config_headers(&config.default_headers) {
        Ok(headers) => headers,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    for raw in &args.headers {
        match parse_header_arg(raw) {
            Ok((name, value)) => {
                default_headers.append(name, value);
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                process::exit(1);
            }
        }
    }

    let client = build_client(config.timeout, &config.user_agent, default_headers)?;

    let (method, kind) = match channel {
        Channel::Query => ("GET", "query string"),
        Channel::Header => ("POST", "payload headers"),
        Channel::Body => {
            if args.json {
                ("POST", "json body")
            } else {
                ("POST", "form body")
            }
        }
    };

    if config.verbose {
        print_request_verbose(method, &endpoint, kind, pairs.len(), config.timeout);
    }

    let response = match channel {
        Channel::Body => {
            if args.json {
                post_json(&client, &endpoint, &to_json_object(&pairs)).await?
            } else {
                post_form(&client, &endpoint, &pairs).await?
            }
        }
        Channel::Header => post_with_header_payload(&client, &endpoint, &pairs).await?,
        Channel::Query => get_with_query(&client, &endpoint, &pairs).await?,
    };

    print_response(response, config.pretty, args.headers_only, config.verbose).await?;

    Ok(())
}

fn print_usage() {
    eprintln!("{}", "Usage: fpost [OPTIONS] <ENDPOINT> [DATA]...".bold());
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  fpost https://example.com/login username=john password=doe");
    eprintln!("  fpost --json https://example.com/login username=john password=doe");
    eprintln!("  fpost --via query https://example.com/search q=rust");
    eprintln!("  fpost --via header https://example.com/login username=john password=doe");
    eprintln!();
    eprintln!("See 'fpost --help' for the full option list.");
}
