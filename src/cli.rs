use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fpost")]
#[command(
    about = "Send HTTP requests with the payload as a form body, JSON body, headers, or query string",
    long_about = None
)]
pub struct Args {
    #[arg(help = "Target endpoint URL")]
    pub endpoint: Option<String>,

    #[arg(help = "Payload as key=value pairs")]
    pub data: Vec<String>,

    #[arg(
        short = 'j',
        long = "json",
        help = "Send the payload as a JSON body instead of x-www-form-urlencoded"
    )]
    pub json: bool,

    #[arg(
        long = "via",
        help = "Payload channel (body, header, query); query sends a GET"
    )]
    pub via: Option<String>,

    #[arg(
        short = 'H',
        long = "header",
        help = "Extra request header (format: 'Name: value')"
    )]
    pub headers: Vec<String>,

    #[arg(
        long = "headers-only",
        help = "Print response status and headers without reading the body"
    )]
    pub headers_only: bool,

    #[arg(long = "timeout", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long = "user-agent", help = "Override the User-Agent header")]
    pub user_agent: Option<String>,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Print request details to stderr"
    )]
    pub verbose: bool,

    #[arg(long = "pretty", help = "Pretty-print JSON response bodies")]
    pub pretty: bool,

    #[arg(long = "config-init", help = "Write an example config file and exit")]
    pub config_init: bool,
}
