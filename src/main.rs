use std::net::SocketAddr;
use std::process;
use std::sync::{Arc, Mutex};

use axum::http::header::CONTENT_TYPE;
use axum::routing::get;
use axum::Router;
use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use prix::api;
use prix::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use prix::handlers;
use prix::models::{AppState, Bounds, OfferPage};
use prix::utils::format_price;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    AppState {
        api_base_url: config::get_api_base_url(),
        client: api::build_client(),
        last_results: Arc::new(Mutex::new(None)),
        custom_css: None,
    }
}

fn build_app(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::offers::offers_page))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!(
                    "{} {}: {}",
                    Paint::red("Failed to read custom stylesheet at"),
                    path,
                    e
                );
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_app(state);
    tracing::info!(%addr, "Starting Prix server");
    println!(
        "{} {}",
        Paint::new("Price explorer running on").green(),
        Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn print_offer_table(page: &OfferPage) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(vec!["CPU", "RAM", "Offers"]);

    let mut offer_count = 0usize;
    for group in &page.data {
        offer_count += group.offers.len();
        let details = group
            .offers
            .iter()
            .map(|o| {
                format!(
                    "{} {} per {} ({})",
                    o.instance_type,
                    format_price(o.price_per_unit),
                    o.unit,
                    o.location
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![group.vcpu.clone(), group.memory.clone(), details]);
    }
    println!("\n{table}");

    let mut summary = format!("{} plans, {} offers", page.data.len(), offer_count);
    if let Some(total) = page.total_records {
        summary.push_str(&format!(" ({} records upstream)", total));
    }
    println!("{}\n", Paint::new(summary).dim());
}

#[derive(Parser)]
#[command(
    name = "prix",
    author,
    version,
    about = "Prix command-line tool",
    long_about = r#"Prix — browse and filter cloud compute instance pricing.

This tool surfaces a small set of commands to run the web price
explorer, validate configuration and query the pricing API straight
from the terminal. Use the `--env-file` option or environment variables
to point at the API.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Build a release binary:
      cargo build --release
  3) Query prices:
      prix offers filter --min-cpu 2 --max-ram 16
"#,
    after_help = "Use `prix <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web price explorer
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / API reachability)
    #[command(
        about = "Validate configuration and ensure API connectivity.",
        long_about = "Validate environment variables required for Prix, and check the configured pricing API by issuing one unfiltered request against its filter endpoint."
    )]
    CheckConfig { env_file: Option<String> },
    /// Query offers via the configured pricing API
    #[command(
        about = "Query instance offers from the pricing API.",
        long_about = "These commands perform the same fetch the web view performs and print the result as a table. Use `--help` on a subcommand for the available bounds."
    )]
    Offers {
        #[command(subcommand)]
        sub: OfferCommands,
    },
}

#[derive(Subcommand)]
enum OfferCommands {
    /// List offer groups matching the given CPU/RAM bounds
    #[command(
        about = "List offer groups",
        long_about = "Fetch offer groups matching the given bounds. An omitted bound is unbounded; it is left out of the upstream query entirely rather than sent as zero."
    )]
    Filter {
        /// Lowest vCPU count to include
        #[arg(long)]
        min_cpu: Option<u32>,
        /// Highest vCPU count to include
        #[arg(long)]
        max_cpu: Option<u32>,
        /// Lowest RAM in GiB to include
        #[arg(long)]
        min_ram: Option<u32>,
        /// Highest RAM in GiB to include
        #[arg(long)]
        max_ram: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // Dispatch CLI commands. If no command provided, serve the web view by default
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if std::env::var("API_BASE_URL").is_err() {
                println!(
                    "{}",
                    Paint::new(format!(
                        "API_BASE_URL is not set, falling back to {}",
                        state.api_base_url
                    ))
                    .yellow()
                );
            }
            match api::load_offer_groups(&state.client, &state.api_base_url, &Bounds::default())
                .await
            {
                Ok(page) => {
                    println!(
                        "{}",
                        Paint::new(format!(
                            "Configuration looks valid ({} offer groups returned)",
                            page.data.len()
                        ))
                        .green()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", Paint::new("Configuration appears invalid").red(), e);
                    process::exit(1);
                }
            }
        }
        Commands::Offers { sub } => match sub {
            OfferCommands::Filter {
                min_cpu,
                max_cpu,
                min_ram,
                max_ram,
            } => {
                let state = build_state_from_env(None);
                let bounds = Bounds {
                    min_cpu,
                    max_cpu,
                    min_ram,
                    max_ram,
                };
                match api::load_offer_groups(&state.client, &state.api_base_url, &bounds).await {
                    Ok(page) => print_offer_table(&page),
                    Err(e) => {
                        eprintln!("{}: {}", Paint::new("Failed to fetch offers").red(), e);
                        process::exit(1);
                    }
                }
            }
        },
    }
}
