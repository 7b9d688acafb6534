use monidash::{api, config};

use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets, modifiers, ContentArrangement};
use futures_util::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{Width, terminal_size};
use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use monidash::api::ApiClient;
use monidash::config::{DashboardConfig, DEFAULT_SCAN_TARGET};
use monidash::dashboard::Dashboard;
use monidash::models::{AppState, DiagnosticOutput, FieldValue, InstanceInfo, ProgressLevel, ServiceStatus, StatusKind, Tab};
use monidash::page::Page;
use monidash::views::overview_cards;

fn build_dashboard(env_file: Option<&str>, page: Page) -> Arc<Dashboard> {
    config::load_env_file(env_file);
    let cfg = DashboardConfig::from_env();
    let api = match ApiClient::new(&cfg.api_base_url) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    };
    Dashboard::new(api, page, cfg)
}

async fn shutdown_signal(dashboard: Arc<Dashboard>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown requested");
    dashboard.teardown();
}

async fn start_server(dashboard: Arc<Dashboard>, host: &str, port: u16, stylesheet: Option<String>) {
    let mut custom_css = None;
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    // The first load runs in the background so the page is reachable even
    // while the backend is slow to answer.
    let init = Arc::clone(&dashboard);
    tokio::spawn(async move { init.initialize().await });

    let app = monidash::routes::build_router(AppState { dashboard: Arc::clone(&dashboard), custom_css });
    tracing::info!(%addr, api = dashboard.api().base_url(), "Starting monidash server");
    println!("{} {}", yansi::Paint::new("Dashboard running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            let served = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal(Arc::clone(&dashboard)))
                .await;
            if let Err(e) = served {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
            dashboard.teardown();
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn paint_status(status: &ServiceStatus) -> String {
    let label = status.status.label();
    match status.status {
        StatusKind::Up => yansi::Paint::new(label).green().bold().to_string(),
        StatusKind::Down => yansi::Paint::new(label).red().bold().to_string(),
        StatusKind::Error => yansi::Paint::new(label).yellow().bold().to_string(),
        StatusKind::Checking => yansi::Paint::new(label).dim().to_string(),
    }
}

fn print_instance_info(info: &InstanceInfo) {
    let mut overview = new_table();
    overview.set_header(vec!["Metric", "Value"]);
    for card in overview_cards(info) {
        let value = match card.level() {
            Some(ProgressLevel::Error) => yansi::Paint::new(card.value).red().bold().to_string(),
            Some(ProgressLevel::Warning) => yansi::Paint::new(card.value).yellow().to_string(),
            _ => card.value,
        };
        overview.add_row(vec![card.label.to_string(), value]);
    }
    println!("\n{overview}");

    for tab in Tab::ALL {
        let rows: Vec<(String, String)> = tab
            .fields()
            .iter()
            .filter_map(|field| {
                let value = info.displayable(field)?;
                let text = match value {
                    FieldValue::Text(t) => t.clone(),
                    FieldValue::List(items) => items.join("\n"),
                };
                Some((field.replace('_', " "), text))
            })
            .collect();
        if rows.is_empty() {
            continue;
        }
        let mut table = new_table();
        table.set_header(vec![tab.title(), ""]);
        for (name, value) in rows {
            table.add_row(vec![name, value]);
        }
        println!("{table}");
    }
}

fn print_diagnostic(result: Result<DiagnosticOutput, api::ApiError>, fallback: &str, failure: &str) {
    match result {
        Ok(out) => println!("{}", out.display_text(fallback)),
        Err(e) => {
            eprintln!("{}: {}", yansi::Paint::new(failure).red(), e);
            process::exit(1);
        }
    }
}

/// Cancellation flag flipped by ctrl-c, for the long diagnostic calls.
fn ctrl_c_cancel() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tx.send_replace(true);
        }
    });
    rx
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[derive(Parser)]
#[command(
    name = "monidash",
    author,
    version,
    about = "Monitoring dashboard for a host telemetry backend",
    long_about = r#"monidash polls a monitoring backend for host telemetry and service reachability and serves a live dashboard.

The backend is configured with MONITOR_API_URL (or a .env file passed with --env-file).

Examples:
  1) Run the dashboard:
      monidash serve --host 0.0.0.0 --port 8080
  2) Print a one-off status report:
      monidash status
  3) Check a single endpoint:
      monidash check db.internal 5432
"#,
    after_help = "Use `monidash <subcommand> --help` to get subcommand specific options and usage examples."
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
    /// Start the web dashboard
    Serve {
        /// Host to bind to (defaults to MONIDASH_HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to MONIDASH_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Print instance telemetry and service statuses once
    #[command(about = "Print instance info and service statuses", long_about = "Fetch instance info and the configured service list from the backend, check every service concurrently and print the results as tables.")]
    Status {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Check reachability of a host:port through the backend
    Check {
        host: String,
        port: u16,
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Print the backend's system information dump
    SystemInfo {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Run a network scan through the backend
    #[command(about = "Scan a target through the backend", long_about = "Ask the backend to port-scan a target. This can take a while; the call is bounded by DIAGNOSTIC_TIMEOUT_SECS and can be interrupted with ctrl-c.")]
    Scan {
        #[arg(long, default_value = DEFAULT_SCAN_TARGET)]
        target: String,
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration and backend connectivity
    #[command(about = "Validate configuration and ensure backend connectivity.", long_about = "Print the effective configuration and try to fetch the service list from the backend.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // Serve the dashboard when no command is given
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        env_file: None,
        stylesheet: None,
    });

    match command {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let dashboard = build_dashboard(env_file.as_deref(), Page::full());
            let host = host.unwrap_or_else(config::get_server_host);
            let port = port.unwrap_or_else(config::get_server_port);
            start_server(dashboard, &host, port, stylesheet).await;
        }
        Commands::Status { env_file } => {
            let dashboard = build_dashboard(env_file.as_deref(), Page::default());
            match api::load_instance_info(dashboard.api()).await {
                Ok(info) => print_instance_info(&info),
                Err(e) => eprintln!("{}: {}", yansi::Paint::new("Failed to load instance info").red(), e),
            }

            let services = match api::load_services(dashboard.api()).await {
                Ok(services) => services,
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Failed to load services").red(), e);
                    process::exit(1);
                }
            };
            if services.is_empty() {
                println!("{}", yansi::Paint::new("No services configured").dim());
                return;
            }
            let statuses = join_all(
                services.iter().map(|s| dashboard.check_service(&s.host, s.port, None)),
            )
            .await;

            let mut table = new_table();
            table.set_header(vec!["Service", "Endpoint", "Status", "Message"]);
            for (service, status) in services.iter().zip(&statuses) {
                table.add_row(vec![
                    service.name.clone(),
                    format!("{}:{}", service.host, service.port),
                    paint_status(status),
                    status.message.clone(),
                ]);
            }
            println!("{table}\n");
            if statuses.iter().any(|s| s.status != StatusKind::Up) {
                process::exit(2);
            }
        }
        Commands::Check { host, port, env_file } => {
            let dashboard = build_dashboard(env_file.as_deref(), Page::default());
            let status = dashboard.check_service(&host, port, None).await;
            println!("{} {}", paint_status(&status), status.message);
            if status.status != StatusKind::Up {
                process::exit(2);
            }
        }
        Commands::SystemInfo { env_file } => {
            let dashboard = build_dashboard(env_file.as_deref(), Page::default());
            let pb = spinner("Gathering system information...");
            let result = api::system_info(dashboard.api(), dashboard.config().diagnostic_timeout, ctrl_c_cancel()).await;
            pb.finish_and_clear();
            print_diagnostic(result, "No output", "Failed to get system info");
        }
        Commands::Scan { target, env_file } => {
            let dashboard = build_dashboard(env_file.as_deref(), Page::default());
            let pb = spinner("Scanning network... (this may take a moment)");
            let result = api::network_scan(dashboard.api(), &target, dashboard.config().diagnostic_timeout, ctrl_c_cancel()).await;
            pb.finish_and_clear();
            print_diagnostic(result, "No scan results", "Network scan failed");
        }
        Commands::CheckConfig { env_file } => {
            let dashboard = build_dashboard(env_file.as_deref(), Page::default());
            let cfg = dashboard.config();
            println!("MONITOR_API_URL         {}", dashboard.api().base_url());
            println!("REFRESH_INTERVAL_MS     {}", cfg.refresh_interval.as_millis());
            println!("DIAGNOSTIC_TIMEOUT_SECS {}", cfg.diagnostic_timeout.as_secs());
            match api::load_services(dashboard.api()).await {
                Ok(services) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!("Backend reachable ({} services configured)", services.len())).green()
                    );
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Backend check failed").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
