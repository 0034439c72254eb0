use clap::Parser;
use machine_dns_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "machine-dns")]
#[command(version)]
#[command(about = "Machine DNS - resolves <machine>.<tld> names to virtual machine addresses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Top-level label served by this resolver
    #[arg(long)]
    tld: Option<String>,

    /// TTL of every answer, in seconds
    #[arg(long)]
    ttl: Option<u32>,

    /// DNS server port
    #[arg(long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Only run the server, never write the resolver configuration file
    #[arg(long)]
    server_only: bool,

    /// Run the lookup command as this user
    #[arg(long, env = "SUDO_USER")]
    user: Option<String>,

    /// Lookup command (invoked as `<command> ip <machine>`)
    #[arg(long)]
    command: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        tld: cli.tld,
        ttl: cli.ttl,
        port: cli.port,
        bind_address: cli.bind,
        server_only: cli.server_only,
        user: cli.user,
        command: cli.command,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Machine DNS Server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        tld = %config.dns.tld,
        ttl = config.dns.ttl,
        command = %config.resolution.command,
        user = config.resolution.effective_user().unwrap_or(""),
        "Configuration loaded"
    );

    let registration = machine_dns_infrastructure::system::select_registration(&config);
    registration.register()?;
    if registration.path().is_none() {
        info!("Resolver configuration file disabled");
    }

    let dns_services = match di::DnsServices::new(&config) {
        Ok(services) => services,
        Err(e) => {
            bootstrap::unregister(registration.as_ref());
            return Err(e);
        }
    };

    let dns_addr = config.listen_address();
    let socket = match server::bind_udp_socket(&dns_addr) {
        Ok(socket) => socket,
        Err(e) => {
            error!(bind_address = %dns_addr, error = %e, "Failed to bind DNS socket");
            bootstrap::unregister(registration.as_ref());
            return Err(e);
        }
    };

    let shutdown = CancellationToken::new();
    let worker = tokio::spawn(server::run_udp_worker(
        socket,
        dns_services.handler,
        shutdown.clone(),
    ));

    server::wait_for_shutdown_signal().await;
    info!("Shutdown signal received");

    shutdown.cancel();
    if let Err(e) = worker.await {
        warn!(error = %e, "DNS worker terminated abnormally");
    }

    bootstrap::unregister(registration.as_ref());

    info!("Server shutdown complete");
    Ok(())
}
