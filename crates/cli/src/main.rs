use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dnsq_proto::{RData, RecordType, ResourceRecord};
use dnsq_resolver::{Resolution, ResolverConfig, StubResolver};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dnsq")]
#[command(version)]
#[command(about = "Minimal DNS stub resolver - queries a single nameserver over UDP")]
struct Cli {
    /// Nameserver IP address to query
    server: IpAddr,

    /// Domain name to resolve
    domain: String,

    /// Record type to query for
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Receive timeout per attempt, in milliseconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Attempts before giving up
    #[arg(long)]
    attempts: Option<u32>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_section(title: &str, records: &[ResourceRecord]) {
    println!("\n{}:", title);
    for record in records {
        let data = match &record.data {
            RData::A(addr) => addr.to_string(),
            RData::Name(name) => name.clone(),
        };
        println!(
            "\t{}  {}  {}  (ttl {})",
            record.name, record.rtype, data, record.ttl
        );
    }
}

fn print_resolution(server: IpAddr, resolution: &Resolution) {
    println!("----------------------------------------");
    println!("DNS server queried: {}", server);
    println!(
        "Reply received: {} answers, {} authority, {} additional",
        resolution.answers.len(),
        resolution.authorities.len(),
        resolution.additionals.len()
    );

    print_section("Answer section", &resolution.answers);
    print_section("Authority section", &resolution.authorities);
    print_section("Additional section", &resolution.additionals);

    let addresses = resolution.ipv4_addresses();
    if !addresses.is_empty() {
        println!();
        for addr in addresses {
            println!("{}", addr);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    if let Some(timeout) = cli.timeout {
        config.query_timeout = timeout;
    }
    if let Some(attempts) = cli.attempts {
        config.max_attempts = attempts;
    }

    let record_type: RecordType = cli
        .record_type
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    info!(
        server = %cli.server,
        domain = %cli.domain,
        %record_type,
        "resolving"
    );

    let resolver = StubResolver::new(cli.server, &config);
    let resolution = resolver
        .resolve(&cli.domain, record_type)
        .with_context(|| format!("resolving {} against {}", cli.domain, cli.server))?;

    print_resolution(cli.server, &resolution);

    Ok(())
}
