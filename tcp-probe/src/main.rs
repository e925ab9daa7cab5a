//! `tcp-probe` connects to `127.0.0.1:8888` and writes `TESTING <pid>` three times, 100ms apart.

#![forbid(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tcp_probe::{FailurePolicy, ProbeConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Probe a local TCP listener with a few identifying writes.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Log failed writes and keep going instead of exiting at the first one.
    #[arg(long)]
    best_effort: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .with_env_var("TCP_PROBE_LOG")
                    .from_env()?,
            )
            .with_writer(std::io::stderr)
            .compact()
            .finish(),
    )?;

    let failure_policy = if args.best_effort {
        FailurePolicy::BestEffort
    } else {
        FailurePolicy::FailFast
    };
    let config = ProbeConfig::default().with_failure_policy(failure_policy);
    let target = config.target.clone();

    tcp_probe::run(config).with_context(|| format!("probing {target}"))?;

    Ok(())
}
