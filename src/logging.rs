use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging on stderr.
///
/// `WAYFINDER_LOG` overrides everything; otherwise `verbose` bumps the
/// default level from warn to debug. The interactive menu itself writes to
/// stdout and is unaffected.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose {
        "wayfinder=debug"
    } else {
        "wayfinder=warn"
    };
    let filter =
        EnvFilter::try_from_env("WAYFINDER_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}
