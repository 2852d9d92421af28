//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Anything chattier would
/// interleave with the animated line.
const DEFAULT_FILTER: &str = "warn";

/// Install a compact fmt subscriber on stderr. Stdout belongs to the surface.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    // RUST_LOG=typewriter=trace shows every step.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
