// Logging bootstrap. Diagnostics go to stderr through `env_logger` and
// default to `warn` so the interactive menu stays readable; set `RUST_LOG`
// (e.g. `RUST_LOG=debug`) to see load/save events.

use env_logger::Env;

const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .try_init();
}
