use log::LevelFilter;

/// Environment variable read for log filters, e.g. `REDEEM_SOLVERS_LOG=trace`.
pub const LOG_ENV: &str = "REDEEM_SOLVERS_LOG";

/// Install an `env_logger` backend for the `log` facade.
///
/// `default_filter` applies when `REDEEM_SOLVERS_LOG` is unset. Returns
/// `false` if a logger was already installed, which makes the call safe to
/// repeat from tests and binaries alike.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .try_init()
        .is_ok()
}
