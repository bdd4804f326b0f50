use crate::error::LoggingError;

/// Installs `env_logger` as the process-wide backend for the summation diagnostic.
///
/// `RUST_LOG` wins over `level` when set; `level` defaults to `info`.
/// Only the first call in a process can succeed.
pub fn init_logging(level: Option<&str>) -> Result<(), LoggingError> {
    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    env_logger::Builder::from_env(env).try_init()?;
    Ok(())
}
