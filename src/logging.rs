use env_logger::{Builder, Env, Target};

/// Variable holding the log filter, e.g. `debug` or `moonscribe=info`.
pub const LOG_ENV: &str = "MOONSCRIBE_LOG";

/// Send diagnostics to stderr so stdout only carries what the operator reads.
pub fn init_logger() {
    Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .target(Target::Stderr)
        .format_timestamp_millis()
        .init();
}
