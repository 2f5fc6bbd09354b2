use env_logger::{Builder, Env, Target};

use crate::environment::Environment;
use crate::version::BUILD_VERSION;

// dev builds default to debug logs, releases stay at info
pub fn default_log_filter(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => "debug",
        Environment::Production => "info",
    }
}

// RUST_LOG still takes precedence over the resolved default
// call this before init_build_info so the resolution line is not dropped
pub fn init_logging() {
    // resolve directly instead of through the build info cell: the cell logs
    // on first resolution, which would happen here before the logger exists
    let filter = default_log_filter(Environment::resolve(BUILD_VERSION));
    Builder::from_env(Env::default().default_filter_or(filter))
        .target(Target::Stdout)
        .format_timestamp_millis()
        .init();
}
