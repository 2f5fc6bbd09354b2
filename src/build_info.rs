use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::environment::Environment;
use crate::version::{BUILD_VERSION, MIN_SERVER_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub build_version: &'static str,
    pub min_server_version: &'static str,
    pub environment: Environment,
}

static BUILD_INFO: OnceCell<BuildInfo> = OnceCell::new();

// resolve once at process startup, before anything that reads the environment
pub fn init_build_info() -> &'static BuildInfo {
    BUILD_INFO.get_or_init(|| {
        let environment = Environment::resolve(BUILD_VERSION);
        log::info!("Build {} resolved to {} environment.", BUILD_VERSION, environment);
        BuildInfo {
            build_version: BUILD_VERSION,
            min_server_version: MIN_SERVER_VERSION,
            environment,
        }
    })
}

// readers that cannot assume init_build_info has run go through the same cell
pub fn build_info() -> &'static BuildInfo {
    init_build_info()
}

pub fn get_environment() -> Environment {
    build_info().environment
}
