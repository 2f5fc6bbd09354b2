pub mod build_info;
pub mod environment;
pub mod logging;
pub mod version;
