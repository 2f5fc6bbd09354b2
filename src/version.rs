// version metadata baked into the binary at build time
// NOTE:
// - BUILD_VERSION identifies this build, MIN_SERVER_VERSION is the lowest
//   server version this build is declared compatible with.
// - The two are independent, bump them separately.
pub const BUILD_VERSION: &str = "0.21.0";
pub const MIN_SERVER_VERSION: &str = "0.40.0";

pub fn get_build_version() -> &'static str {
    BUILD_VERSION
}

pub fn get_min_server_version() -> &'static str {
    MIN_SERVER_VERSION
}
