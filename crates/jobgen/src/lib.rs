pub mod client;
pub mod common;

pub type Error = crate::common::error::JobGenError;
pub type Result<T> = std::result::Result<T, Error>;

pub const JOBGEN_VERSION: &str = {
    match option_env!("JOBGEN_BUILD_VERSION") {
        Some(version) => version,
        None => const_format::concatcp!(env!("CARGO_PKG_VERSION"), "-dev"),
    }
};
