//! Process environment that influences the generated scripts.
//!
//! The environment is captured exactly once, in `main`, and then passed around
//! as a plain value so that parameter resolution does not depend on global state.

const USER_ENV: &str = "USER";
const HOSTNAME_ENV: &str = "HOSTNAME";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub user: Option<String>,
    pub hostname: Option<String>,
}

impl Environment {
    pub fn new(user: Option<String>, hostname: Option<String>) -> Self {
        Self { user, hostname }
    }

    /// Reads the environment of the current process.
    pub fn capture() -> Self {
        Self::new(read_non_empty(USER_ENV), read_non_empty(HOSTNAME_ENV))
    }
}

fn read_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
