use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobGenError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Not a usable filename \"{0}\"")]
    InvalidJobName(String),
    #[error("Will not overwrite. Bye!")]
    OverwriteDeclined,
}
