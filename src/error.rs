use std::path::PathBuf;

/// Failures outside the interpretation core: files, configuration, test positions.
///
/// The core itself never fails; its recoverable outcomes live in
/// [`crate::session::TurnError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid FEN {fen:?}: {reason}")]
    Fen { fen: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
