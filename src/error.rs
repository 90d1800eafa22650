use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// The two failure modes a caller must be able to tell apart: the URL is not
/// a judge we know, or the page did not hold a statement we could read.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("no problem statement found ({0} missing)")]
    MissingAnchor(&'static str),
}
