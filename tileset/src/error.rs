use thiserror::Error;

// Failure modes of a generation run. Configuration problems are caught at
// construction time; filesystem and encoding problems surface from the save
// paths. There is no retry and no partial recovery: a run completes or aborts.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
