//! Error types for scene construction and image output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A transformation had no inverse, so rays could not be moved into object space.
    #[error("transformation matrix is not invertible")]
    NonInvertibleMatrix,

    /// Width or height of the target image was zero.
    #[error("canvas size must be non-zero, got {width}x{height}")]
    InvalidCanvasSize { width: usize, height: usize },

    /// Field of view outside of the open interval (0, pi).
    #[error("field of view must be in (0, pi) radians, got {0}")]
    InvalidFieldOfView(f64),

    /// `from`, `to` and `up` did not describe a viewing orientation.
    #[error("degenerate view transformation: {0}")]
    DegenerateViewTransformation(&'static str),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode png image: {0}")]
    Png(#[from] png::EncodingError),
}
