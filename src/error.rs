use thiserror::Error;

/// Errors produced by the masking and compositing stages
#[derive(Debug, Error)]
pub enum Error {
    #[error("dimension mismatch: {what} is {actual:?}, expected {expected:?}")]
    DimensionMismatch {
        what: &'static str,
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("buffer of length {len} does not fit {width}x{height}")]
    BufferSize { len: usize, width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
