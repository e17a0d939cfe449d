//! Keep reds and pinks, desaturate everything else.
//!
//! Each image in a folder is masked by hue, passed through a grayscale
//! augmentation, recombined with its original red/pink pixels, and written
//! back over the source file.

pub mod augment;
pub mod composite;
pub mod config;
pub mod error;
pub mod masking;
pub mod output;
pub mod pipeline;
pub mod source;

pub use config::BatchConfig;
pub use error::{Error, Result};
pub use pipeline::{run, run_batch, BatchSummary};
