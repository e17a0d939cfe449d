use std::path::PathBuf;

/// Default for the hue offset parameter
pub const DEFAULT_FIXED_HUE_VALUE: i32 = 100;

/// Settings for one batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Folder whose `.jpg`/`.png` files are processed
    pub input_folder: PathBuf,

    /// Nominal destination folder. Results are still written over the
    /// input files; this value is only reported.
    pub output_folder: PathBuf,

    /// Hue offset accepted for compatibility. Not applied by any augmenter.
    pub fixed_hue_value: i32,

    /// Grayscale blend strength in [0, 1]
    pub alpha: f32,
}

impl BatchConfig {
    pub fn new(input_folder: impl Into<PathBuf>, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            input_folder: input_folder.into(),
            output_folder: output_folder.into(),
            fixed_hue_value: DEFAULT_FIXED_HUE_VALUE,
            alpha: 1.0,
        }
    }

    /// True when the output folder names somewhere other than the input folder
    pub fn output_differs(&self) -> bool {
        self.input_folder != self.output_folder
    }
}
