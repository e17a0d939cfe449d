use crate::augment::{Augmenter, Grayscale};
use crate::composite::composite;
use crate::config::BatchConfig;
use crate::masking::{HueMaskBuilder, MaskBuilder};
use crate::output::{InPlaceWriter, OutputSink};
use crate::source::{FolderSource, ImageSource};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Totals gathered over one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub images: usize,
    pub kept_pixels: u64,
    pub transformed_pixels: u64,
    pub load_time: Duration,
    pub mask_time: Duration,
    pub augment_time: Duration,
    pub write_time: Duration,
}

impl BatchSummary {
    fn average_ms(&self, total: Duration) -> f64 {
        if self.images == 0 {
            return 0.0;
        }
        total.as_secs_f64() * 1000.0 / self.images as f64
    }
}

/// Run the default batch described by `config`
///
/// Images are read from the input folder, red and pink pixels are kept,
/// everything else goes through `Grayscale`, and the result overwrites
/// the source file.
pub fn run(config: &BatchConfig) -> Result<BatchSummary> {
    if config.output_differs() {
        tracing::warn!(
            "Output folder {} is ignored; images are overwritten in {}",
            config.output_folder.display(),
            config.input_folder.display()
        );
    }
    tracing::debug!(
        "fixed_hue_value={} is not applied by the grayscale augmenter",
        config.fixed_hue_value
    );

    let mut source = FolderSource::open(&config.input_folder)
        .context("Failed to open input folder")?;
    let builder = HueMaskBuilder::default();
    tracing::debug!("Keeping hue ranges {:?}", builder.ranges());
    let augmenter = Grayscale::new(config.alpha);
    let mut sink = InPlaceWriter::new();

    run_batch(&mut source, &builder, &augmenter, &mut sink)
}

/// Mask, augment, composite and write every image `source` yields
///
/// Stops at the first failure.
pub fn run_batch<S, M, A, O>(
    source: &mut S,
    builder: &M,
    augmenter: &A,
    sink: &mut O,
) -> Result<BatchSummary>
where
    S: ImageSource + ?Sized,
    M: MaskBuilder + ?Sized,
    A: Augmenter + ?Sized,
    O: OutputSink + ?Sized,
{
    let mut summary = BatchSummary::default();

    tracing::info!(
        "Starting batch: {} image(s), mask={}, augment={}",
        source.remaining(),
        builder.name(),
        augmenter.name()
    );

    loop {
        // Load
        let load_start = Instant::now();
        let Some(next) = source.next_image() else {
            break;
        };
        let image = next?;
        summary.load_time += load_start.elapsed();

        let _span = tracing::debug_span!("image", path = %image.path.display()).entered();

        // Mask
        let mask_start = Instant::now();
        let mask = builder.build(&image.pixels);
        summary.mask_time += mask_start.elapsed();

        // Augment and composite
        let augment_start = Instant::now();
        let transformed = augmenter.augment(&image.pixels);
        let output = composite(&image.pixels, &transformed, &mask)
            .with_context(|| format!("Failed to composite {}", image.path.display()))?;
        summary.augment_time += augment_start.elapsed();

        // Write back
        let write_start = Instant::now();
        sink.write_image(&image.path, &output)?;
        summary.write_time += write_start.elapsed();

        let kept = mask.count_selected() as u64;
        summary.kept_pixels += kept;
        summary.transformed_pixels += mask.len() as u64 - kept;
        summary.images += 1;

        tracing::info!("Processed and saved: {}", image.path.display());
    }

    tracing::info!("All images have been processed and saved.");
    tracing::debug!(
        "{} image(s): load={:.1}ms, mask={:.1}ms, augment={:.1}ms, write={:.1}ms per image",
        summary.images,
        summary.average_ms(summary.load_time),
        summary.average_ms(summary.mask_time),
        summary.average_ms(summary.augment_time),
        summary.average_ms(summary.write_time)
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceImage;
    use image::{Rgb, RgbImage};
    use std::path::{Path, PathBuf};

    struct MemorySource(Vec<SourceImage>);

    impl ImageSource for MemorySource {
        fn next_image(&mut self) -> Option<Result<SourceImage>> {
            if self.0.is_empty() {
                None
            } else {
                Some(Ok(self.0.remove(0)))
            }
        }

        fn remaining(&self) -> usize {
            self.0.len()
        }
    }

    struct FailingSource;

    impl ImageSource for FailingSource {
        fn next_image(&mut self) -> Option<Result<SourceImage>> {
            Some(Err(anyhow::anyhow!("unreadable")))
        }

        fn remaining(&self) -> usize {
            1
        }
    }

    #[derive(Default)]
    struct MemorySink(Vec<(PathBuf, RgbImage)>);

    impl OutputSink for MemorySink {
        fn write_image(&mut self, path: &Path, image: &RgbImage) -> Result<()> {
            self.0.push((path.to_path_buf(), image.clone()));
            Ok(())
        }

        fn written(&self) -> usize {
            self.0.len()
        }
    }

    fn red_and_green() -> RgbImage {
        RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 255, 0])
            }
        })
    }

    #[test]
    fn keeps_red_and_desaturates_green() {
        let mut source = MemorySource(vec![SourceImage {
            path: PathBuf::from("mem.png"),
            pixels: red_and_green(),
        }]);
        let mut sink = MemorySink::default();

        let summary = run_batch(
            &mut source,
            &HueMaskBuilder::default(),
            &Grayscale::default(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(summary.images, 1);
        assert_eq!(summary.kept_pixels, 1);
        assert_eq!(summary.transformed_pixels, 1);

        let (path, out) = &sink.0[0];
        assert_eq!(path, Path::new("mem.png"));
        assert_eq!(*out.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(1, 0), Rgb([150, 150, 150]));
    }

    #[test]
    fn empty_source_writes_nothing() {
        let mut sink = MemorySink::default();
        let summary = run_batch(
            &mut MemorySource(Vec::new()),
            &HueMaskBuilder::default(),
            &Grayscale::default(),
            &mut sink,
        )
        .unwrap();

        assert_eq!(summary, BatchSummary::default());
        assert_eq!(sink.written(), 0);
    }

    #[test]
    fn load_failure_aborts_batch() {
        let mut sink = MemorySink::default();
        let result = run_batch(
            &mut FailingSource,
            &HueMaskBuilder::default(),
            &Grayscale::default(),
            &mut sink,
        );

        assert!(result.is_err());
        assert_eq!(sink.written(), 0);
    }

    #[test]
    fn works_through_trait_objects() {
        let mut source: Box<dyn ImageSource> = Box::new(MemorySource(vec![SourceImage {
            path: PathBuf::from("boxed.jpg"),
            pixels: red_and_green(),
        }]));
        let builder = crate::masking::create_default_builder();
        let augmenter: Box<dyn Augmenter> = Box::new(Grayscale::default());
        let mut sink = MemorySink::default();

        let summary = run_batch(source.as_mut(), builder.as_ref(), augmenter.as_ref(), &mut sink)
            .unwrap();
        assert_eq!(summary.images, 1);
    }
}
