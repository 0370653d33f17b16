use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError};
use walkdir::WalkDir;

/// Source formats picked up from the input tree.
pub const SOURCE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];
pub const RESPONSIVE_WIDTHS: [u32; 5] = [480, 768, 1024, 1200, 1920];

pub const DEFAULT_QUALITY: u8 = 85;
pub const DEFAULT_AVIF_SPEED: u8 = 6;

const PLACEHOLDER_WIDTH: u32 = 20;
const PLACEHOLDER_BLUR_SIGMA: f32 = 2.0;
const PLACEHOLDER_QUALITY: u8 = 20;

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("could not encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not inside {root}")]
    OutsideInput { path: PathBuf, root: PathBuf },
    #[error("could not serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl OptimizeError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        OptimizeError::Io { path: path.into(), source }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Webp,
    Avif,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Webp => "webp",
            OutputFormat::Avif => "avif",
        }
    }
}

#[derive(Clone, Debug)]
pub struct OptimizeOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub quality: u8,
    /// 1 (slowest, smallest) to 10 (fastest).
    pub avif_speed: u8,
}

impl OptimizeOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            quality: DEFAULT_QUALITY,
            avif_speed: DEFAULT_AVIF_SPEED,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub found: usize,
    pub optimized: usize,
    pub failed: usize,
    pub files_written: usize,
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)))
        .unwrap_or(false)
}

/// Every regular file under `dir` with one of `extensions` (case-insensitive),
/// sorted. A missing directory yields nothing.
pub fn find_files(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_extension(entry.path(), extensions))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

pub fn find_images(dir: &Path) -> Vec<PathBuf> {
    find_files(dir, &SOURCE_EXTENSIONS)
}

/// Where outputs for `image` go: the output root mirrored by the image's
/// sub-directory inside the input root.
pub fn output_dir_for(options: &OptimizeOptions, image: &Path) -> Result<PathBuf, OptimizeError> {
    let relative = image.strip_prefix(&options.input_dir).map_err(|_| OptimizeError::OutsideInput {
        path: image.to_path_buf(),
        root: options.input_dir.clone(),
    })?;
    Ok(match relative.parent() {
        Some(parent) => options.output_dir.join(parent),
        None => options.output_dir.clone(),
    })
}

pub fn encode(image: &DynamicImage, format: OutputFormat, quality: u8, avif_speed: u8) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    let (width, height) = (image.width(), image.height());
    match format {
        OutputFormat::Jpeg => {
            let rgb = image.to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, quality).write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)?;
        }
        OutputFormat::Webp => {
            // The pure-Rust WebP encoder is lossless only; quality does not apply.
            let rgba = image.to_rgba8();
            WebPEncoder::new_lossless(&mut bytes).write_image(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)?;
        }
        OutputFormat::Avif => {
            let rgba = image.to_rgba8();
            AvifEncoder::new_with_speed_quality(&mut bytes, avif_speed, quality).write_image(
                rgba.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
    }
    Ok(bytes)
}

fn write_encoded(
    image: &DynamicImage,
    format: OutputFormat,
    quality: u8,
    options: &OptimizeOptions,
    path: PathBuf,
) -> Result<PathBuf, OptimizeError> {
    let bytes = encode(image, format, quality, options.avif_speed)
        .map_err(|source| OptimizeError::Encode { path: path.clone(), source })?;
    fs::write(&path, bytes).map_err(|e| OptimizeError::io(&path, e))?;
    Ok(path)
}

/// Writes the full-size copies, the responsive widths narrower than the
/// source, and a blurred placeholder. Returns every file written.
pub fn optimize_image(options: &OptimizeOptions, path: &Path) -> Result<Vec<PathBuf>, OptimizeError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| OptimizeError::io(path, io::Error::new(io::ErrorKind::InvalidInput, "file name is not valid UTF-8")))?
        .to_string();
    let out_dir = output_dir_for(options, path)?;
    fs::create_dir_all(&out_dir).map_err(|e| OptimizeError::io(&out_dir, e))?;

    let image = image::open(path).map_err(|source| OptimizeError::Decode { path: path.to_path_buf(), source })?;
    let mut written = Vec::new();

    for format in [OutputFormat::Jpeg, OutputFormat::Webp, OutputFormat::Avif] {
        let target = out_dir.join(format!("{}.{}", stem, format.extension()));
        written.push(write_encoded(&image, format, options.quality, options, target)?);
    }

    for width in RESPONSIVE_WIDTHS.into_iter().filter(|w| *w < image.width()) {
        let resized = image.resize(width, u32::MAX, FilterType::Lanczos3);
        for format in [OutputFormat::Webp, OutputFormat::Avif, OutputFormat::Jpeg] {
            let target = out_dir.join(format!("{}-{}w.{}", stem, width, format.extension()));
            written.push(write_encoded(&resized, format, options.quality, options, target)?);
        }
    }

    let placeholder = image
        .resize(PLACEHOLDER_WIDTH, u32::MAX, FilterType::Triangle)
        .blur(PLACEHOLDER_BLUR_SIGMA);
    let target = out_dir.join(format!("{}-placeholder.jpg", stem));
    written.push(write_encoded(&placeholder, OutputFormat::Jpeg, PLACEHOLDER_QUALITY, options, target)?);

    Ok(written)
}

/// Optimizes every source image. Per-image failures are logged and counted;
/// only failing to create the output root aborts.
pub fn optimize_all(options: &OptimizeOptions) -> Result<BatchReport, OptimizeError> {
    fs::create_dir_all(&options.output_dir).map_err(|e| OptimizeError::io(&options.output_dir, e))?;

    let images = find_images(&options.input_dir);
    let mut report = BatchReport { found: images.len(), ..BatchReport::default() };
    if images.is_empty() {
        tracing::info!("No images found in {}", options.input_dir.display());
        return Ok(report);
    }
    tracing::info!("Found {} images to optimize", images.len());

    for path in &images {
        match optimize_image(options, path) {
            Ok(written) => {
                tracing::info!("Optimized {} ({} files)", path.display(), written.len());
                report.optimized += 1;
                report.files_written += written.len();
            }
            Err(e) => {
                tracing::error!("Failed to optimize {}: {}", path.display(), e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    pub(crate) fn write_png(path: &Path, width: u32, height: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
        img.save(path).unwrap();
    }

    fn fast_options(root: &TempDir) -> OptimizeOptions {
        let mut options = OptimizeOptions::new(root.path().join("images"), root.path().join("optimized"));
        options.avif_speed = 10;
        options
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn finds_source_images_recursively_ignoring_other_files() {
        let root = TempDir::new().unwrap();
        let images = root.path().join("images");
        write_png(&images.join("a.png"), 4, 4);
        write_png(&images.join("team/b.PNG"), 4, 4);
        fs::write(images.join("notes.txt"), "x").unwrap();
        fs::write(images.join("team/c.webp"), "x").unwrap();

        let found = find_images(&images);
        assert_eq!(found, vec![images.join("a.png"), images.join("team/b.PNG")]);
        assert!(find_images(&root.path().join("missing")).is_empty());
    }

    #[test]
    fn output_mirrors_the_input_subdirectory() {
        let options = OptimizeOptions::new("public/images", "public/optimized");
        assert_eq!(
            output_dir_for(&options, Path::new("public/images/team/a.jpg")).unwrap(),
            PathBuf::from("public/optimized/team")
        );
        assert_eq!(output_dir_for(&options, Path::new("public/images/a.jpg")).unwrap(), PathBuf::from("public/optimized"));
        assert!(matches!(
            output_dir_for(&options, Path::new("elsewhere/a.jpg")),
            Err(OptimizeError::OutsideInput { .. })
        ));
    }

    #[test]
    fn writes_full_size_narrower_widths_and_placeholder() {
        let root = TempDir::new().unwrap();
        let options = fast_options(&root);
        write_png(&options.input_dir.join("work/shot.png"), 600, 300);

        let report = optimize_all(&options).unwrap();
        assert_eq!(report, BatchReport { found: 1, optimized: 1, failed: 0, files_written: 7 });

        let out = options.output_dir.join("work");
        assert_eq!(
            names(&out),
            vec![
                "shot-480w.avif",
                "shot-480w.jpg",
                "shot-480w.webp",
                "shot-placeholder.jpg",
                "shot.avif",
                "shot.jpg",
                "shot.webp",
            ]
        );
        assert_eq!(image::image_dimensions(out.join("shot-480w.jpg")).unwrap(), (480, 240));
        assert_eq!(image::image_dimensions(out.join("shot-placeholder.jpg")).unwrap().0, 20);
        assert_eq!(image::image_dimensions(out.join("shot.webp")).unwrap(), (600, 300));
    }

    #[test]
    fn broken_image_is_skipped_and_the_batch_continues() {
        let root = TempDir::new().unwrap();
        let options = fast_options(&root);
        write_png(&options.input_dir.join("good.png"), 32, 32);
        fs::write(options.input_dir.join("broken.jpg"), b"not a jpeg").unwrap();

        let report = optimize_all(&options).unwrap();
        assert_eq!(report.found, 2);
        assert_eq!(report.optimized, 1);
        assert_eq!(report.failed, 1);
        assert!(options.output_dir.join("good.jpg").exists());
        assert!(!options.output_dir.join("broken.webp").exists());
    }

    #[test]
    fn empty_input_still_creates_the_output_root() {
        let root = TempDir::new().unwrap();
        let options = fast_options(&root);

        let report = optimize_all(&options).unwrap();
        assert_eq!(report, BatchReport::default());
        assert!(options.output_dir.is_dir());
    }
}
