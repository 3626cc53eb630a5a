//! Badge icon generator
//!
//! Procedurally draws the application icon: a gold rounded-square outline
//! with a centered cross on a near-black background. Every proportion is
//! derived from the icon size, so the same code produces each entry of the
//! icon set.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = badgeicon::create_icon(192, "icons/icon-192.png")?;
//! assert_eq!(report.size, 192);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use image::Rgb;
use log::{debug, info};
use rayon::prelude::*;

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::Canvas;

use rendering::layout::BadgeGeometry;
use rendering::paint::badge_commands;
use rendering::raster::rasterize;

/// Palette used to draw the badge
///
/// # Examples
///
/// ```
/// let style = badgeicon::BadgeStyle::default();
/// assert_eq!(style.accent.0, [0xf0, 0xc6, 0x74]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    /// Canvas fill
    pub background: Rgb<u8>,
    /// Outline and cross color
    pub accent: Rgb<u8>,
}

/// `#0a0a0f`
pub const BACKGROUND: Rgb<u8> = Rgb([0x0a, 0x0a, 0x0f]);
/// `#f0c674`
pub const ACCENT: Rgb<u8> = Rgb([0xf0, 0xc6, 0x74]);

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            accent: ACCENT,
        }
    }
}

/// One icon to produce: a square size and its output path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub size: u32,
    pub path: PathBuf,
}

impl IconJob {
    pub fn new(size: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }
}

/// The icon set written by the binary, relative to the working directory.
pub fn default_jobs() -> Vec<IconJob> {
    vec![
        IconJob::new(192, "icons/icon-192.png"),
        IconJob::new(512, "icons/icon-512.png"),
    ]
}

/// Summary of one written icon
#[derive(Debug, Clone)]
pub struct IconReport {
    pub size: u32,
    pub path: PathBuf,
    /// Size of the encoded PNG in bytes
    pub bytes: usize,
    /// See [`Canvas::fingerprint`]
    pub fingerprint: String,
}

/// Render the badge into a new canvas without touching the filesystem.
pub fn render_icon(size: u32, style: &BadgeStyle) -> Canvas {
    let geometry = BadgeGeometry::for_size(size);
    debug!(
        "size {}: padding={} border={} radius={} cross={}x{}",
        size,
        geometry.padding,
        geometry.border_width,
        geometry.corner_radius,
        geometry.cross_size,
        geometry.cross_width
    );
    let commands = badge_commands(&geometry, style);
    rasterize(size, style, &commands)
}

/// Render a `size` x `size` badge with the default palette and write it as
/// PNG to `path`, overwriting any existing file.
pub fn create_icon(size: u32, path: impl AsRef<Path>) -> Result<IconReport> {
    create_icon_with_style(size, path, &BadgeStyle::default())
}

pub fn create_icon_with_style(
    size: u32,
    path: impl AsRef<Path>,
    style: &BadgeStyle,
) -> Result<IconReport> {
    let path = path.as_ref();
    let canvas = render_icon(size, style);
    let png = canvas.save_png(path)?;
    let report = IconReport {
        size,
        path: path.to_path_buf(),
        bytes: png.len(),
        fingerprint: canvas.fingerprint(),
    };
    info!(
        "wrote {} ({}x{}, {} bytes, sha256 {})",
        path.display(),
        size,
        size,
        report.bytes,
        &report.fingerprint[..12]
    );
    Ok(report)
}

/// Run every job in parallel. Reports come back in job order; if any job
/// fails, the error of the first failing job (by order) is returned. Jobs
/// that succeeded before the failure keep their files.
pub fn generate_all(jobs: &[IconJob]) -> Result<Vec<IconReport>> {
    let results: Vec<Result<IconReport>> = jobs
        .par_iter()
        .map(|job| create_icon(job.size, &job.path))
        .collect();
    results.into_iter().collect()
}
