//! Word-cloud rendering: layout, palette and PNG output.
mod layout;
mod palette;
mod raster;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use cloudboard_core::{CloudWord, CLOUD_MAX_WORDS};
use cloudboard_logging::board_info;
use image::{ImageFormat, RgbImage};

use crate::filename::slugify;
use crate::persist::{AtomicFileWriter, PersistError};

pub use layout::Placement;

#[derive(Debug, Clone, PartialEq)]
pub struct CloudSettings {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub relative_scaling: f32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    /// Padding around every word, in pixels.
    pub margin: u32,
    pub background: [u8; 3],
    /// Fraction of the palette used, from the darkest end.
    pub palette_span: f32,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            max_words: CLOUD_MAX_WORDS,
            relative_scaling: 0.5,
            min_font_size: 8,
            max_font_size: 200,
            margin: 2,
            background: [255, 255, 255],
            palette_span: 0.9,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("could not write image: {0}")]
    Persist(#[from] PersistError),
}

/// A laid-out cloud, ready to be rasterized or previewed.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloud {
    settings: CloudSettings,
    placements: Vec<Placement>,
}

impl WordCloud {
    pub fn generate(words: &[CloudWord], settings: &CloudSettings) -> Self {
        Self {
            settings: settings.clone(),
            placements: layout::layout(words, settings),
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn settings(&self) -> &CloudSettings {
        &self.settings
    }

    pub fn to_image(&self) -> RgbImage {
        raster::rasterize(
            self.settings.width,
            self.settings.height,
            self.settings.background,
            &self.placements,
        )
    }

    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.to_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Render `words` and write the PNG into `output_dir`, named after `topic`.
pub fn save_cloud(
    output_dir: &Path,
    topic: Option<&str>,
    words: &[CloudWord],
    settings: &CloudSettings,
) -> Result<PathBuf, RenderError> {
    let cloud = WordCloud::generate(words, settings);
    let png = cloud.to_png()?;
    let filename = slugify(topic.unwrap_or_default());
    let path = AtomicFileWriter::new(output_dir.to_path_buf()).write(&filename, &png)?;
    board_info!(
        "Saved word cloud {:?} words={} bytes={}",
        path,
        cloud.placements().len(),
        png.len()
    );
    Ok(path)
}
