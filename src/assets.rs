use std::path::{Path, PathBuf};

use log::warn;

use crate::view::paint;

const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// What an image key resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageRef {
    /// a `file://` uri for the egui_extras loaders
    File(String),
    /// no asset on disk, draw a gradient in these colours instead
    Placeholder(egui::Color32, egui::Color32),
}

impl ImageRef {
    pub fn paint(&self, ui: &egui::Ui, rect: egui::Rect, rounding: f32, opacity: f32) {
        match self {
            ImageRef::File(uri) => {
                egui::Image::new(uri.as_str())
                    .rounding(rounding)
                    .tint(egui::Color32::WHITE.gamma_multiply(opacity))
                    .paint_at(ui, rect);
            }
            ImageRef::Placeholder(top, bottom) => {
                ui.painter().add(paint::gradient_rounded_rect(
                    rect,
                    rounding,
                    paint::Direction::Diagonal,
                    top.gamma_multiply(opacity),
                    bottom.gamma_multiply(opacity),
                ));
            }
        }
    }
}

/// Looks up images by key in a directory of assets.
pub struct AssetCatalog {
    dir: PathBuf,
}

impl AssetCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Never fails: keys without a file on disk get a placeholder.
    pub fn resolve_image(&self, key: &str) -> ImageRef {
        for extension in EXTENSIONS {
            let path = self.dir.join(format!("{key}.{extension}"));
            if path.is_file() {
                let absolute = path.canonicalize().unwrap_or(path);
                return ImageRef::File(format!("file://{}", absolute.display()));
            }
        }
        warn!("no image for {key:?} in {:?}, drawing a placeholder", self.dir);
        placeholder(key)
    }
}

/// A stable pair of colours derived from the key, so every destination keeps its look.
fn placeholder(key: &str) -> ImageRef {
    let hash = key
        .bytes()
        .fold(2_166_136_261_u32, |acc, b| (acc ^ u32::from(b)).wrapping_mul(16_777_619));
    let hue = (hash % 360) as f32 / 360.0;
    let top = egui::ecolor::Hsva::new(hue, 0.55, 0.85, 1.0);
    let bottom = egui::ecolor::Hsva::new((hue + 0.12) % 1.0, 0.7, 0.45, 1.0);
    ImageRef::Placeholder(top.into(), bottom.into())
}
