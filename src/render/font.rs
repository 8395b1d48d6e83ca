use crate::config::toml_config::FontConfig;
use crate::render::bitmap_font;
use crate::utils::error::{Result, WorksheetError};
use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directories searched for bare font file names such as `malgun.ttf`.
const FONT_DIRS: &[&str] = &[
    ".",
    "fonts",
    "C:\\Windows\\Fonts",
    "/usr/share/fonts/truetype/nanum",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/msttcorefonts",
    "/usr/share/fonts/opentype/noto",
    "/usr/share/fonts/noto-cjk",
    "/Library/Fonts",
    "/System/Library/Fonts",
];

pub enum Typeface {
    Outline { font: FontVec, source: PathBuf },
    Builtin,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Typeface::Outline { source, .. } => write!(f, "Outline({})", source.display()),
            Typeface::Builtin => write!(f, "Builtin"),
        }
    }
}

impl Typeface {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    /// Width and height in pixels of `text` at an em size of `size` pixels.
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        match self {
            Typeface::Outline { font, .. } => text_size(em_scale(font, size), font, text),
            Typeface::Builtin => bitmap_font::measure(text, size),
        }
    }

    pub fn draw(&self, image: &mut RgbImage, x: i32, y: i32, size: f32, text: &str, color: Rgb<u8>) {
        match self {
            Typeface::Outline { font, .. } => {
                draw_text_mut(image, color, x, y, em_scale(font, size), font, text)
            }
            Typeface::Builtin => bitmap_font::draw(image, x, y, size, text, color),
        }
    }
}

// ab_glyph 的 PxScale 是行高，換算成 em 大小
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(size),
    }
}

pub fn load_font(path: &Path) -> Result<FontVec> {
    let bytes = std::fs::read(path).map_err(|e| WorksheetError::FontError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    FontVec::try_from_vec(bytes).map_err(|e| WorksheetError::FontError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn candidate_locations(name: &str) -> Vec<PathBuf> {
    let path = Path::new(name);
    let is_bare_name = path.parent().map_or(true, |p| p.as_os_str().is_empty());

    if !is_bare_name || path.is_absolute() {
        return vec![path.to_path_buf()];
    }

    FONT_DIRS.iter().map(|dir| Path::new(dir).join(name)).collect()
}

/// Loads the first candidate that parses. Failures are logged and skipped.
pub fn load_first(candidates: &[String]) -> Option<Typeface> {
    for candidate in candidates {
        for location in candidate_locations(candidate) {
            if !location.is_file() {
                continue;
            }
            match load_font(&location) {
                Ok(font) => {
                    tracing::debug!("🔤 Loaded font {}", location.display());
                    return Some(Typeface::Outline {
                        font,
                        source: location,
                    });
                }
                Err(e) => tracing::warn!("⚠️ {}", e),
            }
        }
    }
    None
}

/// Faces used on a sheet. Korean text always goes through `korean`.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub korean: Arc<Typeface>,
    pub latin: Arc<Typeface>,
}

impl FontSet {
    pub fn load(config: &FontConfig) -> Self {
        let korean = match load_first(&config.korean) {
            Some(face) => Arc::new(face),
            None => {
                tracing::warn!(
                    "⚠️ No Korean font found among {:?}, using built-in face",
                    config.korean
                );
                Arc::new(Typeface::Builtin)
            }
        };

        let latin = match load_first(&config.latin) {
            Some(face) => Arc::new(face),
            None => {
                tracing::debug!("No Latin font found, reusing the Korean face");
                Arc::clone(&korean)
            }
        };

        Self { korean, latin }
    }

    pub fn builtin() -> Self {
        let face = Arc::new(Typeface::Builtin);
        Self {
            korean: Arc::clone(&face),
            latin: face,
        }
    }
}
