use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{Rgb, RgbImage};

use crate::error::FontError;

pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Font used for the zone identifier label.
///
/// `Truetype` is the normal case, loaded from disk. `Builtin` is a small
/// 5x7 bitmap face that is always available, so a missing or broken font
/// file never stops a generation run.
#[derive(Debug)]
pub enum LabelFont {
    Truetype(FontVec),
    Builtin,
}

impl LabelFont {
    pub fn load(path: impl AsRef<Path>) -> Result<LabelFont, FontError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| FontError::Parse {
            path: path.to_path_buf(),
        })?;
        return Ok(LabelFont::Truetype(font));
    }

    /// Load `path`, substituting the builtin face on any failure.
    /// The run continues either way, only the label style changes.
    pub fn load_or_builtin(path: impl AsRef<Path>) -> LabelFont {
        return match Self::load(&path) {
            Ok(font) => font,
            Err(err) => {
                log::warn!("{err}, using builtin font");
                LabelFont::Builtin
            }
        };
    }

    pub fn is_builtin(&self) -> bool {
        return matches!(self, LabelFont::Builtin);
    }

    /// Draw `text` with its top left corner at (x, y).
    pub fn draw(&self, img: &mut RgbImage, x: u32, y: u32, px: f32, text: &str, color: Rgb<u8>) {
        match self {
            LabelFont::Truetype(font) => draw_truetype(font, img, x, y, px, text, color),
            LabelFont::Builtin => draw_builtin(img, x, y, px, text, color),
        }
    }
}

fn draw_truetype(
    font: &FontVec,
    img: &mut RgbImage,
    x: u32,
    y: u32,
    px: f32,
    text: &str,
    color: Rgb<u8>,
) {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);
    // (x, y) is the top of the line, glyphs are positioned on the baseline
    let baseline = y as f32 + scaled.ascent();
    let mut pen = x as f32;
    let mut prev = None;
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            pen += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(pen, baseline));
        pen += scaled.h_advance(id);
        prev = Some(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, cov| {
                let ix = gx as i64 + bounds.min.x as i64;
                let iy = gy as i64 + bounds.min.y as i64;
                if cov > 0.3
                    && ix >= 0
                    && iy >= 0
                    && (ix as u32) < img.width()
                    && (iy as u32) < img.height()
                {
                    img.put_pixel(ix as u32, iy as u32, color);
                }
            });
        }
    }
}

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

fn draw_builtin(img: &mut RgbImage, x: u32, y: u32, px: f32, text: &str, color: Rgb<u8>) {
    // scale the 5x7 cells so the glyph height roughly matches px
    let scale = ((px / (GLYPH_ROWS + 1) as f32).round() as u32).max(1);
    let mut pen = x;
    for ch in text.chars() {
        if let Some(rows) = builtin_glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_COLS {
                    if (bits >> (GLYPH_COLS - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    let cell_x = pen + col * scale;
                    let cell_y = y + row as u32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let (ix, iy) = (cell_x + dx, cell_y + dy);
                            if ix < img.width() && iy < img.height() {
                                img.put_pixel(ix, iy, color);
                            }
                        }
                    }
                }
            }
        }
        pen += (GLYPH_COLS + 1) * scale;
    }
}

/// 5x7 bitmaps, one u8 bitmask per row, MSB-of-5 is the leftmost pixel.
/// Covers exactly the characters zone identifiers are built from.
fn builtin_glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        _ => return None,
    };
    return Some(rows);
}
