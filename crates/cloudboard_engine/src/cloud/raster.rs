use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

use super::layout::Placement;

/// Bitmap for characters the built-in fonts do not cover (a question mark).
const FALLBACK_GLYPH: [u8; 8] = [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00];

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .unwrap_or(FALLBACK_GLYPH)
}

/// Paint placements onto a fresh canvas.
pub fn rasterize(width: u32, height: u32, background: [u8; 3], placements: &[Placement]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(background));
    for placement in placements {
        draw_word(&mut canvas, placement);
    }
    canvas
}

/// Each 8x8 glyph is scaled to `font_size` squared with nearest-neighbour
/// sampling. Bit 0 of a row is its leftmost pixel. Anything past the canvas
/// edge is clipped.
fn draw_word(canvas: &mut RgbImage, placement: &Placement) {
    let size = placement.font_size;
    if size == 0 || placement.y >= canvas.height() {
        return;
    }
    let color = Rgb(placement.color);
    let visible_rows = size.min(canvas.height() - placement.y);
    let mut origin_x = placement.x;
    for c in placement.text.chars() {
        if origin_x >= canvas.width() {
            break;
        }
        let bitmap = glyph(c);
        let visible_cols = size.min(canvas.width() - origin_x);
        for py in 0..visible_rows {
            let row = bitmap[(u64::from(py) * 8 / u64::from(size)) as usize];
            if row == 0 {
                continue;
            }
            for px in 0..visible_cols {
                if row & (1 << (u64::from(px) * 8 / u64::from(size))) != 0 {
                    canvas.put_pixel(origin_x + px, placement.y + py, color);
                }
            }
        }
        origin_x = origin_x.saturating_add(size);
    }
}
