use image::{Rgb, RgbImage};

use crate::font::LabelFont;
use crate::zone::{ZoneId, ZoneType};

pub const TILE_SIZE: u32 = 300;
pub const BORDER_WIDTH: u32 = 5;
pub const LABEL_OFFSET: (u32, u32) = (10, 10);
pub const LABEL_PX: f32 = 25.0;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Render one zone tile: white canvas, filled rectangle inset by
/// [`BORDER_WIDTH`] with a black outline of the same width, and the zone
/// identifier drawn top left.
///
/// Pure in-memory rendering, persistence is the caller's problem.
/// `row` and `col` are not bounds checked, they only feed the label.
pub fn render_tile(zone: ZoneType, row: u32, col: u32, font: &LabelFont) -> RgbImage {
    let id = ZoneId::new(zone, row, col);
    let mut img = RgbImage::from_pixel(TILE_SIZE, TILE_SIZE, WHITE);
    draw_zone_rect(&mut img, zone.fill());
    font.draw(
        &mut img,
        LABEL_OFFSET.0,
        LABEL_OFFSET.1,
        LABEL_PX,
        &id.to_string(),
        BLACK,
    );
    return img;
}

/// Rectangle spans pixels [min, max] on both axes, outline stroked
/// `BORDER_WIDTH` pixels inward from that span.
fn draw_zone_rect(img: &mut RgbImage, fill: Rgb<u8>) {
    let min = BORDER_WIDTH;
    let max = TILE_SIZE - 1 - BORDER_WIDTH;
    for y in min..=max {
        for x in min..=max {
            let on_outline = x < min + BORDER_WIDTH
                || x > max - BORDER_WIDTH
                || y < min + BORDER_WIDTH
                || y > max - BORDER_WIDTH;
            let color = if on_outline { BLACK } else { fill };
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rendered(zone: ZoneType) -> RgbImage {
        return render_tile(zone, 0, 0, &LabelFont::Builtin);
    }

    #[test]
    fn tile_is_canvas_sized() {
        let img = rendered(ZoneType::Residential);
        assert_eq!(img.dimensions(), (TILE_SIZE, TILE_SIZE));
    }

    #[test]
    fn corners_outside_inset_are_background() {
        let img = rendered(ZoneType::Commercial);
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert_eq!(*img.get_pixel(4, 4), WHITE);
        assert_eq!(*img.get_pixel(TILE_SIZE - 1, TILE_SIZE - 1), WHITE);
        assert_eq!(*img.get_pixel(TILE_SIZE - 5, TILE_SIZE - 5), WHITE);
    }

    #[test]
    fn inset_corner_lands_on_outline() {
        let img = rendered(ZoneType::Residential);
        assert_eq!(*img.get_pixel(5, 5), BLACK);
        assert_eq!(*img.get_pixel(9, 150), BLACK);
        assert_eq!(*img.get_pixel(TILE_SIZE - 6, TILE_SIZE - 6), BLACK);
    }

    #[test]
    fn interior_uses_zone_fill() {
        for zone in ZoneType::ALL {
            let img = rendered(zone);
            assert_eq!(*img.get_pixel(150, 150), zone.fill());
        }
    }

    #[test]
    fn zone_fills_differ_on_canvas() {
        let m = rendered(ZoneType::Residential);
        let c = rendered(ZoneType::Commercial);
        assert_ne!(m.get_pixel(150, 150), c.get_pixel(150, 150));
    }

    #[test]
    fn label_is_drawn_near_offset() {
        let img = rendered(ZoneType::Residential);
        let mut label_pixels = 0;
        for y in LABEL_OFFSET.1..50 {
            for x in LABEL_OFFSET.0..120 {
                if *img.get_pixel(x, y) == BLACK {
                    label_pixels += 1;
                }
            }
        }
        assert!(label_pixels > 0, "no label pixels found in label region");
    }

    #[test]
    fn labels_differ_between_cells() {
        let a = render_tile(ZoneType::Commercial, 0, 0, &LabelFont::Builtin);
        let b = render_tile(ZoneType::Commercial, 2, 3, &LabelFont::Builtin);
        assert!(a.pixels().zip(b.pixels()).any(|(p, q)| p != q));
    }
}
