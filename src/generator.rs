use std::path::Path;

use crate::error::GenError;
use crate::font::LabelFont;
use crate::renderer::render_tile;
use crate::zone::{ZoneId, ZoneType};
use crate::{Area, Grid};

/// Default map layout, 7 rows by 8 columns.
pub const DEFAULT_GRID: Grid = Grid(glam::UVec2 { x: 8, y: 7 });

/// Render and save one image per (cell, zone type) combination into
/// `out_dir`, named `{id}.png`. Each tile is written before the next is
/// rendered; the first write failure aborts the whole run, files already
/// written stay where they are. Returns the number of files written.
pub fn generate_zone_images(
    out_dir: &Path,
    grid: Grid,
    font: &LabelFont,
) -> Result<u32, GenError> {
    let expected = grid.area() * ZoneType::ALL.len() as u32;
    log::info!(
        "generating {expected} zone tiles ({}x{} grid) into {}",
        grid.y,
        grid.x,
        out_dir.display()
    );
    let mut written = 0;
    for loc in grid.iter_locs() {
        for zone in ZoneType::ALL {
            let id = ZoneId::new(zone, loc.y, loc.x);
            let img = render_tile(zone, loc.y, loc.x, font);
            let path = out_dir.join(id.file_name());
            img.save(&path)
                .map_err(|source| GenError::Persistence { path, source })?;
            log::debug!("wrote {id}");
            written += 1;
        }
    }
    return Ok(written);
}
