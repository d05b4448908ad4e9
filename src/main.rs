use std::path::Path;

use zone_tiles::font::{LabelFont, DEFAULT_FONT_PATH};
use zone_tiles::generator::{generate_zone_images, DEFAULT_GRID};

fn main() {
    use simplelog::*;
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let font = LabelFont::load_or_builtin(DEFAULT_FONT_PATH);
    match generate_zone_images(Path::new("."), DEFAULT_GRID, &font) {
        Ok(written) => log::info!("done, wrote {written} zone tiles"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
