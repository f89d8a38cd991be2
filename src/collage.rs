//! Fixed-layout collages of one to five images, each framed in its own dominant colour.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

use crate::foundation::error::{YumeError, YumeResult};
use crate::io;

/// Side length every input is resized to before framing.
pub const TILE_PX: u32 = 400;
/// Frame width around each tile.
pub const BORDER_PX: u32 = 15;
pub const MAX_IMAGES: usize = 5;

const DOMINANT_SAMPLE_PX: u32 = 50;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

struct Layout {
    width: u32,
    height: u32,
    background: Rgb<u8>,
    offsets: &'static [(i64, i64)],
}

/// Layouts for two to five tiles. A single tile is returned as-is.
fn layout_for(count: usize) -> Option<Layout> {
    let layout = match count {
        2 => Layout {
            width: 830,
            height: 430,
            background: BLACK,
            offsets: &[(15, 15), (415, 15)],
        },
        3 => Layout {
            width: 830,
            height: 830,
            background: WHITE,
            offsets: &[(215, 15), (15, 415), (415, 415)],
        },
        4 => Layout {
            width: 830,
            height: 830,
            background: BLACK,
            offsets: &[(15, 15), (415, 15), (15, 415), (415, 415)],
        },
        5 => Layout {
            width: 830,
            height: 1030,
            background: WHITE,
            offsets: &[(215, 15), (15, 415), (415, 415), (15, 815), (415, 815)],
        },
        _ => return None,
    };
    Some(layout)
}

/// Mean colour of the image after downsampling to 50x50. Channels are truncated to integers.
pub fn dominant_color(img: &RgbImage) -> Rgb<u8> {
    let small = imageops::resize(
        img,
        DOMINANT_SAMPLE_PX,
        DOMINANT_SAMPLE_PX,
        FilterType::CatmullRom,
    );

    let mut sum = [0u64; 3];
    for px in small.pixels() {
        for (acc, c) in sum.iter_mut().zip(px.0) {
            *acc += u64::from(c);
        }
    }
    let n = u64::from(DOMINANT_SAMPLE_PX * DOMINANT_SAMPLE_PX);
    Rgb([(sum[0] / n) as u8, (sum[1] / n) as u8, (sum[2] / n) as u8])
}

/// Surround `img` with a `border_px` frame filled with its dominant colour.
pub fn add_border(img: &RgbImage, border_px: u32) -> RgbImage {
    let color = dominant_color(img);
    let mut out = RgbImage::from_pixel(
        img.width() + 2 * border_px,
        img.height() + 2 * border_px,
        color,
    );
    imageops::replace(&mut out, img, i64::from(border_px), i64::from(border_px));
    out
}

/// Resize, frame and place one to five images.
///
/// Tiles are pasted in input order at fixed offsets; where tiles overlap the later one wins and
/// anything past the canvas edge is clipped.
#[tracing::instrument(skip_all, fields(images = images.len()))]
pub fn create_collage(images: &[DynamicImage]) -> YumeResult<RgbImage> {
    if images.is_empty() || images.len() > MAX_IMAGES {
        return Err(YumeError::validation(format!(
            "collage needs between 1 and {MAX_IMAGES} images, got {}",
            images.len()
        )));
    }

    let mut tiles: Vec<RgbImage> = images
        .iter()
        .map(|img| {
            let rgb = img.to_rgb8();
            let resized = imageops::resize(&rgb, TILE_PX, TILE_PX, FilterType::CatmullRom);
            add_border(&resized, BORDER_PX)
        })
        .collect();

    let Some(layout) = layout_for(tiles.len()) else {
        // only the single-image case has no layout
        return tiles
            .pop()
            .ok_or_else(|| YumeError::validation("collage has no images"));
    };

    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, layout.background);
    for (tile, &(x, y)) in tiles.iter().zip(layout.offsets) {
        imageops::replace(&mut canvas, tile, x, y);
    }
    Ok(canvas)
}

/// Load `paths`, build the collage and write it to `out_path`.
pub fn create_collage_from_paths<P: AsRef<Path>>(
    paths: &[P],
    out_path: impl AsRef<Path>,
) -> YumeResult<RgbImage> {
    let images = paths
        .iter()
        .map(io::load_image)
        .collect::<YumeResult<Vec<_>>>()?;
    let collage = create_collage(&images)?;

    let out_path = out_path.as_ref();
    io::save_image(out_path, &DynamicImage::ImageRgb8(collage.clone()))?;
    tracing::info!(path = %out_path.display(), "collage saved");
    Ok(collage)
}
