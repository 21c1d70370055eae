use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use hrm_showcase::{Error, Result};

/// EXIF orientation tag, 1 when absent or unreadable.
fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-fatal, the image is shown unrotated
            warn!(?image_path, "could not read EXIF data: {e}");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).map_err(|e| Error::io(image_path, e))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| Error::image(image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are left as they are.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(?image_path, orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| Error::image(image_path, e))?;

    // Free the CPU copy now that the GPU has it
    drop(image);

    Ok(texture)
}

/// Loads every resolved path, leaving `None` wherever a file is missing or broken.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: &[Option<PathBuf>],
) -> Vec<Option<Texture2D>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_deref()?;
            match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!("{e}");
                    None
                }
            }
        })
        .collect()
}
