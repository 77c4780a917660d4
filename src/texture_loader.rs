use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- Helper: Collect and Sort Image Paths ---
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    paths.push(path);
                }
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    // An empty directory is not an error: the slideshow degrades to an
    // inert component.
    Ok(paths)
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let mut orientation = 1; // Default: no rotation

    // EXIF data is only read reliably from JPEG containers
    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(value) = values.first() {
                            orientation = *value;
                        }
                    }
                }
            }
            Err(e) => {
                // Non-critical: proceed without rotation
                warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            }
        }
    }

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Orientations involving mirror flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!(path = %image_path.display(), "applied 180 deg rotation");
        }
        6 => {
            image.rotate_cw();
            debug!(path = %image_path.display(), "applied 90 deg CW rotation");
        }
        8 => {
            image.rotate_ccw();
            debug!(path = %image_path.display(), "applied 90 deg CCW rotation");
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}
