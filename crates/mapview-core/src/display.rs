//! Display Orchestrator: fetch, decode/save, show.
//!
//! Linear three-step sequence with one failure exit per step. Each failure
//! is logged and surfaced as a single host notification, then returned.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::error::MapError;
use crate::host::Host;
use crate::request::{MapRequest, MapType};
use crate::static_map::{MapFetcher, MapImage};

/// Fixed file name inside the temp dir; overwritten by every display.
pub const MAP_FILE_NAME: &str = "google_map.jpg";

pub struct DisplayOrchestrator<'h, H: Host + ?Sized> {
    fetcher: MapFetcher,
    host: &'h H,
    size: String,
    output_path: PathBuf,
}

impl<'h, H: Host + ?Sized> DisplayOrchestrator<'h, H> {
    pub fn new(fetcher: MapFetcher, host: &'h H, size: impl Into<String>, temp_dir: &Path) -> Self {
        Self {
            fetcher,
            host,
            size: size.into(),
            output_path: temp_dir.join(MAP_FILE_NAME),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Shows the map centered on `location` and returns the saved file path.
    pub fn display_map(
        &self,
        location: &str,
        zoom: u8,
        map_type: MapType,
    ) -> Result<PathBuf, MapError> {
        self.try_display(location, zoom, map_type).inspect_err(|e| {
            tracing::error!(location, zoom, %map_type, "display failed: {}", e);
            self.host.notify_error("Error", e.user_message());
        })
    }

    fn try_display(
        &self,
        location: &str,
        zoom: u8,
        map_type: MapType,
    ) -> Result<PathBuf, MapError> {
        let request = MapRequest::new(location, zoom, map_type, self.size.as_str())?;
        let image = self.fetcher.fetch(&request)?;
        save_as_jpeg(&image, &self.output_path)?;
        self.host.show_picture(&self.output_path);
        Ok(self.output_path.clone())
    }
}

/// Decodes `image` (format sniffed from its bytes) and writes it as JPEG.
pub fn save_as_jpeg(image: &MapImage, path: &Path) -> Result<(), MapError> {
    let decoded = image::load_from_memory(image.as_bytes())?;
    // JPEG has no alpha channel; static maps are often RGBA or paletted PNG.
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());

    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Jpeg)?;
    std::fs::write(path, buf.into_inner()).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("map image saved to {}", path.display());
    Ok(())
}
