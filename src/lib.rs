pub mod batch;
pub mod channel;
pub mod error;
pub mod split;

pub use batch::{process, process_file, BatchReport, FileOutcome};
pub use channel::{extract, Channel, Pixel};
pub use error::SplitError;
pub use split::{split, split_channel, ChannelMaps};

use std::path::Path;

/// Extensions offered by the file picker.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "bmp", "png", "jpg", "jpeg", "webp", "gif", "tif", "tiff", "emf", "wmf", "exif", "heif", "ico",
];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
