//! Filesystem layer: content-sniffing image reads, directory scanning for images
//! and text files, plus `writers` for JPEG encoding and atomic in-place replacement.
pub mod read;
pub use read::{open_image, read_dimensions};

pub mod scan;
pub use scan::{collect_files_with_extension, list_files, list_images};

pub mod writers;
