//! Slidesmith Core Library
//!
//! Core functionality for generating topic outlines, converting script text
//! into captioned slides, and binding slides to images fetched from
//! Wikimedia Commons.

pub mod cache;
pub mod error;
pub mod format;
pub mod outline;
pub mod pipeline;
pub mod script;
pub mod slides;
pub mod types;
pub mod wikimedia;

// Re-export commonly used items at crate root
pub use cache::{get_cache_dir, get_images_path, get_manifest_path, get_root_cache_dir, get_script_path};
pub use error::{Result, SlidesmithError};
pub use format::{format_slideshow_readable, format_timestamp};
pub use outline::generate_outline;
pub use pipeline::{
    build_slideshow, load_images, load_manifest, load_script, save_images, save_manifest,
    save_script,
};
pub use script::{format_script, parse_script, sections_to_captions};
pub use slides::{PLACEHOLDER_IMAGE_URL, bind_slides};
pub use types::{RenderConfig, Section, Slide, SlideshowManifest};
pub use wikimedia::search_images;
