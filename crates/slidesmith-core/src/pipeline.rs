use std::path::Path;

use tokio::fs;

use crate::{
    error::Result,
    script::{parse_script, sections_to_captions},
    slides::bind_slides,
    types::{RenderConfig, SlideshowManifest},
};

/// Assemble a slideshow from the current script text and image pool.
///
/// The script is always re-parsed here rather than reusing the sections it
/// was generated from, so hand edits to the text are honored.
pub fn build_slideshow(
    script: &str,
    images: &[String],
    config: RenderConfig,
    topic: &str,
) -> SlideshowManifest {
    let sections = parse_script(script, topic);
    let captions = sections_to_captions(&sections);
    let needed = config.required_slide_count();
    let slides = bind_slides(&captions, images, needed, topic);

    SlideshowManifest { config, slides }
}

/// Load cached script text
pub async fn load_script(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).await?)
}

/// Save script text for later runs (and hand editing)
pub async fn save_script(script: &str, path: &Path) -> Result<()> {
    fs::write(path, script).await?;
    Ok(())
}

/// Load a cached image URL list
pub async fn load_images(path: &Path) -> Result<Vec<String>> {
    let json_content = fs::read_to_string(path).await?;
    let images: Vec<String> = serde_json::from_str(&json_content)?;
    Ok(images)
}

/// Save an image URL list to a file
pub async fn save_images(images: &[String], path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(images)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}

/// Load a manifest from a cached file
pub async fn load_manifest(path: &Path) -> Result<SlideshowManifest> {
    let json_content = fs::read_to_string(path).await?;
    let manifest: SlideshowManifest = serde_json::from_str(&json_content)?;
    Ok(manifest)
}

/// Save a manifest to a file
pub async fn save_manifest(manifest: &SlideshowManifest, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}
