use serde::{Deserialize, Serialize};

/// One outline section: a heading and its narration body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// One finished slide: an image bound to a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub image_url: String,
    pub caption: String,
}

/// Rendering parameters handed to a renderer together with the slides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub slide_duration_sec: u32,
    pub total_duration_sec: u32,
    pub background_music: bool,
}

/// The artifact a renderer consumes: config plus the ordered slides.
#[derive(Debug, Serialize, Deserialize)]
pub struct SlideshowManifest {
    pub config: RenderConfig,
    pub slides: Vec<Slide>,
}
