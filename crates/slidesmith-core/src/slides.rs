use crate::types::{RenderConfig, Slide};

/// Fallback image used when no search results are available, so cyclic
/// indexing always has a pool of at least one.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6e/Golde33443.jpg/640px-Golde33443.jpg";

impl RenderConfig {
    /// Slides needed to fill the total duration (ceiling division, at least 1).
    pub fn required_slide_count(&self) -> usize {
        let per = self.slide_duration_sec.max(1) as usize;
        (self.total_duration_sec as usize).div_ceil(per).max(1)
    }
}

/// Bind captions and images into exactly `needed` slides.
///
/// Both pools are indexed cyclically and independently; their lengths need
/// not match or divide evenly. An empty image pool is replaced by the
/// placeholder, and an empty caption pool falls back to the topic string.
pub fn bind_slides(captions: &[String], images: &[String], needed: usize, topic: &str) -> Vec<Slide> {
    let placeholder = [PLACEHOLDER_IMAGE_URL.to_string()];
    let pool: &[String] = if images.is_empty() { &placeholder } else { images };

    (0..needed)
        .map(|i| Slide {
            image_url: pool[i % pool.len()].clone(),
            caption: captions
                .get(i % captions.len().max(1))
                .cloned()
                .unwrap_or_else(|| topic.to_string()),
        })
        .collect()
}
