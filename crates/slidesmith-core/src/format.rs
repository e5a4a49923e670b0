use crate::types::SlideshowManifest;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a slideshow manifest as a human-readable summary
pub fn format_slideshow_readable(manifest: &SlideshowManifest) -> String {
    let config = &manifest.config;
    let mut output = String::new();

    output.push_str("# Slideshow\n\n");

    output.push_str(&format!(
        "**Resolution:** {}x{} @ {} fps | **Slide:** {}s | **Total:** {} | **Music:** {}\n\n",
        config.width,
        config.height,
        config.fps,
        config.slide_duration_sec,
        format_timestamp(config.total_duration_sec),
        if config.background_music { "on" } else { "off" },
    ));

    output.push_str(&format!("**Slides:** {}\n\n", manifest.slides.len()));

    // First slides with their start timestamps, then an ellipsis.
    const PREVIEW: usize = 10;
    output.push_str("## Preview\n\n");
    for (i, slide) in manifest.slides.iter().take(PREVIEW).enumerate() {
        let start = format_timestamp(i as u32 * config.slide_duration_sec);
        output.push_str(&format!("[{}] {}\n", start, slide.caption));
    }
    if manifest.slides.len() > PREVIEW {
        output.push_str(&format!("... {} more\n", manifest.slides.len() - PREVIEW));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RenderConfig, Slide};

    #[test]
    fn timestamps_are_minute_second() {
        assert_eq!(format_timestamp(0), "00:00");
        assert_eq!(format_timestamp(65), "01:05");
        assert_eq!(format_timestamp(1800), "30:00");
    }

    #[test]
    fn readable_summary_lists_early_slides() {
        let manifest = SlideshowManifest {
            config: RenderConfig {
                width: 1280,
                height: 720,
                fps: 24,
                slide_duration_sec: 8,
                total_duration_sec: 1800,
                background_music: true,
            },
            slides: (0..12)
                .map(|i| Slide {
                    image_url: "https://example.org/a.jpg".to_string(),
                    caption: format!("caption {i}"),
                })
                .collect(),
        };

        let readable = format_slideshow_readable(&manifest);
        assert!(readable.contains("**Slides:** 12"));
        assert!(readable.contains("[00:00] caption 0"));
        assert!(readable.contains("[00:08] caption 1"));
        assert!(readable.contains("... 2 more"));
    }
}
