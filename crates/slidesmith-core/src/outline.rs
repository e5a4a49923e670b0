use crate::types::Section;

/// Generate an ordered outline for a topic sized to the target duration.
///
/// Section count is `minutes / 3` clamped to 6..=20; headings cycle through
/// a fixed ten-entry template bank, so counts above ten repeat headings.
/// Deterministic for a given `(topic, minutes)` pair.
pub fn generate_outline(topic: &str, minutes: u32) -> Vec<Section> {
    let count = ((minutes / 3) as usize).clamp(6, 20);
    let headings = heading_bank(topic);

    (0..count)
        .map(|i| {
            let heading = headings[i % headings.len()].clone();
            let body = expand_paragraph(&heading, topic);
            Section { heading, body }
        })
        .collect()
}

fn heading_bank(topic: &str) -> Vec<String> {
    vec![
        format!("Introduction to {topic}"),
        format!("Background and Context of {topic}"),
        format!("Key Concepts in {topic}"),
        format!("Practical Applications of {topic}"),
        format!("Case Studies on {topic}"),
        format!("Common Misconceptions about {topic}"),
        format!("Advanced Topics in {topic}"),
        format!("Future Trends around {topic}"),
        format!("Challenges and Considerations with {topic}"),
        format!("Summary and Takeaways on {topic}"),
    ]
}

/// Body copy varies only on the topic; the heading is accepted but unused
/// until heading-specific templates exist.
fn expand_paragraph(_heading: &str, topic: &str) -> String {
    [
        format!("This section provides a useful starting point to understand {topic} at a high level."),
        format!("We will define core terms and establish an intuitive framework for thinking about {topic}."),
        "From there, we connect the ideas to everyday scenarios and practical workflows.".to_string(),
        "Where relevant, we will balance trade-offs, outline common pitfalls, and share heuristics that scale.".to_string(),
        "Throughout, we emphasize clarity and examples so that concepts become actionable.".to_string(),
    ]
    .join(" ")
}
