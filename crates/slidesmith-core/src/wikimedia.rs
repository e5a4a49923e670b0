use crate::error::{Result, SlidesmithError};

const API_URL: &str = "https://commons.wikimedia.org/w/api.php";

/// Search Wikimedia Commons for bitmap images and return their URLs.
///
/// Uses the public search generator (no API key). Results are filtered to
/// common photo extensions before returning.
pub async fn search_images(query: &str, limit: usize) -> Result<Vec<String>> {
    let search = format!("{query} filetype:bitmap");
    let response = reqwest::Client::new()
        .get(API_URL)
        .query(&[
            ("action", "query"),
            ("generator", "search"),
            ("gsrlimit", &limit.to_string()),
            ("gsrsearch", &search),
            ("prop", "imageinfo|info"),
            ("iiprop", "url"),
            ("format", "json"),
            ("origin", "*"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SlidesmithError::ImageSearchFailed {
            query: query.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }

    let data = response.json::<serde_json::Value>().await?;
    Ok(parse_search_response(&data))
}

/// Extract image URLs from a `query.pages` response object. Pages without
/// an `imageinfo` URL and non-bitmap extensions are skipped.
fn parse_search_response(data: &serde_json::Value) -> Vec<String> {
    let Some(pages) = data["query"]["pages"].as_object() else {
        return Vec::new();
    };

    pages
        .values()
        .filter_map(|page| page["imageinfo"][0]["url"].as_str())
        .filter(|url| has_bitmap_extension(url))
        .map(str::to_string)
        .collect()
}

fn has_bitmap_extension(url: &str) -> bool {
    let lower = url.to_lowercase();
    [".jpg", ".jpeg", ".png", ".webp"]
        .iter()
        .any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_urls_out_of_pages() {
        let data = json!({
            "query": {
                "pages": {
                    "1": { "title": "File:A.jpg", "imageinfo": [{ "url": "https://example.org/a.jpg" }] },
                    "2": { "title": "File:B.png", "imageinfo": [{ "url": "https://example.org/b.PNG" }] }
                }
            }
        });
        let mut urls = parse_search_response(&data);
        urls.sort();
        assert_eq!(urls, vec!["https://example.org/a.jpg", "https://example.org/b.PNG"]);
    }

    #[test]
    fn skips_pages_without_imageinfo_and_non_bitmaps() {
        let data = json!({
            "query": {
                "pages": {
                    "1": { "title": "File:NoInfo.jpg" },
                    "2": { "title": "File:C.svg", "imageinfo": [{ "url": "https://example.org/c.svg" }] },
                    "3": { "title": "File:D.webp", "imageinfo": [{ "url": "https://example.org/d.webp" }] }
                }
            }
        });
        assert_eq!(parse_search_response(&data), vec!["https://example.org/d.webp"]);
    }

    #[test]
    fn missing_query_section_yields_empty() {
        assert!(parse_search_response(&json!({})).is_empty());
        assert!(parse_search_response(&json!({ "query": {} })).is_empty());
    }
}
