//! Page classifier: title extraction and agent-likeness testing.
//!
//! A fetched page represents a candidate only if it yields a usable title
//! and that title reads like an individual agent or team page. Malformed
//! or title-less HTML is not an error; the page is silently excluded.

use scraper::{Html, Selector};

/// Terms whose presence in a title marks a plausible agent/team page.
const AGENT_INDICATORS: &[&str] = &[
    "realtor",
    "real estate agent",
    "team",
    "realty",
    "broker",
];

/// Meta attributes tried before falling back to the `<title>` element,
/// in priority order.
const META_TITLE_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="title"]"#,
];

/// Extract a display title from page content.
///
/// Tries the Open Graph title, then the generic title meta attribute, then
/// the document's `<title>` element; returns the first non-empty match
/// after trimming, or `None` when the page offers no usable title.
pub fn extract_meta_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for selector_str in META_TITLE_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        let content = document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"));
        if let Some(content) = content {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_owned());
            }
        }
    }

    let Ok(selector) = Selector::parse("title") else {
        return None;
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Returns `true` if the title contains any agent/team indicator,
/// case-insensitively.
pub fn looks_like_agent(title: &str) -> bool {
    let lowered = title.to_lowercase();
    AGENT_INDICATORS
        .iter()
        .any(|indicator| lowered.contains(indicator))
}
