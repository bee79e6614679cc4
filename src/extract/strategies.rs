use anyhow::{Context, Result};
use regex::Regex;

use super::{ParsedDefect, clean_fragment, severity_from_text};

/// Labeled location/description/severity triples, one label per line:
///
/// ```text
/// Difference 1
/// Location: Header Logo
/// Description: logo color changed from blue to red
/// Severity: Major
/// ```
pub fn labeled_triples(text: &str) -> Result<Vec<ParsedDefect>> {
    let pattern = Regex::new(
        r"(?is)(?:\*\*)?location(?:\*\*)?\s*[:\-]\s*(?P<location>[^\r\n]+?)\s*[\r\n]+\s*(?:\*\*)?description(?:\*\*)?\s*[:\-]\s*(?P<description>.+?)\s*[\r\n]+\s*(?:\*\*)?severity(?:\*\*)?\s*[:\-]\s*(?:\*\*)?\s*(?P<severity>[A-Za-z]+)",
    )
    .context("failed to compile labeled triple regex")?;

    let parsed = pattern
        .captures_iter(text)
        .map(|captures| ParsedDefect {
            location: clean_fragment(&captures["location"]),
            description: clean_fragment(&captures["description"]),
            severity: severity_from_text(&captures["severity"]),
        })
        .collect();

    Ok(parsed)
}

/// Bulleted items with a bolded heading: `- **Header Logo**: color changed`.
pub fn bold_bullet_items(text: &str) -> Result<Vec<ParsedDefect>> {
    let pattern = Regex::new(
        r"(?m)^\s*[-*•]\s*\*\*(?P<location>[^*\r\n]+?)\*\*\s*[:\-]?\s*(?P<description>\S.*)$",
    )
    .context("failed to compile bold bullet regex")?;

    Ok(collect_location_description(&pattern, text))
}

/// Numbered items with a bolded heading: `1. **Header Logo**: color changed`.
pub fn numbered_bold_items(text: &str) -> Result<Vec<ParsedDefect>> {
    let pattern = Regex::new(
        r"(?m)^\s*\d+[.)]\s*\*\*(?P<location>[^*\r\n]+?)\*\*\s*[:\-]?\s*(?P<description>\S.*)$",
    )
    .context("failed to compile numbered bold regex")?;

    Ok(collect_location_description(&pattern, text))
}

/// Quoted location with a trailing description:
/// `- "Header Logo" color changed from blue to red`.
pub fn quoted_locations(text: &str) -> Result<Vec<ParsedDefect>> {
    let pattern = Regex::new(
        r#"(?m)^\s*(?:\d+[.)]\s*|[-*•]\s*)?"(?P<location>[^"\r\n]+)"\s*[:\-]?\s*(?P<description>\S.*)$"#,
    )
    .context("failed to compile quoted location regex")?;

    Ok(collect_location_description(&pattern, text))
}

fn collect_location_description(pattern: &Regex, text: &str) -> Vec<ParsedDefect> {
    pattern
        .captures_iter(text)
        .map(|captures| {
            let description = clean_fragment(&captures["description"]);
            ParsedDefect {
                location: clean_fragment(&captures["location"]),
                severity: severity_from_text(&description),
                description,
            }
        })
        .collect()
}
