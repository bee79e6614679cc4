use crate::model::Severity;

use super::{ParsedDefect, clean_fragment, severity_from_text};

/// Line-oriented fallback used when no structured strategy matched. A line
/// beginning with a number, bullet, or asterisk marker starts a new
/// candidate whose location is the remainder of that line; later lines
/// containing "description" or "severity" accumulate as attributes of the
/// current candidate.
pub fn scan_marker_lines(text: &str) -> Vec<ParsedDefect> {
    let mut parsed = Vec::<ParsedDefect>::new();
    let mut current: Option<ParsedDefect> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(remainder) = marker_remainder(line) {
            // A bulleted attribute ("- Description: ...") belongs to the
            // candidate in progress, not a new one.
            if is_attribute_line(remainder) {
                apply_attribute(current.as_mut(), remainder);
            } else {
                if let Some(defect) = current.take() {
                    parsed.push(defect);
                }
                current = Some(ParsedDefect {
                    location: clean_fragment(remainder),
                    description: String::new(),
                    severity: Severity::Unknown,
                });
            }
            continue;
        }

        if is_attribute_line(line) {
            apply_attribute(current.as_mut(), line);
        }
    }

    if let Some(defect) = current.take() {
        parsed.push(defect);
    }

    parsed
}

fn marker_remainder(line: &str) -> Option<&str> {
    for bullet in ['-', '*', '•'] {
        if let Some(rest) = line.strip_prefix(bullet) {
            let rest = rest.trim_start_matches(['-', '*']).trim();
            if !rest.is_empty() {
                return Some(rest);
            }
            return None;
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0
        && let Some(rest) = line[digits..].strip_prefix(['.', ')'])
    {
        let rest = rest.trim();
        if !rest.is_empty() {
            return Some(rest);
        }
    }

    None
}

fn is_attribute_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered.contains("description") || lowered.contains("severity")
}

fn apply_attribute(current: Option<&mut ParsedDefect>, line: &str) {
    let Some(defect) = current else {
        return;
    };

    let lowered = line.to_lowercase();
    if lowered.contains("severity") {
        let parsed = severity_from_text(line);
        if parsed != Severity::Unknown {
            defect.severity = parsed;
        }
    }
    if lowered.contains("description") {
        let value = attribute_value(line);
        if !value.is_empty() {
            if !defect.description.is_empty() {
                defect.description.push(' ');
            }
            defect.description.push_str(value);
        }
    }
}

fn attribute_value(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, value)) => value.trim(),
        None => line.trim(),
    }
}
