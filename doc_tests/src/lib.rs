// Helpers for checking SECURITY.md against the vault sources.
// Markdown sections are located by header text; error codes are scraped
// with regexes so the document and errors.rs cannot drift apart silently.

use regex::Regex;

/// Returns the section headed `section_name` (any header level) including
/// its header line, up to the next header of the same or higher level.
/// Empty if the section does not exist.
pub fn extract_section(content: &str, section_name: &str) -> String {
    let mut section = String::new();
    let mut level = None;

    for line in content.lines() {
        if let Some((current, title)) = parse_header(line) {
            match level {
                Some(open) if current <= open => break,
                None if title == section_name => level = Some(current),
                _ => {}
            }
        }
        if level.is_some() {
            section.push_str(line);
            section.push('\n');
        }
    }

    section
}

pub fn section_exists(content: &str, section_name: &str) -> bool {
    content
        .lines()
        .filter_map(parse_header)
        .any(|(_, title)| title == section_name)
}

/// Titles of the headers directly below the first header of `content`.
pub fn subsection_titles(content: &str) -> Vec<String> {
    let mut headers = content.lines().filter_map(parse_header);
    let Some((top, _)) = headers.next() else {
        return Vec::new();
    };
    headers
        .filter(|(level, _)| *level == top + 1)
        .map(|(_, title)| title.to_string())
        .collect()
}

pub fn contains_all_keywords(content: &str, keywords: &[&str]) -> bool {
    let lowercase = content.to_lowercase();
    keywords
        .iter()
        .all(|keyword| lowercase.contains(&keyword.to_lowercase()))
}

/// Enum discriminants as written in Rust source: `Name = 3,`.
pub fn rust_error_codes(source: &str) -> Vec<(String, u32)> {
    let pattern = Regex::new(r"(?m)^\s*([A-Z][A-Za-z]+)\s*=\s*(\d+),").unwrap();
    pattern
        .captures_iter(source)
        .map(|c| (c[1].to_string(), c[2].parse().unwrap()))
        .collect()
}

/// Error table rows in markdown: `| 3 | `Name` | ... |`.
pub fn documented_error_codes(content: &str) -> Vec<(String, u32)> {
    let pattern = Regex::new(r"(?m)^\|\s*(\d+)\s*\|\s*`([A-Za-z]+)`\s*\|").unwrap();
    pattern
        .captures_iter(content)
        .map(|c| (c[2].to_string(), c[1].parse().unwrap()))
        .collect()
}

fn parse_header(line: &str) -> Option<(usize, &str)> {
    if !line.starts_with('#') {
        return None;
    }
    let level = line.chars().take_while(|&c| c == '#').count();
    Some((level, line.trim_start_matches('#').trim()))
}
