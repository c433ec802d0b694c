//! Whitespace and case normalization shared by the readable strategies

/// Collapse whitespace runs to one space, trim, lowercase
pub fn normalize_slug_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Clean a single-line form field: drop control characters, collapse whitespace, trim
pub fn sanitize_text_field(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
