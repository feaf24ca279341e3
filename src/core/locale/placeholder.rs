/// Marker the target locale carries until a human translates the entry.
pub const PLACEHOLDER_MARKER: &str = "需要翻译";

/// Placeholder value for the target locale: `[需要翻译: <text>]`.
pub fn placeholder_translation(text: &str) -> String {
    format!("[{}: {}]", PLACEHOLDER_MARKER, text)
}
