//! Cheap, infallible probes used by detectors.

use serde_json::Value;

/// Returns `true` if `filename` ends with `.{ext}`, ignoring ASCII case.
///
/// ```
/// use chatimport::parsing::has_extension;
///
/// assert!(has_extension("Export.JSON", "json"));
/// assert!(has_extension("team.chatlab.json", "json"));
/// assert!(!has_extension("json", "json"));
/// ```
pub fn has_extension(filename: &str, ext: &str) -> bool {
    let Some(dot) = filename.len().checked_sub(ext.len() + 1) else {
        return false;
    };
    filename.is_char_boundary(dot)
        && filename[dot..].starts_with('.')
        && filename[dot + 1..].eq_ignore_ascii_case(ext)
}

/// Strips a leading UTF-8 byte order mark, if any.
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// Deserializes `content` as a JSON object for shape checks.
///
/// Returns `None` for anything that is not a JSON object, including invalid
/// JSON. Content that does not start with `{` is rejected without running
/// the JSON parser.
pub fn probe_json(content: &str) -> Option<Value> {
    let trimmed = strip_bom(content).trim_start();
    if !trimmed.starts_with('{') {
        return None;
    }
    serde_json::from_str::<Value>(trimmed)
        .ok()
        .filter(Value::is_object)
}

/// Returns the filename without directories and without its last extension.
///
/// ```
/// use chatimport::parsing::file_stem;
///
/// assert_eq!(file_stem("exports/Team Chat.txt"), "Team Chat");
/// assert_eq!(file_stem(r"C:\logs\friends.txt"), "friends");
/// assert_eq!(file_stem("noext"), "noext");
/// ```
pub fn file_stem(filename: &str) -> &str {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(dot) => &base[..dot],
    }
}
