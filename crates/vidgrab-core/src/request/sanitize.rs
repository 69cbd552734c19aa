//! Filename sanitization for user-supplied output names.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Sanitizes a custom output name for safe use on Linux.
///
/// - Replaces each run of NUL, `/`, `\`, and control characters with one `_`
/// - Trims leading/trailing spaces, dots, and such replacement `_`
///   (underscores the user typed are kept)
/// - Limits length to 255 bytes, leaving `reserve` bytes for the extension
///
/// Inner spaces are kept; a user typing "My Video" gets "My Video.mp4".
pub fn sanitize_filename(name: &str, reserve: usize) -> String {
    // (char, was_replaced)
    let mut chars: Vec<(char, bool)> = Vec::with_capacity(name.len());
    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !matches!(chars.last(), Some((_, true))) {
                chars.push(('_', true));
            }
        } else {
            chars.push((c, false));
        }
    }

    let trimmable = |&(c, replaced): &(char, bool)| replaced || c == ' ' || c == '.';
    let start = chars.iter().position(|t| !trimmable(t)).unwrap_or(chars.len());
    let end = chars
        .iter()
        .rposition(|t| !trimmable(t))
        .map_or(start, |i| i + 1);
    let trimmed: String = chars[start..end].iter().map(|&(c, _)| c).collect();

    let limit = NAME_MAX.saturating_sub(reserve);
    if trimmed.len() > limit {
        let mut take = limit;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed
    }
}

/// Escapes `%` so yt-dlp does not read it as the start of a template field.
pub fn escape_template(name: &str) -> String {
    name.replace('%', "%%")
}
