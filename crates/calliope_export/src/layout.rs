//! Page metrics and text flow for the exported document.

/// US letter width in millimeters.
pub const PAGE_WIDTH_MM: f32 = 215.9;
/// US letter height in millimeters.
pub const PAGE_HEIGHT_MM: f32 = 279.4;
/// Left margin for text and images.
pub const MARGIN_MM: f32 = 18.0;
/// Distance from the page top to the first baseline.
pub const TOP_MARGIN_MM: f32 = 18.0;
/// Content never extends below this distance from the page bottom.
pub const BOTTOM_MARGIN_MM: f32 = 18.0;
/// Baseline-to-baseline height of one body text line.
pub const LINE_HEIGHT_MM: f32 = 5.0;
/// Fixed render width for every illustration; height follows aspect ratio.
pub const IMAGE_WIDTH_MM: f32 = 106.0;
/// Vertical gap between one turn's block and the next.
pub const BLOCK_GAP_MM: f32 = 7.0;
/// Column width the body text is wrapped at.
pub const WRAP_COLUMNS: usize = 90;

/// Word-wrap text to a column width, preserving paragraph breaks.
///
/// Each input line wraps independently; blank lines survive as blank lines.
/// A single word longer than the column width is kept whole on its own line
/// rather than split.
///
/// # Examples
///
/// ```
/// use calliope_export::wrap_text;
///
/// let lines = wrap_text("one two three", 9);
/// assert_eq!(lines, vec!["one two", "three"]);
///
/// assert_eq!(wrap_text("a\n\nb", 80), vec!["a", "", "b"]);
/// ```
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.len() + 1 + word.len() <= columns {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines
}
