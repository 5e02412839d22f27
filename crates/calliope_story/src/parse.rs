//! Splitting raw generation replies into narrative prose and options.

use derive_getters::Getters;

/// Numbered markers that classify a line as a continuation option.
const NUMERIC_MARKERS: [&str; 4] = ["1.", "2.", "3.", "4."];

/// Header line introducing the option list; excluded from both narrative and
/// options.
pub const OPTIONS_HEADER: &str = "Options:";

/// A raw reply split into clean narrative text and ordered choice strings.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ParsedReply {
    /// All non-option lines in original order, newlines preserved
    narrative: String,
    /// Trimmed numbered lines in original order (at most 4)
    options: Vec<String>,
}

impl ParsedReply {
    /// Consume the reply, yielding narrative and options.
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.narrative, self.options)
    }
}

/// Split a raw generation reply into narrative and options.
///
/// A line is an option line iff, after trimming, it starts with one of the
/// numbered markers `1.` through `4.` or with the literal `Options:` header.
/// Option lines are excluded from the narrative entirely; the header line is
/// never added to the options. A reply with no matching lines yields an
/// empty option list, which callers treat as a terminal turn rather than an
/// error.
///
/// Re-parsing the returned narrative is a no-op: it yields the same
/// narrative and no options.
///
/// # Examples
///
/// ```
/// use calliope_story::parse_reply;
///
/// let raw = "The forest was silent.\n\nOptions:\n1. Enter the forest\n2. Turn back";
/// let parsed = parse_reply(raw);
///
/// assert_eq!(parsed.narrative(), "The forest was silent.\n");
/// assert_eq!(parsed.options().len(), 2);
/// assert_eq!(parsed.options()[0], "1. Enter the forest");
/// ```
pub fn parse_reply(raw: &str) -> ParsedReply {
    let mut narrative_lines = Vec::new();
    let mut options = Vec::new();

    for line in raw.split('\n') {
        let trimmed = line.trim();
        if NUMERIC_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
            options.push(trimmed.to_string());
        } else if trimmed.starts_with(OPTIONS_HEADER) {
            // Header line: dropped from both sides
        } else {
            narrative_lines.push(line);
        }
    }

    ParsedReply {
        narrative: narrative_lines.join("\n"),
        options,
    }
}
