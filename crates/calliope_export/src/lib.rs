//! Paginated PDF export for story sessions.
//!
//! [`render_story`] is a pure function of the turn list: it re-flows each
//! turn's narrative as wrapped text, places illustrations below their text at
//! a fixed width with aspect ratio preserved, breaks pages when an image
//! would cross the bottom margin, and returns one complete in-memory byte
//! buffer. Repeated calls on unchanged input produce byte-identical output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layout;
mod pdf;

pub use layout::{
    BLOCK_GAP_MM, BOTTOM_MARGIN_MM, IMAGE_WIDTH_MM, LINE_HEIGHT_MM, MARGIN_MM, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM, TOP_MARGIN_MM, WRAP_COLUMNS, wrap_text,
};
pub use pdf::{EXPORT_FILENAME, render_story};
