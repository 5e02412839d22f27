//! Document assembly: turns in, one complete PDF byte buffer out.

use crate::layout::{
    BLOCK_GAP_MM, BOTTOM_MARGIN_MM, IMAGE_WIDTH_MM, LINE_HEIGHT_MM, MARGIN_MM, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM, TOP_MARGIN_MM, WRAP_COLUMNS, wrap_text,
};
use calliope_core::{ImageSource, Turn};
use calliope_error::{CalliopeResult, ExportError, ExportErrorKind};
use calliope_interface::AssetFetcher;
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tracing::{debug, instrument, warn};

/// Filename convention for the downloaded document.
pub const EXPORT_FILENAME: &str = "interactive_story.pdf";

const DOC_TITLE: &str = "Your Interactive Story";
const TITLE_SIZE_PT: f32 = 24.0;
const BODY_SIZE_PT: f32 = 12.0;
/// Vertical space consumed by the title block on page 1.
const TITLE_GAP_MM: f32 = 17.0;
/// Images are embedded at this resolution; scale factors are relative to it.
const IMAGE_DPI: f32 = 300.0;
const MM_PER_PT: f32 = 0.352_778;

/// Track the current layer and a descending baseline cursor (mm from the
/// page bottom).
struct PageCursor {
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor {
    fn break_page(&mut self, doc: &PdfDocumentReference) {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - TOP_MARGIN_MM;
    }
}

/// Render the full turn list into a paginated PDF.
///
/// A pure function of its input: document metadata uses fixed dates and the
/// trailer document ID is pinned after assembly, so two calls with the same
/// turns produce byte-identical output. Referenced
/// images are fetched through `fetcher`; a fetch or decode failure skips
/// that turn's image (with a warning) and never aborts the export.
///
/// # Errors
///
/// Returns an error only for document assembly failures: font registration
/// or final serialization.
#[instrument(skip_all, fields(turns = turns.len()))]
pub async fn render_story<F>(turns: &[Turn], fetcher: &F) -> CalliopeResult<Vec<u8>>
where
    F: AssetFetcher,
{
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOC_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    // Fixed dates keep repeated exports byte-identical.
    let doc = doc
        .with_creation_date(time::OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(time::OffsetDateTime::UNIX_EPOCH);

    let body_font = builtin_font(&doc, BuiltinFont::Helvetica)?;
    let title_font = builtin_font(&doc, BuiltinFont::HelveticaBold)?;

    let mut cursor = PageCursor {
        layer: doc.get_page(first_page).get_layer(first_layer),
        y: PAGE_HEIGHT_MM - TOP_MARGIN_MM,
    };

    cursor.layer.use_text(
        DOC_TITLE,
        TITLE_SIZE_PT,
        Mm(centered_x(DOC_TITLE, TITLE_SIZE_PT)),
        Mm(cursor.y),
        &title_font,
    );
    cursor.y -= TITLE_GAP_MM;

    for turn in turns {
        flow_text(&doc, &mut cursor, &body_font, turn.narrative());

        if let Some(source) = turn.image() {
            match image_bytes(source, fetcher).await {
                Ok(bytes) => place_image(&doc, &mut cursor, &bytes, *turn.index()),
                Err(e) => {
                    warn!(index = *turn.index(), error = %e, "Skipping image: fetch failed");
                }
            }
        }

        cursor.y -= BLOCK_GAP_MM;
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ExportError::new(ExportErrorKind::Document(e.to_string())))?;
    stabilize_document_id(&bytes)
}

/// Rewrite the trailer `/ID` to a fixed pair.
///
/// The generator randomizes the document ID on every save, which would break
/// repeat-export byte identity even with fixed metadata dates.
fn stabilize_document_id(bytes: &[u8]) -> CalliopeResult<Vec<u8>> {
    let mut doc = lopdf::Document::load_mem(bytes)
        .map_err(|e| ExportError::new(ExportErrorKind::Document(e.to_string())))?;

    let id = lopdf::Object::Array(vec![
        lopdf::Object::String(vec![0u8; 16], lopdf::StringFormat::Literal),
        lopdf::Object::String(vec![0u8; 16], lopdf::StringFormat::Literal),
    ]);
    doc.trailer.set("ID", id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ExportError::new(ExportErrorKind::Document(e.to_string())))?;
    Ok(out)
}

fn builtin_font(
    doc: &PdfDocumentReference,
    font: BuiltinFont,
) -> CalliopeResult<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| ExportError::new(ExportErrorKind::Font(e.to_string())).into())
}

/// Write wrapped body text, breaking pages when a line would reach the
/// bottom margin. Text flow owns its own page breaks; the image placement
/// below makes its own check.
fn flow_text(doc: &PdfDocumentReference, cursor: &mut PageCursor, font: &IndirectFontRef, text: &str) {
    for line in wrap_text(text, WRAP_COLUMNS) {
        if cursor.y < BOTTOM_MARGIN_MM + LINE_HEIGHT_MM {
            cursor.break_page(doc);
        }
        if !line.is_empty() {
            cursor
                .layer
                .use_text(line, BODY_SIZE_PT, Mm(MARGIN_MM), Mm(cursor.y), font);
        }
        cursor.y -= LINE_HEIGHT_MM;
    }
}

/// Decode and place one illustration below the current text block at the
/// fixed render width, preserving aspect ratio. Emits a page break first if
/// the image would cross the bottom margin.
fn place_image(doc: &PdfDocumentReference, cursor: &mut PageCursor, bytes: &[u8], index: usize) {
    let decoded = match printpdf::image_crate::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(index, error = %e, "Skipping image: decode failed");
            return;
        }
    };

    let (px_w, px_h) = (decoded.width(), decoded.height());
    if px_w == 0 || px_h == 0 {
        warn!(index, "Skipping image: zero-sized raster");
        return;
    }
    let render_w = IMAGE_WIDTH_MM;
    let render_h = render_w * (px_h as f32 / px_w as f32);

    if cursor.y - render_h < BOTTOM_MARGIN_MM {
        cursor.break_page(doc);
    }

    // Scale from the image's natural size at the embedding DPI to the fixed
    // render width.
    let natural_w = px_w as f32 * 25.4 / IMAGE_DPI;
    let natural_h = px_h as f32 * 25.4 / IMAGE_DPI;

    let image = Image::from_dynamic_image(&decoded);
    image.add_to_layer(
        cursor.layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN_MM)),
            translate_y: Some(Mm(cursor.y - render_h)),
            scale_x: Some(render_w / natural_w),
            scale_y: Some(render_h / natural_h),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
    debug!(index, render_h, "Placed image");

    cursor.y -= render_h;
}

async fn image_bytes<F>(source: &ImageSource, fetcher: &F) -> CalliopeResult<Vec<u8>>
where
    F: AssetFetcher,
{
    match source {
        ImageSource::Reference(url) => fetcher.fetch(url).await,
        ImageSource::Inline(image) => Ok(image.bytes().clone()),
    }
}

fn centered_x(text: &str, font_size_pt: f32) -> f32 {
    // Approximate Helvetica advance at half an em per glyph.
    let width_mm = text.len() as f32 * font_size_pt * 0.5 * MM_PER_PT;
    ((PAGE_WIDTH_MM - width_mm) / 2.0).max(MARGIN_MM)
}
