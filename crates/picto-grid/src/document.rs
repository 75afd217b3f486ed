//! Output document
//!
//! Grids are drawn as a list of [`DrawOp`]s per page. The list is lowered to
//! `printpdf` operations only when the document is saved, so the recorded
//! drawing can be inspected before serialization. The `PdfDocument` itself is
//! built inside [`GridDocument::save`], which keeps `GridDocument` `Send`.

use crate::constants::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::layout::{Origin, Rect};
use crate::types::{GridError, Result, Rgb};
use printpdf::{
    BuiltinFont, LinePoint, Mm, Op, PaintMode, PdfDocument, PdfPage, PdfSaveOptions, Point,
    Polygon, PolygonRing, Pt, RawImage, TextItem, WindingOrder, XObjectId, XObjectTransform,
};

/// Index of a page within a [`GridDocument`]
pub type PageIndex = usize;

/// A raster image registered with the document
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    /// Position in the document's image table
    pub index: usize,
    /// Natural width in pixels
    pub width: f32,
    /// Natural height in pixels
    pub height: f32,
}

/// One drawing primitive on a page
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid fill, no stroke
    Rectangle { rect: Rect, color: Rgb },
    /// Image stretched over `rect`
    Image { image: EmbeddedImage, rect: Rect },
    /// Single line of text, `position` is the baseline start
    Text {
        text: String,
        position: Origin,
        size: f32,
        color: Rgb,
        font: BuiltinFont,
    },
    Line {
        start: Origin,
        end: Origin,
        color: Rgb,
        thickness: f32,
    },
}

/// A fixed-size page and everything drawn on it, in order
#[derive(Debug, Clone, Default)]
pub struct Page {
    ops: Vec<DrawOp>,
}

impl Page {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

/// Document under construction
pub struct GridDocument {
    title: String,
    images: Vec<RawImage>,
    pages: Vec<Page>,
    missing_images: usize,
}

impl GridDocument {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            images: Vec::new(),
            pages: Vec::new(),
            missing_images: 0,
        }
    }

    /// Append a blank page and return its index
    pub fn add_page(&mut self) -> PageIndex {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: PageIndex) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Cells that asked for a pictogram and were drawn without one
    pub fn missing_images(&self) -> usize {
        self.missing_images
    }

    pub fn record_missing_image(&mut self) {
        self.missing_images += 1;
    }

    /// Number of images registered so far
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Decode raster bytes (PNG, JPEG) and register them with the document
    pub fn embed_image(&mut self, bytes: &[u8]) -> Result<EmbeddedImage> {
        let mut warnings = Vec::new();
        let image = RawImage::decode_from_bytes(bytes, &mut warnings).map_err(GridError::Image)?;
        if image.width == 0 || image.height == 0 {
            return Err(GridError::Image("Image has no pixels".to_string()));
        }
        let width = image.width as f32;
        let height = image.height as f32;
        self.images.push(image);
        Ok(EmbeddedImage {
            index: self.images.len() - 1,
            width,
            height,
        })
    }

    pub fn draw(&mut self, page: PageIndex, op: DrawOp) -> Result<()> {
        let target = self
            .pages
            .get_mut(page)
            .ok_or_else(|| GridError::Pdf(format!("Page {} does not exist", page)))?;
        target.ops.push(op);
        Ok(())
    }

    /// Serialize to PDF bytes. CPU-bound; callers on a runtime should move
    /// the document into `spawn_blocking`.
    pub fn save(self) -> Vec<u8> {
        let width = Mm::from(Pt(PAGE_WIDTH_PT));
        let height = Mm::from(Pt(PAGE_HEIGHT_PT));

        let mut doc = PdfDocument::new(&self.title);
        let ids: Vec<XObjectId> = self.images.iter().map(|img| doc.add_image(img)).collect();

        doc.pages = self
            .pages
            .iter()
            .map(|page| {
                let ops = page.ops.iter().flat_map(|op| lower_op(op, &ids)).collect();
                PdfPage::new(width, height, ops)
            })
            .collect();

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF serialized with {} warnings", warnings.len());
        }
        bytes
    }
}

fn point(p: Origin) -> Point {
    Point {
        x: Pt(p.x),
        y: Pt(p.y),
    }
}

fn line_point(p: Origin) -> LinePoint {
    LinePoint {
        p: point(p),
        bezier: false,
    }
}

/// Translate one recorded primitive into content stream operations.
/// `images` maps image table positions to the XObjects added on save.
fn lower_op(op: &DrawOp, images: &[XObjectId]) -> Vec<Op> {
    match op {
        DrawOp::Rectangle { rect, color } => {
            let corners = [
                Origin::new(rect.x, rect.y),
                Origin::new(rect.x + rect.width, rect.y),
                Origin::new(rect.x + rect.width, rect.y + rect.height),
                Origin::new(rect.x, rect.y + rect.height),
            ];
            vec![
                Op::SaveGraphicsState,
                Op::SetFillColor {
                    col: (*color).into(),
                },
                Op::DrawPolygon {
                    polygon: Polygon {
                        rings: vec![PolygonRing {
                            points: corners.into_iter().map(line_point).collect(),
                        }],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    },
                },
                Op::RestoreGraphicsState,
            ]
        }
        DrawOp::Image { image, rect } => {
            let Some(id) = images.get(image.index) else {
                log::warn!("Skipping unregistered image {}", image.index);
                return Vec::new();
            };
            // dpi 72 makes one pixel one point before scaling
            vec![Op::UseXobject {
                id: id.clone(),
                transform: XObjectTransform {
                    translate_x: Some(Pt(rect.x)),
                    translate_y: Some(Pt(rect.y)),
                    scale_x: Some(rect.width / image.width),
                    scale_y: Some(rect.height / image.height),
                    dpi: Some(72.0),
                    ..Default::default()
                },
            }]
        }
        DrawOp::Text {
            text,
            position,
            size,
            color,
            font,
        } => vec![
            Op::SaveGraphicsState,
            Op::StartTextSection,
            Op::SetFillColor {
                col: (*color).into(),
            },
            Op::SetFontSizeBuiltinFont {
                size: Pt(*size),
                font: *font,
            },
            Op::SetTextCursor {
                pos: point(*position),
            },
            Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(text.clone())],
                font: *font,
            },
            Op::EndTextSection,
            Op::RestoreGraphicsState,
        ],
        DrawOp::Line {
            start,
            end,
            color,
            thickness,
        } => vec![
            Op::SaveGraphicsState,
            Op::SetOutlineColor {
                col: (*color).into(),
            },
            Op::SetOutlineThickness { pt: Pt(*thickness) },
            Op::DrawLine {
                line: printpdf::Line {
                    points: vec![line_point(*start), line_point(*end)],
                    is_closed: false,
                },
            },
            Op::RestoreGraphicsState,
        ],
    }
}
