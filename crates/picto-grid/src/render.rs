//! Single-grid rendering
//!
//! One pass over the 3x5 cell slots followed by the border pass:
//! - code 0 cells get a solid background fill
//! - other codes get their pictogram (when the source has one) and a label
//! - absent cells are skipped

use crate::assets::{AssetLookup, AssetSource};
use crate::constants::LABEL_FONT_SIZE;
use crate::document::{DrawOp, GridDocument, PageIndex};
use crate::layout::{Origin, Rect, border_lines, cell_rect, image_rect, label_position};
use crate::palette::PaletteProvider;
use crate::types::{Cell, Grid, Palette, Result, Rgb};
use printpdf::BuiltinFont;

/// Font for cell labels
pub const LABEL_FONT: BuiltinFont = BuiltinFont::HelveticaBold;

/// Draws grids using an asset source for pictograms and a palette provider
/// for colors.
pub struct GridRenderer<'a, A, P: ?Sized> {
    assets: &'a A,
    palettes: &'a P,
}

impl<'a, A: AssetSource, P: PaletteProvider + ?Sized> GridRenderer<'a, A, P> {
    pub fn new(assets: &'a A, palettes: &'a P) -> Self {
        Self { assets, palettes }
    }

    /// Render `grid` on `page` with its first row's bottom-left corner at `origin`.
    ///
    /// Missing pictograms are logged, counted on the document and skipped; an
    /// image that cannot be embedded fails the whole render.
    pub async fn render_grid(
        &self,
        doc: &mut GridDocument,
        page: PageIndex,
        grid: &Grid,
        origin: Origin,
    ) -> Result<()> {
        let palette = self.palettes.palette();

        for (row, col, cell) in grid.cells() {
            let rect = cell_rect(origin, row, col);
            match cell {
                Cell::Empty => doc.draw(
                    page,
                    DrawOp::Rectangle {
                        rect,
                        color: palette.background_secondary,
                    },
                )?,
                Cell::Asset(code) => {
                    self.render_asset(doc, page, code, rect, &palette).await?;
                }
            }
        }

        draw_borders(doc, page, origin, palette.border)
    }

    async fn render_asset(
        &self,
        doc: &mut GridDocument,
        page: PageIndex,
        code: u32,
        cell: Rect,
        palette: &Palette,
    ) -> Result<()> {
        match self.fetch(code).await {
            Some(bytes) => {
                let image = doc.embed_image(&bytes)?;
                let rect = image_rect(cell, image.width, image.height);
                doc.draw(page, DrawOp::Image { image, rect })?;
            }
            None => doc.record_missing_image(),
        }

        doc.draw(
            page,
            DrawOp::Text {
                text: code.to_string(),
                position: label_position(cell),
                size: LABEL_FONT_SIZE,
                color: palette.text,
                font: LABEL_FONT,
            },
        )
    }

    async fn fetch(&self, code: u32) -> Option<Vec<u8>> {
        match self.assets.fetch(code).await {
            Ok(AssetLookup::Found(bytes)) => Some(bytes),
            Ok(AssetLookup::NotFound) => {
                log::warn!("No pictogram for code {}", code);
                None
            }
            Err(e) => {
                log::warn!("Error fetching pictogram for code {}: {}", code, e);
                None
            }
        }
    }
}

/// Stroke the table lines of a grid, outer edges heavier than inner ones
pub fn draw_borders(
    doc: &mut GridDocument,
    page: PageIndex,
    origin: Origin,
    color: Rgb,
) -> Result<()> {
    for line in border_lines(origin) {
        doc.draw(
            page,
            DrawOp::Line {
                start: line.start,
                end: line.end,
                color,
                thickness: line.thickness,
            },
        )?;
    }
    Ok(())
}
