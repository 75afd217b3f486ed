//! Pictogram grid sheets
//!
//! Lays out 3x5 pictogram grids four to a landscape page and renders them
//! to PDF:
//! 1. Assign each grid a page and quadrant (`layout`)
//! 2. Draw cells, pictograms, labels and borders (`render`)
//! 3. Serialize the recorded pages with `printpdf` (`document`)

mod assets;
pub mod constants;
pub mod document;
mod input;
pub mod layout;
mod options;
mod palette;
mod render;
mod stats;
mod types;

pub use assets::{
    AssetError, AssetLookup, AssetSource, DirectoryAssets, HttpAssets, NoAssets, asset_file_name,
};
pub use document::{DrawOp, GridDocument, Page, PageIndex};
pub use input::{load_grids, parse_csv_grids, parse_json_grids};
pub use options::{AssetLocation, PaletteMode, RenderOptions};
pub use palette::{FixedPalette, PaletteProvider, RandomPalettes, THEMES, Theme, find_theme};
pub use render::{GridRenderer, LABEL_FONT, draw_borders};
pub use stats::{GridStatistics, calculate_statistics};
pub use types::*;

use layout::plan_pages;
use std::path::Path;

/// Lay out and draw every grid, returning the unserialized document.
///
/// Grids are rendered strictly in order, four per page.
pub async fn render_grids<A, P>(
    grids: &[Grid],
    assets: &A,
    palettes: &P,
    title: &str,
) -> Result<GridDocument>
where
    A: AssetSource,
    P: PaletteProvider + ?Sized,
{
    let mut doc = GridDocument::new(title);
    let renderer = GridRenderer::new(assets, palettes);

    for (grid, placement) in grids.iter().zip(plan_pages(grids.len())) {
        if placement.page_index == doc.pages().len() {
            doc.add_page();
        }
        log::debug!(
            "Grid {} on page {} at ({}, {})",
            placement.grid_index,
            placement.page_index,
            placement.origin.x,
            placement.origin.y
        );
        renderer
            .render_grid(&mut doc, placement.page_index, grid, placement.origin)
            .await?;
    }

    Ok(doc)
}

/// Serialized output of a render
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
    /// Pictogram cells drawn with a label only
    pub missing_pictograms: usize,
}

/// Render every grid and serialize the result to PDF bytes
pub async fn render_grids_to_document<A, P>(
    grids: &[Grid],
    assets: &A,
    palettes: &P,
    title: &str,
) -> Result<Vec<u8>>
where
    A: AssetSource,
    P: PaletteProvider + ?Sized,
{
    Ok(render_and_serialize(grids, assets, palettes, title)
        .await?
        .bytes)
}

async fn render_and_serialize<A, P>(
    grids: &[Grid],
    assets: &A,
    palettes: &P,
    title: &str,
) -> Result<RenderedPdf>
where
    A: AssetSource,
    P: PaletteProvider + ?Sized,
{
    let doc = render_grids(grids, assets, palettes, title).await?;
    let pages = doc.pages().len();
    let missing_pictograms = doc.missing_images();

    // Serialization is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || doc.save()).await?;

    log::info!("Rendered {} grids on {} pages", grids.len(), pages);
    Ok(RenderedPdf {
        bytes,
        pages,
        missing_pictograms,
    })
}

/// Render with the asset source and palette mode described by `options`
pub async fn render_with_options(grids: &[Grid], options: &RenderOptions) -> Result<RenderedPdf> {
    options.validate()?;
    let palettes = options.palette_provider()?;

    match &options.assets {
        AssetLocation::None => {
            render_and_serialize(grids, &NoAssets, &*palettes, &options.title).await
        }
        AssetLocation::Directory { path } => {
            let assets = DirectoryAssets::new(path);
            render_and_serialize(grids, &assets, &*palettes, &options.title).await
        }
        AssetLocation::Http { base_url } => {
            let assets = HttpAssets::new(base_url.as_str());
            render_and_serialize(grids, &assets, &*palettes, &options.title).await
        }
    }
}

/// Write rendered PDF bytes to `path`
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}
