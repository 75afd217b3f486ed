//! Loading grid collections from disk
//!
//! Two formats are accepted:
//! - JSON: an array of grids, each an array of rows of codes (`null` marks
//!   an absent cell)
//! - CSV: no header, one grid row per record, every three records form a
//!   grid; empty fields are absent cells

use crate::constants::GRID_ROWS;
use crate::types::{Grid, GridError, Result};
use std::path::Path;

pub async fn load_grids(path: impl AsRef<Path>) -> Result<Vec<Grid>> {
    let path = path.as_ref().to_owned();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let contents = tokio::fs::read_to_string(&path).await?;

    let grids = tokio::task::spawn_blocking(move || {
        if is_csv {
            parse_csv_grids(&contents)
        } else {
            parse_json_grids(&contents)
        }
    })
    .await??;

    log::info!("Loaded {} grids from {}", grids.len(), path.display());
    Ok(grids)
}

pub fn parse_json_grids(contents: &str) -> Result<Vec<Grid>> {
    Ok(serde_json::from_str(contents)?)
}

pub fn parse_csv_grids(contents: &str) -> Result<Vec<Grid>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(rows.len() + 1, |p| p.line() as usize);
        let row = record
            .iter()
            .map(|field| parse_code(field, line))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Ok(rows
        .chunks(GRID_ROWS)
        .map(|chunk| Grid::new(chunk.to_vec()))
        .collect())
}

fn parse_code(field: &str, line: usize) -> Result<Option<u32>> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| GridError::Input(format!("line {}: invalid cell code '{}'", line, field)))
}
