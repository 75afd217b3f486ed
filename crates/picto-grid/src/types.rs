use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{GRID_COLUMNS, GRID_ROWS};

#[derive(Error, Debug)]
pub enum GridError {
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Image error: {0}")]
    Image(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Content of a present cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Code 0: background fill only
    Empty,
    /// Any other code: pictogram lookup key and label
    Asset(u32),
}

impl Cell {
    pub fn from_code(code: u32) -> Self {
        if code == 0 { Cell::Empty } else { Cell::Asset(code) }
    }
}

/// One pictogram table: up to 3 rows of up to 5 optional codes.
///
/// Short rows, missing rows and `None` entries are "no cell" positions and
/// are never drawn. Anything outside the 3x5 window is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Option<u32>>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<u32>>>) -> Self {
        Self { rows }
    }

    /// Build a grid where every listed position is present
    pub fn from_codes(rows: Vec<Vec<u32>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<Option<u32>>] {
        &self.rows
    }

    /// Cell at `(row, col)`, or `None` when the position is absent
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= GRID_ROWS || col >= GRID_COLUMNS {
            return None;
        }
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .flatten()
            .map(Cell::from_code)
    }

    /// Present cells inside the 3x5 window, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..GRID_ROWS).flat_map(move |row| {
            (0..GRID_COLUMNS).filter_map(move |col| self.cell(row, col).map(|c| (row, col, c)))
        })
    }
}

/// RGB color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(GridError::Config(format!("Invalid color: {}", hex)));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| GridError::Config(format!("Invalid color: {}", hex)))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl From<Rgb> for printpdf::Color {
    fn from(color: Rgb) -> Self {
        printpdf::Color::Rgb(printpdf::Rgb::new(color.r, color.g, color.b, None))
    }
}

/// Colors used to render one grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Fill for empty (code 0) cells
    pub background_secondary: Rgb,
    /// Cell labels
    pub text: Rgb,
    /// Grid lines
    pub border: Rgb,
}
