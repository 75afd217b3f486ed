//! Grid color palettes
//!
//! The renderer asks its [`PaletteProvider`] for a fresh palette once per
//! grid, so consecutive grids can look different.

use crate::types::{Palette, Rgb};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::{Mutex, PoisonError};

/// Source of per-grid palettes
pub trait PaletteProvider {
    fn palette(&self) -> Palette;
}

/// A named built-in palette
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub palette: Palette,
}

const fn rgb8(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

const fn theme(name: &'static str, background: Rgb, text: Rgb, border: Rgb) -> Theme {
    Theme {
        name,
        palette: Palette {
            background_secondary: background,
            text,
            border,
        },
    }
}

pub const THEMES: &[Theme] = &[
    theme(
        "ocean",
        rgb8(0xd6, 0xea, 0xf8),
        rgb8(0x1b, 0x4f, 0x72),
        rgb8(0x21, 0x61, 0x8c),
    ),
    theme(
        "forest",
        rgb8(0xd5, 0xf5, 0xe3),
        rgb8(0x14, 0x5a, 0x32),
        rgb8(0x1e, 0x84, 0x49),
    ),
    theme(
        "sunset",
        rgb8(0xfd, 0xeb, 0xd0),
        rgb8(0x78, 0x42, 0x12),
        rgb8(0xca, 0x6f, 0x1e),
    ),
    theme(
        "berry",
        rgb8(0xf4, 0xec, 0xf7),
        rgb8(0x4a, 0x23, 0x5a),
        rgb8(0x7d, 0x3c, 0x98),
    ),
    theme(
        "coral",
        rgb8(0xfa, 0xdb, 0xd8),
        rgb8(0x78, 0x28, 0x1f),
        rgb8(0xcb, 0x43, 0x35),
    ),
    theme(
        "slate",
        rgb8(0xea, 0xed, 0xed),
        rgb8(0x1c, 0x28, 0x33),
        rgb8(0x56, 0x65, 0x73),
    ),
];

/// Look up a built-in theme by name, ignoring case
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Picks a built-in theme at random for every grid
pub struct RandomPalettes {
    rng: Mutex<StdRng>,
}

impl RandomPalettes {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence of palettes
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPalettes {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteProvider for RandomPalettes {
    fn palette(&self) -> Palette {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        THEMES
            .choose(&mut *rng)
            .unwrap_or(&THEMES[0])
            .palette
            .clone()
    }
}

/// The same palette for every grid
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPalette(pub Palette);

impl PaletteProvider for FixedPalette {
    fn palette(&self) -> Palette {
        self.0.clone()
    }
}
