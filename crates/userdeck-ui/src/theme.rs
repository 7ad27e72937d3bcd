//! Color palette and spacing scale.
//!
//! Dark surfaces with violet and blue accents. Views reference these
//! instead of literal colors.

use gpui::{Rgba, rgb};

// Surfaces, darkest first
pub fn void() -> Rgba {
    rgb(0x0a0a0f)
}

pub fn obsidian() -> Rgba {
    rgb(0x111118)
}

pub fn surface() -> Rgba {
    rgb(0x1a1a24)
}

pub fn elevated() -> Rgba {
    rgb(0x242432)
}

pub fn border() -> Rgba {
    rgb(0x33334a)
}

pub fn border_subtle() -> Rgba {
    rgb(0x222230)
}

// Text
pub fn text_white() -> Rgba {
    rgb(0xffffff)
}

pub fn text() -> Rgba {
    rgb(0xd4d4dc)
}

pub fn text_muted() -> Rgba {
    rgb(0x9a9aae)
}

pub fn text_subtle() -> Rgba {
    rgb(0x6b6b80)
}

// Accents
pub fn violet() -> Rgba {
    rgb(0xa78bfa)
}

pub fn blue() -> Rgba {
    rgb(0x60a5fa)
}

pub fn green() -> Rgba {
    rgb(0x4ade80)
}

pub fn orange() -> Rgba {
    rgb(0xfb923c)
}

pub fn ember() -> Rgba {
    rgb(0xf87171)
}

pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba { a: alpha, ..color }
}

pub const SPACE_1: f32 = 4.0;
pub const SPACE_2: f32 = 8.0;
pub const SPACE_3: f32 = 12.0;
pub const SPACE_4: f32 = 16.0;
pub const SPACE_6: f32 = 24.0;
pub const SPACE_8: f32 = 32.0;

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 13.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 18.0;
pub const TEXT_XL: f32 = 22.0;
pub const TEXT_3XL: f32 = 32.0;
pub const TEXT_HERO: f32 = 56.0;

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 8.0;
pub const RADIUS_LG: f32 = 12.0;
pub const RADIUS_FULL: f32 = 9999.0;
