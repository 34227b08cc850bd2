//! Slider backgrounds derived from the wheel's colors.

use std::fmt;

use crate::checkerboard::CheckerPattern;
use crate::color::{Color, ColorFormat};

/// Left-to-right gradient between two colors.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Color,
    pub to: Color,
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient(90deg, {}, {})", self.from, self.to)
    }
}

/// Everything a slider paints under its thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderBackground {
    pub gradient: LinearGradient,
    /// Pattern painted beneath the gradient, if any.
    pub backdrop: Option<CheckerPattern>,
}

impl SliderBackground {
    /// Transparent → `tinted`, over `pattern`.
    pub fn opacity(tinted: &Color, pattern: &CheckerPattern) -> Self {
        let [r, g, b] = tinted.rgb();
        Self {
            gradient: LinearGradient {
                from: Color::new(ColorFormat::Rgba, [r, g, b, 0.0]),
                to: *tinted,
            },
            backdrop: Some(pattern.clone()),
        }
    }

    /// Black → `raw`.
    pub fn brightness(raw: &Color) -> Self {
        Self {
            gradient: LinearGradient {
                from: Color::BLACK,
                to: *raw,
            },
            backdrop: None,
        }
    }
}

impl Default for SliderBackground {
    fn default() -> Self {
        Self::brightness(&Color::WHITE)
    }
}

impl fmt::Display for SliderBackground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gradient)?;
        if let Some(pattern) = &self.backdrop {
            write!(f, ", {pattern}")?;
        }
        Ok(())
    }
}
