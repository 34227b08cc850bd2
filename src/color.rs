//! Color value type shared by the picker and its adapters.
//!
//! A [`Color`] stores an unquantized RGB triple (0–255), an alpha channel
//! (0.0–1.0) and the [`ColorFormat`] it was written in. Arithmetic always
//! happens on the numeric representation; the format only decides how the
//! color is rendered back to text.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::math;

/// Textual notation a color was written in, and will be rendered back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// CSS color keyword, e.g. `white`.
    Nickname,
    /// `#rrggbb`, or `#rrggbbaa` when translucent.
    Hex,
    /// `#rgb`, or `#rgba` when translucent.
    ShortHex,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `rgba(r, g, b, a)`.
    Rgba,
    /// `hsl(h, s%, l%)`.
    Hsl,
    /// `hsla(h, s%, l%, a)`.
    Hsla,
}

/// RGBA color with a remembered text format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    rgb: [f64; 3],
    alpha: f64,
    format: ColorFormat,
}

const NICKNAMES: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("orange", [255, 165, 0]),
    // Aliases: parsed, never rendered (the canonical name above wins).
    ("grey", [128, 128, 128]),
    ("magenta", [255, 0, 255]),
    ("cyan", [0, 255, 255]),
];

impl Color {
    pub const WHITE: Color = Color {
        rgb: [255.0, 255.0, 255.0],
        alpha: 1.0,
        format: ColorFormat::Nickname,
    };

    pub const BLACK: Color = Color {
        rgb: [0.0, 0.0, 0.0],
        alpha: 1.0,
        format: ColorFormat::Nickname,
    };

    pub const TRANSPARENT: Color = Color {
        rgb: [0.0, 0.0, 0.0],
        alpha: 0.0,
        format: ColorFormat::Nickname,
    };

    /// Build a color from a representation tag and its four components.
    ///
    /// For [`ColorFormat::Hsl`] and [`ColorFormat::Hsla`] the components are
    /// hue in degrees, saturation and lightness in percent, and alpha. For
    /// every other format they are red, green, blue (0–255) and alpha.
    /// Out-of-range components are clamped.
    pub fn new(format: ColorFormat, components: [f64; 4]) -> Self {
        let [c0, c1, c2, alpha] = components;
        let rgb = match format {
            ColorFormat::Hsl | ColorFormat::Hsla => {
                let h = (c0 / 360.0).rem_euclid(1.0);
                let s = (c1 / 100.0).clamp(0.0, 1.0);
                let l = (c2 / 100.0).clamp(0.0, 1.0);
                math::hsl_to_rgb(h, s, l).map(|c| c * 255.0)
            }
            _ => [c0, c1, c2].map(|c| c.clamp(0.0, 255.0)),
        };
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
            format,
        }
    }

    /// Create from HSB/HSV values (all 0.0–1.0), in [`ColorFormat::Rgb`].
    pub fn from_hsb(h: f64, s: f64, b: f64, alpha: f64) -> Self {
        let rgb = math::hsb_to_rgb(h, s.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
        Self {
            rgb: rgb.map(|c| c * 255.0),
            alpha: alpha.clamp(0.0, 1.0),
            format: ColorFormat::Rgb,
        }
    }

    /// Red, green and blue in 0–255, unrounded.
    pub fn rgb(&self) -> [f64; 3] {
        self.rgb
    }

    /// Alpha channel (0.0–1.0).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Format this color renders in by default.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_format(self, format: ColorFormat) -> Self {
        Self { format, ..self }
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.rgb.map(|c| c / 255.0))
    }

    /// Convert to HSL (all 0.0–1.0). Returns (h, s, l).
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        math::rgb_to_hsl(self.rgb.map(|c| c / 255.0))
    }

    /// Render in `format`.
    ///
    /// Formats that cannot carry the color exactly fall back to one that
    /// can: `rgb`/`hsl` become `rgba`/`hsla` when translucent, short hex
    /// widens to long hex, and a keyword is used only on an exact match.
    pub fn to_string_in(&self, format: ColorFormat) -> String {
        let translucent = self.alpha < 1.0;
        match format {
            ColorFormat::Nickname => match self.nickname() {
                Some(name) => name.to_string(),
                None if translucent => self.to_string_in(ColorFormat::Rgba),
                None => self.to_string_in(ColorFormat::Hex),
            },
            ColorFormat::Hex => {
                let [r, g, b] = self.rgb8();
                if translucent {
                    format!("#{r:02x}{g:02x}{b:02x}{:02x}", self.alpha8())
                } else {
                    format!("#{r:02x}{g:02x}{b:02x}")
                }
            }
            ColorFormat::ShortHex => {
                let [r, g, b] = self.rgb8();
                let a = self.alpha8();
                let shortenable = [r, g, b, a].iter().all(|byte| byte % 17 == 0);
                if !shortenable {
                    self.to_string_in(ColorFormat::Hex)
                } else if translucent {
                    format!("#{:x}{:x}{:x}{:x}", r / 17, g / 17, b / 17, a / 17)
                } else {
                    format!("#{:x}{:x}{:x}", r / 17, g / 17, b / 17)
                }
            }
            ColorFormat::Rgb if !translucent => {
                let [r, g, b] = self.rgb8();
                format!("rgb({r}, {g}, {b})")
            }
            ColorFormat::Rgb | ColorFormat::Rgba => {
                let [r, g, b] = self.rgb8();
                format!("rgba({r}, {g}, {b}, {})", format_alpha(self.alpha))
            }
            ColorFormat::Hsl if !translucent => {
                let (h, s, l) = self.hsl_rounded();
                format!("hsl({h}, {s}%, {l}%)")
            }
            ColorFormat::Hsl | ColorFormat::Hsla => {
                let (h, s, l) = self.hsl_rounded();
                format!("hsla({h}, {s}%, {l}%, {})", format_alpha(self.alpha))
            }
        }
    }

    fn rgb8(&self) -> [u8; 3] {
        self.rgb.map(|c| c.round() as u8)
    }

    fn alpha8(&self) -> u8 {
        (self.alpha * 255.0).round() as u8
    }

    fn hsl_rounded(&self) -> (i64, i64, i64) {
        let (h, s, l) = self.to_hsl();
        (
            ((h * 360.0).round() as i64) % 360,
            (s * 100.0).round() as i64,
            (l * 100.0).round() as i64,
        )
    }

    fn nickname(&self) -> Option<&'static str> {
        let rgb = self.rgb8();
        if self.alpha == 0.0 && rgb == [0, 0, 0] {
            return Some("transparent");
        }
        if self.alpha < 1.0 {
            return None;
        }
        NICKNAMES
            .iter()
            .find(|(_, value)| *value == rgb)
            .map(|(name, _)| *name)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_in(self.format))
    }
}

/// Alpha in its shortest form, at most three decimals.
fn format_alpha(alpha: f64) -> String {
    format!("{}", (alpha * 1000.0).round() / 1000.0)
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(ParseColorError::Empty);
        }
        let lower = text.to_ascii_lowercase();

        if let Some(digits) = lower.strip_prefix('#') {
            return parse_hex(digits);
        }

        if let Some(open) = lower.find('(') {
            let function = lower[..open].trim();
            let body = lower[open + 1..].trim_end().strip_suffix(')').ok_or_else(|| {
                invalid_function(function, "missing closing parenthesis".to_string())
            })?;
            return parse_function(function, body);
        }

        if lower == "transparent" {
            return Ok(Self::TRANSPARENT);
        }
        NICKNAMES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, [r, g, b])| {
                Self::new(
                    ColorFormat::Nickname,
                    [*r as f64, *g as f64, *b as f64, 1.0],
                )
            })
            .ok_or_else(|| ParseColorError::Unknown(text.to_string()))
    }
}

fn parse_hex(digits: &str) -> Result<Color, ParseColorError> {
    let invalid = || ParseColorError::InvalidHex(format!("#{digits}"));
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let (format, bytes): (ColorFormat, Vec<u8>) = match digits.len() {
        3 | 4 => (
            ColorFormat::ShortHex,
            digits
                .chars()
                .map(|c| c.to_digit(16).map(|n| n as u8 * 17))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
        ),
        6 | 8 => (
            ColorFormat::Hex,
            (0..digits.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
        ),
        _ => return Err(invalid()),
    };

    let alpha = bytes.get(3).map_or(1.0, |a| *a as f64 / 255.0);
    Ok(Color::new(
        format,
        [bytes[0] as f64, bytes[1] as f64, bytes[2] as f64, alpha],
    ))
}

fn parse_function(function: &str, body: &str) -> Result<Color, ParseColorError> {
    let format = match function {
        "rgb" => ColorFormat::Rgb,
        "rgba" => ColorFormat::Rgba,
        "hsl" => ColorFormat::Hsl,
        "hsla" => ColorFormat::Hsla,
        _ => return Err(ParseColorError::Unknown(format!("{function}({body})"))),
    };

    let args: Vec<&str> = if body.contains(',') {
        body.split(',').map(str::trim).collect()
    } else {
        body.split(|c: char| c.is_whitespace() || c == '/')
            .filter(|arg| !arg.is_empty())
            .collect()
    };
    if args.len() != 3 && args.len() != 4 {
        return Err(invalid_function(
            function,
            format!("expected 3 or 4 arguments, found {}", args.len()),
        ));
    }

    let alpha = match args.get(3) {
        Some(arg) => parse_alpha(function, arg)?,
        None => 1.0,
    };

    let components = match format {
        ColorFormat::Hsl | ColorFormat::Hsla => {
            let hue = args[0].strip_suffix("deg").unwrap_or(args[0]);
            [
                parse_number(function, hue)?,
                parse_number(function, args[1].trim_end_matches('%'))?,
                parse_number(function, args[2].trim_end_matches('%'))?,
                alpha,
            ]
        }
        _ => [
            parse_channel(function, args[0])?,
            parse_channel(function, args[1])?,
            parse_channel(function, args[2])?,
            alpha,
        ],
    };
    Ok(Color::new(format, components))
}

fn parse_channel(function: &str, arg: &str) -> Result<f64, ParseColorError> {
    match arg.strip_suffix('%') {
        Some(percent) => Ok(parse_number(function, percent)? / 100.0 * 255.0),
        None => parse_number(function, arg),
    }
}

fn parse_alpha(function: &str, arg: &str) -> Result<f64, ParseColorError> {
    match arg.strip_suffix('%') {
        Some(percent) => Ok(parse_number(function, percent)? / 100.0),
        None => parse_number(function, arg),
    }
}

fn parse_number(function: &str, arg: &str) -> Result<f64, ParseColorError> {
    arg.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| invalid_function(function, format!("`{arg}` is not a number")))
}

fn invalid_function(function: &str, reason: String) -> ParseColorError {
    ParseColorError::InvalidFunction {
        function: function.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn parse(text: &str) -> Color {
        text.parse().unwrap()
    }

    #[test]
    fn parses_each_notation_with_its_format() {
        assert_eq!(parse("#f80").format(), ColorFormat::ShortHex);
        assert_eq!(parse("#f808").format(), ColorFormat::ShortHex);
        assert_eq!(parse("#FF8800").format(), ColorFormat::Hex);
        assert_eq!(parse("#ff880080").format(), ColorFormat::Hex);
        assert_eq!(parse("rgb(1, 2, 3)").format(), ColorFormat::Rgb);
        assert_eq!(parse("RGBA(1, 2, 3, 0.5)").format(), ColorFormat::Rgba);
        assert_eq!(parse("hsl(120, 50%, 50%)").format(), ColorFormat::Hsl);
        assert_eq!(parse("hsla(120deg, 50%, 50%, 1)").format(), ColorFormat::Hsla);
        assert_eq!(parse(" Red ").format(), ColorFormat::Nickname);
        assert_eq!(parse("transparent").format(), ColorFormat::Nickname);
    }

    #[test]
    fn parses_components() {
        let c = parse("#f80");
        assert_eq!(c.rgb(), [255.0, 136.0, 0.0]);
        assert_eq!(c.alpha(), 1.0);

        let c = parse("rgba(255, 0, 0, 0.5)");
        assert_eq!(c.rgb(), [255.0, 0.0, 0.0]);
        assert_eq!(c.alpha(), 0.5);

        let c = parse("rgb(100% 0% 50% / 25%)");
        assert_relative_eq!(c.rgb()[0], 255.0);
        assert_relative_eq!(c.rgb()[2], 127.5);
        assert_relative_eq!(c.alpha(), 0.25);

        let c = parse("hsl(0, 100%, 50%)");
        assert_relative_eq!(c.rgb()[0], 255.0, epsilon = 1e-9);
        assert_relative_eq!(c.rgb()[1], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn renders_in_requested_format() {
        let c = parse("rgb(255, 136, 0)");
        assert_eq!(c.to_string(), "rgb(255, 136, 0)");
        assert_eq!(c.to_string_in(ColorFormat::Rgba), "rgba(255, 136, 0, 1)");
        assert_eq!(c.to_string_in(ColorFormat::Hex), "#ff8800");
        assert_eq!(c.to_string_in(ColorFormat::ShortHex), "#f80");
        assert_eq!(c.to_string_in(ColorFormat::Hsl), "hsl(32, 100%, 50%)");
    }

    #[test]
    fn translucent_colors_fall_back_losslessly() {
        let c = parse("rgba(255, 0, 0, 0.5)");
        assert_eq!(c.to_string_in(ColorFormat::Rgb), "rgba(255, 0, 0, 0.5)");
        assert_eq!(c.to_string_in(ColorFormat::Hsl), "hsla(0, 100%, 50%, 0.5)");
        assert_eq!(c.to_string_in(ColorFormat::Hex), "#ff000080");
        assert_eq!(c.to_string_in(ColorFormat::Nickname), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn short_hex_widens_when_needed() {
        let c = parse("#123456");
        assert_eq!(c.to_string_in(ColorFormat::ShortHex), "#123456");
        assert_eq!(parse("#11223344").to_string_in(ColorFormat::ShortHex), "#1234");
    }

    #[test]
    fn nickname_only_on_exact_match() {
        assert_eq!(Color::WHITE.to_string(), "white");
        assert_eq!(parse("cyan").to_string(), "aqua");
        assert_eq!(Color::TRANSPARENT.to_string(), "transparent");
        let near_red = Color::new(ColorFormat::Nickname, [250.0, 0.0, 0.0, 1.0]);
        assert_eq!(near_red.to_string(), "#fa0000");
    }

    #[test]
    fn clamps_components() {
        let c = Color::new(ColorFormat::Rgba, [300.0, -5.0, 10.0, 2.0]);
        assert_eq!(c.rgb(), [255.0, 0.0, 10.0]);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!("".parse::<Color>(), Err(ParseColorError::Empty));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#ggg".parse::<Color>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ParseColorError::InvalidFunction { .. })
        ));
        assert!(matches!(
            "rgb(1, x, 3)".parse::<Color>(),
            Err(ParseColorError::InvalidFunction { .. })
        ));
        assert!(matches!(
            "rgb(1, 2, 3".parse::<Color>(),
            Err(ParseColorError::InvalidFunction { .. })
        ));
        assert!(matches!(
            "lab(1 2 3)".parse::<Color>(),
            Err(ParseColorError::Unknown(_))
        ));
        assert!(matches!(
            "blurple".parse::<Color>(),
            Err(ParseColorError::Unknown(_))
        ));
    }

    #[test]
    fn hsb_conversion() {
        let (h, s, b) = parse("red").to_hsb();
        assert_eq!((h, s, b), (0.0, 1.0, 1.0));

        let c = Color::from_hsb(0.5, 1.0, 0.5, 0.25);
        assert_eq!(c.format(), ColorFormat::Rgb);
        assert_eq!(c.to_string(), "rgba(0, 128, 128, 0.25)");
    }
}
