//! Color parsing and conversion between CSS notations.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f64,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Hue in degrees, saturation and value in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Components in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    fn unit_channels(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a < 1.0 {
            let alpha = (self.a * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    pub fn to_css_rgb(&self) -> String {
        if self.a < 1.0 {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, trim_alpha(self.a))
        } else {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl {
            h: hue(r, g, b, max, delta),
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        Hsv {
            h: hue(r, g, b, max, delta),
            s: if max == 0.0 { 0.0 } else { delta / max * 100.0 },
            v: max * 100.0,
        }
    }

    pub fn to_cmyk(&self) -> Cmyk {
        let (r, g, b) = self.unit_channels();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }
        let scale = |channel: f64| (1.0 - channel - k) / (1.0 - k) * 100.0;
        Cmyk {
            c: scale(r),
            m: scale(g),
            y: scale(b),
            k: k * 100.0,
        }
    }

    /// WCAG 2 relative luminance.
    pub fn relative_luminance(&self) -> f64 {
        let linear = |channel: f64| {
            if channel <= 0.03928 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        };
        let (r, g, b) = self.unit_channels();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    /// WCAG 2 contrast ratio, from 1.0 to 21.0. Alpha is ignored.
    pub fn contrast_ratio(&self, other: &Rgba) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }
}

impl Hsl {
    pub fn to_rgb(&self, alpha: f64) -> Rgba {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let h = self.h.rem_euclid(360.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: alpha,
        }
    }
}

fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    h.rem_euclid(360.0)
}

fn trim_alpha(a: f64) -> String {
    crate::format::format_number(a, 2)
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.v.round()
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c.round(),
            self.m.round(),
            self.y.round(),
            self.k.round()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

impl FromStr for Rgba {
    type Err = ColorError;

    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional),
    /// `rgb()`/`rgba()` and `hsl()`/`hsla()`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_lowercase();
        if input.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(args) = function_args(&input, &["rgba", "rgb"]) {
            return parse_rgb_args(args);
        }
        if let Some(args) = function_args(&input, &["hsla", "hsl"]) {
            return parse_hsl_args(args);
        }

        let hex = input.strip_prefix('#').unwrap_or(&input);
        if hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return parse_hex(hex);
        }

        Err(ColorError::Unrecognized)
    }
}

/// Returns the text between the parentheses of `name(...)`.
fn function_args<'a>(input: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        input
            .strip_prefix(name)?
            .trim_start()
            .strip_prefix('(')?
            .strip_suffix(')')
    })
}

fn parse_hex(hex: &str) -> Result<Rgba, ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or_else(invalid))
        .collect::<Result<_, _>>()?;

    let bytes: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|p| p[0] * 16 + p[1]).collect(),
        _ => return Err(invalid()),
    };

    Ok(Rgba {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
        a: bytes.get(3).map_or(1.0, |&a| f64::from(a) / 255.0),
    })
}

/// Splits on commas, whitespace and the `/` alpha separator.
fn split_components(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_number(raw: &str) -> Result<f64, ColorError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::InvalidComponent(raw.to_string()))
}

fn parse_alpha(raw: Option<&&str>) -> Result<f64, ColorError> {
    let Some(raw) = raw else {
        return Ok(1.0);
    };
    let alpha = match raw.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(raw)?,
    };
    Ok(alpha.clamp(0.0, 1.0))
}

fn parse_rgb_args(args: &str) -> Result<Rgba, ColorError> {
    let parts = split_components(args);
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorError::ComponentCount {
            expected: "3 or 4",
            found: parts.len(),
        });
    }

    let channel = |raw: &str| -> Result<u8, ColorError> {
        let value = match raw.strip_suffix('%') {
            Some(pct) => parse_number(pct)? * 2.55,
            None => parse_number(raw)?,
        };
        if !(0.0..=255.0).contains(&value) {
            return Err(ColorError::InvalidComponent(raw.to_string()));
        }
        Ok(value.round() as u8)
    };

    Ok(Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a: parse_alpha(parts.get(3))?,
    })
}

fn parse_hsl_args(args: &str) -> Result<Rgba, ColorError> {
    let parts = split_components(args);
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorError::ComponentCount {
            expected: "3 or 4",
            found: parts.len(),
        });
    }

    let h = parse_number(parts[0].trim_end_matches("deg"))?;
    let percent = |raw: &str| -> Result<f64, ColorError> {
        let value = parse_number(raw.trim_end_matches('%'))?;
        if !(0.0..=100.0).contains(&value) {
            return Err(ColorError::InvalidComponent(raw.to_string()));
        }
        Ok(value)
    };

    let hsl = Hsl {
        h,
        s: percent(parts[1])?,
        l: percent(parts[2])?,
    };
    Ok(hsl.to_rgb(parse_alpha(parts.get(3))?))
}

// =============================================================================
// Conversion summary
// =============================================================================

/// Every notation of one color, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub hsv: String,
    pub cmyk: String,
    pub luminance: f64,
    pub contrast_on_white: f64,
    pub contrast_on_black: f64,
}

impl From<Rgba> for ColorFormats {
    fn from(color: Rgba) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_css_rgb(),
            hsl: color.to_hsl().to_string(),
            hsv: color.to_hsv().to_string(),
            cmyk: color.to_cmyk().to_string(),
            luminance: color.relative_luminance(),
            contrast_on_white: color.contrast_ratio(&Rgba::WHITE),
            contrast_on_black: color.contrast_ratio(&Rgba::BLACK),
        }
    }
}

/// Parse any supported notation and produce every other one.
pub fn convert(input: &str) -> Result<ColorFormats, ColorError> {
    input.parse::<Rgba>().map(ColorFormats::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#ff8000".parse::<Rgba>(), Ok(Rgba::rgb(255, 128, 0)));
        assert_eq!("#0f0".parse::<Rgba>(), Ok(Rgba::rgb(0, 255, 0)));
        assert_eq!("ABCDEF".parse::<Rgba>(), Ok(Rgba::rgb(0xab, 0xcd, 0xef)));

        let translucent: Rgba = "#00000080".parse().unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!("rgb(255, 0, 0)".parse::<Rgba>(), Ok(Rgba::rgb(255, 0, 0)));
        assert_eq!("rgb(100% 0% 0%)".parse::<Rgba>(), Ok(Rgba::rgb(255, 0, 0)));

        let rgba: Rgba = "rgba(10, 20, 30, 0.5)".parse().unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (10, 20, 30, 0.5));

        let slash: Rgba = "rgb(10 20 30 / 50%)".parse().unwrap();
        assert_eq!(slash.a, 0.5);
    }

    #[test]
    fn test_parse_hsl_function() {
        assert_eq!(
            "hsl(120, 100%, 25%)".parse::<Rgba>(),
            Ok(Rgba::rgb(0, 128, 0))
        );
        assert_eq!(
            "hsl(0deg 100% 50%)".parse::<Rgba>(),
            Ok(Rgba::rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Rgba>(), Err(ColorError::Empty));
        assert_eq!(
            "#12345".parse::<Rgba>(),
            Err(ColorError::InvalidHex("12345".to_string()))
        );
        assert_eq!(
            "rgb(300, 0, 0)".parse::<Rgba>(),
            Err(ColorError::InvalidComponent("300".to_string()))
        );
        assert_eq!(
            "rgb(1, 2)".parse::<Rgba>(),
            Err(ColorError::ComponentCount {
                expected: "3 or 4",
                found: 2
            })
        );
        assert_eq!("tomato".parse::<Rgba>(), Err(ColorError::Unrecognized));
    }

    #[test]
    fn test_to_hsl_and_back() {
        let orange = Rgba::rgb(255, 165, 0);
        let hsl = orange.to_hsl();
        assert_eq!(hsl.to_string(), "hsl(39, 100%, 50%)");
        assert_eq!(hsl.to_rgb(1.0), orange);
    }

    #[test]
    fn test_to_hsv_and_cmyk() {
        let red = Rgba::rgb(255, 0, 0);
        assert_eq!(red.to_hsv().to_string(), "hsv(0, 100%, 100%)");
        assert_eq!(red.to_cmyk().to_string(), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(Rgba::BLACK.to_cmyk().to_string(), "cmyk(0%, 0%, 0%, 100%)");
    }

    #[test]
    fn test_contrast_ratio() {
        assert!((Rgba::WHITE.contrast_ratio(&Rgba::BLACK) - 21.0).abs() < 1e-9);
        assert!((Rgba::BLACK.contrast_ratio(&Rgba::BLACK) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_summary() {
        let formats = convert("#336699").unwrap();
        assert_eq!(formats.hex, "#336699");
        assert_eq!(formats.rgb, "rgb(51, 102, 153)");
        assert_eq!(formats.hsl, "hsl(210, 50%, 40%)");
    }

    #[test]
    fn test_hex_keeps_alpha() {
        let color: Rgba = "rgba(255, 255, 255, 0.5)".parse().unwrap();
        assert_eq!(color.to_hex(), "#ffffff80");
        assert_eq!(color.to_css_rgb(), "rgba(255, 255, 255, 0.5)");
    }
}
