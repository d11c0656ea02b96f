//! Unit conversion across common measurement categories.
//!
//! Every unit maps affinely onto its category's base unit:
//! `base = value * factor + offset`. Only temperature uses a non-zero
//! offset.

use crate::error::UnitError;

/// Slack below 0 K still treated as absolute zero, absorbing rounding in
/// the affine transforms.
const ABSOLUTE_ZERO_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Volume,
    Area,
    Speed,
    Time,
    Data,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Length,
        Self::Mass,
        Self::Temperature,
        Self::Volume,
        Self::Area,
        Self::Speed,
        Self::Time,
        Self::Data,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Mass => "Mass",
            Self::Temperature => "Temperature",
            Self::Volume => "Volume",
            Self::Area => "Area",
            Self::Speed => "Speed",
            Self::Time => "Time",
            Self::Data => "Digital storage",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Units of this category in table order.
    pub fn units(self) -> impl Iterator<Item = &'static Unit> {
        UNITS.iter().filter(move |u| u.category == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
    factor: f64,
    offset: f64,
}

impl Unit {
    const fn linear(symbol: &'static str, name: &'static str, category: Category, factor: f64) -> Self {
        Self {
            symbol,
            name,
            category,
            factor,
            offset: 0.0,
        }
    }

    const fn affine(
        symbol: &'static str,
        name: &'static str,
        category: Category,
        factor: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            category,
            factor,
            offset,
        }
    }

    fn to_base(&self, value: f64) -> f64 {
        value * self.factor + self.offset
    }

    fn from_base(&self, base: f64) -> f64 {
        (base - self.offset) / self.factor
    }
}

use Category::*;

/// Every supported unit. Symbols are unique and case-sensitive.
pub const UNITS: &[Unit] = &[
    // Length (metre)
    Unit::linear("mm", "Millimetre", Length, 0.001),
    Unit::linear("cm", "Centimetre", Length, 0.01),
    Unit::linear("m", "Metre", Length, 1.0),
    Unit::linear("km", "Kilometre", Length, 1000.0),
    Unit::linear("in", "Inch", Length, 0.0254),
    Unit::linear("ft", "Foot", Length, 0.3048),
    Unit::linear("yd", "Yard", Length, 0.9144),
    Unit::linear("mi", "Mile", Length, 1609.344),
    Unit::linear("nmi", "Nautical mile", Length, 1852.0),
    // Mass (kilogram)
    Unit::linear("mg", "Milligram", Mass, 1e-6),
    Unit::linear("g", "Gram", Mass, 0.001),
    Unit::linear("kg", "Kilogram", Mass, 1.0),
    Unit::linear("t", "Tonne", Mass, 1000.0),
    Unit::linear("oz", "Ounce", Mass, 0.028349523125),
    Unit::linear("lb", "Pound", Mass, 0.45359237),
    Unit::linear("st", "Stone", Mass, 6.35029318),
    // Temperature (kelvin)
    Unit::affine("°C", "Celsius", Temperature, 1.0, 273.15),
    Unit::affine("°F", "Fahrenheit", Temperature, 5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0),
    Unit::affine("K", "Kelvin", Temperature, 1.0, 0.0),
    // Volume (cubic metre)
    Unit::linear("ml", "Millilitre", Volume, 1e-6),
    Unit::linear("l", "Litre", Volume, 0.001),
    Unit::linear("m³", "Cubic metre", Volume, 1.0),
    Unit::linear("tsp", "Teaspoon (US)", Volume, 4.92892159375e-6),
    Unit::linear("tbsp", "Tablespoon (US)", Volume, 1.478676478125e-5),
    Unit::linear("fl oz", "Fluid ounce (US)", Volume, 2.95735295625e-5),
    Unit::linear("cup", "Cup (US)", Volume, 2.365882365e-4),
    Unit::linear("pt", "Pint (US)", Volume, 4.73176473e-4),
    Unit::linear("qt", "Quart (US)", Volume, 9.46352946e-4),
    Unit::linear("gal", "Gallon (US)", Volume, 3.785411784e-3),
    // Area (square metre)
    Unit::linear("mm²", "Square millimetre", Area, 1e-6),
    Unit::linear("cm²", "Square centimetre", Area, 1e-4),
    Unit::linear("m²", "Square metre", Area, 1.0),
    Unit::linear("ha", "Hectare", Area, 1e4),
    Unit::linear("km²", "Square kilometre", Area, 1e6),
    Unit::linear("in²", "Square inch", Area, 6.4516e-4),
    Unit::linear("ft²", "Square foot", Area, 0.09290304),
    Unit::linear("yd²", "Square yard", Area, 0.83612736),
    Unit::linear("ac", "Acre", Area, 4046.8564224),
    Unit::linear("mi²", "Square mile", Area, 2_589_988.110336),
    // Speed (metre per second)
    Unit::linear("m/s", "Metre per second", Speed, 1.0),
    Unit::linear("km/h", "Kilometre per hour", Speed, 1.0 / 3.6),
    Unit::linear("mph", "Mile per hour", Speed, 0.44704),
    Unit::linear("kn", "Knot", Speed, 1852.0 / 3600.0),
    Unit::linear("ft/s", "Foot per second", Speed, 0.3048),
    // Time (second)
    Unit::linear("ms", "Millisecond", Time, 0.001),
    Unit::linear("s", "Second", Time, 1.0),
    Unit::linear("min", "Minute", Time, 60.0),
    Unit::linear("h", "Hour", Time, 3600.0),
    Unit::linear("d", "Day", Time, 86_400.0),
    Unit::linear("wk", "Week", Time, 604_800.0),
    Unit::linear("yr", "Year (Gregorian)", Time, 31_556_952.0),
    // Digital storage (byte)
    Unit::linear("bit", "Bit", Data, 0.125),
    Unit::linear("B", "Byte", Data, 1.0),
    Unit::linear("KB", "Kilobyte", Data, 1e3),
    Unit::linear("MB", "Megabyte", Data, 1e6),
    Unit::linear("GB", "Gigabyte", Data, 1e9),
    Unit::linear("TB", "Terabyte", Data, 1e12),
    Unit::linear("KiB", "Kibibyte", Data, 1024.0),
    Unit::linear("MiB", "Mebibyte", Data, 1_048_576.0),
    Unit::linear("GiB", "Gibibyte", Data, 1_073_741_824.0),
    Unit::linear("TiB", "Tebibyte", Data, 1_099_511_627_776.0),
];

/// Look up a unit by its symbol.
pub fn find_unit(symbol: &str) -> Result<&'static Unit, UnitError> {
    UNITS
        .iter()
        .find(|u| u.symbol == symbol)
        .ok_or_else(|| UnitError::UnknownUnit(symbol.to_string()))
}

/// Convert `value` from one unit symbol to another of the same category.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, UnitError> {
    if !value.is_finite() {
        return Err(UnitError::NotFinite);
    }

    let from_unit = find_unit(from)?;
    let to_unit = find_unit(to)?;
    if from_unit.category != to_unit.category {
        return Err(UnitError::CategoryMismatch {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let mut base = from_unit.to_base(value);
    if from_unit.category == Temperature {
        if base < -ABSOLUTE_ZERO_TOLERANCE {
            return Err(UnitError::BelowAbsoluteZero);
        }
        base = base.max(0.0);
    }

    let result = to_unit.from_base(base);
    if !result.is_finite() {
        return Err(UnitError::NotFinite);
    }
    Ok(result)
}

/// Convert `value` into every unit of the source unit's category.
pub fn convert_all(value: f64, from: &str) -> Result<Vec<(&'static Unit, f64)>, UnitError> {
    let from_unit = find_unit(from)?;
    from_unit
        .category
        .units()
        .map(|unit| convert(value, from, unit.symbol).map(|v| (unit, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut seen = HashSet::new();
        for unit in UNITS {
            assert!(seen.insert(unit.symbol), "duplicate symbol {}", unit.symbol);
        }
    }

    #[test]
    fn test_every_category_has_units() {
        for category in Category::ALL {
            assert!(category.units().count() >= 3, "{:?}", category);
        }
    }

    #[test]
    fn test_length() {
        assert_close(convert(1.0, "mi", "km").unwrap(), 1.609344);
        assert_close(convert(12.0, "in", "ft").unwrap(), 1.0);
        assert_close(convert(1.0, "nmi", "m").unwrap(), 1852.0);
    }

    #[test]
    fn test_mass() {
        assert_close(convert(1.0, "lb", "oz").unwrap(), 16.0);
        assert_close(convert(14.0, "lb", "st").unwrap(), 1.0);
    }

    #[test]
    fn test_temperature() {
        assert_close(convert(100.0, "°C", "°F").unwrap(), 212.0);
        assert_close(convert(32.0, "°F", "°C").unwrap(), 0.0);
        assert_close(convert(-40.0, "°C", "°F").unwrap(), -40.0);
        assert_close(convert(0.0, "K", "°C").unwrap(), -273.15);
    }

    #[test]
    fn test_below_absolute_zero() {
        assert_eq!(
            convert(-300.0, "°C", "K"),
            Err(UnitError::BelowAbsoluteZero)
        );
        assert_eq!(
            convert(-459.68, "°F", "K"),
            Err(UnitError::BelowAbsoluteZero)
        );
    }

    #[test]
    fn test_absolute_zero_is_accepted() {
        let kelvin = convert(-459.67, "°F", "K").unwrap();
        assert!(kelvin.abs() < 1e-9, "got {kelvin}");
        assert_eq!(convert(-273.15, "°C", "K"), Ok(0.0));
        assert_close(convert(-459.67, "°F", "°C").unwrap(), -273.15);
    }

    #[test]
    fn test_overflowing_result_is_rejected() {
        assert_eq!(convert(1e308, "TiB", "bit"), Err(UnitError::NotFinite));
    }

    #[test]
    fn test_data() {
        assert_close(convert(1.0, "GiB", "MiB").unwrap(), 1024.0);
        assert_close(convert(1.0, "B", "bit").unwrap(), 8.0);
        assert_close(convert(1.0, "GB", "MB").unwrap(), 1000.0);
    }

    #[test]
    fn test_speed_and_time() {
        assert_close(convert(36.0, "km/h", "m/s").unwrap(), 10.0);
        assert_close(convert(1.0, "wk", "d").unwrap(), 7.0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            convert(1.0, "parsec", "m"),
            Err(UnitError::UnknownUnit("parsec".to_string()))
        );
        assert_eq!(
            convert(1.0, "m", "kg"),
            Err(UnitError::CategoryMismatch {
                from: "m".to_string(),
                to: "kg".to_string()
            })
        );
        assert_eq!(convert(f64::NAN, "m", "km"), Err(UnitError::NotFinite));
    }

    #[test]
    fn test_convert_all_covers_category() {
        let results = convert_all(1.0, "m").unwrap();
        assert_eq!(results.len(), Length.units().count());
        let (unit, value) = results.iter().find(|(u, _)| u.symbol == "cm").unwrap();
        assert_eq!(unit.name, "Centimetre");
        assert_close(*value, 100.0);
    }
}
