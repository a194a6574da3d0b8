//! Display configuration parser
//!
//! Minimal TOML subset for a `[display]` table:
//!
//! ```toml
//! [display]
//! address = 0x3C      # 7-bit I2C address
//! width = 128
//! height = 64
//! contrast = 143
//! external_vcc = false
//! flipped = false
//! bounds = "strict"   # or "clip"
//! glyphs = "skip"     # or "strict"
//! ```
//!
//! Keys may also appear before any section header. Supported values are
//! decimal or `0x` hex integers, booleans and quoted strings. Anything
//! else (other tables, arrays, multi-line strings) is rejected.

use monochron_core::{BoundsPolicy, DisplayConfig, GlyphPolicy};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Section other than `[display]`
    InvalidSection,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Key not recognized
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::InvalidSection => "only the [display] section is supported",
            ParseError::InvalidLine => "expected `key = value`",
            ParseError::UnknownKey => "unknown key",
            ParseError::InvalidValue => "invalid value",
        };
        f.write_str(msg)
    }
}

/// Parse display configuration text
///
/// Keys not present keep their [`DisplayConfig::default`] values.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if line[1..line.len() - 1].trim() != "display" {
                return Err(ParseError::InvalidSection);
            }
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(&mut config, key, value)?;
    }

    Ok(config)
}

/// Drop a trailing `# comment` outside of quotes
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let raw = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    }
    .map_err(|_| ParseError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_bounds(value: &str) -> Result<BoundsPolicy, ParseError> {
    match parse_string(value)? {
        "strict" => Ok(BoundsPolicy::Strict),
        "clip" => Ok(BoundsPolicy::Clip),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_glyphs(value: &str) -> Result<GlyphPolicy, ParseError> {
    match parse_string(value)? {
        "skip" => Ok(GlyphPolicy::Skip),
        "strict" => Ok(GlyphPolicy::Strict),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(config: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ParseError> {
    match key {
        "address" => {
            let address: u8 = parse_int(value)?;
            if address > 0x7F {
                return Err(ParseError::InvalidValue);
            }
            config.address = address;
        }
        "width" => config.width = parse_int(value)?,
        "height" => config.height = parse_int(value)?,
        "contrast" => config.contrast = parse_int(value)?,
        "external_vcc" => config.external_vcc = parse_bool(value)?,
        "flipped" => config.flipped = parse_bool(value)?,
        "bounds" => config.bounds = parse_bounds(value)?,
        "glyphs" => config.glyphs = parse_glyphs(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let input = r#"
            # Small panel on the secondary address
            [display]
            address = 0x3D
            width = 128
            height = 32      # 4 pages
            contrast = 200
            external_vcc = true
            flipped = true
            bounds = "clip"
            glyphs = "strict"
        "#;
        let config = parse_config(input).unwrap();

        assert_eq!(config.address, 0x3D);
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 32);
        assert_eq!(config.contrast, 200);
        assert!(config.external_vcc);
        assert!(config.flipped);
        assert_eq!(config.bounds, BoundsPolicy::Clip);
        assert_eq!(config.glyphs, GlyphPolicy::Strict);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("height = 32").unwrap();
        assert_eq!(config.height, 32);
        assert_eq!(config.width, 128);
        assert_eq!(config.address, 0x3C);

        assert_eq!(parse_config("").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<u8>("0x3C"), Ok(0x3C));
        assert_eq!(parse_int::<u16>("128"), Ok(128));
        assert_eq!(parse_int::<u8>("256"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int::<u8>("-1"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int::<u8>("0xZZ"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("width = 128 # px"), "width = 128 ");
        assert_eq!(strip_comment(r##"bounds = "#clip""##), r##"bounds = "#clip""##);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_config("[stepper]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("width"), Err(ParseError::InvalidLine));
        assert_eq!(parse_config("depth = 3"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("flipped = yes"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("bounds = clip"), Err(ParseError::InvalidValue));
        assert_eq!(parse_config("address = 0x80"), Err(ParseError::InvalidValue));
    }
}
