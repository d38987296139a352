//! Color token checking for theme values.
//!
//! Theme declarations map color roles to CSS color values. The resolver
//! carries those values through as opaque strings (the downstream generator
//! owns their final interpretation), but it lints them during validation so
//! a typo like `#d6d3d` or `tael` is surfaced before a stylesheet is ever
//! generated.
//!
//! Supported forms:
//!
//! - RGB hex: `#d6d3d1` or `#fff` (3 or 6 digit)
//! - CSS named colors: `teal`, `rebeccapurple`, `transparent`, ...
//! - Color functions: `rgb(...)`, `hsl(...)`, `oklch(...)`, ...
//! - CSS-wide keywords: `inherit`, `initial`, `unset`, `revert`
//!
//! The tokenizer is `cssparser` (the same one used by Firefox), so comments,
//! escapes and whitespace are handled the way a real CSS engine would.

use cssparser::{parse_color_keyword, Color as CssColor, Parser, ParserInput, Token};

/// A checked color token from a theme declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    /// True-color RGB from a 3- or 6-digit hex literal.
    Rgb(u8, u8, u8),
    /// A CSS named color, lowercased (`teal`, `rebeccapurple`, ...).
    Named(String),
    /// A color function by name (`rgb`, `hsl`, `oklch`, ...). Arguments are
    /// tokenized but not interpreted.
    Function(String),
    /// A CSS-wide keyword (`inherit`, `initial`, `unset`, `revert`).
    Keyword(String),
}

impl ColorToken {
    /// Parses a single color value.
    ///
    /// Fails if the value is empty, is not one of the supported forms, or
    /// has trailing input after the color token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inkweave::ColorToken;
    ///
    /// assert_eq!(ColorToken::parse("#d6d3d1").unwrap(), ColorToken::Rgb(0xd6, 0xd3, 0xd1));
    /// assert_eq!(ColorToken::parse("teal").unwrap(), ColorToken::Named("teal".into()));
    /// assert!(ColorToken::parse("tael").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("empty color value".to_string());
        }

        let mut input = ParserInput::new(trimmed);
        let mut parser = Parser::new(&mut input);

        enum First {
            Hex(String),
            Ident(String),
            Function(String),
        }

        let first = match parser.next() {
            Ok(Token::Hash(v)) | Ok(Token::IDHash(v)) => First::Hex(v.as_ref().to_string()),
            Ok(Token::Ident(name)) => First::Ident(name.as_ref().to_string()),
            Ok(Token::Function(name)) => First::Function(name.as_ref().to_string()),
            Ok(_) => return Err(format!("'{}' is not a color value", trimmed)),
            Err(_) => return Err(format!("'{}' is not a color value", trimmed)),
        };

        let parsed = match first {
            First::Hex(hex) => Self::parse_hex(&hex)?,
            First::Ident(name) => Self::parse_ident(&name)?,
            First::Function(name) => {
                // Consume the argument block so trailing-input detection
                // below still works for forms like "rgb(1,2,3) extra".
                let consumed: Result<(), cssparser::ParseError<'_, ()>> =
                    parser.parse_nested_block(|args| {
                        while args.next().is_ok() {}
                        Ok(())
                    });
                if consumed.is_err() {
                    return Err(format!("unterminated color function '{}'", trimmed));
                }
                ColorToken::Function(name.to_ascii_lowercase())
            }
        };

        if parser.next().is_ok() {
            return Err(format!("trailing input after color value '{}'", trimmed));
        }

        Ok(parsed)
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        // Hash tokens may carry any ident characters, including multi-byte
        // ones; reject non-ASCII before slicing digit positions.
        if !hex.is_ascii() {
            return Err(format!("invalid hex color: #{}", hex));
        }
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?
                    * 17;
                let g = u8::from_str_radix(&hex[1..2], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?
                    * 17;
                let b = u8::from_str_radix(&hex[2..3], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?
                    * 17;
                Ok(ColorToken::Rgb(r, g, b))
            }
            // 6-digit hex: #rrggbb
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|_| format!("invalid hex color: #{}", hex))?;
                Ok(ColorToken::Rgb(r, g, b))
            }
            _ => Err(format!(
                "invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    /// Parses an identifier: CSS-wide keywords or named colors.
    fn parse_ident(name: &str) -> Result<Self, String> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "inherit" | "initial" | "unset" | "revert" => Ok(ColorToken::Keyword(lower)),
            _ => {
                if parse_color_keyword::<CssColor>(&lower).is_ok() {
                    Ok(ColorToken::Named(lower))
                } else {
                    Err(format!("unknown color name: {}", name))
                }
            }
        }
    }
}
