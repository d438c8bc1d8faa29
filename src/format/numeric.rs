//! Standard numeric format specifiers.
//!
//! A specifier is a single letter optionally followed by a precision of at
//! most two decimal digits:
//!
//! | Specifier | Meaning | Default precision |
//! |---|---|---|
//! | `""`, `G`, `g` | general (no precision accepted) | |
//! | `D`, `d` | decimal, zero-padded to the precision (integers only) | 0 |
//! | `X`, `x` | hexadecimal, two's complement for negatives (integers only) | 0 |
//! | `F`, `f` | fixed-point | 2 |
//! | `N`, `n` | fixed-point with group separators | 2 |
//! | `E`, `e` | scientific, exponent sign and at least three digits | 6 |
//!
//! Integers are rounded half away from zero. Floating-point values are
//! rounded half to even on their exact binary value, and a result that rounds
//! to zero never carries a negative sign.

use super::FormatContext;
use crate::error::{Error, Result};

const MAX_PRECISION: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    General,
    Decimal,
    Hexadecimal { uppercase: bool },
    Fixed,
    Number,
    Exponential { uppercase: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Specifier {
    symbol: Symbol,
    precision: Option<usize>,
}

/// An integer split into the parts the formatters need.
#[derive(Debug, Clone, Copy)]
pub(super) struct IntegerParts {
    pub(super) negative: bool,
    pub(super) magnitude: u128,
    /// The value's bit pattern, zero-extended.
    pub(super) bits: u128,
}

fn invalid(format: &str, reason: &'static str) -> Error {
    Error::InvalidFormat {
        format: format.to_owned(),
        reason,
    }
}

fn parse_specifier(format: &str) -> Result<Specifier> {
    let mut characters = format.chars();
    let Some(letter) = characters.next() else {
        return Ok(Specifier {
            symbol: Symbol::General,
            precision: None,
        });
    };

    let symbol = match letter {
        'G' | 'g' => Symbol::General,
        'D' | 'd' => Symbol::Decimal,
        'X' => Symbol::Hexadecimal { uppercase: true },
        'x' => Symbol::Hexadecimal { uppercase: false },
        'F' | 'f' => Symbol::Fixed,
        'N' | 'n' => Symbol::Number,
        'E' => Symbol::Exponential { uppercase: true },
        'e' => Symbol::Exponential { uppercase: false },
        _ => return Err(invalid(format, "unknown format specifier")),
    };

    let digits = characters.as_str();
    if digits.is_empty() {
        return Ok(Specifier {
            symbol,
            precision: None,
        });
    }
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid(format, "precision must be a decimal number"));
    }
    match digits.parse::<usize>() {
        Ok(precision) if precision <= MAX_PRECISION => Ok(Specifier {
            symbol,
            precision: Some(precision),
        }),
        _ => Err(invalid(format, "precision must not exceed 99")),
    }
}

pub(super) fn format_integer(value: IntegerParts, format: &str, context: &FormatContext) -> Result<String> {
    let specifier = parse_specifier(format)?;
    let digits = value.magnitude.to_string();

    match specifier.symbol {
        Symbol::General => {
            reject_precision(specifier, format)?;
            Ok(assemble(value.negative, &digits, "", false, context))
        }
        Symbol::Decimal => {
            let padded = pad_zeros(&digits, specifier.precision.unwrap_or(0));
            Ok(assemble(value.negative, &padded, "", false, context))
        }
        Symbol::Hexadecimal { uppercase } => {
            let hexadecimal = if uppercase {
                format!("{:X}", value.bits)
            } else {
                format!("{:x}", value.bits)
            };
            Ok(pad_zeros(&hexadecimal, specifier.precision.unwrap_or(0)))
        }
        Symbol::Fixed | Symbol::Number => {
            let fraction = "0".repeat(specifier.precision.unwrap_or(2));
            let grouped = specifier.symbol == Symbol::Number;
            Ok(assemble(value.negative, &digits, &fraction, grouped, context))
        }
        Symbol::Exponential { uppercase } => {
            let (significant, exponent) = round_significant(&digits, specifier.precision.unwrap_or(6) + 1);
            Ok(exponential(
                value.negative,
                &significant,
                false,
                &exponent.to_string(),
                uppercase,
                context,
            ))
        }
    }
}

/// Formats a floating-point value; `shortest` is its round-trip `Display`
/// output in its own precision.
pub(super) fn format_float(value: f64, shortest: &str, format: &str, context: &FormatContext) -> Result<String> {
    let specifier = parse_specifier(format)?;
    if matches!(specifier.symbol, Symbol::Decimal | Symbol::Hexadecimal { .. }) {
        return Err(invalid(format, "specifier applies to integers only"));
    }

    if value.is_nan() {
        return Ok(String::from("NaN"));
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { context.negative_sign() } else { "" };
        return Ok(format!("{sign}Infinity"));
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    match specifier.symbol {
        Symbol::General => {
            reject_precision(specifier, format)?;
            let unsigned = shortest.trim_start_matches('-');
            let (integral, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
            Ok(assemble(negative, integral, fraction, false, context))
        }
        Symbol::Fixed | Symbol::Number => {
            let precision = specifier.precision.unwrap_or(2);
            let text = format!("{magnitude:.precision$}");
            let (integral, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
            let negative = negative && has_nonzero_digit(&text);
            let grouped = specifier.symbol == Symbol::Number;
            Ok(assemble(negative, integral, fraction, grouped, context))
        }
        Symbol::Exponential { uppercase } => {
            let precision = specifier.precision.unwrap_or(6);
            let text = format!("{magnitude:.precision$e}");
            let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
            let (exponent_negative, exponent_digits) = match exponent.strip_prefix('-') {
                Some(digits) => (true, digits),
                None => (false, exponent),
            };
            let significant: String = mantissa.chars().filter(|character| *character != '.').collect();
            let negative = negative && has_nonzero_digit(mantissa);
            Ok(exponential(
                negative,
                &significant,
                exponent_negative,
                exponent_digits,
                uppercase,
                context,
            ))
        }
        Symbol::Decimal | Symbol::Hexadecimal { .. } => Err(invalid(format, "specifier applies to integers only")),
    }
}

fn reject_precision(specifier: Specifier, format: &str) -> Result<()> {
    match specifier.precision {
        Some(_) => Err(invalid(format, "the general format takes no precision")),
        None => Ok(()),
    }
}

fn has_nonzero_digit(text: &str) -> bool {
    text.bytes().any(|byte| (b'1'..=b'9').contains(&byte))
}

fn pad_zeros(digits: &str, width: usize) -> String {
    let padding = width.saturating_sub(digits.len());
    let mut padded = "0".repeat(padding);
    padded.push_str(digits);
    padded
}

fn group_digits(integral: &str, separator: &str) -> String {
    let length = integral.len();
    let mut grouped = String::with_capacity(length + length / 3 * separator.len());
    for (index, digit) in integral.chars().enumerate() {
        if index != 0 && (length - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

fn assemble(negative: bool, integral: &str, fraction: &str, grouped: bool, context: &FormatContext) -> String {
    let mut output = String::new();
    if negative {
        output.push_str(context.negative_sign());
    }
    if grouped {
        output.push_str(&group_digits(integral, context.group_separator()));
    } else {
        output.push_str(integral);
    }
    if !fraction.is_empty() {
        output.push_str(context.decimal_separator());
        output.push_str(fraction);
    }
    output
}

fn exponential(
    negative: bool,
    significant: &str,
    exponent_negative: bool,
    exponent_digits: &str,
    uppercase: bool,
    context: &FormatContext,
) -> String {
    let (integral, fraction) = significant.split_at(1);
    let mut output = assemble(negative, integral, fraction, false, context);
    output.push(if uppercase { 'E' } else { 'e' });
    if exponent_negative {
        output.push_str(context.negative_sign());
    } else {
        output.push('+');
    }
    output.push_str(&pad_zeros(exponent_digits, 3));
    output
}

/// Rounds a run of decimal digits to `kept` significant digits, half away from
/// zero. Returns the digits and the decimal exponent of the first one.
fn round_significant(digits: &str, kept: usize) -> (String, usize) {
    let mut exponent = digits.len().saturating_sub(1);
    let mut significant: Vec<u8> = digits.bytes().take(kept).collect();
    significant.resize(kept, b'0');

    if digits.as_bytes().get(kept).is_some_and(|digit| *digit >= b'5') {
        let mut index = kept;
        loop {
            if index == 0 {
                significant.insert(0, b'1');
                significant.pop();
                exponent += 1;
                break;
            }
            index -= 1;
            if significant[index] == b'9' {
                significant[index] = b'0';
            } else {
                significant[index] += 1;
                break;
            }
        }
    }

    (significant.into_iter().map(char::from).collect(), exponent)
}
