use num_traits::Float;

use crate::color::{BandColor, BandCount, MULTIPLIER_ORDER};
use crate::error::{CodeError, CodeResult};

// Integer snapping
//------------------------------------------------------------------------------

/// Returns the nearest integer when `x` lies within `eps` of one.
fn snap_to_integer<F: Float>(x: F, eps: F) -> Option<F> {
    let rounded = x.round();
    if (x - rounded).abs() > eps {
        return None;
    }
    Some(rounded)
}

// Inverse encoder
//------------------------------------------------------------------------------

const SIGNIFICAND_EPS: f64 = 1e-9;

/// Finds a band color sequence reading back as `target_ohms` at the given
/// tolerance. Only 4 and 5 band codes are produced.
///
/// Multiplier candidates are tried in the fixed order black through silver,
/// and the first consistent assignment wins, so the smallest multiplier
/// with a matching digit count is always preferred.
///
/// # Example
///
/// ```rust
/// use ohmcode::{encode, BandColor::*, BandCount};
///
/// let bands = encode(10_000.0, 1.0, BandCount::Five).unwrap();
/// assert_eq!(bands, vec![Brown, Black, Black, Red, Brown]);
/// ```
pub fn encode(target_ohms: f64, tolerance: f64, count: BandCount) -> CodeResult<Vec<BandColor>> {
    let nd = match count {
        BandCount::Four | BandCount::Five => count.digits(),
        BandCount::Six => return Err(CodeError::InvalidBandCount),
    };
    if !target_ohms.is_finite() || target_ohms <= 0.0 {
        return Err(CodeError::InvalidValue);
    }

    let tolerance_color =
        BandColor::from_tolerance(tolerance).ok_or(CodeError::NonStandardTolerance)?;

    for mult_color in MULTIPLIER_ORDER {
        let multiplier = match mult_color.multiplier() {
            Some(m) if m != 0.0 => m,
            _ => continue,
        };

        let significand = match snap_to_integer(target_ohms / multiplier, SIGNIFICAND_EPS) {
            Some(s) => s,
            None => continue,
        };

        let digits = format!("{significand:.0}");
        if digits.len() != nd {
            continue;
        }

        let digit_colors: Option<Vec<BandColor>> =
            digits.bytes().map(|b| BandColor::from_digit(b - b'0')).collect();
        match digit_colors {
            Some(colors) if colors[0] != BandColor::Black => {
                let mut bands = colors;
                bands.push(mult_color);
                bands.push(tolerance_color);
                return Ok(bands);
            }
            _ => continue,
        }
    }

    Err(CodeError::UnrepresentableValue)
}

#[cfg(test)]
mod encode_tests {
    use test_case::test_case;

    use super::*;
    use crate::color::BandColor::*;

    #[test]
    fn test_encode_5_band() {
        let bands = encode(10_000.0, 1.0, BandCount::Five).unwrap();
        assert_eq!(bands, vec![Brown, Black, Black, Red, Brown]);
    }

    #[test]
    fn test_encode_4_band() {
        let bands = encode(10_000.0, 5.0, BandCount::Four).unwrap();
        assert_eq!(bands, vec![Brown, Black, Orange, Gold]);
    }

    #[test]
    fn test_smallest_multiplier_wins() {
        // 220 fits both as 22 x 10 and, for 5 bands, 220 x 1. The search
        // order must settle on the lowest decade each time.
        let bands = encode(220.0, 5.0, BandCount::Four).unwrap();
        assert_eq!(bands, vec![Red, Red, Brown, Gold]);
        let bands = encode(220.0, 5.0, BandCount::Five).unwrap();
        assert_eq!(bands, vec![Red, Red, Black, Black, Gold]);
    }

    #[test]
    fn test_fractional_ohms_use_gold_and_silver() {
        let bands = encode(4.7, 5.0, BandCount::Four).unwrap();
        assert_eq!(bands, vec![Yellow, Violet, Gold, Gold]);
        let bands = encode(0.47, 10.0, BandCount::Four).unwrap();
        assert_eq!(bands, vec![Yellow, Violet, Silver, Silver]);
    }

    #[test_case(37.0; "37 percent")]
    #[test_case(0.0; "zero percent")]
    #[test_case(3.0; "3 percent")]
    fn test_nonstandard_tolerance(tolerance: f64) {
        assert_eq!(encode(123.0, tolerance, BandCount::Four), Err(CodeError::NonStandardTolerance));
    }

    #[test_case(1e15; "beyond largest multiplier")]
    #[test_case(123.4; "fractional significand at every decade")]
    #[test_case(1234.0; "too many digits")]
    fn test_unrepresentable(target: f64) {
        assert_eq!(encode(target, 5.0, BandCount::Four), Err(CodeError::UnrepresentableValue));
    }

    #[test_case(0.0)]
    #[test_case(-47.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_invalid_value(target: f64) {
        assert_eq!(encode(target, 5.0, BandCount::Four), Err(CodeError::InvalidValue));
    }

    #[test]
    fn test_6_band_not_encodable() {
        assert_eq!(encode(10_000.0, 1.0, BandCount::Six), Err(CodeError::InvalidBandCount));
    }

    #[test]
    fn test_tolerance_resolution_checked_first() {
        // A bad tolerance reports as such even when the value is also
        // unrepresentable.
        assert_eq!(encode(1e15, 37.0, BandCount::Four), Err(CodeError::NonStandardTolerance));
    }
}
