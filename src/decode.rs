use std::fmt::{Display, Error, Formatter};

use crate::color::{BandColor, BandCount};
use crate::error::{CodeError, CodeResult};

// Reading
//------------------------------------------------------------------------------

/// Decoded resistor value. Built fresh on every [`decode`] call.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Reading {
    /// Base resistance in ohms.
    pub ohms: f64,
    /// Tolerance in percent.
    pub tolerance: f64,
    /// Temperature coefficient in ppm/K, 6 band resistors only.
    pub tcr: Option<u32>,
}

impl Display for Reading {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        if self.ohms >= 1e6 {
            write!(f, "{} MΩ", sig3(self.ohms / 1e6))?;
        } else if self.ohms >= 1e3 {
            write!(f, "{} kΩ", sig3(self.ohms / 1e3))?;
        } else {
            write!(f, "{} Ω", sig3(self.ohms))?;
        }
        write!(f, " ±{}%", self.tolerance)?;
        if let Some(tcr) = self.tcr {
            write!(f, " ({tcr} ppm/K)")?;
        }
        Ok(())
    }
}

/// Renders with 3 significant figures: 10.0, 4.70, 470, 0.470. Values with
/// more than 3 integer digits fall back to exponent form, 9.90e+4.
fn sig3(value: f64) -> String {
    if value <= 0.0 {
        return "0.00".to_string();
    }
    let int_digits = value.log10().floor() as i32 + 1;
    if int_digits > 3 {
        let exp = int_digits - 1;
        let mantissa = value / 10f64.powi(exp);
        return format!("{mantissa:.2}e+{exp}");
    }
    let decimals = (3 - int_digits).max(0) as usize;
    format!("{value:.decimals$}")
}

// Forward decoder
//------------------------------------------------------------------------------

/// Decodes a band color sequence into a resistance reading.
///
/// The first band may not be black on 4 and 5 band resistors. 6 band
/// resistors are allowed to lead with black, matching field convention.
///
/// # Example
///
/// ```rust
/// use ohmcode::{decode, BandColor::*, BandCount};
///
/// let reading = decode(&[Brown, Black, Orange, Gold], BandCount::Four).unwrap();
/// assert_eq!(reading.ohms, 10_000.0);
/// assert_eq!(reading.to_string(), "10.0 kΩ ±5%");
/// ```
pub fn decode(bands: &[BandColor], count: BandCount) -> CodeResult<Reading> {
    if bands.len() != count.bands() {
        return Err(CodeError::InvalidColorForRole);
    }
    if count != BandCount::Six && bands[0].digit() == Some(0) {
        return Err(CodeError::InvalidFirstBand);
    }

    let nd = count.digits();
    let mut significand = 0u32;
    for band in &bands[..nd] {
        let digit = band.digit().ok_or(CodeError::InvalidColorForRole)?;
        significand = significand * 10 + digit as u32;
    }

    let multiplier = bands[nd].multiplier().ok_or(CodeError::InvalidColorForRole)?;
    let tolerance = bands[nd + 1].tolerance().ok_or(CodeError::InvalidColorForRole)?;
    let tcr = match count {
        BandCount::Six => Some(bands[5].tcr().ok_or(CodeError::InvalidColorForRole)?),
        _ => None,
    };

    Ok(Reading { ohms: significand as f64 * multiplier, tolerance, tcr })
}
