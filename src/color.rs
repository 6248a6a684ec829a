use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use crate::error::{CodeError, CodeResult};

// Band color
//------------------------------------------------------------------------------

/// One of the 13 colors a resistor band can take, including the absent
/// "None" band used for ±20% tolerance.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
    None,
}

use BandColor::*;

pub const ALL_COLORS: [BandColor; 13] =
    [Black, Brown, Red, Orange, Yellow, Green, Blue, Violet, Grey, White, Gold, Silver, None];

/// Canonical multiplier search order. Inverse encoding walks this list and
/// returns the first consistent assignment, so lower decades always win.
pub const MULTIPLIER_ORDER: [BandColor; 12] =
    [Black, Brown, Red, Orange, Yellow, Green, Blue, Violet, Grey, White, Gold, Silver];

impl BandColor {
    pub const fn name(self) -> &'static str {
        match self {
            Black => "Black",
            Brown => "Brown",
            Red => "Red",
            Orange => "Orange",
            Yellow => "Yellow",
            Green => "Green",
            Blue => "Blue",
            Violet => "Violet",
            Grey => "Grey",
            White => "White",
            Gold => "Gold",
            Silver => "Silver",
            None => "None",
        }
    }

    /// CSS-style hex color for rendering the band.
    pub const fn hex(self) -> &'static str {
        match self {
            Black => "#000000",
            Brown => "#A52A2A",
            Red => "#FF0000",
            Orange => "#FFA500",
            Yellow => "#FFFF00",
            Green => "#008000",
            Blue => "#0000FF",
            Violet => "#EE82EE",
            Grey => "#808080",
            White => "#FFFFFF",
            Gold => "#FFD700",
            Silver => "#C0C0C0",
            None => "#f0f0f0",
        }
    }

    /// Significant digit 0-9, for colors with a digit role.
    pub const fn digit(self) -> Option<u8> {
        match self {
            Black => Some(0),
            Brown => Some(1),
            Red => Some(2),
            Orange => Some(3),
            Yellow => Some(4),
            Green => Some(5),
            Blue => Some(6),
            Violet => Some(7),
            Grey => Some(8),
            White => Some(9),
            Gold | Silver | None => Option::None,
        }
    }

    /// Scale factor applied to the significant digits. Gold and silver
    /// divide instead of multiply.
    pub const fn multiplier(self) -> Option<f64> {
        match self {
            Black => Some(1.0),
            Brown => Some(10.0),
            Red => Some(100.0),
            Orange => Some(1e3),
            Yellow => Some(1e4),
            Green => Some(1e5),
            Blue => Some(1e6),
            Violet => Some(1e7),
            Grey => Some(1e8),
            White => Some(1e9),
            Gold => Some(0.1),
            Silver => Some(0.01),
            None => Option::None,
        }
    }

    /// Tolerance in percent, for colors with a tolerance role.
    pub const fn tolerance(self) -> Option<f64> {
        match self {
            Brown => Some(1.0),
            Red => Some(2.0),
            Green => Some(0.5),
            Blue => Some(0.25),
            Violet => Some(0.1),
            Grey => Some(0.05),
            Gold => Some(5.0),
            Silver => Some(10.0),
            None => Some(20.0),
            Black | Orange | Yellow | White => Option::None,
        }
    }

    /// Temperature coefficient in ppm/K, for colors with a TCR role.
    pub const fn tcr(self) -> Option<u32> {
        match self {
            Brown => Some(100),
            Red => Some(50),
            Orange => Some(15),
            Yellow => Some(25),
            Green => Some(20),
            Blue => Some(10),
            Violet => Some(5),
            Grey => Some(1),
            Black | White | Gold | Silver | None => Option::None,
        }
    }

    pub fn from_digit(digit: u8) -> Option<BandColor> {
        ALL_COLORS.iter().copied().find(|c| c.digit() == Some(digit))
    }

    /// Exact-match tolerance lookup. Table constants are binary-exact f64
    /// literals, so equality rather than an epsilon is intentional.
    pub fn from_tolerance(tolerance: f64) -> Option<BandColor> {
        ALL_COLORS.iter().copied().find(|c| c.tolerance() == Some(tolerance))
    }
}

impl Display for BandColor {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.name())
    }
}

impl FromStr for BandColor {
    type Err = CodeError;

    fn from_str(s: &str) -> CodeResult<Self> {
        ALL_COLORS
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(CodeError::UnknownColor)
    }
}

// Band role
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum BandRole {
    Digit,
    Multiplier,
    Tolerance,
    Tcr,
}

pub const DIGIT_OPTIONS: [BandColor; 10] =
    [Black, Brown, Red, Orange, Yellow, Green, Blue, Violet, Grey, White];

// First digit band of a 4 or 5 band resistor cannot be black.
pub const FIRST_DIGIT_OPTIONS: [BandColor; 9] =
    [Brown, Red, Orange, Yellow, Green, Blue, Violet, Grey, White];

pub const TOLERANCE_OPTIONS: [BandColor; 9] =
    [Brown, Red, Green, Blue, Violet, Grey, Gold, Silver, None];

pub const TCR_OPTIONS: [BandColor; 8] =
    [Brown, Red, Orange, Yellow, Green, Blue, Violet, Grey];

impl BandRole {
    /// Colors carrying the attribute this role reads.
    pub fn options(self) -> &'static [BandColor] {
        match self {
            Self::Digit => &DIGIT_OPTIONS,
            Self::Multiplier => &MULTIPLIER_ORDER,
            Self::Tolerance => &TOLERANCE_OPTIONS,
            Self::Tcr => &TCR_OPTIONS,
        }
    }
}

// Band count
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum BandCount {
    Four = 4,
    Five = 5,
    Six = 6,
}

impl BandCount {
    pub const fn bands(self) -> usize {
        self as usize
    }

    /// Number of significant digit bands: 2 for 4-band, 3 otherwise.
    pub const fn digits(self) -> usize {
        match self {
            Self::Four => 2,
            Self::Five | Self::Six => 3,
        }
    }

    /// Role of each band position, leftmost first.
    pub fn roles(self) -> &'static [BandRole] {
        use BandRole::*;
        match self {
            Self::Four => &[Digit, Digit, Multiplier, Tolerance],
            Self::Five => &[Digit, Digit, Digit, Multiplier, Tolerance],
            Self::Six => &[Digit, Digit, Digit, Multiplier, Tolerance, Tcr],
        }
    }

    /// Legal colors for one band position, enforcing the no-black first
    /// digit rule for 4 and 5 band resistors. 6 band resistors may lead
    /// with black, matching field convention.
    pub fn position_options(self, pos: usize) -> &'static [BandColor] {
        debug_assert!(pos < self.bands(), "Band position out of range");

        if pos == 0 && self != Self::Six {
            &FIRST_DIGIT_OPTIONS
        } else {
            self.roles()[pos].options()
        }
    }
}

impl TryFrom<usize> for BandCount {
    type Error = CodeError;

    fn try_from(count: usize) -> CodeResult<Self> {
        match count {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            _ => Err(CodeError::InvalidBandCount),
        }
    }
}

#[cfg(test)]
mod color_tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_table_roles() {
        for color in ALL_COLORS {
            match color {
                Gold | Silver | None => assert!(color.digit().is_none()),
                c => assert!(c.digit().is_some()),
            }
        }
        assert_eq!(None.multiplier(), Option::None);
        assert_eq!(Black.tolerance(), Option::None);
        assert_eq!(White.tcr(), Option::None);
    }

    #[test_case("brown", Brown)]
    #[test_case("GREY", Grey)]
    #[test_case(" Violet ", Violet)]
    #[test_case("none", None)]
    fn test_parse_name(name: &str, expected: BandColor) {
        assert_eq!(name.parse::<BandColor>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!("magenta".parse::<BandColor>(), Err(CodeError::UnknownColor));
        assert_eq!("".parse::<BandColor>(), Err(CodeError::UnknownColor));
    }

    #[test]
    fn test_digit_lookup_is_inverse_of_digit() {
        for d in 0..=9 {
            let color = BandColor::from_digit(d).unwrap();
            assert_eq!(color.digit(), Some(d));
        }
        assert_eq!(BandColor::from_digit(10), Option::None);
    }

    #[test_case(5.0, Gold)]
    #[test_case(10.0, Silver)]
    #[test_case(20.0, None)]
    #[test_case(0.05, Grey)]
    fn test_tolerance_lookup(tolerance: f64, expected: BandColor) {
        assert_eq!(BandColor::from_tolerance(tolerance), Some(expected));
    }

    #[test]
    fn test_nonstandard_tolerance_lookup() {
        assert_eq!(BandColor::from_tolerance(37.0), Option::None);
        assert_eq!(BandColor::from_tolerance(0.0), Option::None);
    }

    #[test]
    fn test_tcr_options_derived_from_table() {
        // Every color carrying a TCR is in the set. Green (tcr 20) stays in
        // even though many printed charts omit it from TCR pickers.
        assert!(TCR_OPTIONS.contains(&Green));
        for color in ALL_COLORS {
            assert_eq!(TCR_OPTIONS.contains(&color), color.tcr().is_some());
        }
    }

    #[test]
    fn test_first_band_options_exclude_black() {
        assert!(!BandCount::Four.position_options(0).contains(&Black));
        assert!(!BandCount::Five.position_options(0).contains(&Black));
        assert!(BandCount::Six.position_options(0).contains(&Black));
        assert!(BandCount::Five.position_options(1).contains(&Black));
    }

    #[test]
    fn test_band_count_conversion() {
        assert_eq!(BandCount::try_from(5), Ok(BandCount::Five));
        assert_eq!(BandCount::try_from(3), Err(CodeError::InvalidBandCount));
        assert_eq!(BandCount::try_from(7), Err(CodeError::InvalidBandCount));
    }
}
