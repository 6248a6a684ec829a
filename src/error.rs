use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CodeError {
    // Forward decoding
    InvalidFirstBand,
    InvalidColorForRole,
    InvalidBandCount,
    UnknownColor,

    // Inverse encoding
    NonStandardTolerance,
    UnrepresentableValue,
    InvalidValue,
}

impl Display for CodeError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            Self::InvalidFirstBand => "First band cannot be black",
            Self::InvalidColorForRole => "Color has no value for its band role",
            Self::InvalidBandCount => "Band count must be 4, 5 or 6",
            Self::UnknownColor => "Unknown band color",
            Self::NonStandardTolerance => "Tolerance is not a standard value",
            Self::UnrepresentableValue => "Value not representable with standard bands",
            Self::InvalidValue => "Resistance must be a positive number",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CodeError {}

pub type CodeResult<T> = Result<T, CodeError>;
