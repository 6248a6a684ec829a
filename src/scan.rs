use crate::color::{BandColor, BandCount};
use crate::decode::{decode, Reading};
use crate::error::CodeResult;

// Detected name screening
//------------------------------------------------------------------------------

/// Screens a best-effort color name sequence from an external detector.
///
/// Detectors make no guarantees: the list may be empty, contain junk names,
/// or be the wrong length. Unrecognized names are dropped and the surviving
/// count must be 4, 5 or 6.
///
/// # Example
///
/// ```rust
/// use ohmcode::{screen_names, BandColor::*, BandCount};
///
/// let names = ["brown", "black", "smudge", "orange", "gold"];
/// let (bands, count) = screen_names(names).unwrap();
/// assert_eq!(bands, vec![Brown, Black, Orange, Gold]);
/// assert_eq!(count, BandCount::Four);
/// ```
pub fn screen_names<I, S>(names: I) -> CodeResult<(Vec<BandColor>, BandCount)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bands: Vec<BandColor> =
        names.into_iter().filter_map(|name| name.as_ref().parse().ok()).collect();
    let count = BandCount::try_from(bands.len())?;
    Ok((bands, count))
}

/// Screens detected names and decodes the surviving bands in one step.
pub fn read_names<I, S>(names: I) -> CodeResult<Reading>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (bands, count) = screen_names(names)?;
    decode(&bands, count)
}
