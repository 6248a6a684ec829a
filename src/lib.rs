//! # ohmcode
//!
//! A Rust library for decoding and inverse-calculating resistor color band codes.
//! Supports 4, 5 and 6 band resistors with tolerance and temperature coefficient bands.
//!
//! ## Features
//!
//! - **Forward decoding**: Band colors to resistance, tolerance and TCR with a formatted reading
//! - **Inverse encoding**: Target resistance and tolerance to a canonical band color sequence
//! - **Role tables**: Legal color sets per band position for building pickers and validators
//! - **Detector screening**: Filter and validate best-effort color name lists from vision services
//!
//! ## Quick Start
//!
//! ### Decoding a band sequence
//!
//! ```rust
//! use ohmcode::{decode, BandColor::*, BandCount};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reading = decode(&[Brown, Black, Black, Red, Brown], BandCount::Five)?;
//!
//! assert_eq!(reading.ohms, 10_000.0);
//! assert_eq!(reading.to_string(), "10.0 kΩ ±1%");
//! # Ok(())
//! # }
//! ```
//!
//! ### Finding the bands for a value
//!
//! ```rust
//! use ohmcode::{encode, BandColor::*, BandCount};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bands = encode(4_700.0, 1.0, BandCount::Five)?;
//!
//! assert_eq!(bands, vec![Yellow, Violet, Black, Brown, Brown]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Screening detected color names
//!
//! ```rust
//! use ohmcode::read_names;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Detector output may carry junk entries; they are dropped before decoding.
//! let reading = read_names(["brown", "black", "glare", "orange", "gold"])?;
//!
//! assert_eq!(reading.to_string(), "10.0 kΩ ±5%");
//! # Ok(())
//! # }
//! ```
//!
//! ## Band Layout
//!
//! - **4 band**: digit, digit, multiplier, tolerance
//! - **5 band**: digit, digit, digit, multiplier, tolerance
//! - **6 band**: digit, digit, digit, multiplier, tolerance, TCR
//!
//! The first band may not be black on 4 and 5 band resistors. 6 band resistors
//! are allowed to lead with black, matching field convention.
//!
//! All operations are pure and the color table is static, so concurrent use
//! needs no synchronization.

pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod scan;

pub use color::{BandColor, BandCount, BandRole, ALL_COLORS, MULTIPLIER_ORDER};
pub use decode::{decode, Reading};
pub use encode::encode;
pub use error::{CodeError, CodeResult};
pub use scan::{read_names, screen_names};
