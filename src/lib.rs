//! # Voltfit Core
//!
//! Chooses the best available resistors for a three-resistor summing network
//! that scales a bipolar voltage into the input range of a 5V ADC.
//!
//! This library provides:
//! - A catalog of standard resistor values (built-in E-series or loaded
//!   from a file)
//! - The summing-network transfer function and its safety scoring
//! - An exhaustive search over all catalog triples
//! - Report generation with the resulting ADC readings
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`catalog`] - Allowed resistor values, parsing and validation
//! - [`network`] - The (Q, R, S) network model and scoring
//! - [`search`] - Exhaustive optimizer over the catalog cube
//! - [`report`] - ADC projection and human-readable output
//!
//! ## Usage
//!
//! ```no_run
//! use voltfit_core::{find_best, Catalog, Report};
//!
//! let catalog = Catalog::e_series();
//! match find_best(&catalog, -12.0, 12.0)? {
//!     Some(solution) => print!("{}", Report::new(solution, -12.0, 12.0)),
//!     None => eprintln!("no safe configuration"),
//! }
//! # Ok::<(), voltfit_core::VoltfitError>(())
//! ```
//!
//! ## Method
//!
//! Each candidate network injects the input through Q and a 5V reference
//! through S, with R pulling the junction toward ground. The junction
//! voltage is linear in the input, so only the two extremes need checking:
//! a network whose output leaves [0V, 5V] at either extreme could damage
//! the ADC and is scored with an unselectable sentinel; every safe network
//! is scored by the output swing it achieves. With 20 catalog values the
//! full cube is 8000 evaluations and completes in well under a second.

pub mod catalog;
pub mod error;
pub mod network;
pub mod report;
pub mod search;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use error::{Result, VoltfitError};
pub use network::Network;
pub use report::Report;
pub use search::{find_best, Solution};

/// ADC reference voltage: the top of the safe output window, in volts.
pub const VREF: f64 = 5.0;

/// Full-scale reading of the 10-bit ADC.
pub const ADC_FULL_SCALE: u16 = 1023;

/// Default low input extreme, in volts.
pub const DEFAULT_V_LO: f64 = -12.0;

/// Default high input extreme, in volts.
pub const DEFAULT_V_HI: f64 = 12.0;
