//! Calculation engine for shrimp pond management.
//!
//! Every calculator is a plain function or a `compute` constructor over typed
//! inputs. Results that cannot be computed from what was entered are `None`;
//! range and table-lookup failures are `PondforgeError`s. The [`wizard`]
//! module chains the calculators and carries values from one step to the
//! next.

pub mod aeration;
pub mod biofloc;
pub mod constants;
pub mod economics;
pub mod error;
pub mod evaporation;
pub mod feed;
pub mod format;
pub mod growth;
pub mod input;
pub mod logger;
pub mod report;
pub mod survival;
pub mod water;
pub mod wizard;

pub use error::PondforgeError;
