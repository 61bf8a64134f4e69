//! Plain data shared by the pondforge calculators: measurements, unit enums,
//! the static reference tables and the on-disk scenario format.

pub mod chemistry;
pub mod command;
pub mod environment;
pub mod equipment;
pub mod file_formats;
pub mod genetics;
pub mod units;
