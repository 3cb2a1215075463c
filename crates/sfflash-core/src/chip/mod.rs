//! Chip identification types
//!
//! This module defines the known vendors, the two command families and
//! the status register layouts of each family.

mod family;
mod id;
mod manufacturer;
mod status;

pub use family::ChipFamily;
pub use id::JedecId;
pub use manufacturer::Manufacturer;
pub use status::{Status25, Status45};
