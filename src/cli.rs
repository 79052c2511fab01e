//! Command line interface.

pub mod compare;
pub mod convert;
pub mod utils;
