//! Number types for evaluation beyond plain floats

pub mod dual;

pub use dual::Dual;
