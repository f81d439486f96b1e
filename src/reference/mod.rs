//! Reference mini-language: `column(name)` with an optional `[i]` or
//! `[start:end]` selector.
//!
//! Any change to the accepted grammar breaks stored descriptors.

pub mod grammar;
pub mod select;

pub use grammar::{ColumnRef, Selector};
pub use select::normalize;
