//! Client-side engine for the intranet category tree.

pub mod core;
pub mod features;
pub mod shared;
