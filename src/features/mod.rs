pub mod categories;
pub mod context;
