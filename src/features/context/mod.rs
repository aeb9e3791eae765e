mod filter_context;

pub use filter_context::FilterContext;
