mod category_client;
#[cfg(test)]
pub(crate) mod fake;

pub use category_client::{CategoryApi, HttpCategoryClient};
