mod category;
mod log;

pub use category::{Category, CategoryStatus, FlatCategory};
pub use log::{CategoryLog, FieldChange, LogUser};
