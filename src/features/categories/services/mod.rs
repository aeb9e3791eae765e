mod category_service;
mod drop_resolver;

pub use category_service::{CategoryService, LogScope, StatusToggle};
pub use drop_resolver::{CategoryChange, DropKind, DropPlan, DropResolver, PlannedUpdate};
