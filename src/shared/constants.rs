/// Default page size for audit-log pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// API PATHS
// =============================================================================

pub const CATEGORIES_PATH: &str = "intranet/categories";

// =============================================================================
// AUDIT LOG ACTIONS
// =============================================================================

pub const ACTION_CREATE_CATEGORY: &str = "create_category";
pub const ACTION_UPDATE_CATEGORY: &str = "update_category";
pub const ACTION_ACTIVATE_CATEGORY: &str = "activate_category";
pub const ACTION_INACTIVATE_CATEGORY: &str = "inactivate_category";
pub const ACTION_DELETE_CATEGORY: &str = "delete_category";
