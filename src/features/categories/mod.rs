//! Hierarchical category management for intranet content.
//!
//! The tree lives on the backend; this feature fetches it, flattens it for
//! display, turns drag gestures into parent/order updates and routes
//! inactivate/delete requests with their content disposition.
//!
//! ## Backend endpoints used
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/intranet/categories` | Nested tree (filter by status, groups, units) |
//! | GET | `/intranet/categories/{id}` | Single category |
//! | POST | `/intranet/categories` | Create category |
//! | PUT | `/intranet/categories/{id}` | Partial update (parent, order, status, fields) |
//! | PATCH | `/intranet/categories/{id}/inactivate` | Inactivate with content action |
//! | DELETE | `/intranet/categories/{id}` | Delete with content action |
//! | GET | `/intranet/categories/{id}/contents-count` | Contents attached to a category |
//! | GET | `/intranet/categories/{id}/logs` | Audit log for one category |
//! | GET | `/intranet/categories/logs/all` | Audit log for every category |

pub mod clients;
pub mod drag;
pub mod dtos;
pub mod models;
pub mod services;
pub mod tree;

pub use clients::{CategoryApi, HttpCategoryClient};
pub use services::{CategoryService, DropResolver};
