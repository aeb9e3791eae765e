//! Pure operations on the category tree: flattening, cycle checks and
//! sibling lookups. Nothing here talks to the backend.

mod cycle;
mod flatten;
mod query;

pub use cycle::is_circular;
pub use flatten::{count_nodes, flatten};
pub use query::{find, find_flat, move_targets, public_tree, siblings};
