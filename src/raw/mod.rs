mod arena;
mod handle;
mod node;
mod raw_tree_map;

#[cfg(any(test, feature = "test-util"))]
pub(crate) use handle::Handle;
#[cfg(any(test, feature = "test-util"))]
pub(crate) use node::Side;
pub(crate) use raw_tree_map::{InOrder, PreOrder, RawTreeMap};
