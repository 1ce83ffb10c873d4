mod arena;
mod handle;
mod height;
mod node;
mod raw_avl_tree_map;

pub(crate) use handle::Handle;
pub(crate) use raw_avl_tree_map::RawAvlTreeMap;
