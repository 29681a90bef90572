mod key_index;
mod node;
mod order_tree;

pub(crate) use key_index::KeyIndex;
pub(crate) use order_tree::{InOrder, OrderTree};
