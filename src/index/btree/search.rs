//! Membership search.

use std::borrow::Borrow;

use super::node::Node;

/// Walk from `root` towards `key`, returning whether it is stored.
///
/// At each node the first key not less than `key` either matches or names
/// the child to descend into. Reaching a leaf without a match means absent.
pub(super) fn search<K, Q>(root: &Node<K>, key: &Q) -> bool
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = root;
    loop {
        let (found, index) = node.find(key);
        if found {
            return true;
        }
        if node.is_leaf() {
            return false;
        }
        node = &node.children[index];
    }
}
