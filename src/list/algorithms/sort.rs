use crate::list::List;
use std::mem;

/// In-place insertion sort over the node chain.
///
/// `less(a, b)` means `a` must precede `b` and must be a strict order.
///
/// Element values are shifted between nodes while node identities stay put,
/// so node addresses observed before a sort remain valid after it. Each
/// element from the second onward walks backward, one swap per step, until
/// its predecessor no longer must follow it.
pub(crate) fn insertion_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let ghost = list.ghost_node();
    // SAFETY: all links of a well-formed cyclic list are valid, and both
    // walks below stop at the ghost node, so every dereferenced node holds
    // an element. Swaps only ever pair a node with its distinct predecessor.
    unsafe {
        let mut to_sort = list.front_node().as_ref().next;
        while to_sort != ghost {
            let next = to_sort.as_ref().next;
            let mut hole = to_sort;
            loop {
                let mut prev = hole.as_ref().prev;
                if prev == ghost || !less(&hole.as_ref().element, &prev.as_ref().element) {
                    break;
                }
                mem::swap(&mut hole.as_mut().element, &mut prev.as_mut().element);
                hole = prev;
            }
            to_sort = next;
        }
    }
}
