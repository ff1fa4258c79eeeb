//! An experimental, compile-time-checked variant of the list, built on
//! `ghost-cell` branded cells and `static-rc` fractional ownership instead
//! of raw pointers.
//!
//! Every node is owned by exactly two `StaticRc` halves, one per incoming
//! link; removal joins both halves back into the full owner, so the module
//! needs no unsafe code. All reads and writes go through a `GhostToken`,
//! which plays the role the borrow checker plays for the pointer-based
//! list.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

use crate::able::Equatable;

const FRONT: usize = 0;
const BACK: usize = 1;

// A node's `links[s]` holds the neighbor in the direction away from end
// `s`: `links[FRONT]` is the next node when walking from the front end,
// `links[BACK]` the previous one.
const NEXT: usize = FRONT;

pub struct TokenList<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    element: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        Self {
            links: [None, None],
            element,
        }
    }
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        Self {
            ends: [None, None],
            len: 0,
        }
    }
}

// private methods
impl<'id, T> TokenList<'id, T> {
    fn push_at(&mut self, side: usize, element: T, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.ends[side].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(old_end);
            }
            None => self.ends[oppo] = Some(left),
        }
        self.ends[side] = Some(right);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let outer = self.ends[side].take()?;
        let inner = match outer.deref().borrow_mut(token).links[side].take() {
            Some(neighbor) => {
                let inner = neighbor.deref().borrow_mut(token).links[oppo]
                    .take()
                    .unwrap();
                self.ends[side] = Some(neighbor);
                inner
            }
            None => self.ends[oppo].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().element)
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ends[FRONT].is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_at(FRONT, element, token);
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_at(BACK, element, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(FRONT, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(BACK, token)
    }

    /// Linear scan from the front using the equality capability.
    pub fn contains(&self, item: &T, token: &GhostToken<'id>) -> bool
    where
        T: Equatable,
    {
        let mut cur = self.ends[FRONT].as_ref();
        while let Some(ptr) = cur {
            let node = ptr.deref().borrow(token);
            if node.element.equals(item) {
                return true;
            }
            cur = node.links[NEXT].as_ref();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::able::Equatable;
    use crate::experiments::TokenList;
    use ghost_cell::GhostToken;

    struct Score(i32);

    impl Equatable for Score {
        fn equals(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    #[test]
    fn token_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            assert!(list.is_empty());
            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            assert!(!list.is_empty());
            assert_eq!(list.len(), 2);
            assert_eq!(list.pop_back(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), Some(2));
            assert!(list.is_empty());
            assert_eq!(list.pop_back(&mut token), None);
        })
    }

    #[test]
    fn token_list_contains() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            list.push_back(Score(21), &mut token);
            list.push_back(Score(22), &mut token);
            list.push_back(Score(33), &mut token);

            assert!(list.contains(&Score(22), &token));
            assert!(!list.contains(&Score(40), &token));

            while list.pop_front(&mut token).is_some() {}
            assert!(!list.contains(&Score(22), &token));
        })
    }
}
