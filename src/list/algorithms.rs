use crate::able::{Equatable, Sortable};
use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

use crate::list::algorithms::sort::insertion_sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element that
    /// [`equals`](Equatable::equals) the given value.
    ///
    /// The scan is linear and stops at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::{Equatable, List};
    /// use std::iter::FromIterator;
    ///
    /// struct Score(i32);
    ///
    /// impl Equatable for Score {
    ///     fn equals(&self, other: &Self) -> bool {
    ///         self.0 == other.0
    ///     }
    /// }
    ///
    /// let list = List::from_iter([Score(1), Score(2)]);
    /// assert!(list.has(&Score(2)));
    /// assert!(!list.has(&Score(9)));
    /// ```
    pub fn has(&self, item: &T) -> bool
    where
        T: Equatable,
    {
        self.iter().any(|elt| elt.equals(item))
    }

    /// Produces a new list containing, in original order, every element for
    /// which `keep` returns `true`.
    ///
    /// Non-destructive: the receiver is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([22, -3, 33]);
    /// let positive = list.filter(|n| *n > 0);
    ///
    /// assert_eq!(Vec::from_iter(&positive), vec![&22, &33]);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn filter<P>(&self, mut keep: P) -> List<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.iter().filter(|elt| keep(elt)).cloned().collect()
    }

    /// Sorts the list in place by the element order, smallest first.
    ///
    /// Equivalent to `self.sort_by(|a, b| a.less_than(b))`. Returns the
    /// receiver so the call can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::{List, Sortable};
    /// use std::iter::FromIterator;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Score(i32);
    ///
    /// impl Sortable for Score {
    ///     fn less_than(&self, other: &Self) -> bool {
    ///         self.0 < other.0
    ///     }
    /// }
    ///
    /// let mut list = List::from_iter([Score(22), Score(21), Score(33)]);
    /// list.sort();
    ///
    /// assert_eq!(list.to_vec(), vec![Score(21), Score(22), Score(33)]);
    /// ```
    pub fn sort(&mut self) -> &mut Self
    where
        T: Sortable,
    {
        self.sort_by(|a, b| a.less_than(b))
    }

    /// Sorts the list in place with a comparator function, where
    /// `less(a, b)` means `a` must precede `b`.
    ///
    /// The comparator must define a strict order. Element values are shifted
    /// between nodes; node identities stay put. Lists of length 0 or 1 are
    /// left untouched. Returns the receiver so the call can be chained.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([22, 21, 33]);
    ///
    /// list.sort_by(|a, b| a < b);
    /// assert_eq!(list.to_vec(), vec![21, 22, 33]);
    ///
    /// // reverse sorting
    /// list.sort_by(|a, b| b < a);
    /// assert_eq!(list.to_vec(), vec![33, 22, 21]);
    /// ```
    pub fn sort_by<F>(&mut self, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        insertion_sort(self, less);
        self
    }

    /// Applies `f` to a mutable reference of each element in forward order,
    /// allowing in-place mutation without reallocation.
    ///
    /// Returns the receiver so the call can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.for_each_mut(|n| *n *= 10);
    ///
    /// assert_eq!(list.to_vec(), vec![10, 20, 30]);
    /// ```
    pub fn for_each_mut<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&mut T),
    {
        self.iter_mut().for_each(f);
        self
    }

    /// Materializes the full forward traversal into a `Vec`, cloning each
    /// element. An empty list yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(List::<i32>::new().to_vec(), vec![]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Like [`List::to_vec`], but consumes the list and moves the elements
    /// out instead of cloning them.
    ///
    /// # Examples
    ///
    /// ```
    /// use able_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::able::{Equatable, Sortable};
    use crate::list::List;
    use std::fmt;
    use std::iter::FromIterator;

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct Score(i32);

    impl Equatable for Score {
        fn equals(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Sortable for Score {
        fn less_than(&self, other: &Self) -> bool {
            self.0 < other.0
        }
    }

    impl fmt::Display for Score {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Student {
        age: i32,
        name: &'static str,
    }

    impl Equatable for Student {
        fn equals(&self, other: &Self) -> bool {
            self.age == other.age && self.name == other.name
        }
    }

    #[test]
    fn has_uses_the_equality_capability() {
        let list = List::from_iter([
            Student { age: 21, name: "ada" },
            Student { age: 33, name: "grace" },
        ]);

        assert!(list.has(&Student { age: 33, name: "grace" }));
        assert!(!list.has(&Student { age: 33, name: "ada" }));
        assert!(!List::<Student>::new().has(&Student { age: 21, name: "ada" }));
    }

    #[test]
    fn filter_keeps_matches_in_order() {
        let list = List::from_iter([3, -1, 4, -1, 5]);
        let positive = list.filter(|n| *n > 0);

        assert_eq!(positive.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn filter_never_mutates_the_receiver() {
        let list = List::from_iter([22, 21, 33]);
        let before = list.to_vec();

        let none = list.filter(|_| false);
        assert!(none.is_empty());
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), before);
    }

    #[test]
    fn sort_by_orders_ascending() {
        let mut list = List::from_iter([22, 21, 33]);
        list.sort_by(|a, b| a < b);
        assert_eq!(list.to_vec(), vec![21, 22, 33]);
    }

    #[test]
    fn sort_handles_edge_lengths() {
        let mut empty = List::<i32>::new();
        empty.sort_by(|a, b| a < b);
        assert!(empty.is_empty());

        let mut single = List::from_iter([9]);
        single.sort_by(|a, b| a < b);
        assert_eq!(single.to_vec(), vec![9]);

        let mut sorted = List::from_iter(0..10);
        sorted.sort_by(|a, b| a < b);
        assert_eq!(sorted.to_vec(), Vec::from_iter(0..10));

        let mut reversed = List::from_iter((0..10).rev());
        reversed.sort_by(|a, b| a < b);
        assert_eq!(reversed.to_vec(), Vec::from_iter(0..10));
    }

    #[test]
    fn sort_uses_the_ordering_capability() {
        let mut list = List::from_iter([Score(5), Score(2), Score(4), Score(3), Score(1)]);
        list.sort();
        assert_eq!(
            list.to_vec(),
            vec![Score(1), Score(2), Score(3), Score(4), Score(5)],
        );
    }

    #[test]
    fn sort_preserves_node_addresses() {
        let mut list = List::from_iter([3, 1, 2]);
        let addresses: Vec<*const i32> = list.iter().map(|n| n as *const i32).collect();

        list.sort_by(|a, b| a < b);

        let after: Vec<*const i32> = list.iter().map(|n| n as *const i32).collect();
        assert_eq!(addresses, after);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn for_each_mut_visits_forward() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut seen = Vec::new();

        list.for_each_mut(|n| {
            seen.push(*n);
            *n += 100;
        });

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(list.to_vec(), vec![101, 102, 103]);
    }

    #[test]
    fn filter_then_sort_chain() {
        let mut list = List::new();
        list.push_back(Score(22));
        list.push_back(Score(21));
        list.push_back(Score(33));

        let mut kept = list.filter(|score| score.0 > 0);
        assert_eq!(kept.len(), 3);

        kept.sort_by(|a, b| a.less_than(b));
        assert_eq!(kept.to_string(), "{21, 22, 33}");

        // the receiver kept its original order
        assert_eq!(list.to_vec(), vec![Score(22), Score(21), Score(33)]);
    }

    #[test]
    fn list_comparisons_and_clone() {
        let list = List::from_iter([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert!(list < List::from_iter([1, 2, 4]));

        let mut target = List::from_iter([9, 9]);
        target.clone_from(&list);
        assert_eq!(target.to_vec(), vec![1, 2, 3]);
    }
}
