use crate::iterators::{Drain, IntoIter, Iter, IterMut};
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// A double-ended queue, optionally bounded to a maximum length.
///
/// When a bounded deque is full, pushing onto one end evicts the item
/// at the other end, so the deque always holds the most recently
/// pushed items.
#[derive(Clone)]
pub struct Deque<T> {
    items: VecDeque<T>,
    // None when the deque is unbounded.
    maxlen: Option<usize>,
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Deques compare by their items; the bound is not part of the value.
impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Deque<T>) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state)
    }
}

impl<T> Deque<T> {
    /// Creates an empty, unbounded `Deque`. No allocations are
    /// performed until values are added.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert_eq!(None, deque.maxlen());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            items: VecDeque::new(),
            maxlen: None,
        }
    }

    /// Creates an empty `Deque` that never holds more than `maxlen`
    /// items. Like `new`, no allocations are performed until values
    /// are added, so any bound is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d = Deque::with_maxlen(2);
    ///
    /// d.push_back(1);
    /// d.push_back(2);
    /// assert_eq!(Some(1), d.push_back(3));
    ///
    /// assert_eq!(vec![&2, &3], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn with_maxlen(maxlen: usize) -> Deque<T> {
        Deque {
            items: VecDeque::new(),
            maxlen: Some(maxlen),
        }
    }

    /// The maximum length of the deque, or `None` when it is unbounded.
    pub fn maxlen(&self) -> Option<usize> {
        self.maxlen
    }

    /// The number of items in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.push_front(1);
    /// d.push_back(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.pop_front();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the deque is bounded and holds `maxlen` items.
    pub fn is_full(&self) -> bool {
        self.maxlen.map_or(false, |max| self.items.len() >= max)
    }

    /// Insert `data` at the back of the deque. If the deque is full,
    /// the front item is removed and returned.
    ///
    /// A deque with a `maxlen` of zero can hold nothing, so `data` is
    /// handed straight back.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d = Deque::with_maxlen(1);
    ///
    /// assert_eq!(None, d.push_back(10));
    /// assert_eq!(Some(10), d.push_back(20));
    /// assert_eq!(Some(&20), d.back());
    /// ```
    pub fn push_back(&mut self, data: T) -> Option<T> {
        if self.maxlen == Some(0) {
            return Some(data);
        }

        let evicted = if self.is_full() {
            self.items.pop_front()
        } else {
            None
        };
        if evicted.is_some() {
            tracing::trace!(len = self.items.len(), "evicted front of bounded deque");
        }

        self.items.push_back(data);
        evicted
    }

    /// Insert `data` at the front of the deque. If the deque is full,
    /// the back item is removed and returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d = Deque::with_maxlen(2);
    ///
    /// d.push_front(1);
    /// d.push_front(2);
    /// assert_eq!(Some(1), d.push_front(3));
    /// assert_eq!(vec![&3, &2], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn push_front(&mut self, data: T) -> Option<T> {
        if self.maxlen == Some(0) {
            return Some(data);
        }

        let evicted = if self.is_full() {
            self.items.pop_back()
        } else {
            None
        };
        if evicted.is_some() {
            tracing::trace!(len = self.items.len(), "evicted back of bounded deque");
        }

        self.items.push_front(data);
        evicted
    }

    /// Remove the front of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut l = Deque::new();
    /// l.push_back(10);
    /// l.push_back(20);
    ///
    /// assert_eq!(Some(10), l.pop_front());
    /// assert_eq!(Some(20), l.pop_front());
    /// assert_eq!(None, l.pop_front());
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Remove the back of the deque and return it. If the deque is
    /// empty, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut l = Deque::new();
    /// l.push_front(10);
    /// l.push_front(20);
    ///
    /// assert_eq!(Some(10), l.pop_back());
    /// assert_eq!(Some(20), l.pop_back());
    /// assert_eq!(None, l.pop_back());
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// The front item, if any.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The front item as a mutable reference, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// The back item, if any.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// The back item as a mutable reference, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.items.back_mut()
    }

    /// The item `index` positions from the front, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The item `index` positions from the front as a mutable
    /// reference, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Push every item of `iter` onto the back, in order. Items evicted
    /// from a full bounded deque are dropped.
    pub fn extend_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push_back(data);
        }
    }

    /// Push every item of `iter` onto the front, in order, so the items
    /// end up reversed at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d: Deque<u8> = vec![4].into_iter().collect();
    /// d.extend_front(vec![1, 2, 3]);
    ///
    /// assert_eq!(vec![&3, &2, &1, &4], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn extend_front<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.push_front(data);
        }
    }

    /// Rotate the deque `n` steps to the right: items leave the back
    /// and re-enter at the front. A negative `n` rotates to the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d: Deque<u8> = (1..=5).collect();
    ///
    /// d.rotate(2);
    /// assert_eq!(vec![&4, &5, &1, &2, &3], d.iter().collect::<Vec<_>>());
    ///
    /// d.rotate(-3);
    /// assert_eq!(vec![&2, &3, &4, &5, &1], d.iter().collect::<Vec<_>>());
    /// ```
    pub fn rotate(&mut self, n: isize) {
        let len = self.items.len();
        if len <= 1 {
            return;
        }

        let steps = n.unsigned_abs() % len;
        if n >= 0 {
            self.items.rotate_right(steps);
        } else {
            self.items.rotate_left(steps);
        }
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear()
    }

    /// Remove the first item equal to `value` and return it. If there
    /// is no such item, `None` is returned and the deque is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d: Deque<u8> = vec![1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(Some(1), d.remove(&1));
    /// assert_eq!(vec![&2, &1], d.iter().collect::<Vec<_>>());
    /// assert_eq!(None, d.remove(&3));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let ix = self.items.iter().position(|item| item == value)?;
        self.items.remove(ix)
    }

    /// The number of items equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.items.iter().filter(|item| *item == value).count()
    }

    /// True if some item is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Iterate over the deque from front to back. Use `.rev()` to go
    /// from back to front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.items.iter())
    }

    /// Iterate mutably over the deque from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.items.iter_mut())
    }

    /// Remove every item, yielding them from front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_collections::Deque;
    ///
    /// let mut d: Deque<u8> = (0..3).collect();
    ///
    /// assert_eq!(vec![0, 1, 2], d.drain().collect::<Vec<_>>());
    /// assert!(d.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self.items.drain(..))
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend_back(iter);
        l
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter)
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.items.into_iter())
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Iter<'l, T> {
        self.iter()
    }
}
