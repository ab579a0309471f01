use std::collections::vec_deque;

/// An iterator over the deque from front to back. It is constructed
/// from the [`iter`] method on `Deque`, and can be reversed to walk
/// from the back.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    inner: vec_deque::Iter<'l, T>,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(inner: vec_deque::Iter<'l, T>) -> Self {
        Self { inner }
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'l, T> DoubleEndedIterator for Iter<'l, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'l, T> ExactSizeIterator for Iter<'l, T> {}

/// A mutable iterator over the deque from front to back. It is
/// constructed from the [`iter_mut`] method on `Deque`.
///
/// [`iter_mut`]: struct.Deque.html#method.iter_mut
pub struct IterMut<'l, T> {
    inner: vec_deque::IterMut<'l, T>,
}

impl<'l, T> IterMut<'l, T> {
    pub(crate) fn new(inner: vec_deque::IterMut<'l, T>) -> Self {
        Self { inner }
    }
}

impl<'l, T> Iterator for IterMut<'l, T> {
    type Item = &'l mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'l, T> DoubleEndedIterator for IterMut<'l, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'l, T> ExactSizeIterator for IterMut<'l, T> {}

/// An owning iterator over the deque from front to back.
pub struct IntoIter<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: vec_deque::IntoIter<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// A draining iterator over the deque from front to back. It is
/// constructed from the [`drain`] method on `Deque`. Items that are
/// not consumed are still removed when the iterator is dropped.
///
/// [`drain`]: struct.Deque.html#method.drain
pub struct Drain<'l, T> {
    inner: vec_deque::Drain<'l, T>,
}

impl<'l, T> Drain<'l, T> {
    pub(crate) fn new(inner: vec_deque::Drain<'l, T>) -> Self {
        Self { inner }
    }
}

impl<'l, T> Iterator for Drain<'l, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'l, T> DoubleEndedIterator for Drain<'l, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

#[cfg(test)]
mod test {
    use crate::deque::Deque;

    #[test]
    fn drain_from_the_back() {
        let mut l: Deque<u8> = (0..4).collect();

        assert_eq!(vec![3, 2, 1, 0], l.drain().rev().collect::<Vec<_>>());
        assert!(l.is_empty());
    }

    #[test]
    fn partial_drain_empties_deque() {
        let mut l: Deque<u8> = (0..4).collect();

        assert_eq!(Some(0), l.drain().next());
        assert!(l.is_empty());
    }

    #[test]
    fn exact_size() {
        let l: Deque<u8> = (0..4).collect();

        assert_eq!(4, l.iter().len());
        assert_eq!(4, l.into_iter().len());
    }
}
