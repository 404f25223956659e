//! Growable sequences of individually boxed elements.

use core::fmt;
use core::iter::repeat;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use crate::error::{InsertionError, StorageError};
use crate::grow::{Grow, GrowDoubling};
use crate::utils::{fmt_elements, index_panic, max_capacity};

/// Create a [`GrowableSequence`] containing the arguments, in the manner
/// of `vec!`.
#[macro_export]
macro_rules! growable {
    () => (
        <$crate::GrowableSequence<_>>::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::growable::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::growable::from_array([$($x),+])
    );
}

/// Create a `GrowableSequence<T>` from an array `[T; N]`.
#[inline]
pub fn from_array<T, const N: usize>(data: [T; N]) -> GrowableSequence<T> {
    let mut seq = GrowableSequence::with_capacity(N);
    seq.extend(data);
    seq
}

/// Create a `GrowableSequence<T>` from a cloneable element and a count of
/// the number of elements.
#[inline]
pub fn from_elem<T: Clone>(elem: T, count: usize) -> GrowableSequence<T> {
    let mut seq = GrowableSequence::with_capacity(count);
    seq.extend(repeat(elem).take(count));
    seq
}

/// An ordered, growable sequence whose elements are each held in their
/// own heap allocation.
///
/// The element slots are reallocated when the sequence runs out of room,
/// with the next capacity chosen by the growth policy `G`.
pub struct GrowableSequence<T, G: Grow = GrowDoubling> {
    items: Vec<Box<T>>,
    _grow: PhantomData<G>,
}

impl<T, G: Grow> GrowableSequence<T, G> {
    /// Constructs a new, empty sequence.
    ///
    /// The sequence will not allocate until elements are pushed onto it.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            _grow: PhantomData,
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        let mut seq = Self::new();
        seq.try_reserve_exact(capacity)?;
        Ok(seq)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        let mut seq = Self::with_capacity(data.len());
        seq.extend_from_slice(data);
        seq
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn reserve(&mut self, reserve: usize) {
        match self.try_reserve(reserve) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    #[inline]
    pub fn try_reserve(&mut self, reserve: usize) -> Result<(), StorageError> {
        self._try_reserve(reserve, false)
    }

    #[inline]
    pub fn reserve_exact(&mut self, reserve: usize) {
        match self.try_reserve_exact(reserve) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    #[inline]
    pub fn try_reserve_exact(&mut self, reserve: usize) -> Result<(), StorageError> {
        self._try_reserve(reserve, true)
    }

    fn _try_reserve(&mut self, reserve: usize, exact: bool) -> Result<(), StorageError> {
        let buf_cap = self.items.capacity();
        let length = self.items.len();
        let Some(buf_needed) = length.checked_add(reserve) else {
            return Err(StorageError::CapacityLimit);
        };
        if buf_cap >= buf_needed {
            return Ok(());
        }
        let max_cap = max_capacity::<Box<T>>();
        if buf_needed > max_cap {
            return Err(StorageError::CapacityLimit);
        }
        let mut capacity = buf_needed;
        if !exact {
            capacity = G::next_capacity::<Box<T>>(buf_cap, capacity).min(max_cap);
        }
        log::trace!("growing sequence storage: {} -> {}", buf_cap, capacity);
        self.items.try_reserve_exact(capacity - length)?;
        Ok(())
    }

    /// Append an element to the end of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the storage could not be extended.
    pub fn push(&mut self, item: T) {
        match self.try_push(item) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_push(&mut self, item: T) -> Result<(), InsertionError<T>> {
        if let Err(error) = self._try_reserve(1, false) {
            return Err(InsertionError::new(error, item));
        }
        self.items.push(Box::new(item));
        Ok(())
    }

    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.reserve(items.len());
        self.items.extend(items.iter().map(|item| Box::new(item.clone())));
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop().map(|item| *item)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|item| &**item)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index).map(|item| &mut **item)
    }

    /// Overwrite the element at `index`, returning the previous value.
    ///
    /// When `index` is out of range the value is handed back inside the error.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, InsertionError<T>> {
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(InsertionError::new(StorageError::IndexOutOfBounds, value)),
        }
    }

    /// Overwrite the element at `index`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        match self.set(index, value) {
            Ok(prev) => prev,
            Err(error) => error.panic(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Copy the elements into a contiguous `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// An iterator over references to the elements of a [`GrowableSequence`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Box<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| &**item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|item| &**item)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T, G: Grow> IntoIterator for &'a GrowableSequence<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, G: Grow> Clone for GrowableSequence<T, G> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _grow: PhantomData,
        }
    }
}

impl<T: fmt::Debug, G: Grow> fmt::Debug for GrowableSequence<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, G: Grow> fmt::Display for GrowableSequence<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, self.iter())
    }
}

impl<T, G: Grow> Default for GrowableSequence<T, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, G: Grow> Extend<T> for GrowableSequence<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (min, _) = iter.size_hint();
        self.reserve(min);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, G: Grow> FromIterator<T> for GrowableSequence<T, G> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T, G: Grow> Index<usize> for GrowableSequence<T, G> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => index_panic(),
        }
    }
}

impl<T, G: Grow> IndexMut<usize> for GrowableSequence<T, G> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Some(item) => item,
            None => index_panic(),
        }
    }
}

impl<T1, T2, G1, G2> PartialEq<GrowableSequence<T2, G2>> for GrowableSequence<T1, G1>
where
    T1: PartialEq<T2>,
    G1: Grow,
    G2: Grow,
{
    #[inline]
    fn eq(&self, other: &GrowableSequence<T2, G2>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, G: Grow> Eq for GrowableSequence<T, G> {}

impl<T1, T2, G> PartialEq<[T2]> for GrowableSequence<T1, G>
where
    T1: PartialEq<T2>,
    G: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T1, T2, G> PartialEq<&[T2]> for GrowableSequence<T1, G>
where
    T1: PartialEq<T2>,
    G: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        <Self as PartialEq<[T2]>>::eq(self, other)
    }
}

impl<T1, T2, G, const N: usize> PartialEq<[T2; N]> for GrowableSequence<T1, G>
where
    T1: PartialEq<T2>,
    G: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        <Self as PartialEq<[T2]>>::eq(self, other)
    }
}
