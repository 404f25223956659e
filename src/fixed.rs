//! Fixed-length sequences stored inline.

use core::fmt;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice;

use const_default::ConstDefault;

use crate::error::{InsertionError, StorageError};
use crate::utils::{fmt_elements, index_panic};

/// An ordered sequence of exactly `N` elements, stored inline.
///
/// Elements may be read and overwritten in constant time, but never
/// inserted or removed: the length is fixed by the type.
///
/// ```
/// use seq_contrast::FixedSequence;
///
/// let mut arr = FixedSequence::from_array([1, 2, 3, 4, 5]);
/// arr[2] = 99;
/// assert_eq!(arr.to_string(), "[1, 2, 99, 4, 5]");
/// assert_eq!(arr.len(), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedSequence<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedSequence<T, N> {
    /// Wrap an existing array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// The number of elements, which never changes.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the sequence holds no elements at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Overwrite the element at `index`, returning the previous value.
    ///
    /// When `index` is out of range the value is handed back inside the error.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, InsertionError<T>> {
        match self.data.get_mut(index) {
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

    /// Write `value` at position `position % N`, so that any position
    /// lands inside the sequence.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    #[inline]
    pub fn write_wrapping(&mut self, position: usize, value: T) {
        let Some(index) = position.checked_rem(N) else {
            index_panic();
        };
        self.data[index] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Unwrap the inner array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedSequence<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedSequence<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(f, &self.data)
    }
}

impl<T: ConstDefault + Copy, const N: usize> ConstDefault for FixedSequence<T, N> {
    const DEFAULT: Self = Self {
        data: [T::DEFAULT; N],
    };
}

impl<T: Default, const N: usize> Default for FixedSequence<T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            data: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedSequence<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> Deref for FixedSequence<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for FixedSequence<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, const N: usize> Index<usize> for FixedSequence<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(item) => item,
            None => index_panic(),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSequence<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.data.get_mut(index) {
            Some(item) => item,
            None => index_panic(),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSequence<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSequence<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T1, T2, const N: usize> PartialEq<[T2]> for FixedSequence<T1, N>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.data[..].eq(other)
    }
}

impl<T1, T2, const N: usize> PartialEq<&[T2]> for FixedSequence<T1, N>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.data[..].eq(*other)
    }
}

impl<T1, T2, const N: usize, const M: usize> PartialEq<[T2; M]> for FixedSequence<T1, N>
where
    T1: PartialEq<T2>,
{
    #[inline]
    fn eq(&self, other: &[T2; M]) -> bool {
        self.data[..].eq(&other[..])
    }
}
