use core::fmt;
use core::mem::size_of;

#[cold]
#[inline(never)]
pub(crate) fn index_panic() -> ! {
    panic!("Invalid element index");
}

/// Write elements as a bracketed, comma-separated list: `[1, 2, 3]`.
pub(crate) fn fmt_elements<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("[")?;
    for (idx, item) in items.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&item, f)?;
    }
    f.write_str("]")
}

pub(crate) const fn min_non_zero_cap<T>() -> usize {
    if size_of::<T>() == 1 {
        8
    } else if size_of::<T>() <= 1024 {
        4
    } else {
        1
    }
}

/// The largest element count whose allocation size fits in an `isize`.
pub(crate) const fn max_capacity<T>() -> usize {
    let size = size_of::<T>();
    if size == 0 {
        usize::MAX
    } else {
        isize::MAX as usize / size
    }
}
