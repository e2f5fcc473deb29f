use alloc::vec::Vec;
use core::fmt;
use core::slice;

use smallvec::SmallVec;

use crate::Type;
use crate::describe::fmt_alternatives;

/// An ordered set of types meaning "any one of these".
///
/// Element inputs declare what they accept and element outputs declare what
/// they may produce. Most sets hold one or two types, so they are stored
/// inline.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeAlternatives<T>(SmallVec<[T; 2]>);

impl<T> TypeAlternatives<T> {
    /// The empty set. It is compatible with nothing.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// A set holding exactly one type.
    pub fn single(ty: T) -> Self {
        let mut types = SmallVec::new();
        types.push(ty);
        Self(types)
    }

    pub fn push(&mut self, ty: T) {
        self.0.push(ty);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: PartialEq> TypeAlternatives<T> {
    pub fn contains(&self, ty: &T) -> bool {
        self.0.contains(ty)
    }

    /// Whether values drawn from `self` are always accepted by `required`.
    ///
    /// Every provided type must appear in the required set. This is a subset
    /// test, not an intersection test: a producer of `float|nil` does not
    /// satisfy a consumer of `float`. Empty sets are never compatible.
    pub fn is_compatible_with(&self, required: &Self) -> bool {
        if self.is_empty() || required.is_empty() {
            return false;
        }
        self.iter().all(|provided| required.contains(provided))
    }
}

impl<T> Default for TypeAlternatives<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TypeAlternatives<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for TypeAlternatives<T> {
    fn from(types: Vec<T>) -> Self {
        Self(SmallVec::from_vec(types))
    }
}

impl<T, const N: usize> From<[T; N]> for TypeAlternatives<T> {
    fn from(types: [T; N]) -> Self {
        types.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for TypeAlternatives<T> {
    fn from(types: &[T]) -> Self {
        types.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a TypeAlternatives<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for TypeAlternatives<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `void` for the empty set, otherwise the names joined with `|`.
impl<T: Type> fmt::Display for TypeAlternatives<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_alternatives(self.as_slice(), f)
    }
}
