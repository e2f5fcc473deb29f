//! Human-readable descriptions of types and type-alternative sets.

use alloc::string::{String, ToString};
use core::fmt;

use crate::{Type, TypeAlternatives};

pub(crate) fn fmt_alternatives<T: Type>(types: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some((first, rest)) = types.split_first() else {
        return f.write_str("void");
    };
    f.write_str(first.name())?;
    for ty in rest {
        write!(f, "|{}", ty.name())?;
    }
    Ok(())
}

/// Display adapter for a list of type-alternative sets (one per stack slot).
///
/// Sets are separated by `, `, e.g. `float64|nil, bool`.
pub struct TypeList<'a, T>(pub &'a [TypeAlternatives<T>]);

impl<T: Type> fmt::Display for TypeList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternatives) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt_alternatives(alternatives.as_slice(), f)?;
        }
        Ok(())
    }
}

struct Alternatives<'a, T>(&'a [T]);

impl<T: Type> fmt::Display for Alternatives<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_alternatives(self.0, f)
    }
}

/// Describes a set of alternatives: `void` when empty, else `a|b|c`.
pub fn describe_alternatives<T: Type>(types: &[T]) -> String {
    Alternatives(types).to_string()
}

/// Describes a single type.
pub fn describe_type<T: Type>(ty: &T) -> String {
    describe_alternatives(core::slice::from_ref(ty))
}

/// Describes one set per slot, separated by `, `.
pub fn describe_list<T: Type>(list: &[TypeAlternatives<T>]) -> String {
    TypeList(list).to_string()
}
