use alloc::string::String;
use core::fmt::Debug;

use crate::Type;

/// A runtime value flowing through a compiled expression.
pub trait Value: Debug {
    /// The type system this value belongs to.
    type Type: Type;

    /// The concrete type of this value.
    fn ty(&self) -> Self::Type;

    /// Human-readable description, used for debugging output.
    fn descr(&self) -> String;
}
