//! The contract every token of an expression satisfies.
//!
//! Literals, operators and group delimiters are all elements. The builder
//! only looks at an element's metadata (kind, precedence, associativity and
//! type-alternative sets); the execution loop only calls [`Element::execute`].

use core::fmt;

use shuntyard_types::{TypeAlternatives, Value};

use crate::context::Context;
use crate::error::BuildError;

/// Type of the values an element works on.
pub type ValueOf<E> = <E as Element>::Value;

/// Type system of the values an element works on.
pub type TypeOf<E> = <<E as Element>::Value as Value>::Type;

/// Structural role of an element, deciding how `append` places it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementKind {
    /// A literal or a sub-expression producing values.
    Value = 0,
    /// Opens a group, e.g. `(`.
    GroupOpen = 1,
    /// Closes the innermost open group, e.g. `)`.
    GroupClose = 2,
    /// An operator placed by precedence and associativity.
    Operator = 3,
}

impl TryFrom<u8> for ElementKind {
    type Error = BuildError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ElementKind::Value),
            1 => Ok(ElementKind::GroupOpen),
            2 => Ok(ElementKind::GroupClose),
            3 => Ok(ElementKind::Operator),
            _ => Err(BuildError::UnknownKind { code }),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Value => "value",
            ElementKind::GroupOpen => "group-open",
            ElementKind::GroupClose => "group-close",
            ElementKind::Operator => "operator",
        })
    }
}

/// Tie-break between operators of equal precedence.
///
/// `and`/`or` are typically left associative, unary negation right associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Associativity {
    #[default]
    Left,
    Right,
}

/// A single token of an expression.
///
/// Metadata is read once, when the element is appended or pushed, and cached
/// by the builder. Implementations may compute it lazily, but must not expect
/// to be queried again.
///
/// The [`Display`](fmt::Display) form names the element in expression names,
/// dumps and error messages.
pub trait Element: fmt::Display {
    /// Runtime values consumed and produced by [`Element::execute`].
    type Value: Value;
    /// Failure returned by [`Element::execute`]. The engine propagates it unmodified.
    type Error;

    /// Operator priority. Higher binds tighter (typically `or` = 1, `and` = 2, `not` = 3).
    ///
    /// Only compared between operators, the scale is up to the implementation.
    fn precedence(&self) -> i32;

    fn associativity(&self) -> Associativity;

    fn kind(&self) -> ElementKind;

    /// One set of accepted types per consumed stack slot, bottom-most first.
    ///
    /// An empty list means the element takes no input.
    fn input_types(&self) -> Vec<TypeAlternatives<TypeOf<Self>>>;

    /// One set of possible types per produced stack slot.
    fn output_types(&self) -> Vec<TypeAlternatives<TypeOf<Self>>>;

    /// Computes the element's outputs.
    ///
    /// `args` holds exactly `input_types().len()` values, bottom-most first.
    /// `ctx` is forwarded untouched from the caller of the expression;
    /// long-running elements should honor its cancellation and deadline.
    fn execute(
        &self,
        ctx: &Context,
        args: Vec<Self::Value>,
    ) -> Result<Vec<Self::Value>, Self::Error>;
}
