//! Errors reported while building and executing expressions.
//!
//! # Error Categories
//!
//! - **Build errors** ([`BuildError`]): structural problems found while
//!   appending elements (unbalanced groups, unknown kinds) and static
//!   inconsistencies found by `finalize` (arity underflow, type mismatch).
//!   They carry the element's display form and the type-alternative sets
//!   involved, so the failing position can be pinpointed without re-running
//!   the check.
//!
//! - **Execution errors** ([`ExecutionError`]): runtime stack problems and
//!   failures returned by an element. Every execution error aborts the whole
//!   call; no partial result is returned.

use miette::Diagnostic;
use thiserror::Error;

/// Error raised while building or finalizing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum BuildError {
    /// A group delimiter without its counterpart.
    ///
    /// Reported by `append` for a closing delimiter with no open group, and by
    /// `finalize` for an open group that was never closed.
    #[error("unbalanced group: {delimiter:?} has no matching delimiter")]
    #[diagnostic(
        code(shuntyard::unbalanced_group),
        help("every group-open element needs a later group-close element, and vice versa")
    )]
    UnbalancedGroup { delimiter: String },

    /// A raw kind code that names no [`ElementKind`](crate::ElementKind).
    #[error("unknown element kind #{code}")]
    #[diagnostic(
        code(shuntyard::unknown_kind),
        help("valid kinds are value (0), group-open (1), group-close (2) and operator (3)")
    )]
    UnknownKind { code: u8 },

    /// An element needs more inputs than the expression provides at its position.
    #[error(
        "inconsistent expression: {element:?} needs {required} entries, only {available} available"
    )]
    #[diagnostic(code(shuntyard::arity_underflow))]
    ArityUnderflow {
        element: String,
        required: usize,
        available: usize,
    },

    /// An input slot may receive a type the element does not accept.
    #[error("inconsistent expression: {element:?} needs {required}, got {provided}")]
    #[diagnostic(
        code(shuntyard::type_mismatch),
        help("every type the operand may produce must be accepted by the element")
    )]
    TypeMismatch {
        element: String,
        required: String,
        provided: String,
    },
}

/// Error raised while executing a compiled expression.
///
/// `E` is the error type of the elements. Element failures are wrapped in
/// [`ExecutionError::Element`] unmodified; failures of nested expressions are
/// passed through as they are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExecutionError<E> {
    /// Fewer values on the runtime stack than the element consumes.
    ///
    /// Only possible when the expression receives fewer inputs than it declares.
    #[error("{element:?} needs {required} values, only {available} available")]
    StackUnderflow {
        element: String,
        required: usize,
        available: usize,
    },

    /// The program left a number of values other than the one expected.
    #[error("expected {expected} result value(s), got {found}")]
    WrongResultArity { expected: usize, found: usize },

    /// The runtime stack grew beyond `ExecutionOptions::max_stack_size`.
    #[error("value stack overflow: {size} values exceed the maximum of {max}")]
    StackOverflow { size: usize, max: usize },

    /// Failure returned by an element.
    #[error("{0}")]
    Element(E),
}

impl<E> ExecutionError<E> {
    /// The element failure, if this error is one.
    pub fn element_error(&self) -> Option<&E> {
        match self {
            ExecutionError::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// The runtime stack would exceed its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overflow {
    pub size: usize,
    pub max: usize,
}

impl<E> From<Overflow> for ExecutionError<E> {
    fn from(Overflow { size, max }: Overflow) -> Self {
        ExecutionError::StackOverflow { size, max }
    }
}
