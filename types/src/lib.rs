//! Type and value contracts for the Shuntyard expression engine.
//!
//! The engine never owns a type system of its own. Embedders describe their
//! types by implementing [`Type`], their runtime values by implementing
//! [`Value`], and say which types an element accepts or produces with
//! [`TypeAlternatives`] ("any one of these types").
//!
//! # Example
//!
//! ```
//! use shuntyard_types::{Type, TypeAlternatives};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Ty {
//!     Float,
//!     Nil,
//! }
//!
//! impl Type for Ty {
//!     fn name(&self) -> &str {
//!         match self {
//!             Ty::Float => "float",
//!             Ty::Nil => "nil",
//!         }
//!     }
//! }
//!
//! let maybe_float = TypeAlternatives::from([Ty::Float, Ty::Nil]);
//! assert_eq!(maybe_float.to_string(), "float|nil");
//! assert!(TypeAlternatives::single(Ty::Float).is_compatible_with(&maybe_float));
//! assert!(!maybe_float.is_compatible_with(&TypeAlternatives::single(Ty::Float)));
//! ```

#![no_std]
extern crate alloc;

mod alternatives;
mod describe;
mod ty;
mod value;

pub use alternatives::TypeAlternatives;
pub use describe::{TypeList, describe_alternatives, describe_list, describe_type};
pub use ty::Type;
pub use value::Value;
