//! Shuntyard core: build, check and run infix expressions over a pluggable
//! type system.
//!
//! Elements (literals, operators, group delimiters) are supplied by the
//! embedder through the [`Element`] trait. A [`Builder`] turns them into a
//! postfix program with the shunting-yard algorithm, [`Builder::finalize`]
//! verifies arity and types once, and the resulting [`CompiledExpression`]
//! is executed by a stack machine as many times as needed.
//!
//! ## Example
//!
//! ```ignore
//! use shuntyard_core::{Builder, Context};
//!
//! // 2.3 + 2.4 * 2.5
//! let mut builder = Builder::new(vec![]);
//! builder.append(&N23)?.append(&ADD)?.append(&N24)?.append(&MUL)?.append(&N25)?;
//! let expr = builder.finalize()?;
//!
//! let result = expr.exec(&Context::background(), vec![])?;
//! ```
//!
//! ## Nested expressions
//!
//! A compiled expression can be appended to another builder with
//! [`Builder::append_expression`]. It then acts as a single value: it pops
//! its declared inputs, runs its own program on them and pushes its outputs.

pub mod builder;
pub mod context;
pub mod element;
pub mod error;
pub mod expression;
pub mod node;
pub mod options;

mod stack;

pub use builder::Builder;
pub use context::Context;
pub use element::{Associativity, Element, ElementKind, TypeOf, ValueOf};
pub use error::{BuildError, ExecutionError};
pub use expression::CompiledExpression;
pub use node::Node;
pub use options::{CompilationOptions, ExecutionOptions};
