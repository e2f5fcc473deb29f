//! Shuntyard - A generic infix expression engine
//!
//! # Overview
//!
//! Shuntyard compiles sequences of caller-defined elements (literals,
//! operators, parentheses) into postfix programs and runs them on a value
//! stack. The engine knows nothing about the values it computes with: the
//! embedder brings its own value and type system. Common use cases include:
//!
//! - Filter and routing rules built from a fixed vocabulary of operators
//! - Feature flags and conditional logic assembled by a UI
//! - Small calculators over domain-specific values
//!
//! Every expression is checked once, when it is finalized: each operator must
//! receive enough operands, and every type an operand may produce must be
//! accepted by the operator. Execution then only has to run the program.
//!
//! # Quick Start
//!
//! ```
//! use std::fmt;
//!
//! use shuntyard::{
//!     Associativity, Builder, Context, Element, ElementKind, Type, TypeAlternatives, Value,
//! };
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Num;
//!
//! impl Type for Num {
//!     fn name(&self) -> &str {
//!         "num"
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct N(i64);
//!
//! impl Value for N {
//!     type Type = Num;
//!     fn ty(&self) -> Num {
//!         Num
//!     }
//!     fn descr(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! enum Tok {
//!     Lit(i64),
//!     Add,
//!     Mul,
//! }
//!
//! impl fmt::Display for Tok {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         match self {
//!             Tok::Lit(n) => write!(f, "{n}"),
//!             Tok::Add => f.write_str("+"),
//!             Tok::Mul => f.write_str("*"),
//!         }
//!     }
//! }
//!
//! impl Element for Tok {
//!     type Value = N;
//!     type Error = String;
//!
//!     fn precedence(&self) -> i32 {
//!         match self {
//!             Tok::Lit(_) => 0,
//!             Tok::Add => 1,
//!             Tok::Mul => 2,
//!         }
//!     }
//!     fn associativity(&self) -> Associativity {
//!         Associativity::Left
//!     }
//!     fn kind(&self) -> ElementKind {
//!         match self {
//!             Tok::Lit(_) => ElementKind::Value,
//!             _ => ElementKind::Operator,
//!         }
//!     }
//!     fn input_types(&self) -> Vec<TypeAlternatives<Num>> {
//!         match self {
//!             Tok::Lit(_) => vec![],
//!             _ => vec![TypeAlternatives::single(Num); 2],
//!         }
//!     }
//!     fn output_types(&self) -> Vec<TypeAlternatives<Num>> {
//!         vec![TypeAlternatives::single(Num)]
//!     }
//!     fn execute(&self, _ctx: &Context, args: Vec<N>) -> Result<Vec<N>, String> {
//!         match (self, args.as_slice()) {
//!             (Tok::Lit(n), []) => Ok(vec![N(*n)]),
//!             (Tok::Add, [a, b]) => Ok(vec![N(a.0 + b.0)]),
//!             (Tok::Mul, [a, b]) => Ok(vec![N(a.0 * b.0)]),
//!             _ => Err(format!("bad arguments for {self}")),
//!         }
//!     }
//! }
//!
//! let (two, three, four) = (Tok::Lit(2), Tok::Lit(3), Tok::Lit(4));
//!
//! // 2 + 3 * 4
//! let mut builder = Builder::new(vec![]);
//! builder.append(&two)?.append(&Tok::Add)?.append(&three)?;
//! builder.append(&Tok::Mul)?.append(&four)?;
//! let expr = builder.finalize()?;
//!
//! assert_eq!(expr.name(), "2 + 3 * 4");
//! assert_eq!(expr.exec(&Context::background(), vec![]), Ok(N(14)));
//! # Ok::<(), shuntyard::BuildError>(())
//! ```
//!
//! # Nested Expressions
//!
//! A [`CompiledExpression`] can be appended to another builder, where it acts
//! as a single value: it consumes its declared inputs, runs its own program
//! and pushes its outputs. Use [`CompiledExpression::dump`] to see the
//! resulting tree.
//!
//! # Errors
//!
//! [`BuildError`] implements [`miette::Diagnostic`]; render it with
//! [`render_error`] or one of its variants.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from shuntyard_core
pub use shuntyard_core::{
    Associativity, BuildError, Builder, CompilationOptions, CompiledExpression, Context, Element,
    ElementKind, ExecutionError, ExecutionOptions, Node, TypeOf, ValueOf,
};

// Re-export the type system contracts
pub use shuntyard_types::{
    Type, TypeAlternatives, TypeList, Value, describe_alternatives, describe_list, describe_type,
};
