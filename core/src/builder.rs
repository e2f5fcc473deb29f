//! Incremental construction of expressions.
//!
//! A [`Builder`] receives elements either in infix order through the
//! `append*` methods (shunting-yard), or already in postfix order through the
//! `push*` methods. [`Builder::finalize`] flushes pending operators, checks
//! arity and types, and turns the builder into an immutable
//! [`CompiledExpression`].
//!
//! A builder should be fed by one family of methods only: mixing `append`
//! and `push` on the same builder yields an unspecified postfix order.

use shuntyard_types::{TypeAlternatives, TypeList};
use tracing::{debug, trace};

use crate::element::{Element, ElementKind, TypeOf};
use crate::error::BuildError;
use crate::expression::CompiledExpression;
use crate::node::{CachedElement, Node};
use crate::options::CompilationOptions;

/// Mutable expression under construction.
///
/// # Example
///
/// ```ignore
/// let mut builder = Builder::new(vec![]);
/// builder.append(&LPAREN)?.append(&TWO)?.append(&PLUS)?.append(&THREE)?;
/// builder.append(&RPAREN)?.append(&TIMES)?.append(&FOUR)?;
/// let expr = builder.finalize()?;
/// assert_eq!(expr.name(), "( 2 + 3 ) * 4");
/// ```
///
/// Finalizing consumes the builder, so an expression cannot be modified
/// once compiled:
///
/// ```compile_fail
/// # use shuntyard_core::{Builder, Element};
/// fn sealed<'e, E: Element>(builder: Builder<'e, E>, element: &'e E) {
///     let _compiled = builder.finalize();
///     builder.append(element);
/// }
/// ```
pub struct Builder<'e, E: ?Sized + Element> {
    /// Compiled program so far, in postfix order.
    postfix: Vec<CachedElement<'e, E>>,
    /// Pending operators and open groups (only used by `append`).
    precedence_stack: Vec<CachedElement<'e, E>>,
    /// Parameters expected on the stack before the expression's own values.
    input_types: Vec<TypeAlternatives<TypeOf<E>>>,
    /// Display names of every element, in insertion order.
    name_fragments: Vec<String>,
    name: Option<String>,
    options: CompilationOptions,
}

impl<'e, E: ?Sized + Element> Builder<'e, E> {
    /// Creates an empty builder expecting `input_types` parameters (possibly none).
    pub fn new(input_types: Vec<TypeAlternatives<TypeOf<E>>>) -> Self {
        Self::with_options(input_types, CompilationOptions::default())
    }

    pub fn with_options(
        input_types: Vec<TypeAlternatives<TypeOf<E>>>,
        options: CompilationOptions,
    ) -> Self {
        Self {
            postfix: Vec::new(),
            precedence_stack: Vec::new(),
            input_types,
            name_fragments: Vec::new(),
            name: None,
            options,
        }
    }

    /// Sets the display name, overriding the one derived from element names.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Appends an element given in infix order.
    pub fn append(&mut self, element: &'e E) -> Result<&mut Self, BuildError> {
        self.append_node(Node::Element(element))
    }

    /// Appends a compiled expression as a single value in infix order.
    pub fn append_expression(
        &mut self,
        expression: &'e CompiledExpression<'e, E>,
    ) -> Result<&mut Self, BuildError> {
        self.append_node(Node::Expression(expression))
    }

    /// Shunting-yard step for one node.
    pub fn append_node(&mut self, node: Node<'e, E>) -> Result<&mut Self, BuildError> {
        let entry = CachedElement::capture(node);
        trace!(element = %node, kind = %entry.kind, "append");

        match entry.kind {
            ElementKind::Value => self.postfix.push(entry),
            ElementKind::GroupOpen => self.precedence_stack.push(entry),
            ElementKind::GroupClose => {
                // Locate the group before popping anything, so a rejected
                // delimiter leaves the builder untouched.
                let Some(open) = self
                    .precedence_stack
                    .iter()
                    .rposition(|e| e.kind == ElementKind::GroupOpen)
                else {
                    return Err(BuildError::UnbalancedGroup {
                        delimiter: node.to_string(),
                    });
                };
                let pending = self.precedence_stack.split_off(open + 1);
                self.postfix.extend(pending.into_iter().rev());
                self.precedence_stack.truncate(open);
            }
            ElementKind::Operator => {
                while let Some(top) = self.precedence_stack.pop_if(|top| {
                    top.kind != ElementKind::GroupOpen && top.binds_before(&entry)
                }) {
                    self.postfix.push(top);
                }
                self.precedence_stack.push(entry);
            }
        }

        self.name_fragments.push(node.to_string());
        Ok(self)
    }

    /// Pushes an element given in postfix order, ignoring its kind.
    pub fn push(&mut self, element: &'e E) -> Result<&mut Self, BuildError> {
        self.push_node(Node::Element(element))
    }

    /// Pushes a compiled expression given in postfix order.
    pub fn push_expression(
        &mut self,
        expression: &'e CompiledExpression<'e, E>,
    ) -> Result<&mut Self, BuildError> {
        self.push_node(Node::Expression(expression))
    }

    pub fn push_node(&mut self, node: Node<'e, E>) -> Result<&mut Self, BuildError> {
        trace!(element = %node, "push");
        self.postfix.push(CachedElement::capture(node));
        self.name_fragments.push(node.to_string());
        Ok(self)
    }

    /// Seals the expression.
    ///
    /// Flushes pending operators, then replays the program over a stack of
    /// type-alternative sets seeded with the declared inputs, checking that
    /// every element gets enough operands of accepted types. Whatever remains
    /// on that stack becomes the expression's output types; any number of
    /// outputs is allowed here.
    pub fn finalize(mut self) -> Result<CompiledExpression<'e, E>, BuildError> {
        while let Some(entry) = self.precedence_stack.pop() {
            if entry.kind == ElementKind::GroupOpen {
                return Err(BuildError::UnbalancedGroup {
                    delimiter: entry.node.to_string(),
                });
            }
            self.postfix.push(entry);
        }

        let output_types = check_types(&self.input_types, &self.postfix)?;

        let name = match self.name {
            Some(name) => name,
            None => self.name_fragments.join(self.options.name_separator.as_str()),
        };
        debug!(
            name = %name,
            len = self.postfix.len(),
            inputs = %TypeList(&self.input_types),
            outputs = %TypeList(&output_types),
            "finalized expression"
        );

        Ok(CompiledExpression::new(
            self.postfix,
            self.input_types,
            output_types,
            name,
        ))
    }
}

/// Simulates the program over type-alternative sets and returns what is left.
fn check_types<E: ?Sized + Element>(
    input_types: &[TypeAlternatives<TypeOf<E>>],
    postfix: &[CachedElement<'_, E>],
) -> Result<Vec<TypeAlternatives<TypeOf<E>>>, BuildError> {
    let mut stack = input_types.to_vec();

    for entry in postfix {
        let required = entry.input_types.len();
        if stack.len() < required {
            return Err(BuildError::ArityUnderflow {
                element: entry.node.to_string(),
                required,
                available: stack.len(),
            });
        }

        let base = stack.len() - required;
        for (provided, accepted) in stack[base..].iter().zip(&entry.input_types) {
            if !provided.is_compatible_with(accepted) {
                return Err(BuildError::TypeMismatch {
                    element: entry.node.to_string(),
                    required: accepted.to_string(),
                    provided: provided.to_string(),
                });
            }
        }

        stack.truncate(base);
        stack.extend(entry.output_types.iter().cloned());
    }

    Ok(stack)
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
