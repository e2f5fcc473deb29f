//! Compiled expressions and the stack machine that runs them.

use core::fmt;

use shuntyard_types::TypeAlternatives;
use tracing::{debug, trace};

use crate::context::Context;
use crate::element::{Element, TypeOf, ValueOf};
use crate::error::ExecutionError;
use crate::node::{CachedElement, Node};
use crate::options::ExecutionOptions;
use crate::stack::Stack;

/// A finalized expression: an immutable postfix program.
///
/// Created by [`Builder::finalize`](crate::Builder::finalize). Holds no
/// execution state, so it can be executed any number of times, and from
/// several threads at once when the elements are `Sync`.
///
/// A compiled expression can itself be appended to another builder, where
/// it behaves as one value-producing element (see [`Node::Expression`]).
pub struct CompiledExpression<'e, E: ?Sized + Element> {
    postfix: Vec<CachedElement<'e, E>>,
    input_types: Vec<TypeAlternatives<TypeOf<E>>>,
    output_types: Vec<TypeAlternatives<TypeOf<E>>>,
    name: String,
}

impl<'e, E: ?Sized + Element> CompiledExpression<'e, E> {
    pub(crate) fn new(
        postfix: Vec<CachedElement<'e, E>>,
        input_types: Vec<TypeAlternatives<TypeOf<E>>>,
        output_types: Vec<TypeAlternatives<TypeOf<E>>>,
        name: String,
    ) -> Self {
        Self {
            postfix,
            input_types,
            output_types,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters the expression expects on the stack, as declared to the builder.
    pub fn input_types(&self) -> &[TypeAlternatives<TypeOf<E>>] {
        &self.input_types
    }

    /// Values the expression leaves on the stack, as derived by `finalize`.
    pub fn output_types(&self) -> &[TypeAlternatives<TypeOf<E>>] {
        &self.output_types
    }

    /// Number of entries in the postfix program.
    pub fn len(&self) -> usize {
        self.postfix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postfix.is_empty()
    }

    /// The program's nodes in postfix (execution) order.
    pub fn postfix(&self) -> impl Iterator<Item = Node<'e, E>> + '_ {
        self.postfix.iter().map(|entry| entry.node)
    }

    /// Runs the program and returns every value left on the stack.
    ///
    /// `inputs` seed the stack before the first node runs; this is how a
    /// nested expression receives its parameters. The caller's `ctx` is
    /// handed to every element untouched.
    pub fn execute(
        &self,
        ctx: &Context,
        inputs: Vec<ValueOf<E>>,
    ) -> Result<Vec<ValueOf<E>>, ExecutionError<E::Error>> {
        self.execute_with_options(ctx, &ExecutionOptions::default(), inputs)
    }

    pub fn execute_with_options(
        &self,
        ctx: &Context,
        options: &ExecutionOptions,
        inputs: Vec<ValueOf<E>>,
    ) -> Result<Vec<ValueOf<E>>, ExecutionError<E::Error>> {
        let mut stack = Stack::new(options.max_stack_size);
        stack.extend(inputs)?;

        for entry in &self.postfix {
            let required = entry.input_types.len();
            let available = stack.len();
            let Some(args) = stack.pop_n(required) else {
                return Err(ExecutionError::StackUnderflow {
                    element: entry.node.to_string(),
                    required,
                    available,
                });
            };

            let produced = match entry.node {
                Node::Element(element) => {
                    trace!(element = %element, args = required, "execute element");
                    element.execute(ctx, args).map_err(ExecutionError::Element)?
                }
                Node::Expression(expression) => {
                    debug!(expression = %expression, args = required, "execute nested expression");
                    expression.execute_with_options(ctx, options, args)?
                }
            };
            stack.extend(produced)?;
        }

        Ok(stack.into_vec())
    }

    /// Runs the program and returns its single result.
    ///
    /// Fails with [`ExecutionError::WrongResultArity`] if the program leaves
    /// anything other than exactly one value.
    pub fn exec(
        &self,
        ctx: &Context,
        inputs: Vec<ValueOf<E>>,
    ) -> Result<ValueOf<E>, ExecutionError<E::Error>> {
        self.exec_with_options(ctx, &ExecutionOptions::default(), inputs)
    }

    pub fn exec_with_options(
        &self,
        ctx: &Context,
        options: &ExecutionOptions,
        inputs: Vec<ValueOf<E>>,
    ) -> Result<ValueOf<E>, ExecutionError<E::Error>> {
        let values = self.execute_with_options(ctx, options, inputs)?;
        match <[ValueOf<E>; 1]>::try_from(values) {
            Ok([value]) => Ok(value),
            Err(values) => Err(ExecutionError::WrongResultArity {
                expected: 1,
                found: values.len(),
            }),
        }
    }

    /// Renders the program as an indented tree, nested expressions included.
    ///
    /// ```text
    /// [true and true and false or true or true]:
    /// |   true
    /// |   [true and false or true]:
    /// |   |   true
    /// |   |   false
    /// |   |   and
    /// |   |   true
    /// |   |   or
    /// |   and
    /// |   true
    /// |   or
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.dump_to(&mut out);
        out
    }

    pub fn dump_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.dump_level(out, 0)
    }

    fn dump_level<W: fmt::Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        writeln!(out, "{}[{}]:", "|   ".repeat(depth), self.name)?;
        for node in self.postfix() {
            match node {
                Node::Expression(nested) => nested.dump_level(out, depth + 1)?,
                Node::Element(element) => {
                    writeln!(out, "{}{}", "|   ".repeat(depth + 1), element)?
                }
            }
        }
        Ok(())
    }
}

impl<E: ?Sized + Element> fmt::Display for CompiledExpression<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<E: ?Sized + Element> fmt::Debug for CompiledExpression<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("name", &self.name)
            .field("postfix", &self.postfix().collect::<Vec<_>>())
            .field("input_types", &self.input_types)
            .field("output_types", &self.output_types)
            .finish()
    }
}
