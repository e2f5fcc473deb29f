use core::fmt;

use shuntyard_types::TypeAlternatives;

use crate::element::{Associativity, Element, ElementKind, TypeOf};
use crate::expression::CompiledExpression;

/// One entry of an expression: a caller-supplied element or a nested
/// compiled expression.
///
/// Both are borrowed; the caller keeps ownership. A nested expression acts as
/// a single value-producing element of the containing one: it reports kind
/// [`ElementKind::Value`], neutral precedence and associativity, its declared
/// inputs and derived outputs, and its name.
pub enum Node<'e, E: ?Sized + Element> {
    Element(&'e E),
    Expression(&'e CompiledExpression<'e, E>),
}

impl<'e, E: ?Sized + Element> Node<'e, E> {
    pub fn precedence(&self) -> i32 {
        match self {
            Node::Element(element) => element.precedence(),
            Node::Expression(_) => 0,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Node::Element(element) => element.associativity(),
            Node::Expression(_) => Associativity::Left,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Node::Element(element) => element.kind(),
            Node::Expression(_) => ElementKind::Value,
        }
    }

    pub fn input_types(&self) -> Vec<TypeAlternatives<TypeOf<E>>> {
        match self {
            Node::Element(element) => element.input_types(),
            Node::Expression(expression) => expression.input_types().to_vec(),
        }
    }

    pub fn output_types(&self) -> Vec<TypeAlternatives<TypeOf<E>>> {
        match self {
            Node::Element(element) => element.output_types(),
            Node::Expression(expression) => expression.output_types().to_vec(),
        }
    }
}

impl<E: ?Sized + Element> Clone for Node<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized + Element> Copy for Node<'_, E> {}

impl<E: ?Sized + Element> fmt::Display for Node<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => fmt::Display::fmt(*element, f),
            Node::Expression(expression) => fmt::Display::fmt(*expression, f),
        }
    }
}

impl<E: ?Sized + Element> fmt::Debug for Node<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => f
                .debug_tuple("Element")
                .field(&element.to_string())
                .finish(),
            Node::Expression(expression) => f
                .debug_tuple("Expression")
                .field(&expression.name())
                .finish(),
        }
    }
}

/// Metadata of a node, captured once when it enters a builder.
///
/// The element is never queried for metadata again, which protects against
/// elements whose answers are expensive or would change mid-parse.
pub(crate) struct CachedElement<'e, E: ?Sized + Element> {
    pub precedence: i32,
    pub associativity: Associativity,
    pub kind: ElementKind,
    pub input_types: Vec<TypeAlternatives<TypeOf<E>>>,
    pub output_types: Vec<TypeAlternatives<TypeOf<E>>>,
    pub node: Node<'e, E>,
}

impl<'e, E: ?Sized + Element> CachedElement<'e, E> {
    pub fn capture(node: Node<'e, E>) -> Self {
        Self {
            precedence: node.precedence(),
            associativity: node.associativity(),
            kind: node.kind(),
            input_types: node.input_types(),
            output_types: node.output_types(),
            node,
        }
    }

    /// Whether this pending operator must be emitted before `incoming` is pushed.
    pub fn binds_before(&self, incoming: &Self) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence
                && self.associativity == Associativity::Left)
    }
}
