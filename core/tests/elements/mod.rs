//! Element library shared by the integration tests: float and boolean
//! literals, arithmetic and logical operators, and parentheses.

#![allow(dead_code)]

use core::fmt;

use shuntyard_core::{
    Associativity, BuildError, Builder, CompiledExpression, Context, Element, ElementKind,
};
use shuntyard_types::{Type, TypeAlternatives, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Float64,
    Bool,
    Nil,
}

impl Type for Ty {
    fn name(&self) -> &str {
        match self {
            Ty::Float64 => "float64",
            Ty::Bool => "bool",
            Ty::Nil => "nil",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Nil,
    Bool(bool),
    Float64(f64),
}

impl Value for Val {
    type Type = Ty;

    fn ty(&self) -> Ty {
        match self {
            Val::Nil => Ty::Nil,
            Val::Bool(_) => Ty::Bool,
            Val::Float64(_) => Ty::Float64,
        }
    }

    fn descr(&self) -> String {
        match self {
            Val::Nil => "nil".to_string(),
            Val::Bool(b) => b.to_string(),
            Val::Float64(f) => format!("{f:.6}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("this is a {0} error")]
pub struct EltError(pub String);

type Run = fn(&Context, Vec<Val>) -> Result<Vec<Val>, EltError>;

const F: &[Ty] = &[Ty::Float64];
const B: &[Ty] = &[Ty::Bool];
const F_OR_NIL: &[Ty] = &[Ty::Float64, Ty::Nil];

pub struct Elt {
    symbol: &'static str,
    precedence: i32,
    associativity: Associativity,
    kind: ElementKind,
    inputs: &'static [&'static [Ty]],
    outputs: &'static [&'static [Ty]],
    run: Run,
}

impl Elt {
    const fn value(symbol: &'static str, output: &'static [&'static [Ty]], run: Run) -> Self {
        Self {
            symbol,
            precedence: 0,
            associativity: Associativity::Left,
            kind: ElementKind::Value,
            inputs: &[],
            outputs: output,
            run,
        }
    }

    const fn operator(
        symbol: &'static str,
        precedence: i32,
        associativity: Associativity,
        inputs: &'static [&'static [Ty]],
        outputs: &'static [&'static [Ty]],
        run: Run,
    ) -> Self {
        Self {
            symbol,
            precedence,
            associativity,
            kind: ElementKind::Operator,
            inputs,
            outputs,
            run,
        }
    }

    const fn group(symbol: &'static str, kind: ElementKind) -> Self {
        Self {
            symbol,
            precedence: 0,
            associativity: Associativity::Left,
            kind,
            inputs: &[],
            outputs: &[],
            run: not_executable,
        }
    }
}

impl fmt::Display for Elt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

impl Element for Elt {
    type Value = Val;
    type Error = EltError;

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn associativity(&self) -> Associativity {
        self.associativity
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn input_types(&self) -> Vec<TypeAlternatives<Ty>> {
        self.inputs.iter().map(|&types| types.into()).collect()
    }

    fn output_types(&self) -> Vec<TypeAlternatives<Ty>> {
        self.outputs.iter().map(|&types| types.into()).collect()
    }

    fn execute(&self, ctx: &Context, args: Vec<Val>) -> Result<Vec<Val>, EltError> {
        (self.run)(ctx, args)
    }
}

fn not_executable(_: &Context, _: Vec<Val>) -> Result<Vec<Val>, EltError> {
    Err(EltError("group".into()))
}

fn floats(args: &[Val]) -> Result<(f64, f64), EltError> {
    match args {
        [Val::Float64(a), Val::Float64(b)] => Ok((*a, *b)),
        _ => Err(EltError(format!("{args:?} are not two floats"))),
    }
}

fn bools(args: &[Val]) -> Result<(bool, bool), EltError> {
    match args {
        [Val::Bool(a), Val::Bool(b)] => Ok((*a, *b)),
        _ => Err(EltError(format!("{args:?} are not two bools"))),
    }
}

pub static OPEN: Elt = Elt::group("(", ElementKind::GroupOpen);
pub static CLOSE: Elt = Elt::group(")", ElementKind::GroupClose);

pub static ADD: Elt = Elt::operator("+", 1, Associativity::Left, &[F, F], &[F], |_, args| {
    let (a, b) = floats(&args)?;
    Ok(vec![Val::Float64(a + b)])
});

pub static ADD_ERROR: Elt = Elt::operator("+e", 1, Associativity::Left, &[F, F], &[F], |_, _| {
    Err(EltError("+e".into()))
});

pub static SUB: Elt = Elt::operator("-", 1, Associativity::Left, &[F, F], &[F], |_, args| {
    let (a, b) = floats(&args)?;
    Ok(vec![Val::Float64(a - b)])
});

pub static MUL: Elt = Elt::operator("*", 2, Associativity::Left, &[F, F], &[F], |_, args| {
    let (a, b) = floats(&args)?;
    Ok(vec![Val::Float64(a * b)])
});

pub static DIV: Elt = Elt::operator("/", 2, Associativity::Left, &[F, F], &[F], |_, args| {
    let (a, b) = floats(&args)?;
    Ok(vec![Val::Float64(a / b)])
});

/// Takes the first operand unless it is nil.
pub static COALESCE_FLOAT: Elt = Elt::operator(
    "coalesce_float",
    2,
    Associativity::Left,
    &[F_OR_NIL, F],
    &[F],
    |_, args| match args.as_slice() {
        [Val::Float64(a), _] => Ok(vec![Val::Float64(*a)]),
        [Val::Nil, Val::Float64(b)] => Ok(vec![Val::Float64(*b)]),
        _ => Err(EltError("coalesce_float".into())),
    },
);

pub static NEG: Elt = Elt::operator("neg", 3, Associativity::Right, &[F], &[F], |_, args| {
    match args.as_slice() {
        [Val::Float64(a)] => Ok(vec![Val::Float64(-a)]),
        _ => Err(EltError("neg".into())),
    }
});

pub static OR: Elt = Elt::operator("or", 1, Associativity::Left, &[B, B], &[B], |_, args| {
    let (a, b) = bools(&args)?;
    Ok(vec![Val::Bool(a || b)])
});

pub static AND: Elt = Elt::operator("and", 2, Associativity::Left, &[B, B], &[B], |_, args| {
    let (a, b) = bools(&args)?;
    Ok(vec![Val::Bool(a && b)])
});

pub static NOT: Elt = Elt::operator("not", 3, Associativity::Right, &[B], &[B], |_, args| {
    match args.as_slice() {
        [Val::Bool(a)] => Ok(vec![Val::Bool(!a)]),
        _ => Err(EltError("not".into())),
    }
});

/// Duplicates its operand: one input slot, two output slots.
pub static DUP: Elt = Elt::operator("dup", 3, Associativity::Right, &[F], &[F, F], |_, args| {
    match args.as_slice() {
        [Val::Float64(a)] => Ok(vec![Val::Float64(*a), Val::Float64(*a)]),
        _ => Err(EltError("dup".into())),
    }
});

pub static TRUE: Elt = Elt::value("true", &[B], |_, _| Ok(vec![Val::Bool(true)]));
pub static FALSE: Elt = Elt::value("false", &[B], |_, _| Ok(vec![Val::Bool(false)]));
pub static N23: Elt = Elt::value("2.3", &[F], |_, _| Ok(vec![Val::Float64(2.3)]));
pub static N24: Elt = Elt::value("2.4", &[F], |_, _| Ok(vec![Val::Float64(2.4)]));
pub static N25: Elt = Elt::value("2.5", &[F], |_, _| Ok(vec![Val::Float64(2.5)]));
pub static N26: Elt = Elt::value("2.6", &[F], |_, _| Ok(vec![Val::Float64(2.6)]));
pub static N26_OR_NIL: Elt =
    Elt::value("2.6_or_nil", &[F_OR_NIL], |_, _| Ok(vec![Val::Float64(2.6)]));
pub static NIL_FLOAT: Elt = Elt::value("nil_float", &[F_OR_NIL], |_, _| Ok(vec![Val::Nil]));

/// Reports whether the context it runs under has been cancelled.
pub static CANCELLED: Elt = Elt::value("cancelled?", &[B], |ctx, _| {
    Ok(vec![Val::Bool(ctx.is_cancelled())])
});

/// Fails once its context is done, like a long-running element would.
pub static SLOW: Elt = Elt::value("slow", &[F], |ctx, _| {
    if ctx.is_done() {
        Err(EltError("cancelled".into()))
    } else {
        Ok(vec![Val::Float64(1.0)])
    }
});

pub fn alts(types: &[Ty]) -> TypeAlternatives<Ty> {
    TypeAlternatives::from(types)
}

/// Builds an expression from elements in infix order.
pub fn infix(
    input_types: Vec<TypeAlternatives<Ty>>,
    elements: &[&'static Elt],
) -> Result<CompiledExpression<'static, Elt>, BuildError> {
    let mut builder = Builder::new(input_types);
    for &element in elements {
        builder.append(element)?;
    }
    builder.finalize()
}

/// Builds an expression from elements already in postfix order.
pub fn postfix(
    input_types: Vec<TypeAlternatives<Ty>>,
    elements: &[&'static Elt],
) -> Result<CompiledExpression<'static, Elt>, BuildError> {
    let mut builder = Builder::new(input_types);
    for &element in elements {
        builder.push(element)?;
    }
    builder.finalize()
}

/// The compiled program, element names joined with `|`.
pub fn rpn(expression: &CompiledExpression<'_, Elt>) -> String {
    expression
        .postfix()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join("|")
}

pub fn float(value: &Val) -> f64 {
    match value {
        Val::Float64(f) => *f,
        other => panic!("expected float64, got {other:?}"),
    }
}
