//! Interpreter: a small arithmetic grammar evaluated against a variable
//! context. Unknown variables evaluate to zero.

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// Variable bindings.
pub type Context = HashMap<String, i32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i32),
    Variable(String),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn var(name: &str) -> Self {
        Expression::Variable(name.to_string())
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expression, right: Expression) -> Self {
        Expression::Subtract(Box::new(left), Box::new(right))
    }

    pub fn interpret(&self, context: &Context) -> i32 {
        match self {
            Expression::Number(n) => *n,
            Expression::Variable(name) => context.get(name).copied().unwrap_or(0),
            Expression::Add(l, r) => l.interpret(context) + r.interpret(context),
            Expression::Subtract(l, r) => l.interpret(context) - r.interpret(context),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Variable(name) => f.write_str(name),
            Expression::Add(l, r) => write!(f, "({} + {})", l, r),
            Expression::Subtract(l, r) => write!(f, "({} - {})", l, r),
        }
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    // (a + b) - c
    let expression = Expression::sub(
        Expression::add(Expression::var("a"), Expression::var("b")),
        Expression::var("c"),
    );
    let context: Context =
        [("a", 5), ("b", 10), ("c", 4)].into_iter().map(|(k, v)| (k.to_string(), v)).collect();

    writeln!(out, "Result: {}", expression.interpret(&context))?;
    Ok(())
}
