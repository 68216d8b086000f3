#![forbid(unsafe_code)]

mod expr;
mod stack;

pub use expr::{infix_to_postfix, infix_to_prefix, postfix_to_prefix, Associativity, Operator};
pub use stack::Stack;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("stack is empty")]
    Underflow,
    #[error("index {index} is out of range for a stack of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("expression is empty")]
    Empty,
    #[error("expression does not contain any arithmetic operator")]
    ArithmeticOperatorNotFound,
    #[error("invalid expression")]
    InvalidExpression,
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
