use log::{debug, trace};

use crate::{Error, Result, Stack};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Associativity {
    pub fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Binary arithmetic operator with its binding strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    symbol: char,
    precedence: u8,
    associativity: Associativity,
}

impl Operator {
    pub const SYMBOLS: [char; 5] = ['+', '-', '*', '/', '%'];

    pub fn from_char(symbol: char) -> Option<Self> {
        let precedence = match symbol {
            '+' | '-' => 1,
            '*' | '/' | '%' => 2,
            _ => return None,
        };
        Some(Self {
            symbol,
            precedence,
            associativity: Associativity::Left,
        })
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    // Whether `self`, sitting on the operator stack, is emitted before
    // `incoming` is pushed.
    fn pops_before(&self, incoming: &Operator, associativity: Associativity) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence && associativity == Associativity::Left)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Operand(char),
    Operator(Operator),
    Open,
    Close,
}

impl Token {
    fn classify(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            ch if ch.is_ascii_alphanumeric() => Some(Self::Operand(ch)),
            ch => Operator::from_char(ch).map(Self::Operator),
        }
    }

    fn mirrored(self) -> Self {
        match self {
            Self::Open => Self::Close,
            Self::Close => Self::Open,
            token => token,
        }
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>> {
    expression
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| {
            Token::classify(ch).ok_or(Error::UnexpectedCharacter { ch, position })
        })
        .collect()
}

fn validate_infix(expression: &str) -> Result<Vec<Token>> {
    if expression.trim().is_empty() {
        return Err(Error::Empty);
    }
    if !expression.contains(Operator::SYMBOLS) {
        return Err(Error::ArithmeticOperatorNotFound);
    }
    tokenize(expression)
}

#[derive(Clone, Copy, Debug)]
enum Notation {
    Postfix,
    Prefix,
}

fn shunting_yard(tokens: Vec<Token>, notation: Notation) -> Result<String> {
    let mut output = String::with_capacity(tokens.len());
    let mut operators = Stack::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Operand(ch) => output.push(ch),
            Token::Open => operators.push(token),
            Token::Close => loop {
                match operators.pop() {
                    Ok(Token::Open) => break,
                    Ok(Token::Operator(op)) => output.push(op.symbol()),
                    _ => return Err(Error::InvalidExpression),
                }
            },
            Token::Operator(incoming) => {
                let associativity = match notation {
                    Notation::Postfix => incoming.associativity(),
                    Notation::Prefix => incoming.associativity().flip(),
                };
                while let Ok(&Token::Operator(top)) = operators.peek() {
                    if !top.pops_before(&incoming, associativity) {
                        break;
                    }
                    trace!("'{}' pops '{}'", incoming.symbol(), top.symbol());
                    output.push(top.symbol());
                    operators.pop()?;
                }
                operators.push(token);
            }
        }
    }

    while let Ok(token) = operators.pop() {
        match token {
            Token::Operator(op) => output.push(op.symbol()),
            _ => return Err(Error::InvalidExpression),
        }
    }
    Ok(output)
}

////////////////////////////////////////////////////////////////////////////////

/// Converts an infix expression of single-character operands to postfix.
///
/// ```
/// assert_eq!(exprstack::infix_to_postfix("(a+b)*(c+d)").unwrap(), "ab+cd+*");
/// ```
pub fn infix_to_postfix(expression: &str) -> Result<String> {
    let tokens = validate_infix(expression)?;
    let postfix = shunting_yard(tokens, Notation::Postfix)?;
    debug!("infix '{}' -> postfix '{}'", expression, postfix);
    Ok(postfix)
}

/// Converts an infix expression to prefix by running the postfix conversion
/// over the mirrored input and reversing what comes out.
///
/// ```
/// assert_eq!(exprstack::infix_to_prefix("a+b*c+d").unwrap(), "++a*bcd");
/// ```
pub fn infix_to_prefix(expression: &str) -> Result<String> {
    let mut tokens = validate_infix(expression)?;
    tokens.reverse();
    for token in tokens.iter_mut() {
        *token = token.mirrored();
    }

    let prefix = shunting_yard(tokens, Notation::Prefix)?
        .chars()
        .rev()
        .collect::<String>();
    debug!("infix '{}' -> prefix '{}'", expression, prefix);
    Ok(prefix)
}

pub fn postfix_to_prefix(expression: &str) -> Result<String> {
    if expression.trim().is_empty() {
        return Err(Error::Empty);
    }

    let mut operands: Stack<String> = Stack::new();
    for token in tokenize(expression)? {
        match token {
            Token::Operand(ch) => operands.push(ch.to_string()),
            Token::Operator(op) => {
                let (Ok(right), Ok(left)) = (operands.pop(), operands.pop()) else {
                    return Err(Error::InvalidExpression);
                };
                operands.push(format!("{}{}{}", op.symbol(), left, right));
            }
            Token::Open | Token::Close => return Err(Error::InvalidExpression),
        }
    }

    let prefix = operands.pop().map_err(|_| Error::InvalidExpression)?;
    if !operands.is_empty() {
        return Err(Error::InvalidExpression);
    }
    debug!("postfix '{}' -> prefix '{}'", expression, prefix);
    Ok(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_table() {
        let table = Operator::SYMBOLS.map(|c| Operator::from_char(c).map(|op| op.precedence()));
        assert_eq!(table, [Some(1), Some(1), Some(2), Some(2), Some(2)]);
        assert_eq!(Operator::from_char('^'), None);
        assert!(Operator::SYMBOLS
            .iter()
            .filter_map(|&c| Operator::from_char(c))
            .all(|op| op.associativity() == Associativity::Left));
    }

    #[test]
    fn tie_breaking_follows_associativity() {
        let plus = Operator::from_char('+').unwrap();
        let minus = Operator::from_char('-').unwrap();
        let times = Operator::from_char('*').unwrap();

        assert!(times.pops_before(&plus, Associativity::Right));
        assert!(!plus.pops_before(&times, Associativity::Left));
        assert!(plus.pops_before(&minus, Associativity::Left));
        assert!(!plus.pops_before(&minus, Associativity::Right));
    }

    #[test]
    fn tokenize_skips_whitespace_and_reports_position() {
        assert_eq!(
            tokenize(" a +b").unwrap(),
            vec![
                Token::Operand('a'),
                Token::Operator(Operator::from_char('+').unwrap()),
                Token::Operand('b'),
            ]
        );
        assert_eq!(
            tokenize("a+b^c"),
            Err(Error::UnexpectedCharacter { ch: '^', position: 3 })
        );
    }
}
