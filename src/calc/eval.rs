//! Minimal infix arithmetic evaluator
//!
//! Restricted to decimal literals and the four keypad operators, replacing
//! any general-purpose expression facility. Standard precedence:
//! multiplication and division bind tighter than addition and subtraction.

/// Evaluation failure; the keypad renders both cases as an error display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    Malformed,
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = literal.parse().map_err(|_| EvalError::Malformed)?;
                tokens.push(Token::Number(value));
            }
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            _ => return Err(EvalError::Malformed),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.next();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.next();
                    value -= self.term()?;
                }
                _ => return Err(EvalError::Malformed),
            }
        }
        Ok(value)
    }

    /// term := number (('*' | '/') number)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.number()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.next();
                    value *= self.number()?;
                }
                Token::Slash => {
                    self.next();
                    let divisor = self.number()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// number := '-'? literal
    ///
    /// The leading minus covers a negative equals result fed back into the
    /// next calculation; the keypad itself never types one.
    fn number(&mut self) -> Result<f64, EvalError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Minus) => match self.next() {
                Some(Token::Number(value)) => Ok(-value),
                _ => Err(EvalError::Malformed),
            },
            _ => Err(EvalError::Malformed),
        }
    }
}

/// Evaluate an infix expression built from keypad presses
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(EvalError::Malformed);
    }
    Parser { tokens, pos: 0 }.expr()
}
