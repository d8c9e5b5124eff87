use crate::error::EvalError;
use crate::lexer::{Lexer, Token};
use crate::options::DivisionPolicy;

/// Deepest parenthesis nesting accepted before the input is rejected.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser that evaluates each rule as soon as it is reduced,
/// so no expression tree is kept around.
pub(crate) struct Parser<'a> {
    lex: Lexer<'a>,
    look: Token,
    pos: usize,
    division: DivisionPolicy,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(s: &'a str, division: DivisionPolicy) -> Result<Self, EvalError> {
        let mut lex = Lexer::new(s);
        let (pos, look) = lex.next_token()?;
        Ok(Self {
            lex,
            look,
            pos,
            division,
            depth: 0,
        })
    }
    fn bump(&mut self) -> Result<(), EvalError> {
        let (pos, look) = self.lex.next_token()?;
        self.pos = pos;
        self.look = look;
        Ok(())
    }
    fn unexpected(&self, expected: &str) -> EvalError {
        EvalError::syntax(
            self.pos,
            format!("expected {}, found {}", expected, self.look.describe()),
        )
    }
    pub(crate) fn parse(mut self) -> Result<f64, EvalError> {
        let value = self.expression()?;
        if self.look != Token::Eof {
            return Err(EvalError::syntax(
                self.pos,
                format!("unexpected {} after complete expression", self.look.describe()),
            ));
        }
        Ok(value)
    }
    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.term()?;
        loop {
            match self.look {
                Token::Plus => {
                    self.bump()?;
                    acc += self.term()?;
                }
                Token::Minus => {
                    self.bump()?;
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut acc = self.factor()?;
        loop {
            match self.look {
                Token::Star => {
                    self.bump()?;
                    acc *= self.factor()?;
                }
                Token::Slash => {
                    let op = self.pos;
                    self.bump()?;
                    let rhs = self.divisor(op)?;
                    acc /= rhs;
                }
                Token::Percent => {
                    let op = self.pos;
                    self.bump()?;
                    let rhs = self.divisor(op)?;
                    acc %= rhs;
                }
                _ => break,
            }
        }
        Ok(acc)
    }
    fn divisor(&mut self, op: usize) -> Result<f64, EvalError> {
        let rhs = self.factor()?;
        if rhs == 0.0 && self.division == DivisionPolicy::Error {
            return Err(EvalError::DivisionByZero { position: op });
        }
        Ok(rhs)
    }
    fn factor(&mut self) -> Result<f64, EvalError> {
        let base = self.unary()?;
        if self.look != Token::Caret {
            return Ok(base);
        }
        // Right-associative: collect the chain, then fold from the right.
        let mut chain = vec![base];
        while self.look == Token::Caret {
            self.bump()?;
            chain.push(self.unary()?);
        }
        let mut acc = chain.pop().unwrap_or(base);
        while let Some(lhs) = chain.pop() {
            acc = lhs.powf(acc);
        }
        Ok(acc)
    }
    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.look {
            Token::Minus => {
                self.bump()?;
                Ok(-self.primary()?)
            }
            Token::Plus => {
                self.bump()?;
                self.primary()
            }
            _ => self.primary(),
        }
    }
    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.look {
            Token::Num(v) => {
                self.bump()?;
                Ok(v)
            }
            Token::LParen => {
                let open = self.pos;
                if self.depth >= MAX_NESTING {
                    return Err(EvalError::syntax(
                        open,
                        format!("parentheses nested deeper than {}", MAX_NESTING),
                    ));
                }
                self.depth += 1;
                self.bump()?;
                let inner = self.expression()?;
                if self.look != Token::RParen {
                    return Err(EvalError::syntax(
                        self.pos,
                        format!(
                            "expected ')' to close '(' at {}, found {}",
                            open,
                            self.look.describe()
                        ),
                    ));
                }
                self.bump()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => Err(self.unexpected("number or '('")),
        }
    }
}
