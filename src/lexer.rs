use crate::error::EvalError;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Eof,
}

impl Token {
    /// Human-readable form used in syntax error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Num(v) => format!("number {}", v),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
            Token::Star => "'*'".into(),
            Token::Slash => "'/'".into(),
            Token::Percent => "'%'".into(),
            Token::Caret => "'^'".into(),
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
            Token::Eof => "end of input".into(),
        }
    }
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    i: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(s: &'a str) -> Self {
        Self { src: s, i: 0 }
    }
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.i).copied()
    }
    fn bump(&mut self) -> Option<u8> {
        let ch = self.peek();
        if ch.is_some() {
            self.i += 1;
        }
        ch
    }
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.i += 1;
            } else {
                break;
            }
        }
    }
    fn single(&mut self, tok: Token) -> Token {
        self.bump();
        tok
    }

    /// Returns the next token together with the byte offset it starts at.
    pub(crate) fn next_token(&mut self) -> Result<(usize, Token), EvalError> {
        self.skip_ws();
        let start = self.i;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok((start, Token::Eof)),
        };
        let tok = match c {
            b'(' => self.single(Token::LParen),
            b')' => self.single(Token::RParen),
            b'+' => self.single(Token::Plus),
            b'-' => self.single(Token::Minus),
            b'*' => self.single(Token::Star),
            b'/' => self.single(Token::Slash),
            b'%' => self.single(Token::Percent),
            b'^' => self.single(Token::Caret),
            c if c.is_ascii_digit() || c == b'.' => self.lex_number()?,
            _ => {
                let ch = self.src[start..].chars().next().unwrap_or('?');
                return Err(EvalError::syntax(
                    start,
                    format!("unexpected character '{}'", ch),
                ));
            }
        };
        Ok((start, tok))
    }

    fn lex_number(&mut self) -> Result<Token, EvalError> {
        let start = self.i;
        let mut seen_dot = false;
        let mut seen_exp = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.i += 1;
            } else if c == b'.' && !seen_dot && !seen_exp {
                seen_dot = true;
                self.i += 1;
            } else if (c == b'e' || c == b'E') && !seen_exp {
                seen_exp = true;
                self.i += 1;
                if let Some(b'+' | b'-') = self.peek() {
                    self.i += 1;
                }
                // Missing exponent digits are reported by the parse below.
                while let Some(d) = self.peek() {
                    if d.is_ascii_digit() {
                        self.i += 1;
                    } else {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        // Only ASCII bytes were consumed, so the slice is on char boundaries.
        let s = &self.src[start..self.i];
        let v: f64 = s
            .parse()
            .map_err(|_| EvalError::syntax(start, format!("invalid number '{}'", s)))?;
        Ok(Token::Num(v))
    }
}
