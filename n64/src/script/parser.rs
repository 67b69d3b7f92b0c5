//! Tokenizer front end and recursive-descent parser

use super::ast::{Expr, Span, Stmt};
use super::error::ScriptError;
use super::token::Token;
use super::{MAX_NESTING, STACK_GROW_SIZE, STACK_RED_ZONE};
use crate::host::Operand;
use crate::mode::Mode;
use logos::Logos;

/// Tokenize source code
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, ScriptError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(_) => {
                return Err(ScriptError::lexer(
                    format!("unexpected character: {:?}", lexer.slice()),
                    span,
                ));
            }
        }
    }

    Ok(tokens)
}

/// Parse source into statements
pub fn parse(source: &str) -> Result<Vec<Stmt>, ScriptError> {
    let tokens = tokenize(source)?;
    Parser::new(tokens, source.len()).program()
}

struct Parser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
    eof: Span,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<(Token, Span)>, len: usize) -> Self {
        Parser {
            tokens,
            pos: 0,
            eof: Span::new(len, len),
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(t, _)| t)
    }

    fn span(&self) -> Span {
        self.tokens.get(self.pos).map_or(self.eof, |(_, s)| *s)
    }

    fn bump(&mut self) -> Option<(Token, Span)> {
        let next = self.tokens.get(self.pos).cloned();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn unexpected(&self, expected: &str) -> ScriptError {
        match self.peek() {
            Some(tok) => ScriptError::parser(format!("expected {expected}, found `{tok}`"), self.span()),
            None => ScriptError::parser(format!("expected {expected}, found end of input"), self.eof),
        }
    }

    fn expect(&mut self, want: Token) -> Result<Span, ScriptError> {
        if self.peek() == Some(&want) {
            let span = self.span();
            self.pos += 1;
            Ok(span)
        } else {
            Err(self.unexpected(&format!("`{want}`")))
        }
    }

    fn ident(&mut self) -> Result<(String, Span), ScriptError> {
        match self.peek() {
            Some(Token::Ident(_)) => match self.bump() {
                Some((Token::Ident(name), span)) => Ok((name, span)),
                _ => Err(self.unexpected("identifier")),
            },
            _ => Err(self.unexpected("identifier")),
        }
    }

    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(Token::Newline | Token::Semi)) {
            self.pos += 1;
        }
    }

    fn program(mut self) -> Result<Vec<Stmt>, ScriptError> {
        let mut stmts = Vec::new();
        self.skip_separators();
        while self.peek().is_some() {
            stmts.push(self.stmt()?);
            match self.peek() {
                None | Some(Token::Newline | Token::Semi) => self.skip_separators(),
                Some(_) => return Err(self.unexpected("`;` or newline")),
            }
        }
        Ok(stmts)
    }

    fn stmt(&mut self) -> Result<Stmt, ScriptError> {
        if self.peek() != Some(&Token::Let) {
            return Ok(Stmt::Expr(self.expr()?));
        }
        let start = self.expect(Token::Let)?;
        let (name, _) = self.ident()?;
        self.expect(Token::Assign)?;
        let value = self.expr()?;
        let span = start.merge(value.span());
        Ok(Stmt::Let { name, value, span })
    }

    fn expr(&mut self) -> Result<Expr, ScriptError> {
        let outer = self.depth;
        let expr = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.chain());
        self.depth = outer;
        expr
    }

    fn nest(&mut self) -> Result<(), ScriptError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ScriptError::parser(
                format!("expression nested more than {MAX_NESTING} levels deep"),
                self.span(),
            ));
        }
        Ok(())
    }

    /// A primary followed by `.method(args)` links
    fn chain(&mut self) -> Result<Expr, ScriptError> {
        self.nest()?;
        let mut expr = self.primary()?;
        while self.peek() == Some(&Token::Dot) {
            self.nest()?;
            self.pos += 1;
            let (method, _) = self.ident()?;
            let (args, end) = self.args()?;
            let span = expr.span().merge(end);
            expr = Expr::Call {
                receiver: Box::new(expr),
                method,
                args,
                span,
            };
        }
        Ok(expr)
    }

    fn args(&mut self) -> Result<(Vec<Expr>, Span), ScriptError> {
        self.expect(Token::LParen)?;
        let mut args = Vec::new();
        if self.peek() != Some(&Token::RParen) {
            loop {
                args.push(self.expr()?);
                if self.peek() != Some(&Token::Comma) {
                    break;
                }
                self.pos += 1;
            }
        }
        let end = self.expect(Token::RParen)?;
        Ok((args, end))
    }

    fn primary(&mut self) -> Result<Expr, ScriptError> {
        let span = self.span();
        let value = match self.peek() {
            Some(Token::Number(n)) => Operand::Number(*n),
            Some(Token::Str(s)) => Operand::Str(s.clone()),
            Some(Token::True) => Operand::Bool(true),
            Some(Token::False) => Operand::Bool(false),
            Some(Token::Null) => Operand::Null,
            Some(Token::Ident(_)) => return self.name(),
            _ => return Err(self.unexpected("expression")),
        };
        self.pos += 1;
        Ok(Expr::Literal { value, span })
    }

    fn name(&mut self) -> Result<Expr, ScriptError> {
        let (name, span) = self.ident()?;
        if self.peek() != Some(&Token::LParen) {
            return Ok(Expr::Var { name, span });
        }
        let mode = match name.as_str() {
            "int64" => None,
            "u64" => Some(Mode::Unsigned),
            "i64" => Some(Mode::Signed),
            _ => {
                return Err(ScriptError::parser(
                    format!("`{name}` is not callable; use int64, u64 or i64"),
                    span,
                ));
            }
        };
        let (args, end) = self.args()?;
        Ok(Expr::Construct {
            mode,
            args,
            span: span.merge(end),
        })
    }
}
