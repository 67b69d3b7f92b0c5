//! Token definitions

use logos::Logos;
use std::fmt;

fn unescape(slice: &str) -> String {
    let inner = &slice[1..slice.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    #[regex(r"-?0[xX][0-9a-fA-F]+", |lex| {
        let s = lex.slice();
        let (neg, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, &rest[2..]),
            None => (false, &s[2..]),
        };
        u64::from_str_radix(digits, 16)
            .ok()
            .map(|n| if neg { -(n as f64) } else { n as f64 })
    }, priority = 3)]
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok(), priority = 2)]
    Number(f64),

    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unescape(lex.slice()))]
    Str(String),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[token("=")]
    Assign,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[token("\n")]
    Newline,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Let => write!(f, "let"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Null => write!(f, "null"),
            Token::Number(n) => write!(f, "{n}"),
            Token::Str(s) => write!(f, "{s:?}"),
            Token::Ident(s) => write!(f, "{s}"),
            Token::Assign => write!(f, "="),
            Token::Dot => write!(f, "."),
            Token::Comma => write!(f, ","),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Semi => write!(f, ";"),
            Token::Newline => write!(f, "newline"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_keywords_and_idents() {
        assert_eq!(
            lex("let x = null"),
            vec![Token::Let, Token::Ident("x".into()), Token::Assign, Token::Null]
        );
        assert_eq!(lex("letter"), vec![Token::Ident("letter".into())]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(lex("42"), vec![Token::Number(42.0)]);
        assert_eq!(lex("-7"), vec![Token::Number(-7.0)]);
        assert_eq!(lex("0xff"), vec![Token::Number(255.0)]);
        assert_eq!(lex("-0x10"), vec![Token::Number(-16.0)]);
        assert_eq!(lex("1.5"), vec![Token::Number(1.5)]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(lex(r#""ff""#), vec![Token::Str("ff".into())]);
        assert_eq!(lex(r#""a\"b""#), vec![Token::Str("a\"b".into())]);
    }

    #[test]
    fn test_comments_and_newlines() {
        assert_eq!(
            lex("a // note\nb;"),
            vec![
                Token::Ident("a".into()),
                Token::Newline,
                Token::Ident("b".into()),
                Token::Semi,
            ]
        );
    }

    #[test]
    fn test_method_call() {
        assert_eq!(
            lex("x.iaddn(1, true)"),
            vec![
                Token::Ident("x".into()),
                Token::Dot,
                Token::Ident("iaddn".into()),
                Token::LParen,
                Token::Number(1.0),
                Token::Comma,
                Token::True,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Str("s".into()).to_string(), "\"s\"");
        assert_eq!(Token::Number(3.0).to_string(), "3");
        assert_eq!(Token::Newline.to_string(), "newline");
    }
}
