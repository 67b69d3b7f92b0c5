//! Script errors and reporting

use super::ast::Span;
use crate::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Lexer error at {span}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Parser error at {span}: {message}")]
    Parser { message: String, span: Span },

    #[error("Runtime error at {span}: {source}")]
    Runtime { source: Error, span: Span },

    #[error("Unbound name at {span}: `{name}`")]
    Unbound { name: String, span: Span },
}

impl ScriptError {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        Self::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn parser(message: impl Into<String>, span: Span) -> Self {
        Self::Parser {
            message: message.into(),
            span,
        }
    }

    pub fn runtime(source: Error, span: Span) -> Self {
        Self::Runtime { source, span }
    }

    pub fn unbound(name: impl Into<String>, span: Span) -> Self {
        Self::Unbound {
            name: name.into(),
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Lexer { span, .. }
            | Self::Parser { span, .. }
            | Self::Runtime { span, .. }
            | Self::Unbound { span, .. } => *span,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Lexer { message, .. } | Self::Parser { message, .. } => message.clone(),
            Self::Runtime { source, .. } => source.message.clone(),
            Self::Unbound { name, .. } => format!("`{name}` is not bound"),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Lexer { .. } => "Lexer",
            Self::Parser { .. } => "Parser",
            Self::Runtime { .. } => "Runtime",
            Self::Unbound { .. } => "Name",
        }
    }
}

/// Report error with ariadne
pub fn report_error(filename: &str, source: &str, error: &ScriptError) -> std::io::Result<()> {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let span = error.span();
    Report::build(ReportKind::Error, (filename, span.start..span.end))
        .with_message(format!("{} error", error.kind()))
        .with_label(
            Label::new((filename, span.start..span.end))
                .with_message(error.message())
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}
