use ast::Span;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    NoClosingQuoteForString(Span),
    NoClosingQuoteForIdentifier(Span),
    UnterminatedComment(Span),
    UnexpectedChar { c: char, location: usize },
}

impl Error {
    pub fn location(&self) -> usize {
        match self {
            Self::NoClosingQuoteForString(span)
            | Self::NoClosingQuoteForIdentifier(span)
            | Self::UnterminatedComment(span) => *span.start(),
            Self::UnexpectedChar { location, .. } => *location,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::NoClosingQuoteForString(_) => "no closing quote for string".to_string(),
                Self::NoClosingQuoteForIdentifier(_) =>
                    "no closing backtick for identifier".to_string(),
                Self::UnterminatedComment(_) => "unterminated comment".to_string(),
                Self::UnexpectedChar { c, .. } => format!("unexpected char: {}", c),
            }
        )
    }
}
