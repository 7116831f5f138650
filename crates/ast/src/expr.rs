use crate::common::Identifier;

/// Expressions that may appear in column options.
///
/// Anything that is not a literal or a plain function call is kept as its source text.
#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(Literal),
    FunctionCall {
        func: Identifier,
        arguments: Vec<Expression>,
    },
    Raw(String),
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

#[derive(Debug, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Int(i64),
    Uint(u64),
    /// A number with a fraction or an exponent, spelled as in the source.
    Decimal(String),
    String(String),
}
