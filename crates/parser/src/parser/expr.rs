use {
    super::{
        common::match_token,
        error::{Error, Result},
        Parser,
    },
    ast::{
        expr::{Expression, Literal},
        token::{Keyword, Token},
        Span, Spanned,
    },
};

impl<'a> Parser<'a> {
    /// Parses the value of a `DEFAULT` or `ON UPDATE` column option.
    pub(super) fn parse_default_expr(&mut self) -> Result<Expression> {
        Ok(match_token!(self.tokens.next(), {
            Spanned(Token::Keyword(Keyword::NULL), _) => Literal::Null.into(),
            Spanned(Token::Keyword(Keyword::TRUE), _) => Literal::Boolean(true).into(),
            Spanned(Token::Keyword(Keyword::FALSE), _) => Literal::Boolean(false).into(),
            Spanned(Token::String, span) => Literal::String(self.string_from_span(span)).into(),
            Spanned(Token::Number { is_float }, span) => self.number_literal(span, is_float, false)?,
            Spanned(Token::Plus, _) => self.parse_signed_number(false)?,
            Spanned(Token::Minus, _) => self.parse_signed_number(true)?,
            Spanned(Token::LeftParen, span) => self.parse_parenthesized_default(*span.start())?,
            Spanned(
                Token::Keyword(
                    Keyword::CURRENT_TIMESTAMP
                    | Keyword::CURRENT_DATE
                    | Keyword::CURRENT_TIME
                    | Keyword::LOCALTIME
                    | Keyword::LOCALTIMESTAMP
                    | Keyword::UTC_TIMESTAMP
                ),
                span
            ) => {
                let func = self.identifier_from_span(span);
                self.parse_function_call(func)?
            },
            Spanned(Token::Identifier, span) => {
                let name = self.identifier_from_span(span);
                match self.peek_token() {
                    Some(Token::LeftParen) => self.parse_function_call(name)?,
                    // a charset introducer or a bit/hex prefix, e.g. _utf8mb4'abc' or b'0'
                    Some(Token::String) => Literal::String(self.parse_string()?).into(),
                    _ => Expression::Raw(name.0),
                }
            },
        }))
    }

    fn parse_signed_number(&mut self, negative: bool) -> Result<Expression> {
        match_token!(self.tokens.next(), {
            Spanned(Token::Number { is_float }, span) => self.number_literal(span, is_float, negative),
        })
    }

    fn number_literal(&self, span: Span, is_float: bool, negative: bool) -> Result<Expression> {
        if is_float {
            let text = self.src.get(span).unwrap_or_default();
            let text = if negative {
                format!("-{}", text)
            } else {
                text.to_string()
            };
            return Ok(Literal::Decimal(text).into());
        }

        let v: u64 = self.number_from_span(span.clone())?;
        let literal = match (negative, i64::try_from(v)) {
            (false, Ok(v)) => Literal::Int(v),
            (false, Err(_)) => Literal::Uint(v),
            (true, _) if v == i64::MIN.unsigned_abs() => Literal::Int(i64::MIN),
            (true, Ok(v)) => Literal::Int(-v),
            (true, Err(_)) => return Err(Error::SyntaxError(span)),
        };

        Ok(literal.into())
    }

    /// Function names keep the spelling of the source, arguments are optional.
    fn parse_function_call(&mut self, func: ast::Identifier) -> Result<Expression> {
        let arguments = match self.peek_token() {
            Some(Token::LeftParen) => {
                let Spanned(arguments, _) =
                    self.parse_comma_separated_within_parentheses(Self::parse_default_expr, true)?;
                arguments
            }
            _ => vec![],
        };

        Ok(Expression::FunctionCall { func, arguments })
    }

    /// `DEFAULT (expr)`: simple contents are parsed, anything else is kept as text.
    fn parse_parenthesized_default(&mut self, begin: usize) -> Result<Expression> {
        let span = self.skip_parenthesized(begin)?;
        let text = self.src[span.start() + 1..*span.end()].trim();

        let mut inner = Parser::new(text);
        Ok(match inner.parse_default_expr() {
            Ok(expr) if inner.tokens.peek().is_none() => expr,
            _ => Expression::Raw(text.to_string()),
        })
    }
}
