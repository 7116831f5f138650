use {
    super::{
        error::{Error, Result},
        Parser,
    },
    ast::{
        token::{Keyword, Token},
        Identifier, Span, Spanned,
    },
    core::str::FromStr,
};

macro_rules! match_token {
    ( $token:expr, { $( $($t:pat_param)|* $(if $cond:expr)? => $e:expr, )* } ) => {
        match $token {
            $( $( Some(Ok($t)) )|* $(if $cond)? => $e,)*

            Some(Ok(Spanned(_, span))) => return Err(Error::SyntaxError(span)),
            Some(Err(e)) => return Err(Error::LexingError(e)),
            None => return Err(Error::UnexpectedEnd),
        }
    };
}

pub(super) use match_token;

impl<'a> Parser<'a> {
    pub(super) fn identifier_from_span(&self, span: Span) -> Identifier {
        Spanned(self.src[span.clone()].to_string(), span)
    }

    pub(super) fn quoted_identifier_from_span(&self, span: Span) -> Identifier {
        let (start, end) = (span.start() + 1, span.end() - 1);
        let name = self.src.get(start..=end).unwrap_or_default().replace("``", "`");

        Spanned(name, span)
    }

    /// Trims the enclosing quotes and resolves doubled quotes and backslash escapes.
    pub(super) fn string_from_span(&self, span: Span) -> String {
        let raw = &self.src[span];
        let quote = raw.chars().next().unwrap_or('\'');
        let inner = raw.get(1..raw.len() - 1).unwrap_or_default();

        let mut s = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('0') => s.push('\0'),
                    Some(other) => s.push(other),
                    None => {}
                },
                c if c == quote => {
                    chars.next();
                    s.push(c);
                }
                c => s.push(c),
            }
        }

        s
    }

    pub(super) fn number_from_span<T: FromStr>(&self, span: Span) -> Result<T> {
        self.src[span.clone()]
            .parse::<T>()
            .map_err(|_| Error::SyntaxError(span))
    }

    pub(super) fn next_token(&mut self) -> Result<Spanned<Token>> {
        match self.tokens.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(e)) => Err(Error::LexingError(e)),
            None => Err(Error::UnexpectedEnd),
        }
    }

    pub(super) fn peek_token(&mut self) -> Option<Token> {
        match self.tokens.peek() {
            Some(Ok(Spanned(token, _))) => Some(*token),
            _ => None,
        }
    }

    pub(super) fn peek_keyword(&mut self) -> Option<Keyword> {
        match self.peek_token() {
            Some(Token::Keyword(keyword)) => Some(keyword),
            _ => None,
        }
    }

    pub(super) fn skip_semicolons(&mut self) {
        self.tokens
            .advance_while(|token| matches!(token, Ok(Spanned(Token::Semicolon, _))));
    }

    /// Succeeds at the end of input or before a semicolon.
    pub(super) fn expect_statement_end(&mut self) -> Result<()> {
        match self.tokens.peek() {
            None | Some(Ok(Spanned(Token::Semicolon, _))) => Ok(()),
            Some(Ok(Spanned(_, span))) => Err(Error::SyntaxError(span.clone())),
            Some(Err(e)) => Err(Error::LexingError(e.clone())),
        }
    }

    pub(super) fn match_keyword_sequence(&mut self, keywords: &[Keyword]) -> bool {
        self.tokens
            .advance_n_if_each(keywords.len(), |(i, token)| match token {
                Ok(Spanned(Token::Keyword(keyword), _)) => *keyword == keywords[i],
                _ => false,
            })
            .is_some()
    }

    pub(super) fn must_match(&mut self, token: Token) -> Result<Spanned<Token>> {
        match_token!(self.tokens.next(), {
            Spanned(t, span) if t == token => {
                Ok(Spanned(t, span))
            },
        })
    }

    pub(super) fn try_match(&mut self, token: Token) -> Option<Spanned<Token>> {
        self.tokens
            .next_if(|item| matches!(item, Ok(Spanned(t, _)) if *t == token))
            .and_then(|item| item.ok())
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> bool {
        self.try_match(Token::Keyword(keyword)).is_some()
    }

    /// Plain, backtick quoted, or a keyword that is not reserved.
    pub(super) fn parse_identifier(&mut self) -> Result<Identifier> {
        match_token!(self.tokens.next(), {
            Spanned(Token::Identifier, span) => Ok(self.identifier_from_span(span)),
            Spanned(Token::QuotedIdentifier, span) => Ok(self.quoted_identifier_from_span(span)),
            Spanned(Token::Keyword(keyword), span) if !keyword.is_reserved() => {
                Ok(self.identifier_from_span(span))
            },
        })
    }

    /// `[schema.]table`, only the table part is kept.
    pub(super) fn parse_table_name(&mut self) -> Result<Identifier> {
        let mut name = self.parse_identifier()?;

        while self.try_match(Token::Period).is_some() {
            name = self.parse_identifier()?;
        }

        Ok(name)
    }

    pub(super) fn parse_string(&mut self) -> Result<String> {
        let Spanned(_, span) = self.must_match(Token::String)?;

        Ok(self.string_from_span(span))
    }

    pub(super) fn parse_comma_separated_within_parentheses<T, F>(
        &mut self,
        func: F,
        allow_empty: bool,
    ) -> Result<Spanned<Vec<T>>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let Spanned(_, s1) = self.must_match(Token::LeftParen)?;

        if allow_empty {
            if let Some(Spanned(_, s2)) = self.try_match(Token::RightParen) {
                return Ok(Spanned(Vec::new(), *s1.start()..=*s2.end()));
            }
        }

        let result = self.parse_comma_separated(func)?;
        let Spanned(_, s2) = self.must_match(Token::RightParen)?;

        Ok(Spanned(result, *s1.start()..=*s2.end()))
    }

    pub(super) fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let mut v = vec![];

        loop {
            v.push(func(self)?);

            if self.try_match(Token::Comma).is_none() {
                break;
            }
        }

        Ok(v)
    }

    /// Consumes a balanced group whose `(` has already been consumed at `begin`.
    pub(super) fn skip_parenthesized(&mut self, begin: usize) -> Result<Span> {
        let mut depth = 1;

        loop {
            match self.next_token()? {
                Spanned(Token::LeftParen, _) => depth += 1,
                Spanned(Token::RightParen, span) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(begin..=*span.end());
                    }
                }
                _ => {}
            }
        }
    }

    /// Consumes `( ... )` and returns the trimmed text between the parentheses.
    pub(super) fn parse_parenthesized_text(&mut self) -> Result<String> {
        let Spanned(_, s1) = self.must_match(Token::LeftParen)?;
        let span = self.skip_parenthesized(*s1.start())?;

        Ok(self.src[span.start() + 1..*span.end()].trim().to_string())
    }

    /// Skips tokens up to, not including, a top-level comma or closing parenthesis, a semicolon or
    /// the end of input.
    pub(super) fn skip_until_delimiter(&mut self) -> Result<()> {
        loop {
            match self.peek_token() {
                None | Some(Token::Comma | Token::Semicolon | Token::RightParen) => {
                    return match self.tokens.peek() {
                        Some(Err(e)) => Err(Error::LexingError(e.clone())),
                        _ => Ok(()),
                    }
                }
                Some(Token::LeftParen) => {
                    let Spanned(_, span) = self.next_token()?;
                    self.skip_parenthesized(*span.start())?;
                }
                Some(_) => {
                    self.tokens.next();
                }
            }
        }
    }

    /// Skips the rest of a statement that is not modelled, up to the semicolon.
    pub(super) fn skip_statement(&mut self) -> Result<()> {
        loop {
            match self.tokens.peek() {
                None | Some(Ok(Spanned(Token::Semicolon, _))) => return Ok(()),
                Some(Err(e)) => return Err(Error::LexingError(e.clone())),
                Some(Ok(_)) => {
                    self.tokens.next();
                }
            }
        }
    }
}
