mod error;

pub use self::error::{Error, Result};

use {
    ast::{
        token::{Keyword, Token},
        Spanned,
    },
    std::{
        iter::Peekable,
        str::{CharIndices, FromStr},
    },
};

pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: Peekable<CharIndices<'a>>,
    /// Offset of the last byte consumed so far.
    end: usize,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.skip_whitespace_and_comments() {
            return Some(Err(e));
        }

        let &(begin, c) = self.iter.peek()?;

        Some(match c {
            '\'' | '"' => self.scan_string(c),
            '`' => self.scan_quoted_identifier(),
            c if c.is_ascii_digit() => Ok(self.scan_number()),
            '.' if self.digit_after_next() => Ok(self.scan_number()),
            c if c.is_alphabetic() || c == '_' => Ok(self.scan_identifier()),
            c => self.scan_symbol(begin, c),
        })
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().peekable(),
            end: 0,
        }
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let (i, c) = self.iter.next()?;
        self.end = i + c.len_utf8() - 1;
        Some((i, c))
    }

    fn bump_if(&mut self, func: impl FnOnce(char) -> bool) -> Option<(usize, char)> {
        match self.iter.peek() {
            Some(&(_, c)) if func(c) => self.bump(),
            _ => None,
        }
    }

    fn bump_while(&mut self, func: impl Fn(char) -> bool) {
        while self.bump_if(&func).is_some() {}
    }

    fn digit_after_next(&self) -> bool {
        let mut ahead = self.iter.clone();
        ahead.next();
        matches!(ahead.next(), Some((_, c)) if c.is_ascii_digit())
    }

    fn last_offset(&self) -> usize {
        self.src.len().saturating_sub(1)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        loop {
            self.bump_while(char::is_whitespace);

            let mut ahead = self.iter.clone();
            match (ahead.next(), ahead.next(), ahead.next()) {
                (Some((_, '#')), _, _) => self.bump_while(|c| c != '\n'),
                // `--` only starts a comment when followed by whitespace
                (Some((_, '-')), Some((_, '-')), None) => self.bump_while(|_| true),
                (Some((_, '-')), Some((_, '-')), Some((_, c))) if c.is_whitespace() => {
                    self.bump_while(|c| c != '\n')
                }
                (Some((begin, '/')), Some((_, '*')), _) => {
                    self.bump();
                    self.bump();

                    let mut star = false;
                    loop {
                        match self.bump() {
                            Some((_, '/')) if star => break,
                            Some((_, c)) => star = c == '*',
                            None => {
                                return Err(Error::UnterminatedComment(
                                    begin..=self.last_offset(),
                                ))
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<Spanned<Token>> {
        let begin = self.bump().map_or(0, |(i, _)| i);

        while let Some((_, c)) = self.bump() {
            if c == '\\' {
                self.bump();
                continue;
            }

            if c != quote {
                continue;
            }

            // a doubled quote escapes itself
            if self.bump_if(|c| c == quote).is_none() {
                return Ok(Spanned(Token::String, begin..=self.end));
            }
        }

        Err(Error::NoClosingQuoteForString(begin..=self.last_offset()))
    }

    fn scan_quoted_identifier(&mut self) -> Result<Spanned<Token>> {
        let begin = self.bump().map_or(0, |(i, _)| i);

        while let Some((_, c)) = self.bump() {
            if c == '`' && self.bump_if(|c| c == '`').is_none() {
                return Ok(Spanned(Token::QuotedIdentifier, begin..=self.end));
            }
        }

        Err(Error::NoClosingQuoteForIdentifier(
            begin..=self.last_offset(),
        ))
    }

    /// `12`, `1.5`, `.5`, `1.`, `1e5`, `2.5E-3`.
    fn scan_number(&mut self) -> Spanned<Token> {
        let (begin, first) = self.bump().unwrap_or((0, '0'));

        let mut is_float = first == '.';
        if !is_float {
            self.bump_while(|c| c.is_ascii_digit());
            is_float = self.bump_if(|c| c == '.').is_some();
        }
        self.bump_while(|c| c.is_ascii_digit());

        let mut ahead = self.iter.clone();
        let has_exponent = match (ahead.next(), ahead.next(), ahead.next()) {
            (Some((_, 'e' | 'E')), Some((_, c)), _) if c.is_ascii_digit() => true,
            (Some((_, 'e' | 'E')), Some((_, '+' | '-')), Some((_, c))) => c.is_ascii_digit(),
            _ => false,
        };

        if has_exponent {
            is_float = true;
            self.bump();
            self.bump_if(|c| c == '+' || c == '-');
            self.bump_while(|c| c.is_ascii_digit());
        }

        Spanned(Token::Number { is_float }, begin..=self.end)
    }

    fn scan_identifier(&mut self) -> Spanned<Token> {
        let begin = self.bump().map_or(0, |(i, _)| i);

        self.bump_while(|c| c.is_alphanumeric() || c == '_' || c == '$');

        let range = begin..=self.end;
        let token = Keyword::from_str(&self.src[range.clone()])
            .map(Token::Keyword)
            .unwrap_or(Token::Identifier);

        Spanned(token, range)
    }

    fn scan_symbol(&mut self, begin: usize, c: char) -> Result<Spanned<Token>> {
        self.bump();

        let symbol = match c {
            '.' => Token::Period,
            '=' => Token::Equal,
            '<' => {
                if self.bump_if(|c| c == '>').is_some() {
                    Token::LessOrGreaterThan
                } else if self.bump_if(|c| c == '=').is_some() {
                    Token::LessThanOrEqual
                } else {
                    Token::LessThan
                }
            }
            '>' => match self.bump_if(|c| c == '=') {
                Some(_) => Token::GreaterThanOrEqual,
                None => Token::GreaterThan,
            },
            '!' => match self.bump_if(|c| c == '=') {
                Some(_) => Token::NotEqual,
                None => return Err(Error::UnexpectedChar { c, location: begin }),
            },
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '?' => Token::Question,
            '@' => Token::At,
            ':' => Token::Colon,
            '|' => Token::Pipe,
            '&' => Token::Ampersand,
            '~' => Token::Tilde,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            _ => return Err(Error::UnexpectedChar { c, location: begin }),
        };

        Ok(Spanned(symbol, begin..=self.end))
    }
}
