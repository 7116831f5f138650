use {
    super::{
        error::{Error, Result},
        Parser,
    },
    ast::{
        token::{Keyword, Token},
        DataType, Spanned, TypeName,
    },
};

impl<'a> Parser<'a> {
    pub(super) fn parse_data_type(&mut self) -> Result<DataType> {
        let Spanned(token, span) = self.next_token()?;
        let keyword = match token {
            Token::Keyword(keyword) => keyword,
            _ => return Err(Error::SyntaxError(span)),
        };

        let data_type = match keyword {
            Keyword::TINYINT => self.parse_integer(TypeName::TinyInt)?,
            Keyword::SMALLINT => self.parse_integer(TypeName::SmallInt)?,
            Keyword::MEDIUMINT => self.parse_integer(TypeName::MediumInt)?,
            Keyword::INT | Keyword::INTEGER => self.parse_integer(TypeName::Int)?,
            Keyword::BIGINT => self.parse_integer(TypeName::BigInt)?,
            Keyword::BOOL | Keyword::BOOLEAN => DataType::new(TypeName::Boolean),

            Keyword::FLOAT => self.parse_fractional(TypeName::Float)?,
            Keyword::DOUBLE => {
                self.try_match_keyword(Keyword::PRECISION);
                self.parse_fractional(TypeName::Double)?
            }
            Keyword::REAL => self.parse_fractional(TypeName::Double)?,
            Keyword::DECIMAL | Keyword::NUMERIC | Keyword::DEC | Keyword::FIXED => {
                self.parse_fractional(TypeName::Decimal)?
            }
            Keyword::BIT => self.parse_sized(TypeName::Bit)?,

            Keyword::CHARACTER if self.try_match_keyword(Keyword::VARYING) => {
                self.parse_required_length(TypeName::Varchar)?
            }
            Keyword::CHAR | Keyword::CHARACTER | Keyword::NCHAR => {
                self.parse_sized(TypeName::Char)?
            }
            Keyword::VARCHAR | Keyword::NVARCHAR => self.parse_required_length(TypeName::Varchar)?,
            Keyword::BINARY => self.parse_sized(TypeName::Binary)?,
            Keyword::VARBINARY => self.parse_required_length(TypeName::Varbinary)?,

            Keyword::TINYTEXT => DataType::new(TypeName::TinyText),
            Keyword::TEXT => self.parse_sized(TypeName::Text)?,
            Keyword::MEDIUMTEXT => DataType::new(TypeName::MediumText),
            Keyword::LONGTEXT => DataType::new(TypeName::LongText),
            Keyword::TINYBLOB => DataType::new(TypeName::TinyBlob),
            Keyword::BLOB => self.parse_sized(TypeName::Blob)?,
            Keyword::MEDIUMBLOB => DataType::new(TypeName::MediumBlob),
            Keyword::LONGBLOB => DataType::new(TypeName::LongBlob),

            Keyword::DATE => DataType::new(TypeName::Date),
            Keyword::TIME => self.parse_sized(TypeName::Time)?,
            Keyword::DATETIME => self.parse_sized(TypeName::DateTime)?,
            Keyword::TIMESTAMP => self.parse_sized(TypeName::Timestamp)?,
            Keyword::YEAR => self.parse_sized(TypeName::Year)?,

            Keyword::JSON => DataType::new(TypeName::Json),
            Keyword::ENUM => self.parse_elements(TypeName::Enum)?,
            Keyword::SET => self.parse_elements(TypeName::Set)?,

            _ => return Err(Error::SyntaxError(span)),
        };

        Ok(data_type)
    }

    /// `(n)`, if present.
    fn parse_optional_length(&mut self) -> Result<Option<u32>> {
        if self.peek_token() != Some(Token::LeftParen) {
            return Ok(None);
        }

        self.must_match(Token::LeftParen)?;
        let length = self.parse_number()?;
        self.must_match(Token::RightParen)?;

        Ok(Some(length))
    }

    fn parse_number(&mut self) -> Result<u32> {
        let Spanned(_, span) = self.must_match(Token::Number { is_float: false })?;

        self.number_from_span(span)
    }

    fn parse_sized(&mut self, name: TypeName) -> Result<DataType> {
        Ok(DataType {
            length: self.parse_optional_length()?,
            ..DataType::new(name)
        })
    }

    fn parse_required_length(&mut self, name: TypeName) -> Result<DataType> {
        self.must_match(Token::LeftParen)?;
        let length = self.parse_number()?;
        self.must_match(Token::RightParen)?;

        Ok(DataType::with_length(name, length))
    }

    fn parse_integer(&mut self, name: TypeName) -> Result<DataType> {
        let mut data_type = self.parse_sized(name)?;
        self.parse_numeric_modifiers(&mut data_type);

        Ok(data_type)
    }

    /// `(m)` or `(m, d)`, both optional.
    fn parse_fractional(&mut self, name: TypeName) -> Result<DataType> {
        let mut data_type = DataType::new(name);

        if self.try_match(Token::LeftParen).is_some() {
            data_type.length = Some(self.parse_number()?);
            if self.try_match(Token::Comma).is_some() {
                data_type.decimal = Some(self.parse_number()?);
            }
            self.must_match(Token::RightParen)?;
        }

        self.parse_numeric_modifiers(&mut data_type);

        Ok(data_type)
    }

    fn parse_numeric_modifiers(&mut self, data_type: &mut DataType) {
        loop {
            match self.peek_keyword() {
                Some(Keyword::UNSIGNED) => data_type.unsigned = true,
                Some(Keyword::ZEROFILL) => data_type.zerofill = true,
                Some(Keyword::SIGNED) => {}
                _ => break,
            }
            self.tokens.next();
        }
    }

    fn parse_elements(&mut self, name: TypeName) -> Result<DataType> {
        let Spanned(elements, _) =
            self.parse_comma_separated_within_parentheses(Self::parse_string, false)?;

        Ok(DataType {
            elements,
            ..DataType::new(name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<DataType> {
        Parser::new(input).parse_data_type()
    }

    #[test]
    fn integers() {
        assert_eq!(parse("INT").unwrap(), DataType::new(TypeName::Int));
        assert_eq!(parse("integer").unwrap(), DataType::new(TypeName::Int));

        let data_type = parse("TINYINT(4) UNSIGNED ZEROFILL").unwrap();
        assert_eq!(data_type.name, TypeName::TinyInt);
        assert_eq!(data_type.length, Some(4));
        assert!(data_type.unsigned);
        assert!(data_type.zerofill);

        assert!(!parse("bigint signed").unwrap().unsigned);
    }

    #[test]
    fn fractional() {
        let data_type = parse("decimal(10, 2)").unwrap();
        assert_eq!(data_type.name, TypeName::Decimal);
        assert_eq!((data_type.length, data_type.decimal), (Some(10), Some(2)));

        let data_type = parse("NUMERIC").unwrap();
        assert_eq!(data_type.name, TypeName::Decimal);
        assert_eq!((data_type.length, data_type.decimal), (None, None));

        assert_eq!(parse("double precision").unwrap().name, TypeName::Double);
        assert_eq!(parse("REAL(7,4)").unwrap().decimal, Some(4));
        assert_eq!(parse("float(5)").unwrap().length, Some(5));
    }

    #[test]
    fn strings() {
        assert_eq!(
            parse("VARCHAR(255)").unwrap(),
            DataType::with_length(TypeName::Varchar, 255)
        );
        assert_eq!(
            parse("character varying(8)").unwrap(),
            DataType::with_length(TypeName::Varchar, 8)
        );
        assert_eq!(parse("char").unwrap(), DataType::new(TypeName::Char));
        assert_eq!(parse("text(100)").unwrap().length, Some(100));
        assert_eq!(parse("longblob").unwrap(), DataType::new(TypeName::LongBlob));
        assert!(matches!(parse("varchar"), Err(Error::UnexpectedEnd)));
    }

    #[test]
    fn temporal() {
        assert_eq!(parse("date").unwrap(), DataType::new(TypeName::Date));
        assert_eq!(
            parse("DATETIME(3)").unwrap(),
            DataType::with_length(TypeName::DateTime, 3)
        );
        assert_eq!(parse("timestamp").unwrap().name, TypeName::Timestamp);
    }

    #[test]
    fn enumerations() {
        let data_type = parse("ENUM('draft', 'it''s')").unwrap();

        assert_eq!(data_type.name, TypeName::Enum);
        assert_eq!(data_type.elements, vec!["draft", "it's"]);
    }

    #[test]
    fn unknown_type() {
        assert_eq!(parse("money"), Err(Error::SyntaxError(0..=4)));
        assert_eq!(parse("TABLE"), Err(Error::SyntaxError(0..=4)));
    }
}
