#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Keyword(Keyword),

    Identifier,
    /// An identifier enclosed in backticks.
    QuotedIdentifier,

    Number { is_float: bool },
    String,

    Comma,
    Period,
    Semicolon,
    LeftParen,
    RightParen,
    Question,
    At,
    Colon,

    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    LessOrGreaterThan,

    Caret,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Pipe,
    Ampersand,
    Tilde,
}

macro_rules! keyword {
    (
        reserved { $( $reserved:ident, )* }
        unreserved { $( $unreserved:ident, )* }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[allow(non_camel_case_types)]
        pub enum Keyword {
            $($reserved,)*
            $($unreserved,)*
        }

        #[derive(Debug)]
        pub struct NotKeywordError {}

        impl std::fmt::Display for NotKeywordError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "not a keyword")
            }
        }

        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($reserved) => Ok(Self::$reserved),)*
                    $(stringify!($unreserved) => Ok(Self::$unreserved),)*
                    _ => Err(NotKeywordError {}),
                }
            }
        }

        impl Keyword {
            /// Reserved keywords can only be used as names when quoted with backticks.
            pub const fn is_reserved(&self) -> bool {
                matches!(self, $(Self::$reserved)|*)
            }
        }
    };
}

keyword! {
    reserved {
        ADD,
        ALTER,
        AND,
        AS,
        ASC,
        BIGINT,
        BINARY,
        BLOB,
        CASCADE,
        CHANGE,
        CHAR,
        CHARACTER,
        CHECK,
        COLLATE,
        COLUMN,
        CONSTRAINT,
        CREATE,
        CURRENT_DATE,
        CURRENT_TIME,
        CURRENT_TIMESTAMP,
        DEC,
        DECIMAL,
        DEFAULT,
        DESC,
        DOUBLE,
        DROP,
        EXISTS,
        FALSE,
        FLOAT,
        FOREIGN,
        FULLTEXT,
        GENERATED,
        IF,
        INDEX,
        INT,
        INTEGER,
        KEY,
        LIKE,
        LOCALTIME,
        LOCALTIMESTAMP,
        LONGBLOB,
        LONGTEXT,
        MEDIUMBLOB,
        MEDIUMINT,
        MEDIUMTEXT,
        NOT,
        NULL,
        NUMERIC,
        ON,
        OR,
        PARTITION,
        PRIMARY,
        REAL,
        REFERENCES,
        RENAME,
        RESTRICT,
        SELECT,
        SET,
        SMALLINT,
        SPATIAL,
        TABLE,
        TINYBLOB,
        TINYINT,
        TINYTEXT,
        TO,
        TRUE,
        UNIQUE,
        UNSIGNED,
        UPDATE,
        USING,
        UTC_TIMESTAMP,
        VARBINARY,
        VARCHAR,
        ZEROFILL,
    }
    unreserved {
        AFTER,
        ALWAYS,
        AUTO_INCREMENT,
        BIT,
        BOOL,
        BOOLEAN,
        CHARSET,
        COMMENT,
        DATE,
        DATETIME,
        ENUM,
        FIRST,
        FIXED,
        IGNORE,
        JSON,
        MODIFY,
        NCHAR,
        NVARCHAR,
        ONLINE,
        PRECISION,
        SIGNED,
        STORED,
        TEMPORARY,
        TEXT,
        TIME,
        TIMESTAMP,
        VARYING,
        VIRTUAL,
        YEAR,
    }
}
