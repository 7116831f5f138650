use {
    crate::{common::Identifier, expr::Expression},
    common::pub_fields_struct,
};

/// Base types as written in a column declaration, with aliases already folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Boolean,
    Float,
    Double,
    Decimal,
    Bit,

    Char,
    Varchar,
    Binary,
    Varbinary,
    TinyText,
    Text,
    MediumText,
    LongText,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,

    Date,
    Time,
    DateTime,
    Timestamp,
    Year,

    Json,
    Enum,
    Set,
}

pub_fields_struct! {
    /// A native type declaration, e.g. `DECIMAL(10,2) UNSIGNED` or `ENUM('a','b')`.
    #[derive(Debug, Clone, PartialEq)]
    struct DataType {
        name: TypeName,
        /// Display width, length, precision or fractional seconds, depending on the type.
        length: Option<u32>,
        /// Digits after the decimal point.
        decimal: Option<u32>,
        unsigned: bool,
        zerofill: bool,
        /// Members of `ENUM` and `SET`.
        elements: Vec<String>,
    }
}

impl DataType {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            length: None,
            decimal: None,
            unsigned: false,
            zerofill: false,
            elements: vec![],
        }
    }

    pub fn with_length(name: TypeName, length: u32) -> Self {
        Self {
            length: Some(length),
            ..Self::new(name)
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ColumnOption {
    NotNull,
    Null,
    PrimaryKey,
    Unique,
    AutoIncrement,
    Default(Expression),
    OnUpdate(Expression),
    Comment(String),
    /// `[GENERATED ALWAYS] AS (expr) [VIRTUAL | STORED]`.
    Generated { expr: Expression, stored: bool },
}

#[derive(Debug, PartialEq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    /// A plain `INDEX` or `KEY`.
    Index,
    Fulltext,
    ForeignKey { table: Identifier },
    Check(Expression),
}

pub_fields_struct! {
    #[derive(Debug, PartialEq)]
    struct Column {
        name: Identifier,
        data_type: DataType,
        options: Vec<ColumnOption>,
    }

    #[derive(Debug, PartialEq)]
    struct TableConstraint {
        kind: ConstraintKind,
        name: Option<Identifier>,
        columns: Vec<Identifier>,
    }

    #[derive(Debug, PartialEq)]
    struct CreateTableStmt {
        if_not_exists: bool,
        name: Identifier,
        columns: Vec<Column>,
        constraints: Vec<TableConstraint>,
        comment: Option<String>,
    }

    #[derive(Debug, PartialEq)]
    struct AlterTableStmt {
        name: Identifier,
        specs: Vec<AlterSpec>,
    }

    #[derive(Debug, PartialEq)]
    struct DropTableStmt {
        if_exists: bool,
        names: Vec<Identifier>,
    }
}

/// Where an added column goes. A missing position means the end of the table.
#[derive(Debug, PartialEq)]
pub enum ColumnPosition {
    First,
    After(Identifier),
}

#[derive(Debug, PartialEq)]
pub enum AlterSpec {
    /// `ADD [COLUMN] col ...` or `ADD [COLUMN] (col, ...)`.
    AddColumns {
        columns: Vec<Column>,
        position: Option<ColumnPosition>,
    },
    DropColumn {
        name: Identifier,
    },
    /// `MODIFY [COLUMN] col ...`, redeclares a column under its own name.
    ModifyColumn {
        column: Column,
        position: Option<ColumnPosition>,
    },
    /// `CHANGE [COLUMN] old_name col ...`.
    ChangeColumn {
        old_name: Identifier,
        column: Column,
        position: Option<ColumnPosition>,
    },
    /// Anything that leaves the columns alone: indexes, constraints, table options, renames.
    Other,
}
