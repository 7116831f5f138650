use {
    ast::{
        expr::{Expression, Literal},
        Column, ColumnOption, DataType, TypeName,
    },
    def::{ColumnDefinition, ScanType},
};

const DEFAULT_DECIMAL_PRECISION: u32 = 10;

/// Builds the catalog's view of a column declaration.
pub fn map_column(column: &Column) -> ColumnDefinition {
    let data_type = &column.data_type;
    let mut def = ColumnDefinition::new(
        column.name.0.as_str(),
        type_name(data_type.name),
        scan_type(data_type.name),
    );

    def.column_type = column_type(data_type);
    def.length = length(data_type);
    match (data_type.name, data_type.decimal) {
        (TypeName::Decimal, scale) => {
            def.precision = Some(data_type.length.unwrap_or(DEFAULT_DECIMAL_PRECISION));
            def.scale = Some(scale.unwrap_or(0));
        }
        (TypeName::Float | TypeName::Double, Some(scale)) => {
            def.precision = data_type.length;
            def.scale = Some(scale);
        }
        _ => {}
    }

    for option in &column.options {
        match option {
            ColumnOption::NotNull => def.is_nullable = false,
            ColumnOption::Null => def.is_nullable = true,
            ColumnOption::PrimaryKey => def.is_primary_key = true,
            ColumnOption::Unique => def.is_unique = true,
            ColumnOption::AutoIncrement => def.is_auto_increment = true,
            ColumnOption::Default(expr) => def.default_value = default_value(expr),
            ColumnOption::Comment(comment) => def.comment = Some(comment.clone()),
            ColumnOption::OnUpdate(_) | ColumnOption::Generated { .. } => {}
        }
    }

    def
}

pub fn type_name(name: TypeName) -> &'static str {
    match name {
        TypeName::TinyInt => "tinyint",
        TypeName::SmallInt => "smallint",
        TypeName::MediumInt => "mediumint",
        TypeName::Int => "int",
        TypeName::BigInt => "bigint",
        TypeName::Boolean => "boolean",
        TypeName::Float => "float",
        TypeName::Double => "double",
        TypeName::Decimal => "decimal",
        TypeName::Bit => "bit",
        TypeName::Char => "char",
        TypeName::Varchar => "varchar",
        TypeName::Binary => "binary",
        TypeName::Varbinary => "varbinary",
        TypeName::TinyText => "tinytext",
        TypeName::Text => "text",
        TypeName::MediumText => "mediumtext",
        TypeName::LongText => "longtext",
        TypeName::TinyBlob => "tinyblob",
        TypeName::Blob => "blob",
        TypeName::MediumBlob => "mediumblob",
        TypeName::LongBlob => "longblob",
        TypeName::Date => "date",
        TypeName::Time => "time",
        TypeName::DateTime => "datetime",
        TypeName::Timestamp => "timestamp",
        TypeName::Year => "year",
        TypeName::Json => "json",
        TypeName::Enum => "enum",
        TypeName::Set => "set",
    }
}

pub fn scan_type(name: TypeName) -> ScanType {
    match name {
        TypeName::TinyInt | TypeName::SmallInt | TypeName::Int => ScanType::Int32,
        TypeName::MediumInt | TypeName::BigInt | TypeName::Timestamp => ScanType::Int64,
        TypeName::Float => ScanType::Float32,
        TypeName::Double => ScanType::Float64,
        TypeName::Boolean => ScanType::Bool,
        TypeName::Date | TypeName::DateTime => ScanType::Timestamp,
        _ => ScanType::String,
    }
}

/// Lowercase type with its arguments and flags, e.g. `decimal(10,2) unsigned`.
pub fn column_type(data_type: &DataType) -> String {
    let name = type_name(data_type.name);

    let mut s = match data_type.name {
        TypeName::Decimal => format!(
            "{}({},{})",
            name,
            data_type.length.unwrap_or(DEFAULT_DECIMAL_PRECISION),
            data_type.decimal.unwrap_or(0)
        ),
        TypeName::Char | TypeName::Binary | TypeName::Bit => {
            format!("{}({})", name, data_type.length.unwrap_or(1))
        }
        TypeName::Enum | TypeName::Set => {
            let elements = data_type
                .elements
                .iter()
                .map(|e| format!("'{}'", e.replace('\'', "''")))
                .collect::<Vec<_>>();
            format!("{}({})", name, elements.join(","))
        }
        _ => match (data_type.length, data_type.decimal) {
            (Some(length), Some(decimal)) => format!("{}({},{})", name, length, decimal),
            (Some(length), None) => format!("{}({})", name, length),
            _ => name.to_string(),
        },
    };

    if data_type.unsigned {
        s.push_str(" unsigned");
    }
    if data_type.zerofill {
        s.push_str(" zerofill");
    }

    s
}

fn length(data_type: &DataType) -> Option<u32> {
    match data_type.name {
        TypeName::Varchar
        | TypeName::Varbinary
        | TypeName::TinyText
        | TypeName::Text
        | TypeName::MediumText
        | TypeName::LongText
        | TypeName::TinyBlob
        | TypeName::Blob
        | TypeName::MediumBlob
        | TypeName::LongBlob => data_type.length,
        _ => None,
    }
}

fn default_value(expr: &Expression) -> Option<String> {
    match expr {
        Expression::Literal(Literal::Null) | Expression::Raw(_) => None,
        Expression::Literal(Literal::Boolean(b)) => Some(if *b { "1" } else { "0" }.to_string()),
        Expression::Literal(Literal::Int(v)) => Some(v.to_string()),
        Expression::Literal(Literal::Uint(v)) => Some(v.to_string()),
        Expression::Literal(Literal::Decimal(s) | Literal::String(s)) => Some(s.clone()),
        Expression::FunctionCall { func, .. } => Some(func.0.clone()),
    }
}
