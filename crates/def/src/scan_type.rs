use {
    crate::Value,
    serde::Serialize,
    std::fmt::{Display, Formatter, Result},
};

/// The generic runtime representation of a column, independent of the SQL type it was declared
/// with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScanType {
    Int32,
    Int64,
    Float32,
    Float64,
    Bool,
    String,
    Timestamp,
}

/// 2000-01-01T00:00:00Z
const SAMPLE_TIMESTAMP: i64 = 946_684_800;

impl ScanType {
    /// A deterministic non-null value of this category.
    pub fn sample_value(&self) -> Value {
        match self {
            Self::Int32 => Value::Int32(1),
            Self::Int64 => Value::Int64(1),
            Self::Float32 => Value::Float32(1.5),
            Self::Float64 => Value::Float64(1.5),
            Self::Bool => Value::Bool(true),
            Self::String => Value::String("sample".to_string()),
            Self::Timestamp => Value::Timestamp(SAMPLE_TIMESTAMP),
        }
    }

    /// Reads a literal as rendered in a column default, `None` if it does not fit this category.
    pub fn parse_value(&self, text: &str) -> Option<Value> {
        Some(match self {
            Self::Int32 => Value::Int32(text.parse().ok()?),
            Self::Int64 => Value::Int64(text.parse().ok()?),
            Self::Float32 => Value::Float32(text.parse().ok()?),
            Self::Float64 => Value::Float64(text.parse().ok()?),
            Self::Bool => match text.to_ascii_lowercase().as_str() {
                "1" | "true" => Value::Bool(true),
                "0" | "false" => Value::Bool(false),
                _ => return None,
            },
            Self::String => Value::String(text.to_string()),
            Self::Timestamp => return None,
        })
    }
}

impl Display for ScanType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}",
            match self {
                Self::Int32 => "int32",
                Self::Int64 => "int64",
                Self::Float32 => "float32",
                Self::Float64 => "float64",
                Self::Bool => "bool",
                Self::String => "string",
                Self::Timestamp => "timestamp",
            }
        )
    }
}
