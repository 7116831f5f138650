use {
    crate::ScanType,
    serde::Serialize,
    std::fmt::{Display, Formatter, Result},
};

macro_rules! define_value {
    ($($variant:ident($raw:ty),)*) => {
        /// A value of one of the [`ScanType`] categories.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Value {
            $($variant($raw),)*
        }

        impl Value {
            pub fn scan_type(&self) -> ScanType {
                match self {
                    $(Self::$variant(_) => ScanType::$variant,)*
                }
            }
        }

        impl Display for Value {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                match self {
                    $(Self::$variant(v) => write!(f, "{}", v),)*
                }
            }
        }
    };
}

define_value! {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    String(String),
    // seconds since the unix epoch
    Timestamp(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(Value::Int64(3).scan_type(), ScanType::Int64);
        assert_eq!(Value::String("x".to_string()).scan_type(), ScanType::String);
        assert_eq!(ScanType::Timestamp.sample_value().scan_type(), ScanType::Timestamp);
    }

    #[test]
    fn display_and_json() {
        assert_eq!(Value::Float64(2.5).to_string(), "2.5");

        let row = vec![Value::Int32(7), Value::Bool(false), Value::String("a".to_string())];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"[7,false,"a"]"#);
    }
}
