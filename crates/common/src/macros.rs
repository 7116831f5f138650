/// Declares structs whose fields are all `pub`.
///
/// Attributes on fields (doc comments, `serde` renames, ...) are kept.
#[macro_export]
macro_rules! pub_fields_struct {
    {
        $(
            $(#[$($attr:tt)*])*
            struct $name:ident {
                $(
                    $(#[$($field_attr:tt)*])*
                    $field:ident: $t:ty,
                )*
            }
        )*
    } => {
        $(
            $(#[$($attr)*])*
            pub struct $name {
                $(
                    $(#[$($field_attr)*])*
                    pub $field: $t,
                )*
            }
        )*
    }
}

#[cfg(test)]
mod tests {
    pub_fields_struct! {
        #[derive(Debug, Default, PartialEq)]
        struct Pair {
            /// left side
            left: u8,
            right: Option<String>,
        }
    }

    #[test]
    fn fields_are_public() {
        let pair = Pair {
            left: 1,
            right: Some("r".to_string()),
        };

        assert_eq!(pair.left, 1);
        assert_ne!(pair, Pair::default());
    }
}
