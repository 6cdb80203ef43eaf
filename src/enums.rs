//! Closed string enumerations
//!
//! The API documents a fixed set of values for every categorical field but
//! adds new ones over time. [`string_enum!`] generates an enum with one
//! variant per documented value plus `Unrecognized(String)`, so decoding a
//! newer value never fails and re-encoding it is lossless.
//!
//! Every generated enum gets:
//!
//! - `VARIANTS`: the known wire values, in API order
//! - `as_str()` / `Display`: the wire value
//! - `is_known()`: false only for `Unrecognized`
//! - `From<&str>`, `From<String>` and an infallible `FromStr`
//! - `Serialize` / `Deserialize` as a plain JSON string

/// Declare a string enumeration with an `Unrecognized` fallback
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )+
            /// A value this version of the crate does not know about
            Unrecognized(::std::string::String),
        }

        impl $name {
            /// Known wire values, in API order
            pub const VARIANTS: &'static [&'static str] = &[$($value),+];

            /// The wire value
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unrecognized(value) => value.as_str(),
                }
            }

            /// Whether the value is one of [`Self::VARIANTS`]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unrecognized(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unrecognized(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

pub(crate) use string_enum;

#[cfg(test)]
mod tests {
    use super::string_enum;
    use test_case::test_case;

    string_enum! {
        /// Test enum
        pub enum Fruit {
            Apple => "apple",
            BloodOrange => "blood_orange",
            Unknown => "unknown",
        }
    }

    #[test_case("apple", Fruit::Apple ; "simple")]
    #[test_case("blood_orange", Fruit::BloodOrange ; "snake case")]
    #[test_case("unknown", Fruit::Unknown ; "literal unknown is a real value")]
    fn test_known_values(wire: &str, expected: Fruit) {
        let parsed: Fruit = wire.parse().unwrap();
        assert_eq!(parsed, expected);
        assert!(parsed.is_known());
        assert_eq!(parsed.as_str(), wire);
    }

    #[test]
    fn test_unrecognized_value_round_trips() {
        let parsed: Fruit = serde_json::from_str("\"dragonfruit\"").unwrap();
        assert_eq!(parsed, Fruit::Unrecognized("dragonfruit".into()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"dragonfruit\"");
    }

    #[test]
    fn test_variants_in_order() {
        assert_eq!(Fruit::VARIANTS, &["apple", "blood_orange", "unknown"]);
        assert_eq!(Fruit::BloodOrange.to_string(), "blood_orange");
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_str::<Fruit>("42").is_err());
    }
}
