//! Macros for defining free-text newtypes.

/// Macro for defining a validated free-text newtype.
///
/// A valid value is non-empty, has no leading or trailing whitespace and is at
/// most `512` bytes long. Deserialization goes through the same validation.
///
/// # Example
///
/// ```rust
/// # use common::define_text;
///
/// define_text! {
///     #[doc = "Name of a shape."]
///     struct ShapeName;
/// }
///
/// assert!(ShapeName::new("cube").is_some());
/// assert!(ShapeName::new(" cube").is_none());
/// ```
#[macro_export]
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident;
    ) => {
        #[doc = $doc]
        #[derive(
            $crate::private::derive_more::AsRef,
            Clone,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::derive_more::Display,
            Eq,
            Hash,
            $crate::private::derive_more::Into,
            Ord,
            PartialEq,
            PartialOrd,
            $crate::private::serde::Serialize,
        )]
        #[as_ref(forward)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new value if the given `text` is valid.
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            /// Returns the text of this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Checks whether the given `text` is valid.
            fn check(text: impl AsRef<str>) -> bool {
                let text = text.as_ref();
                text.trim() == text && !text.is_empty() && text.len() <= 512
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `",
                    ::core::stringify!($name),
                    "`",
                ))
            }
        }

        impl ::core::convert::TryFrom<String> for $name {
            type Error = &'static str;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `",
                    ::core::stringify!($name),
                    "`",
                ))
            }
        }
    };
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    define_text! {
        #[doc = "Text used in tests."]
        struct Label;
    }

    #[test]
    fn validates() {
        assert!(Label::new("Dell").is_some());
        assert!(Label::new("Best Seller").is_some());

        assert!(Label::new("").is_none());
        assert!(Label::new(" Dell").is_none());
        assert!(Label::new("Dell\n").is_none());
        assert!(Label::new("x".repeat(513)).is_none());
    }

    #[test]
    fn from_str() {
        assert_eq!(Label::from_str("Apple").unwrap().as_str(), "Apple");
        assert_eq!(Label::from_str("  ").unwrap_err(), "invalid `Label`");
    }

    #[test]
    fn deserializes_through_validation() {
        let label: Label = serde_json::from_str(r#""Gaming""#).unwrap();
        assert_eq!(label.to_string(), "Gaming");

        assert!(serde_json::from_str::<Label>(r#""""#).is_err());
    }
}
