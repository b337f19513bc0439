//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Variants are (de)serialized and parsed in `lowercase`, so that they match
/// the names used by catalog sources and command line arguments.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumIter,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[serde(rename_all = "lowercase")]
        #[strum(serialize_all = "lowercase", ascii_case_insensitive)]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// Returns all the variants, in declaration order.
            pub fn all() -> impl Iterator<Item = Self> {
                <Self as $crate::private::strum::IntoEnumIterator>::iter()
            }
        }
    };
}
