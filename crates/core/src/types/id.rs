//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around an opaque `String` identifier with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()` producing a fresh UUID-v4 identifier
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// Identifiers are opaque to callers: nothing outside `generate()` may
/// assume they are UUIDs.
///
/// # Example
///
/// ```rust
/// # use trolley_core::define_id;
/// define_id!(StoreId);
/// define_id!(ProductId);
///
/// let store_id = StoreId::generate();
/// let product_id = ProductId::new("p-1".to_owned());
///
/// // These are different types, so this won't compile:
/// // let _: StoreId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing identifier string.
            #[must_use]
            pub const fn new(id: String) -> Self {
                Self(id)
            }

            /// Generate a fresh unique identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID, returning the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(StoreId);
define_id!(SectionId);
define_id!(CategoryId);
define_id!(ProductId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = StoreId::generate();
        let b = StoreId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_round_trips_through_string() {
        let id = ProductId::new("prod-123".to_owned());
        assert_eq!(id.as_str(), "prod-123");
        assert_eq!(String::from(id), "prod-123");
    }

    #[test]
    fn test_serde_transparent() {
        let id = SectionId::new("sec-1".to_owned());
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"sec-1\"");

        let back: SectionId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
