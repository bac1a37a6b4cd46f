//! Helper macro generating `thiserror` enums for driven port failures.
//!
//! Each variant gets a snake_case constructor whose fields accept anything
//! convertible into the declared type.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum ListingStoreError {
            Offline { message: String } => "store offline: {message}",
            Stale { expected: u32, actual: u32 } => "stale write: expected {expected}, found {actual}",
            Closed => "store closed",
        }
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = ListingStoreError::offline("maintenance");
        assert_eq!(err.to_string(), "store offline: maintenance");
    }

    #[test]
    fn numeric_fields_keep_their_types() {
        let err = ListingStoreError::stale(3_u32, 4_u32);
        assert_eq!(err, ListingStoreError::Stale { expected: 3, actual: 4 });
        assert_eq!(err.to_string(), "stale write: expected 3, found 4");
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(ListingStoreError::closed().to_string(), "store closed");
    }
}
