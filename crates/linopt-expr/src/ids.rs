//! Typed handles for model entities.
//!
//! IDs are dense u32 indices assigned by the model in declaration order,
//! so they double as positions into solver-side value arrays.

macro_rules! define_id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Get the inner u32 value.
            pub fn inner(self) -> u32 {
                self.0
            }

            /// Create an ID from a u32 value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id_type!(
    /// Handle to a declared decision variable.
    VariableId
);
define_id_type!(
    /// Handle to a declared constraint row.
    ConstraintId
);

#[cfg(test)]
mod tests {
    use super::{ConstraintId, VariableId};

    #[test]
    fn ids_roundtrip_and_order_by_index() {
        let a = VariableId::new(7);
        assert_eq!(a.inner(), 7);
        assert!(a < VariableId::new(8));
        assert_eq!(a.to_string(), "7");

        let c = ConstraintId::new(11);
        assert_eq!(c.inner(), 11);
        assert_eq!(c.to_string(), "11");
    }
}
