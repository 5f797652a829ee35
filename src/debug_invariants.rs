//! Structural self-checks for mesh containers.

use crate::mesh_error::MeshError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation encountered.
    fn validate_invariants(&self) -> Result<(), MeshError>;

    /// Panic on the first violation in debug builds or when invariant
    /// checking is enabled; no-op otherwise.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "mesh invariants");
    }
}

/// Run a fallible check and panic on error when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
