//! Raw FFI bindings.
//!
//! Everything in here mirrors the JDK headers verbatim; use the safe
//! wrappers in [`crate::env`] and [`crate::vm`] unless you are doing
//! something the wrappers don't cover.

pub mod jni;
