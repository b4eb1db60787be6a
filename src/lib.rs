//! # jcall
//!
//! A dynamic JNI call bridge: invoke JVM methods, constructors and fields
//! from Rust using only a textual type signature per call site. No
//! compile-time bindings exist for the methods being called; the signature
//! string drives argument marshaling and return-type dispatch at run time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jcall::prelude::*;
//!
//! fn main() {
//!     // One-time, process-wide. Locates libjvm via JAVA_HOME/JVM_LIB_PATH.
//!     create_runtime("-Xmx256m");
//!
//!     // No bindings: class name + method name + signature.
//!     let sum = invoke_static(
//!         "java.lang.Integer",
//!         "sum",
//!         "(II)I",
//!         &[JvmValue::Int(5), JvmValue::Int(7)],
//!     );
//!     assert_eq!(sum, Ok(JvmValue::Int(12)));
//!
//!     // Exceptions come back as values, never panics.
//!     let parsed = invoke_static(
//!         "java.lang.Integer",
//!         "parseInt",
//!         "(Ljava/lang/String;)I",
//!         &[box_text("not a number").unwrap()],
//!     );
//!     assert!(parsed.is_err());
//!
//!     destroy_runtime();
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       Your Code                           │
//! │   invoke_static("pkg.Math", "add", "(II)I", &args)        │
//! ├───────────────────────────────────────────────────────────┤
//! │              Call Bridge (bridge module)                  │
//! │  signature parse → resolve → marshal → dispatch → result  │
//! ├───────────────────────────────────────────────────────────┤
//! │      signature / mutf8 / marshal / value (pure core)      │
//! ├───────────────────────────────────────────────────────────┤
//! │        env::JniEnv + vm (attach, lifecycle)               │
//! ├───────────────────────────────────────────────────────────┤
//! │        Raw FFI bindings (sys module, full vtable)         │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error model
//!
//! Per-call failures - malformed signatures, unresolved members, invalid
//! text encoding, and exceptions thrown by the invoked Java code - are all
//! returned as [`BridgeError`] values in a [`CallResult`]. A thrown Java
//! exception is captured, its message extracted, and the thread's pending
//! exception cleared, so the next call starts from a clean slate.
//!
//! Only two situations are fatal: VM bring-up failure (no call can ever
//! succeed, the process exits with a diagnostic) and issuing a call before
//! [`create_runtime`] (a programming error; panics).
//!
//! ## Threads
//!
//! Any native thread may call into the bridge. The first call from a thread
//! attaches it to the VM and caches the environment; a guard detaches the
//! thread again when it exits. Per-thread state is never shared; the
//! process-wide VM handle is created once and read-only afterwards.

pub mod sys;

pub mod env;
pub mod error;
pub mod mutf8;
pub mod signature;
pub mod value;
pub mod vm;

mod bridge;
mod marshal;

pub mod prelude;

pub use crate::bridge::{
    array_get, array_length, array_new, box_text, box_value, get_field, get_static_field,
    invoke_constructor, invoke_instance, invoke_static, is_null_handle, set_field,
    set_static_field, unbox_text,
};
pub use crate::error::{BridgeError, CallResult};
pub use crate::signature::{Signature, TypeTag};
pub use crate::value::{JObject, JvmValue};
pub use crate::vm::{create_runtime, destroy_runtime, try_create_runtime, JavaVmBuilder, VmError};
