//! Common imports for bridge callers.
//!
//! Intentionally small: the call surface, the value types, and runtime
//! lifecycle. Reach into the named modules for the lower layers.

pub use crate::error::{BridgeError, CallResult};
pub use crate::signature::{Signature, TypeTag};
pub use crate::value::{JObject, JvmValue};
pub use crate::vm::{create_runtime, destroy_runtime, try_create_runtime, JavaVmBuilder};
pub use crate::{
    array_get, array_length, array_new, box_text, box_value, get_field, get_static_field,
    invoke_constructor, invoke_instance, invoke_static, is_null_handle, set_field,
    set_static_field, unbox_text,
};
