//! The dynamic call bridge: resolve, marshal, dispatch, finalize.
//!
//! Every operation here follows the same shape. The calling thread is
//! attached to the VM (lazily, cached), the textual signature is parsed,
//! the owning class and member are resolved by name, arguments are lowered
//! into raw JNI form, the call is dispatched through the invocation entry
//! point matching the return type, and the outcome is folded into a
//! [`CallResult`]: the value on success, or the captured-and-cleared Java
//! exception on failure.
//!
//! Nothing in this module caches resolution across calls; a `MethodHandle`
//! lives exactly as long as one invocation.

use crate::env::JniEnv;
use crate::error::{BridgeError, CallResult};
use crate::marshal;
use crate::mutf8;
use crate::signature::{Signature, TypeTag};
use crate::sys::jni;
use crate::value::{JObject, JvmValue};
use crate::vm;

/// Translates a caller-facing class name (`java.lang.Integer`) into the
/// JVM-internal form (`java/lang/Integer`).
fn internal_name(name: &str) -> String {
    name.replace('.', "/")
}

// ---------------------------------------------------------------------------
// Dispatch (one typed invocation path per return tag)
// ---------------------------------------------------------------------------

fn dispatch_instance(
    env: &JniEnv,
    obj: jni::jobject,
    mid: jni::jmethodID,
    ret: &TypeTag,
    args: &[jni::jvalue],
) -> JvmValue {
    match ret {
        TypeTag::Boolean => JvmValue::Bool(env.call_boolean(obj, mid, args)),
        TypeTag::Byte => JvmValue::Byte(env.call_byte(obj, mid, args)),
        TypeTag::Char => JvmValue::Char(env.call_char(obj, mid, args)),
        TypeTag::Short => JvmValue::Short(env.call_short(obj, mid, args)),
        TypeTag::Int => JvmValue::Int(env.call_int(obj, mid, args)),
        TypeTag::Long => JvmValue::Long(env.call_long(obj, mid, args)),
        TypeTag::Float => JvmValue::Float(env.call_float(obj, mid, args)),
        TypeTag::Double => JvmValue::Double(env.call_double(obj, mid, args)),
        TypeTag::Ref(_) => JvmValue::Object(JObject(env.call_object(obj, mid, args))),
        TypeTag::Void => {
            env.call_void(obj, mid, args);
            JvmValue::Void
        }
    }
}

fn dispatch_static(
    env: &JniEnv,
    cls: jni::jclass,
    mid: jni::jmethodID,
    ret: &TypeTag,
    args: &[jni::jvalue],
) -> JvmValue {
    match ret {
        TypeTag::Boolean => JvmValue::Bool(env.call_static_boolean(cls, mid, args)),
        TypeTag::Byte => JvmValue::Byte(env.call_static_byte(cls, mid, args)),
        TypeTag::Char => JvmValue::Char(env.call_static_char(cls, mid, args)),
        TypeTag::Short => JvmValue::Short(env.call_static_short(cls, mid, args)),
        TypeTag::Int => JvmValue::Int(env.call_static_int(cls, mid, args)),
        TypeTag::Long => JvmValue::Long(env.call_static_long(cls, mid, args)),
        TypeTag::Float => JvmValue::Float(env.call_static_float(cls, mid, args)),
        TypeTag::Double => JvmValue::Double(env.call_static_double(cls, mid, args)),
        TypeTag::Ref(_) => JvmValue::Object(JObject(env.call_static_object(cls, mid, args))),
        TypeTag::Void => {
            env.call_static_void(cls, mid, args);
            JvmValue::Void
        }
    }
}

// ---------------------------------------------------------------------------
// Result/exception adapter
// ---------------------------------------------------------------------------

/// Folds a dispatched call's raw result and the thread's pending-exception
/// state into one `CallResult`.
///
/// Exactly one of the two outcomes is produced, and the pending exception
/// is always cleared before returning so the next call on this thread
/// starts clean.
fn finalize(env: &JniEnv, raw: JvmValue) -> CallResult {
    if !env.exception_check() {
        return Ok(raw);
    }
    let exc = env.exception_occurred();
    env.exception_clear();
    let msg = match exc {
        Some(exc) => exception_message(env, exc),
        None => "unidentified java exception".to_string(),
    };
    Err(BridgeError::JavaException(msg))
}

/// Extracts a human-readable message from a throwable: `getMessage()`,
/// falling back to `toString()` when the message is absent.
fn exception_message(env: &JniEnv, exc: jni::jthrowable) -> String {
    let described = |mid_name: &str| -> Option<String> {
        let cls = env.get_object_class(exc);
        let mid = env.get_method_id(cls, mid_name, "()Ljava/lang/String;").ok()?;
        let s = crate::env::LocalRef::new(env, env.call_object(exc, mid, &[]));
        if env.exception_check() {
            // A throwing getMessage() would poison the thread; drop it.
            env.exception_clear();
            return None;
        }
        if s.get().is_null() {
            return None;
        }
        let bytes = env.get_string_mutf8(s.get()).ok()?;
        mutf8::from_modified(&bytes).ok()
    };

    described("getMessage")
        .or_else(|| described("toString"))
        .unwrap_or_else(|| "java exception with no message".to_string())
}

// ---------------------------------------------------------------------------
// Invocation entry points
// ---------------------------------------------------------------------------

/// Constructs a new instance: resolves the class and the `<init>` member
/// matching `signature`, then invokes it with `args`.
pub fn invoke_constructor(class_name: &str, signature: &str, args: &[JvmValue]) -> CallResult {
    vm::with_env(|env| {
        let sig = Signature::parse(signature)?;
        let cls = env.find_class(&internal_name(class_name))?;
        let ctor = env.get_method_id(cls, "<init>", signature)?;
        let lowered = marshal::lower_args(env, &sig, args)?;
        log::debug!("new {class_name}{signature}");
        let obj = env.new_object(cls, ctor, &lowered);
        finalize(env, JvmValue::Object(JObject(obj)))
    })?
}

/// Invokes a static method.
pub fn invoke_static(
    class_name: &str,
    method_name: &str,
    signature: &str,
    args: &[JvmValue],
) -> CallResult {
    vm::with_env(|env| {
        let sig = Signature::parse(signature)?;
        let cls = env.find_class(&internal_name(class_name))?;
        let mid = env.get_static_method_id(cls, method_name, signature)?;
        let lowered = marshal::lower_args(env, &sig, args)?;
        log::debug!("call static {class_name}.{method_name}{signature}");
        let raw = dispatch_static(env, cls, mid, &sig.ret, &lowered);
        finalize(env, raw)
    })?
}

/// Invokes a virtual method on `receiver`.
pub fn invoke_instance(
    class_name: &str,
    method_name: &str,
    signature: &str,
    receiver: &JvmValue,
    args: &[JvmValue],
) -> CallResult {
    vm::with_env(|env| {
        let obj = receiver
            .as_object()
            .filter(|o| !o.is_null())
            .ok_or(BridgeError::NullReference("receiver"))?;
        let sig = Signature::parse(signature)?;
        let cls = env.find_class(&internal_name(class_name))?;
        let mid = env.get_method_id(cls, method_name, signature)?;
        let lowered = marshal::lower_args(env, &sig, args)?;
        log::debug!("call {class_name}.{method_name}{signature}");
        let raw = dispatch_instance(env, obj.as_raw(), mid, &sig.ret, &lowered);
        finalize(env, raw)
    })?
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

fn read_field(env: &JniEnv, obj: jni::jobject, fid: jni::jfieldID, tag: &TypeTag) -> CallResult {
    let raw = match tag {
        TypeTag::Boolean => JvmValue::Bool(env.get_boolean_field(obj, fid)),
        TypeTag::Byte => JvmValue::Byte(env.get_byte_field(obj, fid)),
        TypeTag::Char => JvmValue::Char(env.get_char_field(obj, fid)),
        TypeTag::Short => JvmValue::Short(env.get_short_field(obj, fid)),
        TypeTag::Int => JvmValue::Int(env.get_int_field(obj, fid)),
        TypeTag::Long => JvmValue::Long(env.get_long_field(obj, fid)),
        TypeTag::Float => JvmValue::Float(env.get_float_field(obj, fid)),
        TypeTag::Double => JvmValue::Double(env.get_double_field(obj, fid)),
        TypeTag::Ref(_) => JvmValue::Object(JObject(env.get_object_field(obj, fid))),
        TypeTag::Void => {
            return Err(BridgeError::MalformedSignature {
                sig: "V".to_string(),
                detail: "void is not a field type".to_string(),
            })
        }
    };
    finalize(env, raw)
}

fn write_field(
    env: &JniEnv,
    obj: jni::jobject,
    fid: jni::jfieldID,
    tag: &TypeTag,
    value: &JvmValue,
) -> Result<(), BridgeError> {
    let lowered = marshal::lower(env, tag, value)?;
    unsafe {
        match tag {
            TypeTag::Boolean => env.set_boolean_field(obj, fid, lowered.z != 0),
            TypeTag::Byte => env.set_byte_field(obj, fid, lowered.b),
            TypeTag::Char => env.set_char_field(obj, fid, lowered.c),
            TypeTag::Short => env.set_short_field(obj, fid, lowered.s),
            TypeTag::Int => env.set_int_field(obj, fid, lowered.i),
            TypeTag::Long => env.set_long_field(obj, fid, lowered.j),
            TypeTag::Float => env.set_float_field(obj, fid, lowered.f),
            TypeTag::Double => env.set_double_field(obj, fid, lowered.d),
            TypeTag::Ref(_) => env.set_object_field(obj, fid, lowered.l),
            TypeTag::Void => {
                return Err(BridgeError::MalformedSignature {
                    sig: "V".to_string(),
                    detail: "void is not a field type".to_string(),
                })
            }
        }
    }
    finalize(env, JvmValue::Void).map(|_| ())
}

/// Reads an instance field. `signature` is the field's type descriptor.
pub fn get_field(receiver: &JvmValue, field_name: &str, signature: &str) -> CallResult {
    vm::with_env(|env| {
        let obj = receiver
            .as_object()
            .filter(|o| !o.is_null())
            .ok_or(BridgeError::NullReference("receiver"))?;
        let tag = Signature::parse_tag(signature)?;
        let cls = env.get_object_class(obj.as_raw());
        let fid = env.get_field_id(cls, field_name, signature)?;
        read_field(env, obj.as_raw(), fid, &tag)
    })?
}

/// Writes an instance field.
pub fn set_field(
    receiver: &JvmValue,
    field_name: &str,
    value: &JvmValue,
    signature: &str,
) -> Result<(), BridgeError> {
    vm::with_env(|env| {
        let obj = receiver
            .as_object()
            .filter(|o| !o.is_null())
            .ok_or(BridgeError::NullReference("receiver"))?;
        let tag = Signature::parse_tag(signature)?;
        let cls = env.get_object_class(obj.as_raw());
        let fid = env.get_field_id(cls, field_name, signature)?;
        write_field(env, obj.as_raw(), fid, &tag, value)
    })?
}

/// Reads a static field of the named class.
pub fn get_static_field(class_name: &str, field_name: &str, signature: &str) -> CallResult {
    vm::with_env(|env| {
        let tag = Signature::parse_tag(signature)?;
        let cls = env.find_class(&internal_name(class_name))?;
        let fid = env.get_static_field_id(cls, field_name, signature)?;
        let raw = match &tag {
            TypeTag::Boolean => JvmValue::Bool(env.get_static_boolean_field(cls, fid)),
            TypeTag::Byte => JvmValue::Byte(env.get_static_byte_field(cls, fid)),
            TypeTag::Char => JvmValue::Char(env.get_static_char_field(cls, fid)),
            TypeTag::Short => JvmValue::Short(env.get_static_short_field(cls, fid)),
            TypeTag::Int => JvmValue::Int(env.get_static_int_field(cls, fid)),
            TypeTag::Long => JvmValue::Long(env.get_static_long_field(cls, fid)),
            TypeTag::Float => JvmValue::Float(env.get_static_float_field(cls, fid)),
            TypeTag::Double => JvmValue::Double(env.get_static_double_field(cls, fid)),
            TypeTag::Ref(_) => JvmValue::Object(JObject(env.get_static_object_field(cls, fid))),
            TypeTag::Void => {
                return Err(BridgeError::MalformedSignature {
                    sig: "V".to_string(),
                    detail: "void is not a field type".to_string(),
                })
            }
        };
        finalize(env, raw)
    })?
}

/// Writes a static field of the named class.
pub fn set_static_field(
    class_name: &str,
    field_name: &str,
    value: &JvmValue,
    signature: &str,
) -> Result<(), BridgeError> {
    vm::with_env(|env| {
        let tag = Signature::parse_tag(signature)?;
        let cls = env.find_class(&internal_name(class_name))?;
        let fid = env.get_static_field_id(cls, field_name, signature)?;
        let lowered = marshal::lower(env, &tag, value)?;
        unsafe {
            match &tag {
                TypeTag::Boolean => env.set_static_boolean_field(cls, fid, lowered.z != 0),
                TypeTag::Byte => env.set_static_byte_field(cls, fid, lowered.b),
                TypeTag::Char => env.set_static_char_field(cls, fid, lowered.c),
                TypeTag::Short => env.set_static_short_field(cls, fid, lowered.s),
                TypeTag::Int => env.set_static_int_field(cls, fid, lowered.i),
                TypeTag::Long => env.set_static_long_field(cls, fid, lowered.j),
                TypeTag::Float => env.set_static_float_field(cls, fid, lowered.f),
                TypeTag::Double => env.set_static_double_field(cls, fid, lowered.d),
                TypeTag::Ref(_) => env.set_static_object_field(cls, fid, lowered.l),
                TypeTag::Void => {
                    return Err(BridgeError::MalformedSignature {
                        sig: "V".to_string(),
                        detail: "void is not a field type".to_string(),
                    })
                }
            }
        }
        finalize(env, JvmValue::Void).map(|_| ())
    })?
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Creates a `java.lang.String` from native text, re-encoding into the
/// JVM's modified UTF-8 on the way in.
pub fn box_text(text: &str) -> CallResult {
    vm::with_env(|env| {
        let modified = mutf8::to_modified(text.as_bytes())?;
        let s = env.new_string_mutf8(&modified)?;
        Ok(JvmValue::Object(JObject(s)))
    })?
}

/// Reads a `java.lang.String` back into native text, decoding the JVM's
/// modified UTF-8 (surrogate pairs included) on the way out.
pub fn unbox_text(value: &JvmValue) -> Result<String, BridgeError> {
    vm::with_env(|env| {
        let obj = value
            .as_object()
            .filter(|o| !o.is_null())
            .ok_or(BridgeError::NullReference("string"))?;
        let bytes = env.get_string_mutf8(obj.as_raw())?;
        mutf8::from_modified(&bytes)
    })?
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

/// Allocates a JVM array with the given element descriptor (`"I"`,
/// `"Ljava/lang/String;"`, `"[D"`, ...) and fills it from `values`.
pub fn array_new(element_descriptor: &str, values: &[JvmValue]) -> CallResult {
    vm::with_env(|env| {
        let element = Signature::parse_tag(element_descriptor)?;
        let arr = marshal::new_array(env, &element, values)?;
        finalize(env, arr)
    })?
}

/// Reads `array[index]`, typed by the element descriptor.
pub fn array_get(array: &JvmValue, index: i32, element_descriptor: &str) -> CallResult {
    vm::with_env(|env| {
        let element = Signature::parse_tag(element_descriptor)?;
        let obj = array
            .as_object()
            .ok_or(BridgeError::NullReference("array"))?;
        let v = marshal::array_element(env, obj, index, &element)?;
        finalize(env, v)
    })?
}

/// Length of a JVM array.
pub fn array_length(array: &JvmValue) -> Result<i32, BridgeError> {
    vm::with_env(|env| {
        let obj = array
            .as_object()
            .filter(|o| !o.is_null())
            .ok_or(BridgeError::NullReference("array"))?;
        Ok(env.array_length(obj.as_raw()))
    })?
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

/// Boxes a native primitive into its wrapper object (`5i32` becomes a
/// `java.lang.Integer`). Object and void values pass through.
pub fn box_value(value: &JvmValue) -> CallResult {
    vm::with_env(|env| marshal::box_primitive(env, value))?
}

/// True when the handle refers to Java `null`.
pub fn is_null_handle(value: &JvmValue) -> bool {
    match value.as_object() {
        None => false,
        Some(obj) if obj.is_null() => true,
        Some(obj) => {
            vm::with_env(|env| env.is_same_object(obj.as_raw(), std::ptr::null_mut()))
                .unwrap_or(false)
        }
    }
}
