//! Conversion between bridge values and JVM call arguments.
//!
//! Arguments arrive from the caller as [`JvmValue`]s. A slot whose
//! signature names a primitive type may hold either a native primitive
//! (passed through) or a handle to a boxed wrapper object
//! (`java.lang.Integer` and friends), which is unboxed by calling the
//! wrapper's accessor method. Slots with reference types pass through
//! untouched. Whether a wrapper object actually matches the declared
//! primitive is the JVM's call to make; a mismatch surfaces as whatever
//! the accessor lookup or invocation produces.

use crate::env::JniEnv;
use crate::error::BridgeError;
use crate::signature::{Signature, TypeTag};
use crate::sys::jni;
use crate::value::{JObject, JvmValue};

/// Wrapper class, constructor signature and unboxing accessor for a
/// primitive tag. `None` for `Void` and `Ref`.
pub(crate) fn wrapper_for(tag: &TypeTag) -> Option<(&'static str, &'static str, &'static str, &'static str)> {
    match tag {
        TypeTag::Boolean => Some(("java/lang/Boolean", "(Z)V", "booleanValue", "()Z")),
        TypeTag::Byte => Some(("java/lang/Byte", "(B)V", "byteValue", "()B")),
        TypeTag::Char => Some(("java/lang/Character", "(C)V", "charValue", "()C")),
        TypeTag::Short => Some(("java/lang/Short", "(S)V", "shortValue", "()S")),
        TypeTag::Int => Some(("java/lang/Integer", "(I)V", "intValue", "()I")),
        TypeTag::Long => Some(("java/lang/Long", "(J)V", "longValue", "()J")),
        TypeTag::Float => Some(("java/lang/Float", "(F)V", "floatValue", "()F")),
        TypeTag::Double => Some(("java/lang/Double", "(D)V", "doubleValue", "()D")),
        TypeTag::Void | TypeTag::Ref(_) => None,
    }
}

/// Lowers one argument slot into the raw JNI union, unboxing a wrapper
/// object when the signature asks for a primitive.
pub(crate) fn lower(env: &JniEnv, tag: &TypeTag, value: &JvmValue) -> Result<jni::jvalue, BridgeError> {
    match tag {
        TypeTag::Void => Err(BridgeError::MalformedSignature {
            sig: "V".to_string(),
            detail: "void is not a parameter type".to_string(),
        }),
        TypeTag::Ref(_) => Ok(value.to_jvalue()),
        _ => match value {
            JvmValue::Object(obj) => unbox_primitive(env, *obj, tag),
            _ => Ok(value.to_jvalue()),
        },
    }
}

/// Lowers a whole argument buffer against a parsed signature.
pub(crate) fn lower_args(
    env: &JniEnv,
    sig: &Signature,
    values: &[JvmValue],
) -> Result<Vec<jni::jvalue>, BridgeError> {
    if sig.args.len() != values.len() {
        return Err(BridgeError::ArityMismatch {
            expected: sig.args.len(),
            got: values.len(),
        });
    }
    sig.args
        .iter()
        .zip(values)
        .map(|(tag, value)| lower(env, tag, value))
        .collect()
}

/// Calls the wrapper accessor for `tag` on a boxed object.
fn unbox_primitive(env: &JniEnv, obj: JObject, tag: &TypeTag) -> Result<jni::jvalue, BridgeError> {
    if obj.is_null() {
        return Err(BridgeError::NullReference("boxed primitive argument"));
    }
    let (_, _, accessor, accessor_sig) =
        wrapper_for(tag).expect("unbox_primitive called with a non-primitive tag");
    let cls = env.get_object_class(obj.as_raw());
    let mid = env.get_method_id(cls, accessor, accessor_sig)?;
    let raw = obj.as_raw();
    Ok(match tag {
        TypeTag::Boolean => jni::jvalue { z: env.call_boolean(raw, mid, &[]) as jni::jboolean },
        TypeTag::Byte => jni::jvalue { b: env.call_byte(raw, mid, &[]) },
        TypeTag::Char => jni::jvalue { c: env.call_char(raw, mid, &[]) },
        TypeTag::Short => jni::jvalue { s: env.call_short(raw, mid, &[]) },
        TypeTag::Int => jni::jvalue { i: env.call_int(raw, mid, &[]) },
        TypeTag::Long => jni::jvalue { j: env.call_long(raw, mid, &[]) },
        TypeTag::Float => jni::jvalue { f: env.call_float(raw, mid, &[]) },
        TypeTag::Double => jni::jvalue { d: env.call_double(raw, mid, &[]) },
        TypeTag::Void | TypeTag::Ref(_) => unreachable!(),
    })
}

/// Boxes a native primitive into its wrapper object by invoking the
/// wrapper class constructor. Object and void values are returned as-is.
pub(crate) fn box_primitive(env: &JniEnv, value: &JvmValue) -> Result<JvmValue, BridgeError> {
    let tag = match value {
        JvmValue::Bool(_) => TypeTag::Boolean,
        JvmValue::Byte(_) => TypeTag::Byte,
        JvmValue::Char(_) => TypeTag::Char,
        JvmValue::Short(_) => TypeTag::Short,
        JvmValue::Int(_) => TypeTag::Int,
        JvmValue::Long(_) => TypeTag::Long,
        JvmValue::Float(_) => TypeTag::Float,
        JvmValue::Double(_) => TypeTag::Double,
        JvmValue::Object(_) | JvmValue::Void => return Ok(*value),
    };
    let (class, ctor_sig, _, _) = wrapper_for(&tag).expect("primitive tag");
    let cls = env.find_class(class)?;
    let ctor = env.get_method_id(cls, "<init>", ctor_sig)?;
    let obj = env.new_object(cls, ctor, &[value.to_jvalue()]);
    if obj.is_null() {
        env.exception_clear();
        return Err(BridgeError::NullReference("boxing constructor returned null"));
    }
    Ok(JvmValue::Object(JObject(obj)))
}

/// Allocates a JVM array of the given element type and fills it from the
/// flat value buffer. One typed path per primitive element type; reference
/// elements are assigned one at a time (JNI has no bulk copy for them).
pub(crate) fn new_array(
    env: &JniEnv,
    element: &TypeTag,
    values: &[JvmValue],
) -> Result<JvmValue, BridgeError> {
    let len = values.len() as jni::jsize;

    macro_rules! primitive_array {
        ($new:ident, $set:ident, $member:ident, $ty:ty) => {{
            let arr = env.$new(len);
            if arr.is_null() {
                env.exception_clear();
                return Err(BridgeError::NullReference("array allocation returned null"));
            }
            let mut buf: Vec<$ty> = Vec::with_capacity(values.len());
            for v in values {
                let raw = lower(env, element, v)?;
                buf.push(unsafe { raw.$member });
            }
            env.$set(arr, &buf);
            Ok(JvmValue::Object(JObject(arr)))
        }};
    }

    match element {
        TypeTag::Boolean => primitive_array!(new_boolean_array, set_boolean_array_region, z, jni::jboolean),
        TypeTag::Byte => primitive_array!(new_byte_array, set_byte_array_region, b, jni::jbyte),
        TypeTag::Char => primitive_array!(new_char_array, set_char_array_region, c, jni::jchar),
        TypeTag::Short => primitive_array!(new_short_array, set_short_array_region, s, jni::jshort),
        TypeTag::Int => primitive_array!(new_int_array, set_int_array_region, i, jni::jint),
        TypeTag::Long => primitive_array!(new_long_array, set_long_array_region, j, jni::jlong),
        TypeTag::Float => primitive_array!(new_float_array, set_float_array_region, f, jni::jfloat),
        TypeTag::Double => primitive_array!(new_double_array, set_double_array_region, d, jni::jdouble),
        TypeTag::Ref(_) => {
            let name = element.class_name().expect("ref tag has a class name");
            let cls = env.find_class(name)?;
            let arr = env.new_object_array(len, cls)?;
            for (i, v) in values.iter().enumerate() {
                let obj = v
                    .as_object()
                    .ok_or(BridgeError::NullReference("object array element"))?;
                env.set_object_array_element(arr, i as jni::jsize, obj.as_raw());
            }
            Ok(JvmValue::Object(JObject(arr)))
        }
        TypeTag::Void => Err(BridgeError::MalformedSignature {
            sig: "V".to_string(),
            detail: "void is not an array element type".to_string(),
        }),
    }
}

/// Reads one element out of a JVM array, typed by the element tag.
pub(crate) fn array_element(
    env: &JniEnv,
    array: JObject,
    index: jni::jsize,
    element: &TypeTag,
) -> Result<JvmValue, BridgeError> {
    if array.is_null() {
        return Err(BridgeError::NullReference("array"));
    }
    let raw = array.as_raw();
    Ok(match element {
        TypeTag::Boolean => JvmValue::Bool(env.get_boolean_array_element(raw, index) != 0),
        TypeTag::Byte => JvmValue::Byte(env.get_byte_array_element(raw, index)),
        TypeTag::Char => JvmValue::Char(env.get_char_array_element(raw, index)),
        TypeTag::Short => JvmValue::Short(env.get_short_array_element(raw, index)),
        TypeTag::Int => JvmValue::Int(env.get_int_array_element(raw, index)),
        TypeTag::Long => JvmValue::Long(env.get_long_array_element(raw, index)),
        TypeTag::Float => JvmValue::Float(env.get_float_array_element(raw, index)),
        TypeTag::Double => JvmValue::Double(env.get_double_array_element(raw, index)),
        TypeTag::Ref(_) => JvmValue::Object(JObject(env.get_object_array_element(raw, index))),
        TypeTag::Void => {
            return Err(BridgeError::MalformedSignature {
                sig: "V".to_string(),
                detail: "void is not an array element type".to_string(),
            })
        }
    })
}
