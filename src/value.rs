//! The native-side value representation exchanged with the bridge.

use std::ffi::c_void;
use std::fmt;

use crate::sys::jni;

/// An opaque handle to an object owned by the JVM.
///
/// The bridge never manages the referent's lifetime; the handle is only
/// valid as long as the JVM-side reference it wraps (a local reference by
/// default, living until the native frame returns to Java or is explicitly
/// deleted).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JObject(pub jni::jobject);

impl JObject {
    pub const NULL: JObject = JObject(std::ptr::null_mut());

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_raw(&self) -> jni::jobject {
        self.0
    }
}

// The pointer is an opaque token; the JVM serializes access internally.
// Sending one to a different thread is fine, using it concurrently is the
// caller's contract violation (same rule as raw JNI).
unsafe impl Send for JObject {}

/// A value crossing the bridge in either direction: one JVM primitive, an
/// object handle, or the absence of a value (a `void` call's result).
///
/// Instances are transient; they live on the stack of a single call and
/// own nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum JvmValue {
    Bool(bool),
    Byte(i8),
    Char(u16),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Object(JObject),
    Void,
}

impl JvmValue {
    /// Null object handle.
    pub const fn null() -> JvmValue {
        JvmValue::Object(JObject::NULL)
    }

    pub fn is_null_object(&self) -> bool {
        matches!(self, JvmValue::Object(o) if o.is_null())
    }

    /// The object handle inside, if this is an object value.
    pub fn as_object(&self) -> Option<JObject> {
        match self {
            JvmValue::Object(o) => Some(*o),
            _ => None,
        }
    }

    /// Lowers this value into the raw JNI argument union.
    ///
    /// `Void` lowers to an all-zero union; it never appears in a real
    /// argument list because signatures cannot name a void parameter.
    pub fn to_jvalue(&self) -> jni::jvalue {
        match *self {
            JvmValue::Bool(v) => jni::jvalue { z: v as jni::jboolean },
            JvmValue::Byte(v) => jni::jvalue { b: v },
            JvmValue::Char(v) => jni::jvalue { c: v },
            JvmValue::Short(v) => jni::jvalue { s: v },
            JvmValue::Int(v) => jni::jvalue { i: v },
            JvmValue::Long(v) => jni::jvalue { j: v },
            JvmValue::Float(v) => jni::jvalue { f: v },
            JvmValue::Double(v) => jni::jvalue { d: v },
            JvmValue::Object(o) => jni::jvalue { l: o.0 },
            JvmValue::Void => jni::jvalue { j: 0 },
        }
    }

    /// Wraps a raw object pointer returned by JNI.
    pub fn from_object_ptr(ptr: *mut c_void) -> JvmValue {
        JvmValue::Object(JObject(ptr))
    }
}

impl fmt::Display for JvmValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JvmValue::Bool(v) => write!(f, "{v}"),
            JvmValue::Byte(v) => write!(f, "{v}i8"),
            JvmValue::Char(v) => write!(f, "char {v:#06x}"),
            JvmValue::Short(v) => write!(f, "{v}i16"),
            JvmValue::Int(v) => write!(f, "{v}"),
            JvmValue::Long(v) => write!(f, "{v}i64"),
            JvmValue::Float(v) => write!(f, "{v}f32"),
            JvmValue::Double(v) => write!(f, "{v}"),
            JvmValue::Object(o) if o.is_null() => write!(f, "null"),
            JvmValue::Object(o) => write!(f, "object@{:p}", o.0),
            JvmValue::Void => write!(f, "void"),
        }
    }
}

macro_rules! from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(impl From<$ty> for JvmValue {
            fn from(v: $ty) -> Self {
                JvmValue::$variant(v)
            }
        })*
    };
}

from_primitive! {
    bool => Bool,
    i8 => Byte,
    u16 => Char,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
}
