// jcall/src/sys/jni.rs
//
// Raw JNI (Java Native Interface) bindings. No external dependencies.
//
// Checked against the JDK 27 jni.h header; compatible back to JDK 8. The
// vtable grows only at the end (GetModule in 9, IsVirtualThread in 19,
// GetStringUTFLengthAsLong in 24), so a full table built for 27 works on
// every older hotspot.
//
// Slot order is ABI. Every slot is declared, including the ones this crate
// never calls, because the struct layout must match the header exactly.
// Variadic slots (the non-A/non-V call forms) cannot be expressed as Rust
// fn types and are declared as raw pointers; use the `A` forms.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

use std::ffi::c_void;
use std::os::raw::c_char;

// ---------------------------------------------------------------------------
// Primitive and reference types
// ---------------------------------------------------------------------------

pub type jint = i32;
pub type jlong = i64;
pub type jbyte = i8;
pub type jboolean = u8;
pub type jchar = u16;
pub type jshort = i16;
pub type jfloat = f32;
pub type jdouble = f64;
pub type jsize = jint;

pub type jobject = *mut c_void;
pub type jclass = jobject;
pub type jstring = jobject;
pub type jarray = jobject;
pub type jthrowable = jobject;
pub type jweak = jobject;

pub type jobjectArray = jarray;
pub type jbooleanArray = jarray;
pub type jbyteArray = jarray;
pub type jcharArray = jarray;
pub type jshortArray = jarray;
pub type jintArray = jarray;
pub type jlongArray = jarray;
pub type jfloatArray = jarray;
pub type jdoubleArray = jarray;

pub type jmethodID = *mut c_void;
pub type jfieldID = *mut c_void;

/// The JNI argument/result union. Exactly one member is meaningful per use,
/// selected by the call site's signature.
#[repr(C)]
#[derive(Copy, Clone)]
pub union jvalue {
    pub z: jboolean,
    pub b: jbyte,
    pub c: jchar,
    pub s: jshort,
    pub i: jint,
    pub j: jlong,
    pub f: jfloat,
    pub d: jdouble,
    pub l: jobject,
}

impl Default for jvalue {
    fn default() -> Self {
        jvalue { j: 0 }
    }
}

// ---------------------------------------------------------------------------
// Status codes and version constants
// ---------------------------------------------------------------------------

pub const JNI_OK: jint = 0;
pub const JNI_ERR: jint = -1;
pub const JNI_EDETACHED: jint = -2;
pub const JNI_EVERSION: jint = -3;
pub const JNI_ENOMEM: jint = -4;
pub const JNI_EEXIST: jint = -5;
pub const JNI_EINVAL: jint = -6;

pub const JNI_TRUE: jboolean = 1;
pub const JNI_FALSE: jboolean = 0;

pub const JNI_COMMIT: jint = 1;
pub const JNI_ABORT: jint = 2;

pub const JNI_VERSION_1_6: jint = 0x00010006;
pub const JNI_VERSION_1_8: jint = 0x00010008;
pub const JNI_VERSION_9: jint = 0x00090000;
pub const JNI_VERSION_21: jint = 0x00150000;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum jobjectRefType {
    JNIInvalidRefType = 0,
    JNILocalRefType = 1,
    JNIGlobalRefType = 2,
    JNIWeakGlobalRefType = 3,
}

#[repr(C)]
pub struct JNINativeMethod {
    pub name: *const c_char,
    pub signature: *const c_char,
    pub fnPtr: *mut c_void,
}

// va_list is platform-specific; never used from this crate. Placeholder only.
pub type va_list = *mut c_void;

type Env = *mut JNIEnv;

// ---------------------------------------------------------------------------
// JNINativeInterface_ - the per-thread function table
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct JNINativeInterface_ {
    pub reserved0: *mut c_void,
    pub reserved1: *mut c_void,
    pub reserved2: *mut c_void,
    pub reserved3: *mut c_void,

    pub GetVersion: unsafe extern "system" fn(Env) -> jint,

    pub DefineClass: unsafe extern "system" fn(Env, *const c_char, jobject, *const jbyte, jsize) -> jclass,
    pub FindClass: unsafe extern "system" fn(Env, *const c_char) -> jclass,

    pub FromReflectedMethod: unsafe extern "system" fn(Env, jobject) -> jmethodID,
    pub FromReflectedField: unsafe extern "system" fn(Env, jobject) -> jfieldID,
    pub ToReflectedMethod: unsafe extern "system" fn(Env, jclass, jmethodID, jboolean) -> jobject,

    pub GetSuperclass: unsafe extern "system" fn(Env, jclass) -> jclass,
    pub IsAssignableFrom: unsafe extern "system" fn(Env, jclass, jclass) -> jboolean,

    pub ToReflectedField: unsafe extern "system" fn(Env, jclass, jfieldID, jboolean) -> jobject,

    pub Throw: unsafe extern "system" fn(Env, jthrowable) -> jint,
    pub ThrowNew: unsafe extern "system" fn(Env, jclass, *const c_char) -> jint,
    pub ExceptionOccurred: unsafe extern "system" fn(Env) -> jthrowable,
    pub ExceptionDescribe: unsafe extern "system" fn(Env),
    pub ExceptionClear: unsafe extern "system" fn(Env),
    pub FatalError: unsafe extern "system" fn(Env, *const c_char),

    pub PushLocalFrame: unsafe extern "system" fn(Env, jint) -> jint,
    pub PopLocalFrame: unsafe extern "system" fn(Env, jobject) -> jobject,

    pub NewGlobalRef: unsafe extern "system" fn(Env, jobject) -> jobject,
    pub DeleteGlobalRef: unsafe extern "system" fn(Env, jobject),
    pub DeleteLocalRef: unsafe extern "system" fn(Env, jobject),
    pub IsSameObject: unsafe extern "system" fn(Env, jobject, jobject) -> jboolean,
    pub NewLocalRef: unsafe extern "system" fn(Env, jobject) -> jobject,
    pub EnsureLocalCapacity: unsafe extern "system" fn(Env, jint) -> jint,

    pub AllocObject: unsafe extern "system" fn(Env, jclass) -> jobject,
    pub NewObject: *mut c_void, // variadic
    pub NewObjectV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jobject,
    pub NewObjectA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jobject,

    pub GetObjectClass: unsafe extern "system" fn(Env, jobject) -> jclass,
    pub IsInstanceOf: unsafe extern "system" fn(Env, jobject, jclass) -> jboolean,

    pub GetMethodID: unsafe extern "system" fn(Env, jclass, *const c_char, *const c_char) -> jmethodID,

    pub CallObjectMethod: *mut c_void, // variadic
    pub CallObjectMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jobject,
    pub CallObjectMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jobject,
    pub CallBooleanMethod: *mut c_void, // variadic
    pub CallBooleanMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jboolean,
    pub CallBooleanMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jboolean,
    pub CallByteMethod: *mut c_void, // variadic
    pub CallByteMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jbyte,
    pub CallByteMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jbyte,
    pub CallCharMethod: *mut c_void, // variadic
    pub CallCharMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jchar,
    pub CallCharMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jchar,
    pub CallShortMethod: *mut c_void, // variadic
    pub CallShortMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jshort,
    pub CallShortMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jshort,
    pub CallIntMethod: *mut c_void, // variadic
    pub CallIntMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jint,
    pub CallIntMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jint,
    pub CallLongMethod: *mut c_void, // variadic
    pub CallLongMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jlong,
    pub CallLongMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jlong,
    pub CallFloatMethod: *mut c_void, // variadic
    pub CallFloatMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jfloat,
    pub CallFloatMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jfloat,
    pub CallDoubleMethod: *mut c_void, // variadic
    pub CallDoubleMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list) -> jdouble,
    pub CallDoubleMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue) -> jdouble,
    pub CallVoidMethod: *mut c_void, // variadic
    pub CallVoidMethodV: unsafe extern "system" fn(Env, jobject, jmethodID, va_list),
    pub CallVoidMethodA: unsafe extern "system" fn(Env, jobject, jmethodID, *const jvalue),

    pub CallNonvirtualObjectMethod: *mut c_void, // variadic
    pub CallNonvirtualObjectMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jobject,
    pub CallNonvirtualObjectMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jobject,
    pub CallNonvirtualBooleanMethod: *mut c_void, // variadic
    pub CallNonvirtualBooleanMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jboolean,
    pub CallNonvirtualBooleanMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jboolean,
    pub CallNonvirtualByteMethod: *mut c_void, // variadic
    pub CallNonvirtualByteMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jbyte,
    pub CallNonvirtualByteMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jbyte,
    pub CallNonvirtualCharMethod: *mut c_void, // variadic
    pub CallNonvirtualCharMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jchar,
    pub CallNonvirtualCharMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jchar,
    pub CallNonvirtualShortMethod: *mut c_void, // variadic
    pub CallNonvirtualShortMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jshort,
    pub CallNonvirtualShortMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jshort,
    pub CallNonvirtualIntMethod: *mut c_void, // variadic
    pub CallNonvirtualIntMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jint,
    pub CallNonvirtualIntMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jint,
    pub CallNonvirtualLongMethod: *mut c_void, // variadic
    pub CallNonvirtualLongMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jlong,
    pub CallNonvirtualLongMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jlong,
    pub CallNonvirtualFloatMethod: *mut c_void, // variadic
    pub CallNonvirtualFloatMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jfloat,
    pub CallNonvirtualFloatMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jfloat,
    pub CallNonvirtualDoubleMethod: *mut c_void, // variadic
    pub CallNonvirtualDoubleMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list) -> jdouble,
    pub CallNonvirtualDoubleMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue) -> jdouble,
    pub CallNonvirtualVoidMethod: *mut c_void, // variadic
    pub CallNonvirtualVoidMethodV: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, va_list),
    pub CallNonvirtualVoidMethodA: unsafe extern "system" fn(Env, jobject, jclass, jmethodID, *const jvalue),

    pub GetFieldID: unsafe extern "system" fn(Env, jclass, *const c_char, *const c_char) -> jfieldID,

    pub GetObjectField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jobject,
    pub GetBooleanField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jboolean,
    pub GetByteField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jbyte,
    pub GetCharField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jchar,
    pub GetShortField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jshort,
    pub GetIntField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jint,
    pub GetLongField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jlong,
    pub GetFloatField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jfloat,
    pub GetDoubleField: unsafe extern "system" fn(Env, jobject, jfieldID) -> jdouble,

    pub SetObjectField: unsafe extern "system" fn(Env, jobject, jfieldID, jobject),
    pub SetBooleanField: unsafe extern "system" fn(Env, jobject, jfieldID, jboolean),
    pub SetByteField: unsafe extern "system" fn(Env, jobject, jfieldID, jbyte),
    pub SetCharField: unsafe extern "system" fn(Env, jobject, jfieldID, jchar),
    pub SetShortField: unsafe extern "system" fn(Env, jobject, jfieldID, jshort),
    pub SetIntField: unsafe extern "system" fn(Env, jobject, jfieldID, jint),
    pub SetLongField: unsafe extern "system" fn(Env, jobject, jfieldID, jlong),
    pub SetFloatField: unsafe extern "system" fn(Env, jobject, jfieldID, jfloat),
    pub SetDoubleField: unsafe extern "system" fn(Env, jobject, jfieldID, jdouble),

    pub GetStaticMethodID: unsafe extern "system" fn(Env, jclass, *const c_char, *const c_char) -> jmethodID,

    pub CallStaticObjectMethod: *mut c_void, // variadic
    pub CallStaticObjectMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jobject,
    pub CallStaticObjectMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jobject,
    pub CallStaticBooleanMethod: *mut c_void, // variadic
    pub CallStaticBooleanMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jboolean,
    pub CallStaticBooleanMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jboolean,
    pub CallStaticByteMethod: *mut c_void, // variadic
    pub CallStaticByteMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jbyte,
    pub CallStaticByteMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jbyte,
    pub CallStaticCharMethod: *mut c_void, // variadic
    pub CallStaticCharMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jchar,
    pub CallStaticCharMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jchar,
    pub CallStaticShortMethod: *mut c_void, // variadic
    pub CallStaticShortMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jshort,
    pub CallStaticShortMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jshort,
    pub CallStaticIntMethod: *mut c_void, // variadic
    pub CallStaticIntMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jint,
    pub CallStaticIntMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jint,
    pub CallStaticLongMethod: *mut c_void, // variadic
    pub CallStaticLongMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jlong,
    pub CallStaticLongMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jlong,
    pub CallStaticFloatMethod: *mut c_void, // variadic
    pub CallStaticFloatMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jfloat,
    pub CallStaticFloatMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jfloat,
    pub CallStaticDoubleMethod: *mut c_void, // variadic
    pub CallStaticDoubleMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list) -> jdouble,
    pub CallStaticDoubleMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue) -> jdouble,
    pub CallStaticVoidMethod: *mut c_void, // variadic
    pub CallStaticVoidMethodV: unsafe extern "system" fn(Env, jclass, jmethodID, va_list),
    pub CallStaticVoidMethodA: unsafe extern "system" fn(Env, jclass, jmethodID, *const jvalue),

    pub GetStaticFieldID: unsafe extern "system" fn(Env, jclass, *const c_char, *const c_char) -> jfieldID,

    pub GetStaticObjectField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jobject,
    pub GetStaticBooleanField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jboolean,
    pub GetStaticByteField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jbyte,
    pub GetStaticCharField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jchar,
    pub GetStaticShortField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jshort,
    pub GetStaticIntField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jint,
    pub GetStaticLongField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jlong,
    pub GetStaticFloatField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jfloat,
    pub GetStaticDoubleField: unsafe extern "system" fn(Env, jclass, jfieldID) -> jdouble,

    pub SetStaticObjectField: unsafe extern "system" fn(Env, jclass, jfieldID, jobject),
    pub SetStaticBooleanField: unsafe extern "system" fn(Env, jclass, jfieldID, jboolean),
    pub SetStaticByteField: unsafe extern "system" fn(Env, jclass, jfieldID, jbyte),
    pub SetStaticCharField: unsafe extern "system" fn(Env, jclass, jfieldID, jchar),
    pub SetStaticShortField: unsafe extern "system" fn(Env, jclass, jfieldID, jshort),
    pub SetStaticIntField: unsafe extern "system" fn(Env, jclass, jfieldID, jint),
    pub SetStaticLongField: unsafe extern "system" fn(Env, jclass, jfieldID, jlong),
    pub SetStaticFloatField: unsafe extern "system" fn(Env, jclass, jfieldID, jfloat),
    pub SetStaticDoubleField: unsafe extern "system" fn(Env, jclass, jfieldID, jdouble),

    pub NewString: unsafe extern "system" fn(Env, *const jchar, jsize) -> jstring,
    pub GetStringLength: unsafe extern "system" fn(Env, jstring) -> jsize,
    pub GetStringChars: unsafe extern "system" fn(Env, jstring, *mut jboolean) -> *const jchar,
    pub ReleaseStringChars: unsafe extern "system" fn(Env, jstring, *const jchar),

    pub NewStringUTF: unsafe extern "system" fn(Env, *const c_char) -> jstring,
    pub GetStringUTFLength: unsafe extern "system" fn(Env, jstring) -> jsize,
    pub GetStringUTFChars: unsafe extern "system" fn(Env, jstring, *mut jboolean) -> *const c_char,
    pub ReleaseStringUTFChars: unsafe extern "system" fn(Env, jstring, *const c_char),

    pub GetArrayLength: unsafe extern "system" fn(Env, jarray) -> jsize,

    pub NewObjectArray: unsafe extern "system" fn(Env, jsize, jclass, jobject) -> jobjectArray,
    pub GetObjectArrayElement: unsafe extern "system" fn(Env, jobjectArray, jsize) -> jobject,
    pub SetObjectArrayElement: unsafe extern "system" fn(Env, jobjectArray, jsize, jobject),

    pub NewBooleanArray: unsafe extern "system" fn(Env, jsize) -> jbooleanArray,
    pub NewByteArray: unsafe extern "system" fn(Env, jsize) -> jbyteArray,
    pub NewCharArray: unsafe extern "system" fn(Env, jsize) -> jcharArray,
    pub NewShortArray: unsafe extern "system" fn(Env, jsize) -> jshortArray,
    pub NewIntArray: unsafe extern "system" fn(Env, jsize) -> jintArray,
    pub NewLongArray: unsafe extern "system" fn(Env, jsize) -> jlongArray,
    pub NewFloatArray: unsafe extern "system" fn(Env, jsize) -> jfloatArray,
    pub NewDoubleArray: unsafe extern "system" fn(Env, jsize) -> jdoubleArray,

    pub GetBooleanArrayElements: unsafe extern "system" fn(Env, jbooleanArray, *mut jboolean) -> *mut jboolean,
    pub GetByteArrayElements: unsafe extern "system" fn(Env, jbyteArray, *mut jboolean) -> *mut jbyte,
    pub GetCharArrayElements: unsafe extern "system" fn(Env, jcharArray, *mut jboolean) -> *mut jchar,
    pub GetShortArrayElements: unsafe extern "system" fn(Env, jshortArray, *mut jboolean) -> *mut jshort,
    pub GetIntArrayElements: unsafe extern "system" fn(Env, jintArray, *mut jboolean) -> *mut jint,
    pub GetLongArrayElements: unsafe extern "system" fn(Env, jlongArray, *mut jboolean) -> *mut jlong,
    pub GetFloatArrayElements: unsafe extern "system" fn(Env, jfloatArray, *mut jboolean) -> *mut jfloat,
    pub GetDoubleArrayElements: unsafe extern "system" fn(Env, jdoubleArray, *mut jboolean) -> *mut jdouble,

    pub ReleaseBooleanArrayElements: unsafe extern "system" fn(Env, jbooleanArray, *mut jboolean, jint),
    pub ReleaseByteArrayElements: unsafe extern "system" fn(Env, jbyteArray, *mut jbyte, jint),
    pub ReleaseCharArrayElements: unsafe extern "system" fn(Env, jcharArray, *mut jchar, jint),
    pub ReleaseShortArrayElements: unsafe extern "system" fn(Env, jshortArray, *mut jshort, jint),
    pub ReleaseIntArrayElements: unsafe extern "system" fn(Env, jintArray, *mut jint, jint),
    pub ReleaseLongArrayElements: unsafe extern "system" fn(Env, jlongArray, *mut jlong, jint),
    pub ReleaseFloatArrayElements: unsafe extern "system" fn(Env, jfloatArray, *mut jfloat, jint),
    pub ReleaseDoubleArrayElements: unsafe extern "system" fn(Env, jdoubleArray, *mut jdouble, jint),

    pub GetBooleanArrayRegion: unsafe extern "system" fn(Env, jbooleanArray, jsize, jsize, *mut jboolean),
    pub GetByteArrayRegion: unsafe extern "system" fn(Env, jbyteArray, jsize, jsize, *mut jbyte),
    pub GetCharArrayRegion: unsafe extern "system" fn(Env, jcharArray, jsize, jsize, *mut jchar),
    pub GetShortArrayRegion: unsafe extern "system" fn(Env, jshortArray, jsize, jsize, *mut jshort),
    pub GetIntArrayRegion: unsafe extern "system" fn(Env, jintArray, jsize, jsize, *mut jint),
    pub GetLongArrayRegion: unsafe extern "system" fn(Env, jlongArray, jsize, jsize, *mut jlong),
    pub GetFloatArrayRegion: unsafe extern "system" fn(Env, jfloatArray, jsize, jsize, *mut jfloat),
    pub GetDoubleArrayRegion: unsafe extern "system" fn(Env, jdoubleArray, jsize, jsize, *mut jdouble),

    pub SetBooleanArrayRegion: unsafe extern "system" fn(Env, jbooleanArray, jsize, jsize, *const jboolean),
    pub SetByteArrayRegion: unsafe extern "system" fn(Env, jbyteArray, jsize, jsize, *const jbyte),
    pub SetCharArrayRegion: unsafe extern "system" fn(Env, jcharArray, jsize, jsize, *const jchar),
    pub SetShortArrayRegion: unsafe extern "system" fn(Env, jshortArray, jsize, jsize, *const jshort),
    pub SetIntArrayRegion: unsafe extern "system" fn(Env, jintArray, jsize, jsize, *const jint),
    pub SetLongArrayRegion: unsafe extern "system" fn(Env, jlongArray, jsize, jsize, *const jlong),
    pub SetFloatArrayRegion: unsafe extern "system" fn(Env, jfloatArray, jsize, jsize, *const jfloat),
    pub SetDoubleArrayRegion: unsafe extern "system" fn(Env, jdoubleArray, jsize, jsize, *const jdouble),

    pub RegisterNatives: unsafe extern "system" fn(Env, jclass, *const JNINativeMethod, jint) -> jint,
    pub UnregisterNatives: unsafe extern "system" fn(Env, jclass) -> jint,

    pub MonitorEnter: unsafe extern "system" fn(Env, jobject) -> jint,
    pub MonitorExit: unsafe extern "system" fn(Env, jobject) -> jint,

    pub GetJavaVM: unsafe extern "system" fn(Env, *mut *mut JavaVM) -> jint,

    pub GetStringRegion: unsafe extern "system" fn(Env, jstring, jsize, jsize, *mut jchar),
    pub GetStringUTFRegion: unsafe extern "system" fn(Env, jstring, jsize, jsize, *mut c_char),

    pub GetPrimitiveArrayCritical: unsafe extern "system" fn(Env, jarray, *mut jboolean) -> *mut c_void,
    pub ReleasePrimitiveArrayCritical: unsafe extern "system" fn(Env, jarray, *mut c_void, jint),

    pub GetStringCritical: unsafe extern "system" fn(Env, jstring, *mut jboolean) -> *const jchar,
    pub ReleaseStringCritical: unsafe extern "system" fn(Env, jstring, *const jchar),

    pub NewWeakGlobalRef: unsafe extern "system" fn(Env, jobject) -> jweak,
    pub DeleteWeakGlobalRef: unsafe extern "system" fn(Env, jweak),

    pub ExceptionCheck: unsafe extern "system" fn(Env) -> jboolean,

    pub NewDirectByteBuffer: unsafe extern "system" fn(Env, *mut c_void, jlong) -> jobject,
    pub GetDirectBufferAddress: unsafe extern "system" fn(Env, jobject) -> *mut c_void,
    pub GetDirectBufferCapacity: unsafe extern "system" fn(Env, jobject) -> jlong,

    pub GetObjectRefType: unsafe extern "system" fn(Env, jobject) -> jobjectRefType,

    // JDK 9+
    pub GetModule: unsafe extern "system" fn(Env, jclass) -> jobject,
    // JDK 19+
    pub IsVirtualThread: unsafe extern "system" fn(Env, jobject) -> jboolean,
    // JDK 24+
    pub GetStringUTFLengthAsLong: unsafe extern "system" fn(Env, jstring) -> jlong,
}

/// `JNIEnv` is the vtable pointer itself, per the C (not C++) definition:
/// `typedef const struct JNINativeInterface_ *JNIEnv;`
pub type JNIEnv = *const JNINativeInterface_;

// ---------------------------------------------------------------------------
// JNIInvokeInterface_ - the process-wide JavaVM function table
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct JNIInvokeInterface_ {
    pub reserved0: *mut c_void,
    pub reserved1: *mut c_void,
    pub reserved2: *mut c_void,

    pub DestroyJavaVM: unsafe extern "system" fn(*mut JavaVM) -> jint,
    pub AttachCurrentThread: unsafe extern "system" fn(*mut JavaVM, *mut *mut c_void, *mut c_void) -> jint,
    pub DetachCurrentThread: unsafe extern "system" fn(*mut JavaVM) -> jint,
    pub GetEnv: unsafe extern "system" fn(*mut JavaVM, *mut *mut c_void, jint) -> jint,
    pub AttachCurrentThreadAsDaemon: unsafe extern "system" fn(*mut JavaVM, *mut *mut c_void, *mut c_void) -> jint,
}

/// `JavaVM` is the invoke-interface vtable pointer, per the C definition.
pub type JavaVM = *const JNIInvokeInterface_;

// ---------------------------------------------------------------------------
// VM creation
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct JavaVMOption {
    pub optionString: *mut c_char,
    pub extraInfo: *mut c_void,
}

#[repr(C)]
pub struct JavaVMInitArgs {
    pub version: jint,
    pub nOptions: jint,
    pub options: *mut JavaVMOption,
    pub ignoreUnrecognized: jboolean,
}

#[repr(C)]
pub struct JavaVMAttachArgs {
    pub version: jint,
    pub name: *mut c_char,
    pub group: jobject,
}

/// Signature of the `JNI_CreateJavaVM` entry point exported by libjvm.
pub type JNI_CreateJavaVM =
    unsafe extern "system" fn(*mut *mut JavaVM, *mut *mut JNIEnv, *mut JavaVMInitArgs) -> jint;

// ---------------------------------------------------------------------------
// Vtable call helpers
// ---------------------------------------------------------------------------

/// Call a JNI function through the environment vtable.
/// `$env` is `*mut JNIEnv`, i.e. `*mut *const JNINativeInterface_`.
#[macro_export]
macro_rules! jni_call {
    ($env:expr, $func:ident $(, $args:expr)*) => {{
        let env_ptr = $env;
        ((**env_ptr).$func)(env_ptr $(, $args)*)
    }};
}

/// Call a JavaVM function through the invoke-interface vtable.
#[macro_export]
macro_rules! jvm_call {
    ($vm:expr, $func:ident $(, $args:expr)*) => {{
        let vm_ptr = $vm;
        ((**vm_ptr).$func)(vm_ptr $(, $args)*)
    }};
}
