//! Safe wrapper around a thread's JNI environment.
//!
//! [`JniEnv`] narrows the 200+-slot vtable down to the operations the call
//! bridge needs, with Rust types on both sides. Two conventions hold
//! throughout:
//!
//! - Resolution (class, method, field) returns `Err(MemberNotFound)` and
//!   *clears* the `ClassNotFoundException`/`NoSuchMethodError` the JVM
//!   raises on a failed lookup, so a miss never poisons the thread's
//!   exception state.
//! - Invocation methods return the raw result unconditionally; whether the
//!   call completed or threw is decided afterwards by the caller via
//!   [`JniEnv::exception_check`] (see the dispatcher's `finalize`).
//!
//! A `JniEnv` is bound to the thread that produced it and must not be sent
//! to another thread.

use std::ffi::CString;
use std::ptr;

use crate::error::BridgeError;
use crate::jni_call;
use crate::sys::jni;

pub struct JniEnv {
    env: *mut jni::JNIEnv,
}

impl JniEnv {
    /// Wraps a raw environment pointer.
    ///
    /// # Safety
    /// `env` must be a valid JNI environment for the current thread.
    pub unsafe fn from_raw(env: *mut jni::JNIEnv) -> Self {
        JniEnv { env }
    }

    pub fn raw(&self) -> *mut jni::JNIEnv {
        self.env
    }

    fn cstring(s: &str) -> Result<CString, BridgeError> {
        CString::new(s).map_err(|e| BridgeError::InvalidEncoding {
            offset: e.nul_position(),
            byte: 0,
        })
    }

    // -----------------------------------------------------------------
    // Resolution
    // -----------------------------------------------------------------

    /// Resolves a class by its JVM-internal name (`java/lang/String`).
    pub fn find_class(&self, name: &str) -> Result<jni::jclass, BridgeError> {
        let c_name = Self::cstring(name)?;
        let cls = unsafe { jni_call!(self.env, FindClass, c_name.as_ptr()) };
        if cls.is_null() {
            self.exception_clear();
            return Err(BridgeError::MemberNotFound(format!("class {name}")));
        }
        Ok(cls)
    }

    pub fn get_method_id(
        &self,
        cls: jni::jclass,
        name: &str,
        sig: &str,
    ) -> Result<jni::jmethodID, BridgeError> {
        let c_name = Self::cstring(name)?;
        let c_sig = Self::cstring(sig)?;
        let mid =
            unsafe { jni_call!(self.env, GetMethodID, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        if mid.is_null() {
            self.exception_clear();
            return Err(BridgeError::MemberNotFound(format!("method {name}{sig}")));
        }
        Ok(mid)
    }

    pub fn get_static_method_id(
        &self,
        cls: jni::jclass,
        name: &str,
        sig: &str,
    ) -> Result<jni::jmethodID, BridgeError> {
        let c_name = Self::cstring(name)?;
        let c_sig = Self::cstring(sig)?;
        let mid = unsafe {
            jni_call!(self.env, GetStaticMethodID, cls, c_name.as_ptr(), c_sig.as_ptr())
        };
        if mid.is_null() {
            self.exception_clear();
            return Err(BridgeError::MemberNotFound(format!("static method {name}{sig}")));
        }
        Ok(mid)
    }

    pub fn get_field_id(
        &self,
        cls: jni::jclass,
        name: &str,
        sig: &str,
    ) -> Result<jni::jfieldID, BridgeError> {
        let c_name = Self::cstring(name)?;
        let c_sig = Self::cstring(sig)?;
        let fid = unsafe { jni_call!(self.env, GetFieldID, cls, c_name.as_ptr(), c_sig.as_ptr()) };
        if fid.is_null() {
            self.exception_clear();
            return Err(BridgeError::MemberNotFound(format!("field {name} ({sig})")));
        }
        Ok(fid)
    }

    pub fn get_static_field_id(
        &self,
        cls: jni::jclass,
        name: &str,
        sig: &str,
    ) -> Result<jni::jfieldID, BridgeError> {
        let c_name = Self::cstring(name)?;
        let c_sig = Self::cstring(sig)?;
        let fid = unsafe {
            jni_call!(self.env, GetStaticFieldID, cls, c_name.as_ptr(), c_sig.as_ptr())
        };
        if fid.is_null() {
            self.exception_clear();
            return Err(BridgeError::MemberNotFound(format!("static field {name} ({sig})")));
        }
        Ok(fid)
    }

    pub fn get_object_class(&self, obj: jni::jobject) -> jni::jclass {
        unsafe { jni_call!(self.env, GetObjectClass, obj) }
    }

    // -----------------------------------------------------------------
    // Exceptions
    // -----------------------------------------------------------------

    pub fn exception_check(&self) -> bool {
        unsafe { jni_call!(self.env, ExceptionCheck) != jni::JNI_FALSE }
    }

    pub fn exception_occurred(&self) -> Option<jni::jthrowable> {
        let exc = unsafe { jni_call!(self.env, ExceptionOccurred) };
        if exc.is_null() {
            None
        } else {
            Some(exc)
        }
    }

    pub fn exception_clear(&self) {
        unsafe { jni_call!(self.env, ExceptionClear) }
    }

    // -----------------------------------------------------------------
    // Object construction and identity
    // -----------------------------------------------------------------

    pub fn new_object(
        &self,
        cls: jni::jclass,
        ctor: jni::jmethodID,
        args: &[jni::jvalue],
    ) -> jni::jobject {
        unsafe { jni_call!(self.env, NewObjectA, cls, ctor, args.as_ptr()) }
    }

    pub fn is_same_object(&self, a: jni::jobject, b: jni::jobject) -> bool {
        unsafe { jni_call!(self.env, IsSameObject, a, b) != jni::JNI_FALSE }
    }

    pub fn delete_local_ref(&self, obj: jni::jobject) {
        unsafe { jni_call!(self.env, DeleteLocalRef, obj) }
    }

    // -----------------------------------------------------------------
    // Instance calls (one per return type; the "A" forms only)
    // -----------------------------------------------------------------

    pub fn call_object(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jobject {
        unsafe { jni_call!(self.env, CallObjectMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_boolean(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> bool {
        unsafe { jni_call!(self.env, CallBooleanMethodA, obj, mid, args.as_ptr()) != jni::JNI_FALSE }
    }

    pub fn call_byte(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jbyte {
        unsafe { jni_call!(self.env, CallByteMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_char(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jchar {
        unsafe { jni_call!(self.env, CallCharMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_short(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jshort {
        unsafe { jni_call!(self.env, CallShortMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_int(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jint {
        unsafe { jni_call!(self.env, CallIntMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_long(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jlong {
        unsafe { jni_call!(self.env, CallLongMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_float(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jfloat {
        unsafe { jni_call!(self.env, CallFloatMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_double(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jdouble {
        unsafe { jni_call!(self.env, CallDoubleMethodA, obj, mid, args.as_ptr()) }
    }

    pub fn call_void(&self, obj: jni::jobject, mid: jni::jmethodID, args: &[jni::jvalue]) {
        unsafe { jni_call!(self.env, CallVoidMethodA, obj, mid, args.as_ptr()) }
    }

    // -----------------------------------------------------------------
    // Static calls
    // -----------------------------------------------------------------

    pub fn call_static_object(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jobject {
        unsafe { jni_call!(self.env, CallStaticObjectMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_boolean(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> bool {
        unsafe { jni_call!(self.env, CallStaticBooleanMethodA, cls, mid, args.as_ptr()) != jni::JNI_FALSE }
    }

    pub fn call_static_byte(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jbyte {
        unsafe { jni_call!(self.env, CallStaticByteMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_char(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jchar {
        unsafe { jni_call!(self.env, CallStaticCharMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_short(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jshort {
        unsafe { jni_call!(self.env, CallStaticShortMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_int(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jint {
        unsafe { jni_call!(self.env, CallStaticIntMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_long(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jlong {
        unsafe { jni_call!(self.env, CallStaticLongMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_float(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jfloat {
        unsafe { jni_call!(self.env, CallStaticFloatMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_double(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) -> jni::jdouble {
        unsafe { jni_call!(self.env, CallStaticDoubleMethodA, cls, mid, args.as_ptr()) }
    }

    pub fn call_static_void(&self, cls: jni::jclass, mid: jni::jmethodID, args: &[jni::jvalue]) {
        unsafe { jni_call!(self.env, CallStaticVoidMethodA, cls, mid, args.as_ptr()) }
    }

    // -----------------------------------------------------------------
    // Instance fields
    // -----------------------------------------------------------------

    pub fn get_object_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jobject {
        unsafe { jni_call!(self.env, GetObjectField, obj, fid) }
    }

    pub fn get_boolean_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> bool {
        unsafe { jni_call!(self.env, GetBooleanField, obj, fid) != jni::JNI_FALSE }
    }

    pub fn get_byte_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jbyte {
        unsafe { jni_call!(self.env, GetByteField, obj, fid) }
    }

    pub fn get_char_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jchar {
        unsafe { jni_call!(self.env, GetCharField, obj, fid) }
    }

    pub fn get_short_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jshort {
        unsafe { jni_call!(self.env, GetShortField, obj, fid) }
    }

    pub fn get_int_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jint {
        unsafe { jni_call!(self.env, GetIntField, obj, fid) }
    }

    pub fn get_long_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jlong {
        unsafe { jni_call!(self.env, GetLongField, obj, fid) }
    }

    pub fn get_float_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jfloat {
        unsafe { jni_call!(self.env, GetFloatField, obj, fid) }
    }

    pub fn get_double_field(&self, obj: jni::jobject, fid: jni::jfieldID) -> jni::jdouble {
        unsafe { jni_call!(self.env, GetDoubleField, obj, fid) }
    }

    pub fn set_object_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jobject) {
        unsafe { jni_call!(self.env, SetObjectField, obj, fid, v) }
    }

    pub fn set_boolean_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: bool) {
        unsafe { jni_call!(self.env, SetBooleanField, obj, fid, v as jni::jboolean) }
    }

    pub fn set_byte_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jbyte) {
        unsafe { jni_call!(self.env, SetByteField, obj, fid, v) }
    }

    pub fn set_char_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jchar) {
        unsafe { jni_call!(self.env, SetCharField, obj, fid, v) }
    }

    pub fn set_short_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jshort) {
        unsafe { jni_call!(self.env, SetShortField, obj, fid, v) }
    }

    pub fn set_int_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jint) {
        unsafe { jni_call!(self.env, SetIntField, obj, fid, v) }
    }

    pub fn set_long_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jlong) {
        unsafe { jni_call!(self.env, SetLongField, obj, fid, v) }
    }

    pub fn set_float_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jfloat) {
        unsafe { jni_call!(self.env, SetFloatField, obj, fid, v) }
    }

    pub fn set_double_field(&self, obj: jni::jobject, fid: jni::jfieldID, v: jni::jdouble) {
        unsafe { jni_call!(self.env, SetDoubleField, obj, fid, v) }
    }

    // -----------------------------------------------------------------
    // Static fields
    // -----------------------------------------------------------------

    pub fn get_static_object_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jobject {
        unsafe { jni_call!(self.env, GetStaticObjectField, cls, fid) }
    }

    pub fn get_static_boolean_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> bool {
        unsafe { jni_call!(self.env, GetStaticBooleanField, cls, fid) != jni::JNI_FALSE }
    }

    pub fn get_static_byte_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jbyte {
        unsafe { jni_call!(self.env, GetStaticByteField, cls, fid) }
    }

    pub fn get_static_char_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jchar {
        unsafe { jni_call!(self.env, GetStaticCharField, cls, fid) }
    }

    pub fn get_static_short_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jshort {
        unsafe { jni_call!(self.env, GetStaticShortField, cls, fid) }
    }

    pub fn get_static_int_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jint {
        unsafe { jni_call!(self.env, GetStaticIntField, cls, fid) }
    }

    pub fn get_static_long_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jlong {
        unsafe { jni_call!(self.env, GetStaticLongField, cls, fid) }
    }

    pub fn get_static_float_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jfloat {
        unsafe { jni_call!(self.env, GetStaticFloatField, cls, fid) }
    }

    pub fn get_static_double_field(&self, cls: jni::jclass, fid: jni::jfieldID) -> jni::jdouble {
        unsafe { jni_call!(self.env, GetStaticDoubleField, cls, fid) }
    }

    pub fn set_static_object_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jobject) {
        unsafe { jni_call!(self.env, SetStaticObjectField, cls, fid, v) }
    }

    pub fn set_static_boolean_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: bool) {
        unsafe { jni_call!(self.env, SetStaticBooleanField, cls, fid, v as jni::jboolean) }
    }

    pub fn set_static_byte_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jbyte) {
        unsafe { jni_call!(self.env, SetStaticByteField, cls, fid, v) }
    }

    pub fn set_static_char_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jchar) {
        unsafe { jni_call!(self.env, SetStaticCharField, cls, fid, v) }
    }

    pub fn set_static_short_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jshort) {
        unsafe { jni_call!(self.env, SetStaticShortField, cls, fid, v) }
    }

    pub fn set_static_int_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jint) {
        unsafe { jni_call!(self.env, SetStaticIntField, cls, fid, v) }
    }

    pub fn set_static_long_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jlong) {
        unsafe { jni_call!(self.env, SetStaticLongField, cls, fid, v) }
    }

    pub fn set_static_float_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jfloat) {
        unsafe { jni_call!(self.env, SetStaticFloatField, cls, fid, v) }
    }

    pub fn set_static_double_field(&self, cls: jni::jclass, fid: jni::jfieldID, v: jni::jdouble) {
        unsafe { jni_call!(self.env, SetStaticDoubleField, cls, fid, v) }
    }

    // -----------------------------------------------------------------
    // Strings (modified UTF-8 at this layer; see crate::mutf8)
    // -----------------------------------------------------------------

    /// Creates a Java string from bytes already in modified UTF-8.
    pub fn new_string_mutf8(&self, mutf8: &[u8]) -> Result<jni::jstring, BridgeError> {
        let c = CString::new(mutf8).map_err(|e| BridgeError::InvalidEncoding {
            offset: e.nul_position(),
            byte: 0,
        })?;
        let s = unsafe { jni_call!(self.env, NewStringUTF, c.as_ptr()) };
        if s.is_null() {
            self.exception_clear();
            return Err(BridgeError::NullReference("NewStringUTF returned null"));
        }
        Ok(s)
    }

    /// Copies out a Java string's bytes in modified UTF-8.
    pub fn get_string_mutf8(&self, s: jni::jstring) -> Result<Vec<u8>, BridgeError> {
        if s.is_null() {
            return Err(BridgeError::NullReference("string"));
        }
        unsafe {
            let chars = jni_call!(self.env, GetStringUTFChars, s, ptr::null_mut());
            if chars.is_null() {
                self.exception_clear();
                return Err(BridgeError::NullReference("GetStringUTFChars returned null"));
            }
            let bytes = std::ffi::CStr::from_ptr(chars).to_bytes().to_vec();
            jni_call!(self.env, ReleaseStringUTFChars, s, chars);
            Ok(bytes)
        }
    }

    // -----------------------------------------------------------------
    // Arrays
    // -----------------------------------------------------------------

    pub fn array_length(&self, array: jni::jarray) -> jni::jsize {
        unsafe { jni_call!(self.env, GetArrayLength, array) }
    }

    pub fn new_object_array(
        &self,
        len: jni::jsize,
        element_cls: jni::jclass,
    ) -> Result<jni::jobjectArray, BridgeError> {
        let arr =
            unsafe { jni_call!(self.env, NewObjectArray, len, element_cls, ptr::null_mut()) };
        if arr.is_null() {
            self.exception_clear();
            return Err(BridgeError::NullReference("NewObjectArray returned null"));
        }
        Ok(arr)
    }

    pub fn get_object_array_element(&self, arr: jni::jobjectArray, idx: jni::jsize) -> jni::jobject {
        unsafe { jni_call!(self.env, GetObjectArrayElement, arr, idx) }
    }

    pub fn set_object_array_element(&self, arr: jni::jobjectArray, idx: jni::jsize, v: jni::jobject) {
        unsafe { jni_call!(self.env, SetObjectArrayElement, arr, idx, v) }
    }

    pub fn new_boolean_array(&self, len: jni::jsize) -> jni::jbooleanArray {
        unsafe { jni_call!(self.env, NewBooleanArray, len) }
    }

    pub fn new_byte_array(&self, len: jni::jsize) -> jni::jbyteArray {
        unsafe { jni_call!(self.env, NewByteArray, len) }
    }

    pub fn new_char_array(&self, len: jni::jsize) -> jni::jcharArray {
        unsafe { jni_call!(self.env, NewCharArray, len) }
    }

    pub fn new_short_array(&self, len: jni::jsize) -> jni::jshortArray {
        unsafe { jni_call!(self.env, NewShortArray, len) }
    }

    pub fn new_int_array(&self, len: jni::jsize) -> jni::jintArray {
        unsafe { jni_call!(self.env, NewIntArray, len) }
    }

    pub fn new_long_array(&self, len: jni::jsize) -> jni::jlongArray {
        unsafe { jni_call!(self.env, NewLongArray, len) }
    }

    pub fn new_float_array(&self, len: jni::jsize) -> jni::jfloatArray {
        unsafe { jni_call!(self.env, NewFloatArray, len) }
    }

    pub fn new_double_array(&self, len: jni::jsize) -> jni::jdoubleArray {
        unsafe { jni_call!(self.env, NewDoubleArray, len) }
    }

    pub fn set_boolean_array_region(&self, arr: jni::jbooleanArray, buf: &[jni::jboolean]) {
        unsafe { jni_call!(self.env, SetBooleanArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_byte_array_region(&self, arr: jni::jbyteArray, buf: &[jni::jbyte]) {
        unsafe { jni_call!(self.env, SetByteArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_char_array_region(&self, arr: jni::jcharArray, buf: &[jni::jchar]) {
        unsafe { jni_call!(self.env, SetCharArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_short_array_region(&self, arr: jni::jshortArray, buf: &[jni::jshort]) {
        unsafe { jni_call!(self.env, SetShortArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_int_array_region(&self, arr: jni::jintArray, buf: &[jni::jint]) {
        unsafe { jni_call!(self.env, SetIntArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_long_array_region(&self, arr: jni::jlongArray, buf: &[jni::jlong]) {
        unsafe { jni_call!(self.env, SetLongArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_float_array_region(&self, arr: jni::jfloatArray, buf: &[jni::jfloat]) {
        unsafe { jni_call!(self.env, SetFloatArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn set_double_array_region(&self, arr: jni::jdoubleArray, buf: &[jni::jdouble]) {
        unsafe { jni_call!(self.env, SetDoubleArrayRegion, arr, 0, buf.len() as jni::jsize, buf.as_ptr()) }
    }

    pub fn get_boolean_array_element(&self, arr: jni::jbooleanArray, idx: jni::jsize) -> jni::jboolean {
        let mut v: jni::jboolean = 0;
        unsafe { jni_call!(self.env, GetBooleanArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_byte_array_element(&self, arr: jni::jbyteArray, idx: jni::jsize) -> jni::jbyte {
        let mut v: jni::jbyte = 0;
        unsafe { jni_call!(self.env, GetByteArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_char_array_element(&self, arr: jni::jcharArray, idx: jni::jsize) -> jni::jchar {
        let mut v: jni::jchar = 0;
        unsafe { jni_call!(self.env, GetCharArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_short_array_element(&self, arr: jni::jshortArray, idx: jni::jsize) -> jni::jshort {
        let mut v: jni::jshort = 0;
        unsafe { jni_call!(self.env, GetShortArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_int_array_element(&self, arr: jni::jintArray, idx: jni::jsize) -> jni::jint {
        let mut v: jni::jint = 0;
        unsafe { jni_call!(self.env, GetIntArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_long_array_element(&self, arr: jni::jlongArray, idx: jni::jsize) -> jni::jlong {
        let mut v: jni::jlong = 0;
        unsafe { jni_call!(self.env, GetLongArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_float_array_element(&self, arr: jni::jfloatArray, idx: jni::jsize) -> jni::jfloat {
        let mut v: jni::jfloat = 0.0;
        unsafe { jni_call!(self.env, GetFloatArrayRegion, arr, idx, 1, &mut v) };
        v
    }

    pub fn get_double_array_element(&self, arr: jni::jdoubleArray, idx: jni::jsize) -> jni::jdouble {
        let mut v: jni::jdouble = 0.0;
        unsafe { jni_call!(self.env, GetDoubleArrayRegion, arr, idx, 1, &mut v) };
        v
    }
}

/// RAII guard for a local reference: deletes it when dropped so tight call
/// loops don't exhaust the local reference table.
pub struct LocalRef<'a> {
    env: &'a JniEnv,
    obj: jni::jobject,
}

impl<'a> LocalRef<'a> {
    pub fn new(env: &'a JniEnv, obj: jni::jobject) -> Self {
        LocalRef { env, obj }
    }

    pub fn get(&self) -> jni::jobject {
        self.obj
    }

    /// Keeps the reference alive past the guard.
    pub fn into_inner(self) -> jni::jobject {
        let obj = self.obj;
        std::mem::forget(self);
        obj
    }
}

impl<'a> Drop for LocalRef<'a> {
    fn drop(&mut self) {
        if !self.obj.is_null() {
            self.env.delete_local_ref(self.obj);
        }
    }
}
