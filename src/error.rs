//! Error taxonomy for the call bridge.
//!
//! Every per-call failure is reported as a value so callers can inspect it
//! and keep going. The only fatal paths in the crate are VM bring-up (no
//! call can ever succeed without a VM) and dispatch before bring-up (a
//! programming-contract violation).

use std::fmt;

use crate::sys::jni;

/// Outcome of one dispatched call: the unwrapped result value, or a
/// description of why the call did not produce one.
pub type CallResult = Result<crate::value::JvmValue, BridgeError>;

/// Why a bridge operation failed.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// The signature text violates the descriptor grammar.
    MalformedSignature { sig: String, detail: String },
    /// Class, method or field resolution failed.
    MemberNotFound(String),
    /// The text codec hit a byte sequence that is not valid UTF-8.
    InvalidEncoding { offset: usize, byte: u8 },
    /// The invoked code raised an exception in the JVM; the exception has
    /// been cleared and its message captured here.
    JavaException(String),
    /// Attaching the calling thread to the VM failed.
    Attach(jni::jint),
    /// A null receiver or null argument where the operation needs an object.
    NullReference(&'static str),
    /// The argument buffer does not match the arity of the signature.
    ArityMismatch { expected: usize, got: usize },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::MalformedSignature { sig, detail } => {
                write!(f, "malformed signature {sig:?}: {detail}")
            }
            BridgeError::MemberNotFound(what) => write!(f, "member not found: {what}"),
            BridgeError::InvalidEncoding { offset, byte } => {
                write!(f, "invalid UTF-8 byte {byte:#04x} at offset {offset}")
            }
            BridgeError::JavaException(msg) => write!(f, "java exception: {msg}"),
            BridgeError::Attach(code) => write!(f, "failed to attach thread to JVM: {code}"),
            BridgeError::NullReference(what) => write!(f, "null reference: {what}"),
            BridgeError::ArityMismatch { expected, got } => {
                write!(f, "signature expects {expected} argument(s), got {got}")
            }
        }
    }
}

impl std::error::Error for BridgeError {}
