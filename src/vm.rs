//! JVM lifecycle and per-thread attachment.
//!
//! One JVM per process: [`create_runtime`] brings it up exactly once and
//! [`destroy_runtime`] tears it down at shutdown. In between, any native
//! thread may issue bridge calls; the first call from a thread attaches it
//! lazily and caches the environment pointer in a thread-local, and a drop
//! guard detaches the thread again when it exits (threads the JVM already
//! knows about, like the one that created it, are left alone).
//!
//! `libjvm` is loaded dynamically. Discovery order: `JVM_LIB_PATH` if set,
//! otherwise the usual locations under `JAVA_HOME`.

use std::cell::RefCell;
use std::ffi::{CString, NulError};
use std::path::{Path, PathBuf};
use std::ptr;
use std::sync::OnceLock;

use crate::env::JniEnv;
use crate::error::BridgeError;
use crate::jvm_call;
use crate::sys::jni;

/// Errors from locating, loading or starting the JVM.
#[derive(Debug)]
pub enum VmError {
    Nul(NulError),
    Load(String),
    Jni(jni::jint),
    Locate(String),
    AlreadyCreated,
}

impl std::fmt::Display for VmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VmError::Nul(e) => write!(f, "invalid option (NUL byte): {e}"),
            VmError::Load(e) => write!(f, "failed to load libjvm: {e}"),
            VmError::Jni(code) => write!(f, "JNI_CreateJavaVM failed: {code}"),
            VmError::Locate(msg) => write!(f, "{msg}"),
            VmError::AlreadyCreated => write!(f, "the JVM was already created in this process"),
        }
    }
}

impl std::error::Error for VmError {}

impl From<NulError> for VmError {
    fn from(value: NulError) -> Self {
        VmError::Nul(value)
    }
}

// ---------------------------------------------------------------------------
// libjvm discovery
// ---------------------------------------------------------------------------

fn libjvm_filename() -> &'static str {
    #[cfg(target_os = "windows")]
    {
        "jvm.dll"
    }
    #[cfg(target_os = "macos")]
    {
        "libjvm.dylib"
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        "libjvm.so"
    }
}

fn candidates_from_java_home(java_home: &Path) -> Vec<PathBuf> {
    let filename = libjvm_filename();
    let arch = std::env::consts::ARCH;

    let mut rels = vec![
        format!("lib/server/{filename}"),
        format!("jre/lib/server/{filename}"),
        format!("lib/{arch}/server/{filename}"),
        format!("jre/lib/{arch}/server/{filename}"),
    ];

    if cfg!(target_os = "windows") {
        rels.push(format!("bin/server/{filename}"));
        rels.push(format!("jre/bin/server/{filename}"));
        rels.push(format!("bin/client/{filename}"));
        rels.push(format!("jre/bin/client/{filename}"));
    }

    rels.into_iter().map(|r| java_home.join(r)).collect()
}

/// Locates `libjvm` via `JVM_LIB_PATH` or `JAVA_HOME`.
pub fn find_libjvm() -> Result<PathBuf, VmError> {
    if let Some(path) = std::env::var_os("JVM_LIB_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
        return Err(VmError::Locate(format!(
            "JVM_LIB_PATH is set but does not exist: {}",
            path.display()
        )));
    }

    if let Some(java_home) = std::env::var_os("JAVA_HOME") {
        let java_home = PathBuf::from(java_home);
        for candidate in candidates_from_java_home(&java_home) {
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        return Err(VmError::Locate(format!(
            "could not find {} under JAVA_HOME={}; set JVM_LIB_PATH explicitly",
            libjvm_filename(),
            java_home.display()
        )));
    }

    Err(VmError::Locate(
        "JAVA_HOME is not set; set JAVA_HOME or JVM_LIB_PATH to locate libjvm".to_string(),
    ))
}

// ---------------------------------------------------------------------------
// VM creation
// ---------------------------------------------------------------------------

/// Builder for the process-wide JVM.
pub struct JavaVmBuilder {
    version: jni::jint,
    options: Vec<CString>,
    ignore_unrecognized: bool,
}

impl JavaVmBuilder {
    pub fn new(version: jni::jint) -> Self {
        Self {
            version,
            options: Vec::new(),
            ignore_unrecognized: false,
        }
    }

    /// Adds a JVM option like `-Xmx1g` or `-Dkey=value`.
    pub fn option(mut self, opt: &str) -> Result<Self, NulError> {
        self.options.push(CString::new(opt)?);
        Ok(self)
    }

    pub fn options<I, S>(mut self, opts: I) -> Result<Self, NulError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for opt in opts {
            self.options.push(CString::new(opt.as_ref())?);
        }
        Ok(self)
    }

    pub fn ignore_unrecognized(mut self, value: bool) -> Self {
        self.ignore_unrecognized = value;
        self
    }

    fn build_args(&mut self) -> (jni::JavaVMInitArgs, Vec<jni::JavaVMOption>) {
        let mut opt_structs: Vec<jni::JavaVMOption> = self
            .options
            .iter_mut()
            .map(|s| jni::JavaVMOption {
                optionString: s.as_ptr() as *mut std::os::raw::c_char,
                extraInfo: ptr::null_mut(),
            })
            .collect();

        let args = jni::JavaVMInitArgs {
            version: self.version,
            nOptions: opt_structs.len() as jni::jint,
            options: if opt_structs.is_empty() {
                ptr::null_mut()
            } else {
                opt_structs.as_mut_ptr()
            },
            ignoreUnrecognized: if self.ignore_unrecognized { 1 } else { 0 },
        };

        (args, opt_structs)
    }

    /// Starts a JVM through a raw `JNI_CreateJavaVM` pointer.
    ///
    /// # Safety
    /// `create` must be valid and libjvm must stay loaded for the lifetime
    /// of the returned runtime.
    pub unsafe fn create_with(self, create: jni::JNI_CreateJavaVM) -> Result<JvmRuntime, jni::jint> {
        let mut this = self;
        let (mut args, _opt_structs) = this.build_args();

        let mut vm: *mut jni::JavaVM = ptr::null_mut();
        let mut env: *mut jni::JNIEnv = ptr::null_mut();

        let res = create(&mut vm, &mut env, &mut args);
        if res != jni::JNI_OK {
            return Err(res);
        }
        if vm.is_null() || env.is_null() {
            return Err(jni::JNI_ERR);
        }

        Ok(JvmRuntime { vm, _lib: None })
    }

    /// Starts a JVM by loading `libjvm` from the given path.
    pub fn create_from_library<P: AsRef<Path>>(self, path: P) -> Result<JvmRuntime, VmError> {
        log::info!("loading libjvm from {}", path.as_ref().display());
        let lib = unsafe {
            libloading::Library::new(path.as_ref()).map_err(|e| VmError::Load(e.to_string()))?
        };

        let create: libloading::Symbol<jni::JNI_CreateJavaVM> = unsafe {
            lib.get(b"JNI_CreateJavaVM\0")
                .map_err(|e| VmError::Load(e.to_string()))?
        };

        let runtime = unsafe { self.create_with(*create).map_err(VmError::Jni)? };
        Ok(JvmRuntime {
            _lib: Some(lib),
            ..runtime
        })
    }

    /// Starts a JVM, locating `libjvm` via `JVM_LIB_PATH` or `JAVA_HOME`.
    pub fn create(self) -> Result<JvmRuntime, VmError> {
        let path = find_libjvm()?;
        self.create_from_library(path)
    }
}

// ---------------------------------------------------------------------------
// Process-wide runtime state
// ---------------------------------------------------------------------------

/// The process-wide JVM handle.
///
/// Created once, then read-only; the invoke-interface pointer is stable for
/// the life of the VM, so sharing it across threads without a lock is sound.
pub struct JvmRuntime {
    vm: *mut jni::JavaVM,
    _lib: Option<libloading::Library>,
}

unsafe impl Send for JvmRuntime {}
unsafe impl Sync for JvmRuntime {}

impl JvmRuntime {
    pub fn vm_ptr(&self) -> *mut jni::JavaVM {
        self.vm
    }
}

static RUNTIME: OnceLock<JvmRuntime> = OnceLock::new();

/// Brings up the process-wide JVM. Fallible variant of [`create_runtime`],
/// mainly so tests and embedders can observe failure instead of dying.
///
/// `options` is split on ASCII whitespace; each piece becomes one JVM
/// option (`"-Xmx256m -Djava.class.path=app.jar"`).
pub fn try_create_runtime(options: &str) -> Result<(), VmError> {
    let mut builder = JavaVmBuilder::new(jni::JNI_VERSION_1_8);
    for opt in options.split_ascii_whitespace() {
        builder = builder.option(opt)?;
    }
    let runtime = builder.create()?;
    RUNTIME.set(runtime).map_err(|_| VmError::AlreadyCreated)?;
    log::info!("JVM started (options: {options:?})");
    Ok(())
}

/// Brings up the process-wide JVM, once, at application start.
///
/// No call can ever succeed without a running VM, so failure here is fatal:
/// the error is printed and the process exits.
pub fn create_runtime(options: &str) {
    if let Err(e) = try_create_runtime(options) {
        log::error!("JVM bring-up failed: {e}");
        eprintln!("fatal: JVM bring-up failed: {e}");
        std::process::exit(1);
    }
}

/// Shuts the JVM down. After this returns, no further bridge call may be
/// made by any thread; the crate does not guard against it.
pub fn destroy_runtime() {
    if let Some(runtime) = RUNTIME.get() {
        log::info!("destroying JVM");
        unsafe {
            let _ = jvm_call!(runtime.vm, DestroyJavaVM);
        }
    }
}

fn runtime() -> &'static JvmRuntime {
    RUNTIME.get().unwrap_or_else(|| {
        panic!("jcall contract violation: foreign call issued before create_runtime()")
    })
}

// ---------------------------------------------------------------------------
// Per-thread attachment
// ---------------------------------------------------------------------------

struct ThreadAttachment {
    env: *mut jni::JNIEnv,
    // True when this crate attached the thread (as opposed to a thread the
    // JVM already knew, e.g. the creator). Only those are detached on exit.
    attached_by_us: bool,
}

impl Drop for ThreadAttachment {
    fn drop(&mut self) {
        if self.attached_by_us {
            log::debug!("detaching thread from JVM");
            unsafe {
                let _ = jvm_call!(runtime().vm, DetachCurrentThread);
            }
        }
    }
}

thread_local! {
    static ATTACHMENT: RefCell<Option<ThreadAttachment>> = const { RefCell::new(None) };
}

fn attach_current_thread() -> Result<ThreadAttachment, BridgeError> {
    let vm = runtime().vm;
    let mut env_ptr: *mut std::ffi::c_void = ptr::null_mut();

    // Threads the VM already knows (the creator, Java-born threads calling
    // back in) are picked up via GetEnv and must not be detached by us.
    let res = unsafe { jvm_call!(vm, GetEnv, &mut env_ptr, jni::JNI_VERSION_1_8) };
    if res == jni::JNI_OK && !env_ptr.is_null() {
        return Ok(ThreadAttachment {
            env: env_ptr as *mut jni::JNIEnv,
            attached_by_us: false,
        });
    }
    if res != jni::JNI_EDETACHED {
        return Err(BridgeError::Attach(res));
    }

    let res = unsafe { jvm_call!(vm, AttachCurrentThread, &mut env_ptr, ptr::null_mut()) };
    if res != jni::JNI_OK || env_ptr.is_null() {
        return Err(BridgeError::Attach(res));
    }
    log::debug!("attached thread to JVM");
    Ok(ThreadAttachment {
        env: env_ptr as *mut jni::JNIEnv,
        attached_by_us: true,
    })
}

/// Runs `f` with this thread's JNI environment, attaching the thread to the
/// VM first if this is its first bridge call.
///
/// Panics if called before [`create_runtime`]; that is a programming
/// error, not a runtime condition.
pub fn with_env<R>(f: impl FnOnce(&JniEnv) -> R) -> Result<R, BridgeError> {
    // The borrow is released before `f` runs so bridge operations may nest
    // on the same thread.
    let env_ptr = ATTACHMENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(attach_current_thread()?);
        }
        Ok::<_, BridgeError>(slot.as_ref().unwrap().env)
    })?;
    let env = unsafe { JniEnv::from_raw(env_ptr) };
    Ok(f(&env))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_paths_cover_modern_and_legacy_layouts() {
        let paths = candidates_from_java_home(Path::new("/opt/jdk"));
        let rendered: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        assert!(rendered.iter().any(|p| p.contains("lib/server")));
        assert!(rendered.iter().any(|p| p.contains("jre/lib/server")));
    }

    #[test]
    fn builder_collects_options() {
        let mut builder = JavaVmBuilder::new(jni::JNI_VERSION_1_8)
            .option("-Xmx64m")
            .unwrap()
            .option("-Dfoo=bar")
            .unwrap();
        let (args, opts) = builder.build_args();
        assert_eq!(args.nOptions, 2);
        assert_eq!(opts.len(), 2);
    }

    #[test]
    fn option_with_nul_is_rejected() {
        let res = JavaVmBuilder::new(jni::JNI_VERSION_1_8).option("bad\0opt");
        assert!(res.is_err());
    }
}
