//! C FFI surface for mediatier.
//!
//! Pattern: opaque ClassifierHandle + C strings + JSON serialization.
//!
//! Indexing pipelines written in any language with a C FFI (Java via
//! JNI/Panama, Python, Node.js) hand over a record as JSON and get the
//! tier label or the full classification back.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use mediatier_core::{MediaClassifier, RdfWrapper, Record, Settings};

// ---------------------------------------------------------------------------
// Error handling (thread-local last error)
// ---------------------------------------------------------------------------

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

fn set_error(msg: String) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(msg));
}

fn clear_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Returns the last error message (caller frees with `mediatier_string_free`).
#[no_mangle]
pub extern "C" fn mediatier_last_error() -> *mut c_char {
    LAST_ERROR.with(|cell| {
        cell.borrow_mut()
            .take()
            .and_then(|s| CString::new(s).ok())
            .map(|s| s.into_raw())
            .unwrap_or(ptr::null_mut())
    })
}

/// Frees a string returned from mediatier FFI.
///
/// # Safety
/// Must be a pointer returned from this FFI and not already freed.
#[no_mangle]
pub unsafe extern "C" fn mediatier_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

// ---------------------------------------------------------------------------
// Opaque handle
// ---------------------------------------------------------------------------

#[repr(C)]
pub struct ClassifierHandle {
    _private: [u8; 0],
}

struct ClassifierHandleInner {
    classifier: MediaClassifier,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Opens a classifier. `settings_json` may be NULL for the default settings.
/// Returns an opaque handle, or NULL on invalid settings.
///
/// # Safety
/// `settings_json` must be NULL or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn mediatier_open(settings_json: *const c_char) -> *mut ClassifierHandle {
    clear_error();
    let settings = if settings_json.is_null() {
        Settings::default()
    } else {
        let json = match read_cstr(settings_json) {
            Ok(s) => s,
            Err(e) => return err_handle(e),
        };
        match Settings::from_json(&json) {
            Ok(settings) => settings,
            Err(e) => return err_handle(e.to_string()),
        }
    };

    let inner = ClassifierHandleInner {
        classifier: MediaClassifier::new(&settings),
    };
    Box::into_raw(Box::new(inner)) as *mut ClassifierHandle
}

/// Closes the classifier and releases its resources.
#[no_mangle]
pub extern "C" fn mediatier_close(handle: *mut ClassifierHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle as *mut ClassifierHandleInner));
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a record given as JSON. Returns the tier label ("MIN", "T0",
/// "T1", "T2", "T4") (caller frees), or NULL on error.
#[no_mangle]
pub extern "C" fn mediatier_classify(
    handle: *mut ClassifierHandle,
    record_json: *const c_char,
) -> *mut c_char {
    clear_error();
    let classifier = match classifier_ref(handle) {
        Ok(c) => c,
        Err(e) => return err_null(e),
    };
    let record = match read_record(record_json) {
        Ok(r) => r,
        Err(e) => return err_null(e),
    };
    to_cstr(classifier.classify_record(&record).to_string())
}

/// Classify a record given as JSON. Returns the classification with its
/// per-resource breakdown as JSON (caller frees), or NULL on error.
#[no_mangle]
pub extern "C" fn mediatier_breakdown(
    handle: *mut ClassifierHandle,
    record_json: *const c_char,
) -> *mut c_char {
    clear_error();
    let classifier = match classifier_ref(handle) {
        Ok(c) => c,
        Err(e) => return err_null(e),
    };
    let record = match read_record(record_json) {
        Ok(r) => r,
        Err(e) => return err_null(e),
    };
    json_to_cstr(&classifier.classify_with_breakdown(&RdfWrapper::new(&record)))
}

/// ABI version of this library.
#[no_mangle]
pub extern "C" fn mediatier_version() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn classifier_ref<'a>(handle: *mut ClassifierHandle) -> Result<&'a MediaClassifier, String> {
    if handle.is_null() {
        return Err("null classifier handle".into());
    }
    let inner = unsafe { &*(handle as *mut ClassifierHandleInner) };
    Ok(&inner.classifier)
}

fn read_cstr(ptr: *const c_char) -> Result<String, String> {
    if ptr.is_null() {
        return Err("null string pointer".into());
    }
    unsafe {
        CStr::from_ptr(ptr)
            .to_str()
            .map(String::from)
            .map_err(|_| "invalid utf-8".into())
    }
}

fn read_record(ptr: *const c_char) -> Result<Record, String> {
    let json = read_cstr(ptr)?;
    Record::from_json(&json).map_err(|e| e.to_string())
}

fn json_to_cstr<T: serde::Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => to_cstr(json),
        Err(e) => err_null(e.to_string()),
    }
}

fn to_cstr(s: String) -> *mut c_char {
    CString::new(s)
        .map(|c| c.into_raw())
        .unwrap_or(ptr::null_mut())
}

fn err_null(msg: String) -> *mut c_char {
    set_error(msg);
    ptr::null_mut()
}

fn err_handle(msg: String) -> *mut ClassifierHandle {
    set_error(msg);
    ptr::null_mut()
}

// ---------------------------------------------------------------------------
// FFI Integration Tests
// ---------------------------------------------------------------------------
