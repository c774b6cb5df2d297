#![allow(clippy::missing_safety_doc)] // Well, using C-pointers *is* unsafe...

extern crate static_vcruntime;

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr::null;

use ncfile::errors::Error;
use ncfile::{File, Mode};

/// Open an existing file read-only.
pub const MODE_READ: c_int = 0;
/// Open an existing file for reading and writing.
pub const MODE_WRITE: c_int = 1;
/// Create a file, destroying any prior file under the same path.
pub const MODE_REPLACE: c_int = 2;
/// Create a file, failing if it already exists.
pub const MODE_NEW_FILE: c_int = 3;

/// Error code reported if an argument passed to this library is invalid.
pub const ERROR_INVALID_ARGUMENT: c_int = -1;

struct Environment(*mut *mut Status);

impl From<*mut *mut Status> for Environment {
    fn from(value: *mut *mut Status) -> Self {
        Self(value)
    }
}

impl Environment {
    pub fn execute<C: FnOnce() -> Result<(), Box<Status>>>(self, body: C) -> c_int {
        match body() {
            Ok(()) => 1,
            Err(status) => {
                if !self.0.is_null() {
                    unsafe {
                        std::ptr::write(self.0, Box::into_raw(status));
                    }
                }
                0
            }
        }
    }

    pub fn parse_str<'a>(c_string: *const c_char) -> Result<&'a str, Box<Status>> {
        (!c_string.is_null())
            .then(|| unsafe { CStr::from_ptr(c_string) })
            .ok_or_else(|| Status::invalid_argument("Path not specified"))
            .and_then(|raw_str| {
                raw_str
                    .to_str()
                    .map_err(|_| Status::invalid_argument("Path contains invalid UTF8"))
            })
    }

    pub fn parse_mode(mode: c_int) -> Result<Mode, Box<Status>> {
        match mode {
            MODE_READ => Ok(Mode::Read),
            MODE_WRITE => Ok(Mode::Write),
            MODE_REPLACE => Ok(Mode::Replace),
            MODE_NEW_FILE => Ok(Mode::NewFile),
            _ => Err(Status::invalid_argument("Unknown mode")),
        }
    }

    pub fn destroy<T>(pointer: *mut T) {
        if pointer.is_null() {
            return;
        }
        unsafe {
            drop(Box::from_raw(pointer));
        }
    }
}

/// The status of a failed operation.
pub struct Status {
    message: CString,
    code: c_int,
}

impl Status {
    fn new<T: AsRef<str>>(description: T, code: c_int) -> Box<Status> {
        // C strings cannot carry NULL bytes.
        let message = CString::new(description.as_ref().replace('\0', "")).unwrap_or_default();
        Box::new(Status { message, code })
    }

    fn invalid_argument<T: AsRef<str>>(description: T) -> Box<Status> {
        Status::new(description, ERROR_INVALID_ARGUMENT)
    }

    fn from_error<E: Error>(error: E) -> Box<Status> {
        Status::new(error.error_message(), error.error_code())
    }
}

/// The handle to a data file.
pub struct FileHandle {
    file: File,
    path: Option<CString>,
}

/// Create a handle which is not connected to any file yet.
///
/// @return The handle. It must be freed with DestroyFileHandle.
#[no_mangle]
pub extern "C" fn NewFileHandle() -> *mut FileHandle {
    Box::into_raw(Box::new(FileHandle {
        file: File::new(),
        path: None,
    }))
}

/// Destroy a file handle, closing the file if it is still open.
///
/// @param file_handle The file handle. Passing nullptr is a safe no-op.
#[no_mangle]
pub unsafe extern "C" fn DestroyFileHandle(file_handle: *mut FileHandle) {
    Environment::destroy(file_handle)
}

/// Destroy a status.
///
/// @param status The status. Passing nullptr is a safe no-op.
#[no_mangle]
pub unsafe extern "C" fn DestroyStatus(status: *mut Status) {
    Environment::destroy(status)
}

/// Return the error message associated with a status.
///
/// @param status The status of interest.
///
/// @return A human-readable description of the failure.
#[no_mangle]
pub unsafe extern "C" fn GetMessage(status: *const Status) -> *const c_char {
    match status.as_ref() {
        Some(value) => value.message.as_ptr(),
        None => null(),
    }
}

/// Return the numeric error code associated with a status.
///
/// @param status The status of interest.
///
/// @return The error code or 0 if status is nullptr.
#[no_mangle]
pub unsafe extern "C" fn GetErrorCode(status: *const Status) -> c_int {
    match status.as_ref() {
        Some(value) => value.code,
        None => 0,
    }
}

/// Open a data file.
///
/// @param file_handle The handle. It must not be connected to another file.
///
/// @param path The path to the data file.
///
/// @param mode One of MODE_READ, MODE_WRITE, MODE_REPLACE or MODE_NEW_FILE.
///
/// @param status Contains the failure if and only if the return value is 0. Setting this value to nullptr is safe and will not save the failure.
///
/// @return 1 if the file was opened, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn OpenFile(
    file_handle: *mut FileHandle,
    path: *const c_char,
    mode: c_int,
    status: *mut *mut Status,
) -> c_int {
    Environment::from(status).execute(|| {
        let file_handle = file_handle
            .as_mut()
            .ok_or_else(|| Status::invalid_argument("File handle not specified"))?;
        let path = Environment::parse_str(path)?;
        let mode = Environment::parse_mode(mode)?;

        file_handle
            .file
            .open(path, mode)
            .map_err(Status::from_error)?;
        file_handle.path = CString::new(path).ok();
        Ok(())
    })
}

/// Return the path of an open data file.
///
/// @param file_handle The handle.
///
/// @return The path exactly as passed to OpenFile or nullptr if the handle is not open. It is valid until the handle is closed.
#[no_mangle]
pub unsafe extern "C" fn GetPath(file_handle: *const FileHandle) -> *const c_char {
    match file_handle.as_ref() {
        Some(FileHandle {
            path: Some(path), ..
        }) => path.as_ptr(),
        _ => null(),
    }
}

/// Check whether a handle is connected to a data file.
///
/// @param file_handle The handle.
///
/// @return 1 if the handle is open, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn IsOpen(file_handle: *const FileHandle) -> c_int {
    match file_handle.as_ref() {
        Some(file_handle) if file_handle.file.is_open() => 1,
        _ => 0,
    }
}

/// Close a data file. Closing a handle which is not open succeeds without doing anything.
///
/// @param file_handle The handle.
///
/// @param status Contains the failure if and only if the return value is 0. Setting this value to nullptr is safe and will not save the failure.
///
/// @return 1 if the handle is no longer open, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn CloseFile(file_handle: *mut FileHandle, status: *mut *mut Status) -> c_int {
    Environment::from(status).execute(|| {
        let file_handle = file_handle
            .as_mut()
            .ok_or_else(|| Status::invalid_argument("File handle not specified"))?;
        file_handle.file.close().map_err(Status::from_error)?;
        file_handle.path = None;
        Ok(())
    })
}
