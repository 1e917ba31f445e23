//! Terminal size queries.
//!
//! # Safety
//! This module uses unsafe code for the `TIOCGWINSZ` ioctl. It only reads
//! into a zeroed `winsize` owned by the caller.

#![allow(unsafe_code)]
#![allow(clippy::borrow_as_ptr)]

use std::io;

/// Get the terminal size of stdout as `(columns, rows)`.
///
/// Returns an error if stdout is not a terminal or if the reported
/// dimensions are zero.
#[cfg(unix)]
pub fn terminal_size() -> io::Result<(u16, u16)> {
    let mut size: libc::winsize = unsafe { std::mem::zeroed() };

    // SAFETY: ioctl with TIOCGWINSZ is safe when passed a valid winsize struct
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };

    if result == -1 {
        Err(io::Error::last_os_error())
    } else if size.ws_col == 0 || size.ws_row == 0 {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported zero dimensions",
        ))
    } else {
        Ok((size.ws_col, size.ws_row))
    }
}

/// Get the terminal size of stdout as `(columns, rows)`.
#[cfg(not(unix))]
pub fn terminal_size() -> io::Result<(u16, u16)> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "terminal size query not supported on this platform",
    ))
}
