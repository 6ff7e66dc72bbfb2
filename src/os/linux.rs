//! Operating system entropy layer (Linux)
//!
//! Draws random bytes from the kernel entropy pool through the
//! `getrandom` system call. The call can return fewer bytes than asked
//! for and can be interrupted by a signal; both cases are retried until
//! the whole buffer is filled.

use std::io;

use libc::{EINTR, c_void, getrandom};

/// Fills a buffer with random bytes from the kernel entropy pool.
///
/// # Panics
/// Panics if `getrandom` reports any error other than `EINTR`. A failing
/// kernel entropy source is unrecoverable in a randomness context.
pub(crate) fn sys_random(buf: &mut [u8]) {
    let mut filled = 0;

    while filled < buf.len() {
        let rest = &mut buf[filled..];
        let ret = unsafe { getrandom(rest.as_mut_ptr().cast::<c_void>(), rest.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }

            panic!("getrandom() failed: {err}");
        }

        filled += ret as usize;
    }
}
