use libc::{arc4random_buf, c_void};

// arc4random_buf cannot fail and never returns partial output.
pub(crate) fn sys_random(buf: &mut [u8]) {
    unsafe {
        arc4random_buf(buf.as_mut_ptr().cast::<c_void>(), buf.len());
    }
}
