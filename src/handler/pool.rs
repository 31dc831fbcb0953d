//! Reusable render buffers.
//!
//! Every record is rendered into a buffer drawn from a shared free list and
//! handed back afterwards, so steady-state logging allocates nothing for the
//! line itself. Buffers that grew past the ceiling are dropped instead of
//! returned, so one huge record can't pin its allocation in the pool.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Capacity of a freshly allocated buffer.
pub const INITIAL_CAPACITY: usize = 1024;

/// Largest capacity a buffer may have and still be returned to the pool.
pub const MAX_POOLED_CAPACITY: usize = 16 << 10;

/// The pool shared by every handler in the process.
pub(crate) static POOL: BufferPool = BufferPool::new(MAX_POOLED_CAPACITY);

/// A free list of `String` buffers. Any free buffer serves any caller.
#[derive(Debug)]
pub struct BufferPool {
    free: Mutex<Vec<String>>,
    max_capacity: usize,
}

impl BufferPool {
    #[must_use]
    pub const fn new(max_capacity: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            max_capacity,
        }
    }

    /// Takes a cleared buffer from the pool, allocating one if none is free.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buf = self
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_else(|| String::with_capacity(INITIAL_CAPACITY));
        PooledBuffer { pool: self, buf }
    }

    /// Number of buffers currently waiting for reuse.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, mut buf: String) {
        if buf.capacity() > self.max_capacity {
            return;
        }
        buf.clear();
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(buf);
    }
}

/// A buffer on loan from a [`BufferPool`]; returned when dropped.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buf: String,
}

impl Deref for PooledBuffer<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_come_back_cleared() {
        let pool = BufferPool::new(MAX_POOLED_CAPACITY);
        {
            let mut buf = pool.acquire();
            buf.push_str("hello");
        }
        assert_eq!(pool.idle(), 1);
        let buf = pool.acquire();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= INITIAL_CAPACITY);
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn oversized_buffers_are_not_retained() {
        let pool = BufferPool::new(MAX_POOLED_CAPACITY);
        {
            let mut buf = pool.acquire();
            buf.reserve(MAX_POOLED_CAPACITY * 2);
        }
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn concurrent_loans_get_distinct_buffers() {
        let pool = BufferPool::new(MAX_POOLED_CAPACITY);
        let mut a = pool.acquire();
        let mut b = pool.acquire();
        a.push('a');
        b.push('b');
        assert_eq!(a.as_str(), "a");
        assert_eq!(b.as_str(), "b");
        drop(a);
        drop(b);
        assert_eq!(pool.idle(), 2);
    }

    #[test]
    fn poisoned_free_list_keeps_working() {
        let pool = BufferPool::new(MAX_POOLED_CAPACITY);
        drop(pool.acquire());

        let poisoned = std::panic::catch_unwind(|| {
            let _guard = pool.free.lock().unwrap();
            panic!("holder died");
        });
        assert!(poisoned.is_err());
        assert!(pool.free.is_poisoned());

        assert_eq!(pool.idle(), 1);
        let mut buf = pool.acquire();
        buf.push('x');
        drop(buf);
        assert_eq!(pool.idle(), 1);
    }
}
