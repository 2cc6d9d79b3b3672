use std::ops::{Deref, DerefMut};

/// Owner of a pointer allocated by sqlite, released with `dealloc` when dropped.
pub(crate) struct CBox<T> {
    ptr: *mut T,
    dealloc: fn(*mut T),
}

impl<T> CBox<T> {
    pub(crate) fn new(ptr: *mut T, dealloc: fn(*mut T)) -> Self {
        Self { ptr, dealloc }
    }
}

impl<T> Drop for CBox<T> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            (self.dealloc)(self.ptr);
        }
    }
}

impl<T> Deref for CBox<T> {
    type Target = *mut T;

    fn deref(&self) -> &Self::Target {
        &self.ptr
    }
}

impl<T> DerefMut for CBox<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ptr
    }
}

// Connections are opened in serialized mode, sqlite guards every access.
unsafe impl<T> Send for CBox<T> {}
unsafe impl<T> Sync for CBox<T> {}
