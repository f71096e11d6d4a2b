use std::cell::Cell;
use std::rc::Rc;
use std::fmt::{self, Debug, Display, Formatter};
use crate::error::Result;
use crate::field_types::{Index, Length};
use crate::general::span::Span;

struct Storage {
    bytes: Box<[Cell<u8>]>,
    /// number of active PinnedViews
    pins: Cell<usize>,
}

/// Shared, fixed size byte storage that views point into.
///
/// Cloning a Buffer does not copy the bytes, it creates another handle to the same storage.
/// Every handle and every ByteView over the storage keeps it alive, it is freed when the last one is dropped.
/// The storage never changes its size, so its address is stable for its whole lifetime.
#[derive(Clone)]
pub struct Buffer {
    inner: Rc<Storage>,
}

impl Buffer {
    /// zero filled buffer
    pub fn new(len: Length) -> Buffer {
        Buffer::from(vec![0u8; len])
    }

    pub fn from_slice(bytes: &[u8]) -> Buffer {
        Buffer::from(bytes.to_vec())
    }

    pub fn len(&self) -> Length {
        self.inner.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: Index) -> Result<u8> {
        self.span().get(index)
    }

    pub fn set(&self, index: Index, val: u8) -> Result<()> {
        self.span().set(index, val)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.span().to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item=u8> + '_ {
        self.inner.bytes.iter().map(Cell::get)
    }

    /// span over the whole buffer
    pub fn span(&self) -> Span {
        Span::new(&self.inner.bytes)
    }

    /// number of handles (buffers, views and pins) keeping the storage alive
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// true if both handles refer to the same storage
    pub fn ptr_eq(&self, other: &Buffer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn pin_count(&self) -> usize {
        self.inner.pins.get()
    }

    pub fn is_pinned(&self) -> bool {
        self.pin_count() != 0
    }

    pub(crate) fn cells(&self) -> &[Cell<u8>] {
        &self.inner.bytes
    }

    pub(crate) fn acquire_pin(&self) {
        self.inner.pins.set(self.inner.pins.get() + 1);
    }

    pub(crate) fn release_pin(&self) {
        debug_assert!(self.inner.pins.get() > 0, "unbalanced pin release");
        self.inner.pins.set(self.inner.pins.get().saturating_sub(1));
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Buffer {
        Buffer {
            inner: Rc::new(Storage {
                bytes: bytes.into_iter().map(Cell::new).collect(),
                pins: Cell::new(0),
            })
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Buffer {
        Buffer::from_slice(bytes)
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.span(), f)
    }
}

impl Debug for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("bytes", &self.to_vec())
            .field("handles", &self.handle_count())
            .field("pins", &self.pin_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::general::buffer::Buffer;
    use crate::error::ErrorType;
    use hex_literal::hex;

    #[test]
    fn clones_share_storage() {
        let a = Buffer::from(hex!("0003").to_vec());
        let b = a.clone();
        b.set(0, 42).unwrap();
        assert_eq!(a.to_vec(), vec![42, 3]);
        assert!(a.ptr_eq(&b));
        assert_eq!(a.handle_count(), 2);
    }

    #[test]
    fn separate_buffers_do_not_alias() {
        let a = Buffer::from_slice(&[1, 2]);
        let b = Buffer::from_slice(&[1, 2]);
        a.set(1, 7).unwrap();
        assert_eq!(b.to_vec(), vec![1, 2]);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn out_of_range_access() {
        let buf = Buffer::new(2);
        assert!(matches!(buf.get(2), Err(ErrorType::IndexError { index: 2, length: 2 })));
        assert!(matches!(buf.set(5, 1), Err(ErrorType::IndexError { index: 5, length: 2 })));
        assert_eq!(buf.to_vec(), vec![0, 0]);
    }

    #[test]
    fn display() {
        let buf = Buffer::from(hex!("00020406").to_vec());
        assert_eq!(buf.to_string(), "0 2 4 6");
        assert_eq!(Buffer::new(0).to_string(), "");
    }
}
