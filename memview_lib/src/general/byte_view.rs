use std::fmt::{self, Display, Formatter};
use log::debug;
use crate::error::{Result, ErrorType};
use crate::field_types::{Index, Length, Offset};
use crate::general::buffer::Buffer;
use crate::general::span::Span;
use crate::general::pinned_view::{self, PinnedView};
use crate::helper::range_helper::checked_range;

#[derive(Clone)]
enum Binding {
    Empty,
    /// `offset + length <= backing.len()`
    Bound {
        backing: Buffer,
        offset: Offset,
        length: Length,
    },
}

/// Handle to a contiguous region of a Buffer, or to nothing.
///
/// A view holds a reference to its backing storage, so the bytes stay alive as long
/// as the view does, even if every other handle has been dropped.
/// Writes through a view are visible through every other view or Buffer handle
/// that overlaps the same bytes; there is no copy-on-write.
/// Reassigning a view never touches the bytes it pointed to before.
#[derive(Clone)]
pub struct ByteView {
    binding: Binding,
}

impl ByteView {
    /// view without backing buffer
    pub fn empty() -> ByteView {
        ByteView {
            binding: Binding::Empty
        }
    }

    /// view over the whole buffer, `None` results in an empty view
    pub fn from_buffer<'a, B: Into<Option<&'a Buffer>>>(buf: B) -> ByteView {
        match buf.into() {
            Some(buf) => {
                debug!("new view over buffer of {} bytes", buf.len());
                ByteView::bound(buf.clone(), 0, buf.len())
            }
            None => ByteView::empty(),
        }
    }

    /// view over `[offset, offset + length)` of the buffer
    ///
    /// if the range does not fit returns memview_lib::error::ErrorType::RangeError.
    /// `None` is only accepted with an empty range at offset 0.
    pub fn from_range<'a, B: Into<Option<&'a Buffer>>>(buf: B, offset: Offset, length: Length) -> Result<ByteView> {
        match buf.into() {
            Some(buf) => {
                checked_range(offset, length, buf.len())?;
                debug!("new view over [{}, {}) of buffer of {} bytes", offset, offset + length, buf.len());
                Ok(ByteView::bound(buf.clone(), offset, length))
            }
            None if offset == 0 && length == 0 => Ok(ByteView::empty()),
            None => Err(ErrorType::RangeError {
                offset,
                length,
                size: 0,
            }),
        }
    }

    fn bound(backing: Buffer, offset: Offset, length: Length) -> ByteView {
        ByteView {
            binding: Binding::Bound {
                backing,
                offset,
                length,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> Length {
        match &self.binding {
            Binding::Empty => 0,
            Binding::Bound { length, .. } => *length,
        }
    }

    /// offset into the backing buffer, 0 for views without backing buffer
    pub fn offset(&self) -> Offset {
        match &self.binding {
            Binding::Empty => 0,
            Binding::Bound { offset, .. } => *offset,
        }
    }

    pub fn backing(&self) -> Option<&Buffer> {
        match &self.binding {
            Binding::Empty => None,
            Binding::Bound { backing, .. } => Some(backing),
        }
    }

    pub fn element_at(&self, index: Index) -> Result<u8> {
        self.as_span().get(index)
    }

    pub fn set_element_at(&self, index: Index, val: u8) -> Result<()> {
        self.as_span().set(index, val)
    }

    /// zero-copy span over the viewed bytes
    pub fn as_span(&self) -> Span {
        match &self.binding {
            Binding::Empty => Span::empty(),
            Binding::Bound { backing, offset, length } => {
                Span::new(&backing.cells()[*offset..*offset + *length])
            }
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_span().to_vec()
    }

    /// view over `[start, start + length)` relative to this view
    pub fn slice(&self, start: Index, length: Length) -> Result<ByteView> {
        checked_range(start, length, self.len())?;
        Ok(match &self.binding {
            Binding::Empty => ByteView::empty(),
            Binding::Bound { backing, offset, .. } => {
                ByteView::bound(backing.clone(), offset + start, length)
            }
        })
    }

    /// true if both views share at least one byte of the same storage
    pub fn overlaps(&self, other: &ByteView) -> bool {
        match (&self.binding, &other.binding) {
            (
                Binding::Bound { backing: a, offset: a_offset, length: a_length },
                Binding::Bound { backing: b, offset: b_offset, length: b_length },
            ) => {
                a.ptr_eq(b)
                    && *a_length != 0
                    && *b_length != 0
                    && *a_offset < b_offset + b_length
                    && *b_offset < a_offset + a_length
            }
            _ => false,
        }
    }

    /// fix the address of the viewed bytes, see memview_lib::general::pinned_view::pin
    pub fn pin(&self) -> Result<PinnedView> {
        pinned_view::pin(self)
    }
}

impl Default for ByteView {
    fn default() -> Self {
        ByteView::empty()
    }
}

impl From<&Buffer> for ByteView {
    fn from(buf: &Buffer) -> Self {
        ByteView::from_buffer(buf)
    }
}

impl From<Buffer> for ByteView {
    fn from(buf: Buffer) -> Self {
        let length = buf.len();
        ByteView::bound(buf, 0, length)
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(bytes: Vec<u8>) -> Self {
        ByteView::from(Buffer::from(bytes))
    }
}

impl Display for ByteView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_span(), f)
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.binding {
            Binding::Empty => write!(f, "ByteView::Empty"),
            Binding::Bound { offset, length, .. } => f.debug_struct("ByteView")
                .field("offset", offset)
                .field("length", length)
                .field("bytes", &self.to_vec())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::general::byte_view::ByteView;
    use crate::general::buffer::Buffer;
    use crate::error::ErrorType;
    use hex_literal::hex;
    use rand::Rng;
    use test_case::test_case;

    #[test]
    fn empty_views() {
        assert!(ByteView::empty().is_empty());
        assert!(ByteView::default().is_empty());
        let view = ByteView::from_buffer(None);
        assert!(view.is_empty());
        assert!(view.backing().is_none());
        assert_eq!(view.to_vec(), Vec::<u8>::new());
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn bound_view_over_empty_buffer_is_empty() {
        let buf = Buffer::new(0);
        let view = ByteView::from_buffer(&buf);
        assert!(view.is_empty());
        assert!(view.backing().is_some());
    }

    #[test]
    fn write_through_empty_view_fails() {
        let view = ByteView::from_buffer(None);
        assert!(matches!(view.as_span().set(0, 1), Err(ErrorType::IndexError { index: 0, length: 0 })));
        assert!(matches!(view.element_at(0), Err(ErrorType::IndexError { .. })));
    }

    #[test]
    fn range_reads_through_to_buffer() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let size = rng.gen_range(0..32);
            let bytes: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
            let buf = Buffer::from_slice(&bytes);
            let offset = rng.gen_range(0..=size);
            let length = rng.gen_range(0..=size - offset);
            let view = ByteView::from_range(&buf, offset, length).unwrap();
            assert_eq!(view.len(), length);
            for i in 0..length {
                assert_eq!(view.element_at(i).unwrap(), bytes[offset + i]);
            }
            assert!(matches!(view.element_at(length), Err(ErrorType::IndexError { .. })));
        }
    }

    #[test]
    fn span_writes_are_visible_in_buffer() {
        let buf = Buffer::from(hex!("0a0b0c0d").to_vec());
        let view = ByteView::from_range(&buf, 1, 2).unwrap();
        view.as_span().set(1, 99).unwrap();
        assert_eq!(buf.to_vec(), vec![10, 11, 99, 13]);
        assert_eq!(view.element_at(1).unwrap(), 99);
    }

    #[test_case(2, 1, 2; "exceeds end")]
    #[test_case(2, 3, 0; "offset past end")]
    #[test_case(0, 0, 1; "empty buffer")]
    fn invalid_range(size: usize, offset: usize, length: usize) {
        let buf = Buffer::new(size);
        assert!(matches!(
            ByteView::from_range(&buf, offset, length),
            Err(ErrorType::RangeError { .. })
        ));
    }

    #[test]
    fn range_without_buffer() {
        assert!(ByteView::from_range(None, 0, 0).unwrap().is_empty());
        assert!(matches!(
            ByteView::from_range(None, 0, 1),
            Err(ErrorType::RangeError { offset: 0, length: 1, size: 0 })
        ));
        assert!(matches!(ByteView::from_range(None, 1, 0), Err(ErrorType::RangeError { .. })));
    }

    #[test]
    fn view_keeps_storage_alive() {
        let buf = Buffer::from(hex!("0003").to_vec());
        let view = ByteView::from_buffer(&buf);
        drop(buf);
        assert_eq!(view.to_vec(), vec![0, 3]);
        assert_eq!(view.backing().unwrap().handle_count(), 1);
        view.set_element_at(1, 7).unwrap();
        assert_eq!(view.to_vec(), vec![0, 7]);
    }

    #[test]
    fn full_view_write() {
        let buf = Buffer::from(hex!("0003").to_vec());
        let view = ByteView::from_buffer(&buf);
        view.as_span().set(0, 42).unwrap();
        assert_eq!(buf.to_vec(), vec![42, 3]);
        assert_eq!(view.to_vec(), vec![42, 3]);
    }

    #[test]
    fn sub_range_write() {
        let buf = Buffer::from(hex!("0503").to_vec());
        let view = ByteView::from_range(&buf, 1, 1).unwrap();
        assert_eq!(view.to_vec(), vec![3]);
        view.as_span().set(0, 12).unwrap();
        assert_eq!(buf.to_vec(), vec![5, 12]);
    }

    #[test]
    fn reassigning_does_not_touch_old_buffer() {
        let buf = Buffer::from_slice(&[1, 2]);
        let mut view = ByteView::from_buffer(&buf);
        let other = view.clone();
        view = ByteView::from(vec![9, 9, 9]);
        assert_eq!(buf.to_vec(), vec![1, 2]);
        assert_eq!(other.to_vec(), vec![1, 2]);
        assert_eq!(view.to_vec(), vec![9, 9, 9]);
        view = ByteView::empty();
        assert!(view.is_empty());
        assert_eq!(other.to_vec(), vec![1, 2]);
    }

    #[test]
    fn slice() {
        let buf = Buffer::from(hex!("00020406").to_vec());
        let view = ByteView::from_range(&buf, 1, 3).unwrap();
        let sliced = view.slice(1, 2).unwrap();
        assert_eq!(sliced.offset(), 2);
        assert_eq!(sliced.to_vec(), vec![4, 6]);
        sliced.set_element_at(0, 40).unwrap();
        assert_eq!(view.to_vec(), vec![2, 40, 6]);
        assert!(matches!(view.slice(2, 2), Err(ErrorType::RangeError { .. })));
        assert!(ByteView::empty().slice(0, 0).unwrap().is_empty());
    }

    #[test]
    fn overlaps() {
        let buf = Buffer::new(4);
        let a = ByteView::from_range(&buf, 0, 2).unwrap();
        let b = ByteView::from_range(&buf, 1, 2).unwrap();
        let c = ByteView::from_range(&buf, 2, 2).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&c));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&ByteView::from(vec![0u8; 4])));
        assert!(!a.overlaps(&ByteView::empty()));
    }

    #[test]
    fn aliasing_views_see_each_other() {
        let buf = Buffer::new(3);
        let a = ByteView::from_buffer(&buf);
        let b = ByteView::from_range(&buf, 2, 1).unwrap();
        a.set_element_at(2, 8).unwrap();
        assert_eq!(b.element_at(0).unwrap(), 8);
        b.set_element_at(0, 9).unwrap();
        assert_eq!(a.to_vec(), vec![0, 0, 9]);
        buf.set(2, 1).unwrap();
        assert_eq!(b.to_vec(), vec![1]);
    }
}
