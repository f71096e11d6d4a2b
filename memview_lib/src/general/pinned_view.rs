use log::trace;
use crate::error::{Result, ErrorType};
use crate::field_types::Length;
use crate::general::buffer::Buffer;
use crate::general::byte_view::ByteView;
use crate::general::span::Span;

/// A ByteView whose bytes are fixed at a raw address until the PinnedView is dropped.
///
/// The pinned view holds its own reference to the backing storage, so the bytes can
/// neither move nor be freed while it exists. It is bound to the lifetime of the view
/// it was created from.
///
/// Dereferencing an address obtained from `raw_address` after the PinnedView has been
/// dropped is undefined behaviour. This is not detected, callers must not keep the
/// address around.
/// The pin does not lock anything: writes through other views stay possible and are
/// visible through the address.
pub struct PinnedView<'a> {
    source: &'a ByteView,
    backing: Buffer,
    base: *mut u8,
    length: Length,
}

/// Pin the bytes of a view.
///
/// Returns memview_lib::error::ErrorType::UnsupportedError for empty views, there is no
/// storage to fix in that case. The pin is released when the returned value is dropped.
pub fn pin(view: &ByteView) -> Result<PinnedView> {
    let backing = match view.backing() {
        Some(backing) if !view.is_empty() => backing.clone(),
        _ => return Err(ErrorType::UnsupportedError("cannot pin an empty view".to_string())),
    };
    backing.acquire_pin();
    trace!("pinned {} bytes at offset {} ({} active pins)", view.len(), view.offset(), backing.pin_count());
    Ok(PinnedView {
        source: view,
        base: view.as_span().as_ptr(),
        length: view.len(),
        backing,
    })
}

/// Run `f` with the view pinned; the pin is released on every exit path of `f`.
pub fn with_pinned<R, F>(view: &ByteView, f: F) -> Result<R>
    where F: FnOnce(&PinnedView) -> Result<R>
{
    let pinned = pin(view)?;
    f(&pinned)
}

impl<'a> PinnedView<'a> {
    /// address of the first byte of the view
    ///
    /// valid for reads and writes of `len()` bytes while this PinnedView is alive
    pub fn raw_address(&self) -> *mut u8 {
        self.base
    }

    pub fn len(&self) -> Length {
        self.length
    }

    /// always false, empty views cannot be pinned
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn source_view(&self) -> &'a ByteView {
        self.source
    }

    /// the pinned bytes as span, aliases the raw address
    pub fn span(&self) -> Span<'a> {
        self.source.as_span()
    }
}

impl<'a> Drop for PinnedView<'a> {
    fn drop(&mut self) {
        self.backing.release_pin();
        trace!("unpinned {} bytes ({} active pins)", self.length, self.backing.pin_count());
    }
}
