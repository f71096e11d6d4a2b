pub mod constants;
pub mod error;
pub mod field_types;
pub mod general;
pub mod helper;

pub use crate::general::buffer::Buffer;
pub use crate::general::byte_view::ByteView;
pub use crate::general::pinned_view::{pin, with_pinned, PinnedView};
pub use crate::general::span::Span;
