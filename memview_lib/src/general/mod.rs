pub mod buffer;
pub mod span;
pub mod byte_view;
pub mod pinned_view;
