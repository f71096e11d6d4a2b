/// label printed in front of the bytes of a view
pub const VIEW_LABEL: &str = "Memory: ";

/// label printed in front of the bytes of a buffer accessed directly
pub const BUFFER_LABEL: &str = "Bytes: ";

/// label printed in front of bytes read through a pinned raw address
pub const POINTER_LABEL: &str = "Pointer: ";

pub const EMPTY_VIEW_MESSAGE: &str = "Memory is empty";

pub const RELEASED_BUFFER_MESSAGE: &str = "The byte array is null";
