/// index of a byte inside the backing buffer
pub type Offset = usize;

/// number of bytes covered by a view
pub type Length = usize;

/// index of a byte relative to the start of a view
pub type Index = usize;
