use std::cell::Cell;
use std::fmt::{self, Display, Formatter};
use crate::error::{Result, ErrorType};
use crate::field_types::{Index, Length};
use crate::helper::range_helper::{compare_range, RangeCompare};

/// Zero-copy window into the bytes of a Buffer.
///
/// A Span never copies, every write lands directly in the backing storage and is
/// visible through all other views and handles over the same bytes.
/// Spans are `Copy`, so iterating one does not consume it.
#[derive(Clone, Copy)]
pub struct Span<'a> {
    cells: &'a [Cell<u8>],
}

impl<'a> Span<'a> {
    pub(crate) fn new(cells: &'a [Cell<u8>]) -> Span<'a> {
        Span {
            cells
        }
    }

    /// span without any bytes, every indexed access fails
    pub fn empty() -> Span<'a> {
        let bytes: &'a mut [u8] = Default::default();
        Span::new(Cell::from_mut(bytes).as_slice_of_cells())
    }

    pub fn len(&self) -> Length {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: Index) -> Result<u8> {
        Ok(self.cell(index)?.get())
    }

    pub fn set(&self, index: Index, val: u8) -> Result<()> {
        self.cell(index)?.set(val);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item=u8> + 'a {
        self.cells.iter().map(Cell::get)
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    pub fn fill(&self, val: u8) {
        for cell in self.cells {
            cell.set(val);
        }
    }

    /// fails with RangeError if the lengths differ
    pub fn copy_from_slice(&self, src: &[u8]) -> Result<()> {
        if src.len() != self.len() {
            return Err(ErrorType::RangeError {
                offset: 0,
                length: src.len(),
                size: self.len(),
            });
        }
        for (cell, val) in self.cells.iter().zip(src) {
            cell.set(*val);
        }
        Ok(())
    }

    /// address of the first byte
    pub(crate) fn as_ptr(&self) -> *mut u8 {
        // Cell<u8> has the same layout as u8 and permits writes through shared references
        self.cells.as_ptr() as *mut u8
    }

    fn cell(&self, index: Index) -> Result<&'a Cell<u8>> {
        match compare_range(&(0..self.len()), index) {
            RangeCompare::Contained => Ok(&self.cells[index]),
            _ => Err(ErrorType::IndexError {
                index,
                length: self.len(),
            }),
        }
    }
}

impl<'a> Display for Span<'a> {
    /// bytes as space separated decimal values
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", byte)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for Span<'a> {
    type Item = u8;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Cell<u8>>, fn(&Cell<u8>) -> u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter().map(Cell::get as fn(&Cell<u8>) -> u8)
    }
}
