//! Per-traversal visited flags indexed by vertex slot.

use crate::vertex::VertexIndex;

#[cfg(feature = "bitvec")]
use bitvec::vec::BitVec;

/// A fixed-size set of vertex slots.  Traversals allocate one per call and
/// drop it on return.
#[derive(Clone, Debug)]
pub(crate) struct Marks {
    #[cfg(feature = "bitvec")]
    bits: BitVec,
    #[cfg(not(feature = "bitvec"))]
    bits: Vec<bool>,
    count: usize,
}

impl Marks {
    pub fn new(len: usize) -> Self {
        Self {
            #[cfg(feature = "bitvec")]
            bits: BitVec::repeat(false, len),
            #[cfg(not(feature = "bitvec"))]
            bits: vec![false; len],
            count: 0,
        }
    }

    pub fn contains(&self, index: VertexIndex) -> bool {
        self.bits[index.0]
    }

    /// Marks `index`, returning true if it was not marked before.
    pub fn insert(&mut self, index: VertexIndex) -> bool {
        if self.bits[index.0] {
            return false;
        }
        self.bits.set(index.0, true);
        self.count += 1;
        true
    }

    pub fn is_full(&self) -> bool {
        self.count == self.bits.len()
    }
}

#[cfg(not(feature = "bitvec"))]
trait SetBit {
    fn set(&mut self, index: usize, value: bool);
}

#[cfg(not(feature = "bitvec"))]
impl SetBit for Vec<bool> {
    fn set(&mut self, index: usize, value: bool) {
        self[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_new_marks() {
        let mut marks = Marks::new(4);
        assert!(marks.insert(VertexIndex(2)));
        assert!(!marks.insert(VertexIndex(2)));
        assert!(marks.contains(VertexIndex(2)));
        assert!(!marks.contains(VertexIndex(0)));
    }

    #[test]
    fn test_full_once_every_slot_is_marked() {
        let mut marks = Marks::new(3);
        marks.insert(VertexIndex(1));
        marks.insert(VertexIndex(1));
        assert!(!marks.is_full());
        marks.insert(VertexIndex(0));
        marks.insert(VertexIndex(2));
        assert!(marks.is_full());
        assert!(Marks::new(0).is_full());
    }
}
