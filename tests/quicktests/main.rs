//! Property tests over the public surface, one module per concern.

#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

use bintree::Kind;

mod conversion;
mod heap;
mod ordered;

/// An operation to apply to a tree and to its oracle.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the value
    Insert(i8),
    /// Remove one occurrence of the value
    Remove(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Remove(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// The ordered kinds, which fold duplicates and keep search order.
pub const ORDERED: [Kind; 3] = [Kind::Search, Kind::Avl, Kind::RedBlack];
