use log::debug;
use z3::{
    ast::{Array, BV},
    Context, Sort,
};

use crate::memory::{index_bits, Memory};

/// Memory of `SIZE` slots, `WIDTH` bits each, kept as a Z3 array term.
///
/// Every write replaces `array` with a store on top of it. Terms returned by
/// earlier reads keep pointing at the array they were taken from.
pub struct SymbolicMemory<'ctx, const SIZE: usize, const WIDTH: u32> {
    context: &'ctx Context,
    array: Array<'ctx>,
}

impl<'ctx, const SIZE: usize, const WIDTH: u32> SymbolicMemory<'ctx, SIZE, WIDTH> {
    const DIMENSIONS: () = assert!(
        SIZE >= 1 && WIDTH >= 1 && WIDTH <= 64,
        "memory needs at least one slot and a width of 1..=64 bits"
    );

    pub const INDEX_BITS: u32 = index_bits(SIZE);

    pub fn new(context: &'ctx Context) -> Self {
        let () = Self::DIMENSIONS;

        let sort_idx = Sort::bitvector(context, Self::INDEX_BITS);
        let sort_val = Sort::bitvector(context, WIDTH);
        let zero = BV::from_u64(context, 0, WIDTH);
        let mut array = Array::new_const(context, "array", &sort_idx, &sort_val);
        for i in 0..SIZE as u64 {
            let idx = BV::from_u64(context, i, Self::INDEX_BITS);
            array = array.store(&idx, &zero);
        }
        debug!(
            "symbolic memory: {} slots, {}-bit index, {}-bit values",
            SIZE,
            Self::INDEX_BITS,
            WIDTH
        );

        SymbolicMemory { context, array }
    }

    /// A fresh unconstrained index term; reads and writes accept it like a
    /// literal index.
    pub fn symbolic_index(&self, name: &str) -> BV<'ctx> {
        BV::new_const(self.context, name, Self::INDEX_BITS)
    }

    pub fn current(&self) -> &Array<'ctx> {
        &self.array
    }
}

impl<'ctx, const SIZE: usize, const WIDTH: u32> Memory for SymbolicMemory<'ctx, SIZE, WIDTH> {
    type Index = BV<'ctx>;
    type Value = BV<'ctx>;

    fn index(&self, idx: u64) -> BV<'ctx> {
        BV::from_u64(self.context, idx, Self::INDEX_BITS)
    }

    fn value(&self, val: u64) -> BV<'ctx> {
        BV::from_u64(self.context, val, WIDTH)
    }

    fn read(&self, idx: &BV<'ctx>) -> BV<'ctx> {
        self.array
            .select(idx)
            .as_bv()
            .expect("array value sort is a bit-vector")
    }

    fn write(&mut self, idx: &BV<'ctx>, val: &BV<'ctx>) {
        self.array = self.array.store(idx, val);
    }
}
