/// A fixed-size addressable store driven by the benchmark.
///
/// Indices and values are whatever the model works with natively: solver
/// terms for the symbolic memory, plain integers for the concrete one.
/// `index` and `value` lift literal integers into that representation.
pub trait Memory {
    type Index;
    type Value;

    fn index(&self, idx: u64) -> Self::Index;
    fn value(&self, val: u64) -> Self::Value;

    fn read(&self, idx: &Self::Index) -> Self::Value;
    fn write(&mut self, idx: &Self::Index, val: &Self::Value);
}

/// Bits needed to address `size` slots, ⌈log2(size)⌉, never less than one.
pub const fn index_bits(size: usize) -> u32 {
    if size <= 2 {
        1
    } else {
        usize::BITS - (size - 1).leading_zeros()
    }
}

/// Largest value representable in `width` bits.
pub const fn value_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
