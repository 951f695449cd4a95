use crate::memory::Memory;

/// `SIZE` plain cells of `WIDTH` bits. Values are stored as given; keeping
/// them within `WIDTH` bits is up to the caller.
pub struct ConcreteMemory<const SIZE: usize, const WIDTH: u32> {
    vals: [u64; SIZE],
}

impl<const SIZE: usize, const WIDTH: u32> ConcreteMemory<SIZE, WIDTH> {
    const DIMENSIONS: () = assert!(
        SIZE >= 1 && WIDTH >= 1 && WIDTH <= 64,
        "memory needs at least one slot and a width of 1..=64 bits"
    );

    pub fn new() -> Self {
        let () = Self::DIMENSIONS;
        ConcreteMemory { vals: [0; SIZE] }
    }
}

impl<const SIZE: usize, const WIDTH: u32> Default for ConcreteMemory<SIZE, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const WIDTH: u32> Memory for ConcreteMemory<SIZE, WIDTH> {
    type Index = usize;
    type Value = u64;

    fn index(&self, idx: u64) -> usize {
        idx as usize
    }

    fn value(&self, val: u64) -> u64 {
        val
    }

    fn read(&self, idx: &usize) -> u64 {
        self.vals[*idx]
    }

    fn write(&mut self, idx: &usize, val: &u64) {
        self.vals[*idx] = *val;
    }
}
