use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::memory::value_mask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read { index: u64 },
    Write { index: u64, value: u64 },
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read { index } => write!(f, "read [{}]", index),
            Operation::Write { index, value } => write!(f, "write [{}] = {:#x}", index, value),
        }
    }
}

/// A reproducible sequence of operations over a memory of `size` slots of
/// `width` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    pub seed: u64,
    pub count: usize,
    pub size: usize,
    pub width: u32,
}

impl Workload {
    /// Starts a new replay. Each call owns a generator seeded from `seed`,
    /// so every replay yields the same operations.
    pub fn ops(&self) -> Ops {
        Ops {
            rng: StdRng::seed_from_u64(self.seed),
            remaining: self.count,
            size: self.size as u64,
            mask: value_mask(self.width),
        }
    }

    pub fn record(&self) -> Vec<Operation> {
        self.ops().collect()
    }
}

pub struct Ops {
    rng: StdRng,
    remaining: usize,
    size: u64,
    mask: u64,
}

impl Iterator for Ops {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let store: bool = self.rng.gen();
        let index = self.rng.gen_range(0..self.size);
        if store {
            let value = self.rng.gen_range(0..=self.mask);
            Some(Operation::Write { index, value })
        } else {
            Some(Operation::Read { index })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Ops {}
