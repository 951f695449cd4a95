//! Times a memory model built on Z3 array terms against a plain array under
//! the same pseudo-random read/write workload, and checks that both observe
//! the same values.

pub mod bench;
pub mod conc_memory;
pub mod config;
pub mod error;
pub mod memory;
pub mod ops;
pub mod project;
pub mod sym_memory;
