use std::time::Duration;

use clap::Parser;

/// Slots in each benchmarked memory.
pub const SIZE: usize = 128;
/// Bits per slot.
pub const WIDTH: u32 = 32;
pub const DEFAULT_OPS: usize = 1_000_000;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Parser, Debug)]
#[command(name = "symmem-bench", version)]
#[command(about = "Times a Z3 array-backed memory against a plain array", long_about = None)]
pub struct Args {
    /// Number of random read/write operations
    #[arg(long, default_value_t = DEFAULT_OPS)]
    pub ops: usize,

    /// Seed of the operation generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Give up on the satisfiability check after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub ops: usize,
    pub seed: u64,
    pub timeout: Option<Duration>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            ops: DEFAULT_OPS,
            seed: DEFAULT_SEED,
            timeout: None,
        }
    }
}

impl From<Args> for BenchConfig {
    fn from(args: Args) -> Self {
        BenchConfig {
            ops: args.ops,
            seed: args.seed,
            timeout: args.timeout_ms.map(Duration::from_millis),
        }
    }
}
