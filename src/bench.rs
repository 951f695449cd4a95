use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use z3::{ast::BV, Context, Model};

use crate::conc_memory::ConcreteMemory;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::memory::Memory;
use crate::ops::{Operation, Workload};
use crate::project::Project;
use crate::sym_memory::SymbolicMemory;

#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub sym: Duration,
    pub conc: Duration,
    pub reads: usize,
    pub writes: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sym duration: {} us", self.sym.as_micros())?;
        write!(f, "conc duration: {} us", self.conc.as_micros())
    }
}

/// Applies `ops` to `mem` and returns what every read observed, in order.
pub fn replay<M: Memory>(mem: &mut M, ops: impl IntoIterator<Item = Operation>) -> Vec<M::Value> {
    let mut reads = Vec::new();
    for op in ops {
        match op {
            Operation::Read { index } => {
                let idx = mem.index(index);
                reads.push(mem.read(&idx));
            }
            Operation::Write { index, value } => {
                let idx = mem.index(index);
                let val = mem.value(value);
                mem.write(&idx, &val);
            }
        }
    }
    reads
}

/// Times the symbolic and the concrete memory on the same workload, then
/// checks that they observed the same values.
pub fn run<const SIZE: usize, const WIDTH: u32>(
    context: &Context,
    config: &BenchConfig,
) -> Result<Report> {
    let workload = Workload {
        seed: config.seed,
        count: config.ops,
        size: SIZE,
        width: WIDTH,
    };
    let project = Project::new(context, config.timeout);

    info!("symbolic phase: {} operations, seed {}", config.ops, config.seed);
    let sym_start = Instant::now();
    let mut sym_mem = SymbolicMemory::<SIZE, WIDTH>::new(context);
    let terms = replay(&mut sym_mem, workload.ops());
    let model = project.check()?;
    let sym = sym_start.elapsed();
    debug!("symbolic phase done: {} read terms", terms.len());

    info!("concrete phase");
    let conc_start = Instant::now();
    let mut conc_mem = ConcreteMemory::<SIZE, WIDTH>::new();
    let values = replay(&mut conc_mem, workload.ops());
    let conc = conc_start.elapsed();

    verify(&project, &model, &terms, &values)?;
    info!("verified {} reads", values.len());

    Ok(Report {
        sym,
        conc,
        reads: values.len(),
        writes: config.ops - values.len(),
    })
}

/// Resolves each symbolic read through `model` and compares it with the
/// concrete read at the same position.
pub fn verify<'ctx>(
    project: &Project<'ctx>,
    model: &Model<'ctx>,
    terms: &[BV<'ctx>],
    values: &[u64],
) -> Result<()> {
    if terms.len() != values.len() {
        return Err(BenchError::LengthMismatch {
            symbolic: terms.len(),
            concrete: values.len(),
        });
    }
    for (position, (term, &concrete)) in terms.iter().zip(values).enumerate() {
        let symbolic = project
            .bv_value(model, term)
            .ok_or(BenchError::Unresolved { position })?;
        if symbolic != concrete {
            return Err(BenchError::ValueMismatch {
                position,
                symbolic,
                concrete,
            });
        }
    }
    Ok(())
}
