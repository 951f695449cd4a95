use std::time::Duration;

use log::{debug, trace};
use z3::{
    ast::{Bool, BV},
    Model, Params, SatResult,
};

use crate::error::{BenchError, Result};

/// Context configuration for the benchmark: models are always produced.
/// Z3 solvers are incremental, so nothing else is needed for repeated checks.
pub fn engine_config() -> z3::Config {
    let mut cfg = z3::Config::new();
    cfg.set_model_generation(true);
    cfg
}

/// A solver session bound to one Z3 context. Symbolic memories take their
/// context from here instead of from global state.
pub struct Project<'ctx> {
    pub context: &'ctx z3::Context,
    pub solver: z3::Solver<'ctx>,
}

impl<'ctx> Project<'ctx> {
    pub fn new(context: &'ctx z3::Context, timeout: Option<Duration>) -> Self {
        let solver = z3::Solver::new(context);
        if let Some(timeout) = timeout {
            let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
            let mut params = Params::new(context);
            params.set_u32("timeout", millis);
            solver.set_params(&params);
            debug!("solver timeout set to {} ms", millis);
        }
        Project { context, solver }
    }

    pub fn bv_const(&self, value: u64, bits: u32) -> BV<'ctx> {
        BV::from_u64(self.context, value, bits)
    }

    pub fn insert(&self, expr: &Bool<'ctx>) {
        trace!("assert {}", expr);
        self.solver.assert(expr);
    }

    /// Runs the single satisfiability check. Anything but `sat` is fatal.
    pub fn check(&self) -> Result<Model<'ctx>> {
        match self.solver.check() {
            SatResult::Sat => self.solver.get_model().ok_or(BenchError::ModelUnavailable),
            SatResult::Unsat => Err(BenchError::Unsat),
            SatResult::Unknown => Err(BenchError::Unknown {
                reason: self
                    .solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "no reason given".to_string()),
            }),
        }
    }

    /// Concrete value of `term` under `model`, or `None` if the term does not
    /// reduce to a numeral.
    ///
    /// Model completion stays off: every slot of a symbolic memory is
    /// initialised, so reads reduce to numerals without it.
    pub fn bv_value(&self, model: &Model<'ctx>, term: &BV<'ctx>) -> Option<u64> {
        model.eval(term, false)?.as_u64()
    }
}
