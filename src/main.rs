use clap::Parser;
use log::{error, info};

use symmem_bench::bench;
use symmem_bench::config::{Args, BenchConfig, SIZE, WIDTH};
use symmem_bench::project::engine_config;

fn main() {
    env_logger::init();
    let config = BenchConfig::from(Args::parse());

    let ctx = z3::Context::new(&engine_config());
    match bench::run::<SIZE, WIDTH>(&ctx, &config) {
        Ok(report) => {
            info!("{} reads, {} writes", report.reads, report.writes);
            println!("{}", report);
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
