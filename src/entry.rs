use clap::Parser;

use crate::app;
use crate::args::DriverArgs;
use crate::config::RunConfig;
use crate::error::AppResult;

pub(crate) fn run() -> AppResult<()> {
    let args = DriverArgs::parse();

    crate::logger::init_logging(args.verbose);

    let config = RunConfig::resolve(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(app::run_driver(&config))
}
