use std::process::ExitCode;

use stopwatch_cli::app;
use stopwatch_cli::args::{Invocation, parse_args};
use stopwatch_cli::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let options = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(options)) => options,
        Ok(Invocation::Version(version)) => {
            print!("{version}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            err.report();
            return err.exit_code();
        }
    };

    logging::init();

    match app::run(options).await {
        Ok(summary) => {
            tracing::debug!(
                ticks = summary.ticks,
                elapsed = ?summary.elapsed,
                "stopwatch finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", app::error_chain(&err));
            ExitCode::FAILURE
        }
    }
}
