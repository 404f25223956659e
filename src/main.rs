use std::io;

use seq_contrast::BenchmarkRunner;

fn main() {
    env_logger::init();

    let runner = BenchmarkRunner::new();
    let stdout = io::stdout();
    match runner.run(&mut stdout.lock()) {
        Ok(report) => log::debug!(
            "finished: {} appended, arrays {:?}, lists {:?}",
            report.appended(),
            report.array_elapsed(),
            report.list_elapsed()
        ),
        Err(error) => {
            log::error!("benchmark failed: {}", error);
            error.panic()
        }
    }
}
