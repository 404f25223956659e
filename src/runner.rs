//! The side-by-side demonstration and timing run.

use core::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::config::RunConfig;
use crate::error::{InsertionError, RunError};
use crate::fixed::FixedSequence;
use crate::grow::{Grow, GrowDoubling};
use crate::growable::GrowableSequence;

const ARRAY_LABEL: &str = "Array contents     : ";
const LIST_LABEL: &str = "ArrayList contents : ";
const ARRAY_TIMING_LABEL: &str = "Array push 100 k ints : ";
const LIST_TIMING_LABEL: &str = "List  push 100 k ints : ";

const SEED: [i32; 5] = [1, 2, 3, 4, 5];

/// Build the fixed sequence `[1, 2, 3, 4, 5]` and overwrite index 2 with 99.
pub fn fixed_demo() -> FixedSequence<i32, 5> {
    let mut arr = FixedSequence::from_array(SEED);
    arr[2] = 99;
    arr
}

/// Build the growable sequence `[1, 2, 3, 4, 5]`, append 6 and overwrite
/// index 2 with 99.
pub fn growable_demo() -> Result<GrowableSequence<i32>, InsertionError<i32>> {
    let mut list = GrowableSequence::<i32>::new();
    list.extend_from_slice(&SEED);
    list.try_push(6)?;
    list.set(2, 99)?;
    Ok(list)
}

/// Time `iterations` wraparound writes of `0..iterations` into `arr`.
pub fn time_fixed_writes<const N: usize>(
    arr: &mut FixedSequence<i32, N>,
    iterations: i32,
) -> Duration {
    let start = Instant::now();
    for i in 0..iterations {
        arr.write_wrapping(i as usize, black_box(i));
    }
    start.elapsed()
}

/// Time `iterations` appends of `0..iterations` into a fresh growable
/// sequence, returning the elapsed time and the filled sequence.
pub fn time_growable_appends<G: Grow>(
    iterations: i32,
) -> Result<(Duration, GrowableSequence<i32, G>), InsertionError<i32>> {
    let mut bench = GrowableSequence::<i32, G>::new();
    let start = Instant::now();
    for i in 0..iterations {
        bench.try_push(black_box(i))?;
    }
    Ok((start.elapsed(), bench))
}

/// Render a duration as fractional milliseconds with two decimal places.
pub fn format_millis(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_nanos() as f64 / 1e6)
}

/// The outcome of a [`BenchmarkRunner::run`].
#[derive(Debug, Clone)]
pub struct Report {
    array: FixedSequence<i32, 5>,
    list_contents: String,
    appended: usize,
    array_elapsed: Duration,
    list_elapsed: Duration,
}

impl Report {
    /// The fixed sequence after the timed writes.
    pub fn array(&self) -> &FixedSequence<i32, 5> {
        &self.array
    }

    /// The rendered growable sequence from the demonstration step.
    pub fn list_contents(&self) -> &str {
        &self.list_contents
    }

    /// The number of elements held by the timed growable sequence.
    pub fn appended(&self) -> usize {
        self.appended
    }

    pub fn array_elapsed(&self) -> Duration {
        self.array_elapsed
    }

    pub fn list_elapsed(&self) -> Duration {
        self.list_elapsed
    }
}

/// Demonstrates a fixed and a growable sequence, then times writes into each.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    config: RunConfig,
}

impl BenchmarkRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Perform the run, writing four report lines to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report, RunError> {
        let iterations = self.config.iterations();

        let mut arr = fixed_demo();
        writeln!(out, "{}{}", ARRAY_LABEL, arr)?;

        let list = growable_demo()?;
        let list_contents = list.to_string();
        writeln!(out, "{}{}", LIST_LABEL, list_contents)?;

        log::debug!("timing {} wraparound writes", iterations);
        let array_elapsed = time_fixed_writes(&mut arr, iterations);
        log::debug!("fixed writes took {:?}", array_elapsed);

        log::debug!("timing {} appends", iterations);
        let (list_elapsed, bench) = time_growable_appends::<GrowDoubling>(iterations)?;
        log::debug!(
            "appends took {:?}, final capacity {}",
            list_elapsed,
            bench.capacity()
        );

        writeln!(out, "{}{} ms", ARRAY_TIMING_LABEL, format_millis(array_elapsed))?;
        writeln!(out, "{}{} ms", LIST_TIMING_LABEL, format_millis(list_elapsed))?;
        out.flush()?;

        Ok(Report {
            array: arr,
            list_contents,
            appended: bench.len(),
            array_elapsed,
            list_elapsed,
        })
    }
}
