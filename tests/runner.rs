use core::marker::PhantomData as Cfg;
use std::process::Command;
use std::time::Duration;

use rstest::rstest;

use seq_contrast::runner::{
    fixed_demo, format_millis, growable_demo, time_fixed_writes, time_growable_appends,
};
use seq_contrast::{BenchmarkRunner, Grow, GrowByHalf, GrowDoubling, GrowExact, RunConfig};

const ARRAY_LINE: &str = "Array contents     : [1, 2, 99, 4, 5]";
const LIST_LINE: &str = "ArrayList contents : [1, 2, 99, 4, 5, 6]";

fn check_timing_line(line: &str, label: &str) {
    let Some(rest) = line.strip_prefix(label) else {
        panic!("unexpected timing line: {:?}", line);
    };
    let Some(millis) = rest.strip_suffix(" ms") else {
        panic!("missing unit: {:?}", line);
    };
    let Some((whole, frac)) = millis.split_once('.') else {
        panic!("missing decimal point: {:?}", line);
    };
    assert!(!whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()));
    assert!(frac.len() == 2 && frac.bytes().all(|b| b.is_ascii_digit()));
}

fn check_output(output: &str) {
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "output: {:?}", output);
    assert_eq!(lines[0], ARRAY_LINE);
    assert_eq!(lines[1], LIST_LINE);
    check_timing_line(lines[2], "Array push 100 k ints : ");
    check_timing_line(lines[3], "List  push 100 k ints : ");
}

#[test]
fn fixed_demo_contents() {
    let arr = fixed_demo();
    assert_eq!(arr.len(), 5);
    assert_eq!(arr, [1, 2, 99, 4, 5]);
}

#[test]
fn growable_demo_contents() {
    let list = growable_demo().expect("demo sequence");
    assert_eq!(list.len(), 6);
    assert_eq!(list, [1, 2, 99, 4, 5, 6]);
}

#[test]
fn demo_contents_repeatable() {
    assert_eq!(fixed_demo().to_string(), fixed_demo().to_string());
    assert_eq!(
        growable_demo().expect("demo").to_string(),
        growable_demo().expect("demo").to_string()
    );
}

#[test]
fn fixed_writes_wrap_in_place() {
    let mut arr = fixed_demo();
    let _elapsed = time_fixed_writes(&mut arr, 100_000);
    assert_eq!(arr.len(), 5);
    assert_eq!(arr, [99_995, 99_996, 99_997, 99_998, 99_999]);
}

#[rstest]
#[case::doubling(Cfg::<GrowDoubling>)]
#[case::by_half(Cfg::<GrowByHalf>)]
#[case::exact(Cfg::<GrowExact>)]
fn growable_appends_in_order<G: Grow>(#[case] _config: Cfg<G>) {
    let (_elapsed, bench) = time_growable_appends::<G>(10_000).expect("appends");
    assert_eq!(bench.len(), 10_000);
    assert!(bench.iter().copied().eq(0..10_000));
}

#[test]
fn zero_iterations() {
    let mut arr = fixed_demo();
    let _elapsed = time_fixed_writes(&mut arr, 0);
    assert_eq!(arr, [1, 2, 99, 4, 5]);

    let (_elapsed, bench) = time_growable_appends::<GrowDoubling>(0).expect("appends");
    assert!(bench.is_empty());
    assert_eq!(bench.capacity(), 0);
}

#[test]
fn run_default_output() {
    let runner = BenchmarkRunner::new();
    assert_eq!(runner.config(), &RunConfig::default());
    assert_eq!(runner.config().iterations(), 100_000);

    let mut out = Vec::new();
    let report = runner.run(&mut out).expect("run");
    let output = String::from_utf8(out).expect("utf-8 output");
    check_output(&output);

    assert_eq!(report.appended(), 100_000);
    assert_eq!(report.list_contents(), "[1, 2, 99, 4, 5, 6]");
    assert_eq!(report.array(), &[99_995, 99_996, 99_997, 99_998, 99_999]);
    assert!(report.array_elapsed() >= Duration::ZERO);
    assert!(report.list_elapsed() >= Duration::ZERO);
}

#[test]
fn run_zero_iterations() {
    let runner = BenchmarkRunner::with_config(RunConfig::with_iterations(0));
    let mut out = Vec::new();
    let report = runner.run(&mut out).expect("run");
    check_output(&String::from_utf8(out).expect("utf-8 output"));
    assert_eq!(report.appended(), 0);
    assert_eq!(report.array(), &[1, 2, 99, 4, 5]);
}

#[test]
fn run_negative_iterations() {
    let runner = BenchmarkRunner::with_config(RunConfig::with_iterations(-3));
    let report = runner.run(&mut Vec::<u8>::new()).expect("run");
    assert_eq!(report.appended(), 0);
}

#[test]
fn printed_durations_non_negative() {
    for nanos in [0, 1, 4_999, 5_000, 123_456_789] {
        let text = format_millis(Duration::from_nanos(nanos));
        assert!(!text.starts_with('-'));
        check_timing_line(&format!("x{} ms", text), "x");
    }
}

#[test]
fn binary_prints_four_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_seq-contrast"))
        .arg("ignored")
        .env_remove("RUST_LOG")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    check_output(&String::from_utf8(output.stdout).expect("utf-8 output"));
}
