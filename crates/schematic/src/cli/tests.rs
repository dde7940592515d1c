use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use super::output::{Output, OutputKind};
use super::{check, Mode, Opts, Percentiles, Report};
use crate::gear::GearRule;
use crate::Answer;

fn parse(args: &[&str]) -> anyhow::Result<Opts> {
    Opts::parse_from(args.iter().map(OsString::from))
}

#[test]
fn test_defaults() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts.mode, Mode::Default);
    assert_eq!(opts.path(), Path::new("inputs/input.txt"));
    assert_eq!(opts.gear_rule(), GearRule::AnySymbol);
    assert!(opts.expect.is_none());
}

#[test]
fn test_options() {
    let opts = parse(&[
        "--bench",
        "--strict-gears",
        "--expect",
        "4361, 467835",
        "--count",
        "3",
        "--json",
        "inputs/sample.txt",
    ])
    .unwrap();

    assert_eq!(opts.mode, Mode::Bench);
    assert_eq!(opts.gear_rule(), GearRule::Asterisk);
    assert_eq!(opts.expect, Some((4361, 467835)));
    assert_eq!(opts.count, Some(3));
    assert!(opts.json);
    assert_eq!(opts.path(), Path::new("inputs/sample.txt"));
}

#[test]
fn test_path_after_separator() {
    let opts = parse(&["--verbose", "--", "--odd-name.txt"]).unwrap();
    assert!(opts.verbose);
    assert_eq!(opts.path(), Path::new("--odd-name.txt"));
}

#[test]
fn test_bad_options() {
    assert!(parse(&["--nope"]).is_err());
    assert!(parse(&["--bench", "--bench"]).is_err());
    assert!(parse(&["--warmup"]).is_err());
    assert!(parse(&["--count", "many"]).is_err());
    assert!(parse(&["--expect", "4361"]).is_err());
    assert!(parse(&["a.txt", "b.txt"]).is_err());
    assert!(parse(&["--", "a.txt", "b.txt"]).is_err());
}

#[test]
fn test_check_expected() {
    let answer = Answer {
        part1: 4361,
        part2: 467835,
    };

    assert!(check(&answer, None::<&(u64, u64)>).is_ok());
    assert!(check(&answer, Some(&(4361u64, 467835u64))).is_ok());

    let error = check(&answer, Some(&(4361u64, 0u64))).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Answer { part1: 4361, part2: 467835 } (value) != (4361, 0) (expected)"
    );
}

#[test]
fn test_percentiles() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();

    let mut p = Percentiles::new();
    p.insert(5000, &samples);
    p.insert(9900, &samples);
    p.insert(2500, &[]);

    assert_eq!(p.get(5000), Some(Duration::from_millis(50)));
    assert_eq!(p.get(9900), Some(Duration::from_millis(99)));
    assert_eq!(p.get(2500), None);
}

#[test]
fn test_report_display() {
    let samples = [Duration::from_millis(2), Duration::from_millis(4)];
    let mut percentiles = Percentiles::new();
    percentiles.insert(5000, &samples);
    percentiles.insert(9999, &samples);

    let report = Report::new(
        2,
        samples.first().copied(),
        samples.last().copied(),
        Duration::from_millis(6),
        percentiles,
    );

    assert_eq!(
        report.to_string(),
        "count: 2, min: 2ms, max: 4ms, avg: 3ms, 50th: 2ms, 99.99th: 2ms"
    );

    let empty = Report::new(0, None, None, Duration::ZERO, Percentiles::new());
    assert_eq!(empty.to_string(), "count: 0, min: -, max: -, avg: 0ns");
}

#[test]
fn test_output_normal() {
    let mut o = Output::new(Vec::new(), OutputKind::Normal);

    o.answer(&Answer {
        part1: 4361,
        part2: 467835,
    })
    .unwrap();
    o.info("hello").unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    assert_eq!(out, "Part 1: 4361\nPart 2: 467835\ninfo: hello\n");
}

#[test]
fn test_output_json() {
    let mut o = Output::new(Vec::new(), OutputKind::Json);

    o.answer(&Answer { part1: 1, part2: 2 }).unwrap();
    o.error("bad input").unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    let lines = out.lines().collect::<Vec<_>>();

    assert_eq!(
        lines,
        [
            r#"{"type":"answer","data":{"part1":1,"part2":2}}"#,
            r#"{"type":"message","data":{"kind":"error","output":"bad input"}}"#,
        ]
    );
}
