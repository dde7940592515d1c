//! CLI helpers.

mod bencher;
mod output;
mod output_eq;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use self::bencher::Bencher;
use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;

use crate::gear::GearRule;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input read when no path is given.
pub const DEFAULT_INPUT: &str = "inputs/input.txt";

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Solve once and print the answer.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Path to the schematic.
    path: Option<PathBuf>,
    /// Only treat `*` as a gear.
    strict_gears: bool,
    /// Expected answers.
    expect: Option<(u64, u64)>,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options from the environment and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options out of the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--strict-gears" => {
                    opts.strict_gears = true;
                }
                "--expect" => {
                    let expect = value(&mut it, "--expect")?;
                    opts.expect = Some(parse_expect(expect)?);
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = value(&mut it, "--warmup")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = value(&mut it, "--time-limit")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = value(&mut it, "--count")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    opts.set_path(other)?;
                }
            }
        }

        if let Some(path) = it.next() {
            let path = path.to_str().context("non-utf8 argument")?;
            opts.set_path(path)?;
        }

        if let Some(extra) = it.next() {
            bail!("unexpected argument: {}", extra.to_string_lossy());
        }

        Ok(opts)
    }

    /// The schematic to read.
    pub fn path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_INPUT))
    }

    /// The gear rule selected by options.
    pub fn gear_rule(&self) -> GearRule {
        if self.strict_gears {
            GearRule::Asterisk
        } else {
            GearRule::AnySymbol
        }
    }

    fn set_path(&mut self, path: &str) -> Result<()> {
        if let Some(existing) = &self.path {
            bail!(
                "input path already specified as `{}`",
                existing.display()
            );
        }

        self.path = Some(PathBuf::from(path));
        Ok(())
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Take the string value following an option.
fn value<I>(it: &mut I, name: &str) -> Result<String>
where
    I: Iterator<Item = OsString>,
{
    let value = it
        .next()
        .with_context(|| anyhow!("missing argument to `{name}`"))?;

    value
        .into_string()
        .map_err(|_| anyhow!("missing string argument to `{name}`"))
}

/// Parse `<part1>,<part2>`.
fn parse_expect(value: String) -> Result<(u64, u64)> {
    let Some((a, b)) = value.split_once(',') else {
        bail!("bad argument to `--expect`, expected `<part1>,<part2>`");
    };

    let a = a.trim().parse().context("bad part 1 in `--expect`")?;
    let b = b.trim().parse().context("bad part 2 in `--expect`")?;
    Ok((a, b))
}

/// Load the schematic and run according to options.
///
/// In JSON mode errors are also reported as a message line.
pub fn run(opts: &Opts) -> Result<()> {
    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    if let Err(error) = run_with(&mut o, opts) {
        if opts.json {
            o.error(format_args!("{error:#}"))?;
        }

        return Err(error);
    }

    Ok(())
}

fn run_with<W>(o: &mut Output<W>, opts: &Opts) -> Result<()>
where
    W: Write,
{
    let grid = crate::input::load(opts.path())?;
    let rule = opts.gear_rule();

    match opts.mode {
        Mode::Default => {
            let answer = crate::solve(&grid, rule);
            check(&answer, opts.expect.as_ref())?;
            o.answer(&answer)?;
        }
        Mode::Bench => {
            Bencher::new().iter(o, opts, || crate::solve(&grid, rule))?;
        }
    }

    Ok(())
}

/// Compare an answer against an optional expectation.
pub(crate) fn check<O, C>(value: &O, expected: Option<&C>) -> Result<()>
where
    O: fmt::Debug + OutputEq<C>,
    C: fmt::Debug,
{
    if let Some(expected) = expected {
        if !value.output_eq(expected) {
            bail!("{value:?} (value) != {expected:?} (expected)");
        }
    }

    Ok(())
}

/// Percentiles of bench samples, keyed by hundredths of a percent.
#[derive(Default, Debug, Clone, Serialize)]
pub struct Percentiles {
    values: Vec<(u32, Duration)>,
}

impl Percentiles {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the percentile `p` (in hundredths of a percent) of sorted
    /// `samples`.
    pub fn insert(&mut self, p: u32, samples: &[Duration]) {
        let Some(last) = samples.len().checked_sub(1) else {
            return;
        };

        let index = (last * p as usize) / 10000;
        self.values.push((p, samples[index.min(last)]));
    }

    /// Get the percentile `p` if it was inserted.
    pub fn get(&self, p: u32) -> Option<Duration> {
        self.values.iter().find(|&&(n, _)| n == p).map(|&(_, d)| d)
    }
}

/// Outcome of a benchmark.
#[derive(Default, Debug, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Option<Duration>,
    pub max: Option<Duration>,
    pub avg: Duration,
    pub percentiles: Percentiles,
}

impl Report {
    fn new(
        count: usize,
        min: Option<Duration>,
        max: Option<Duration>,
        sum: Duration,
        percentiles: Percentiles,
    ) -> Self {
        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            count,
            min,
            max,
            avg,
            percentiles,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            percentiles,
        } = self;

        write!(
            f,
            "count: {count}, min: {min}, max: {max}, avg: {avg:?}",
            min = Maybe(min),
            max = Maybe(max)
        )?;

        for &(p, d) in &percentiles.values {
            write!(f, ", {}th: {d:?}", Percent(p))?;
        }

        Ok(())
    }
}

struct Maybe<'a, T>(&'a Option<T>);

impl<T> fmt::Display for Maybe<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.write_str("-"),
        }
    }
}

struct Percent(u32);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = (self.0 / 100, self.0 % 100);

        if frac == 0 {
            write!(f, "{whole}")
        } else {
            write!(f, "{whole}.{}", format!("{frac:02}").trim_end_matches('0'))
        }
    }
}
