use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cli::{check, Opts, Output, Percentiles, Report};
use crate::Answer;

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Percentiles to report, in hundredths of a percent.
const PERCENTILES: [u32; 5] = [2500, 5000, 9500, 9900, 9999];

#[derive(Default)]
pub(crate) struct Bencher {
    samples: Vec<Duration>,
}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Bench the given solver, verifying every answer against the expected
    /// one if it is set.
    pub(crate) fn iter<W, T>(&mut self, o: &mut Output<W>, opts: &Opts, mut iter: T) -> Result<()>
    where
        W: Write,
        T: FnMut() -> Answer,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut run = || -> Result<Duration> {
            let before = Instant::now();
            let answer = black_box(iter());
            let elapsed = before.elapsed();
            check(&answer, opts.expect.as_ref())?;
            Ok(elapsed)
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;
            let start = Instant::now();

            while start.elapsed() < warmup {
                run()?;
            }
        }

        self.samples.clear();

        if let Some(count) = opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                self.samples.push(run()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;
            let start = Instant::now();

            loop {
                self.samples.push(run()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        log::debug!("collected {} samples", self.samples.len());
        o.report(&self.report())?;
        Ok(())
    }

    fn report(&mut self) -> Report {
        self.samples.sort();

        let mut percentiles = Percentiles::new();

        for p in PERCENTILES {
            percentiles.insert(p, &self.samples);
        }

        let min = self.samples.first().copied();
        let max = self.samples.last().copied();
        let sum = self.samples.iter().copied().sum();
        Report::new(self.samples.len(), min, max, sum, percentiles)
    }
}
