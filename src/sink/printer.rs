use core::fmt::Display;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::Sink;

/// A sink that writes one record per line.
///
/// Each record is rendered with its [`Display`] implementation. When the
/// merge completes, the writer is flushed and a summary is logged at `info`
/// level.
///
/// # Examples
///
/// ```
/// use timeline_merge::sink::Printer;
/// use timeline_merge::Sink;
///
/// let mut printer = Printer::new(Vec::new());
/// printer.accept("first").unwrap();
/// printer.accept("second").unwrap();
/// Sink::<&str>::complete(&mut printer).unwrap();
///
/// assert_eq!(printer.printed(), 2);
/// assert_eq!(printer.into_inner(), b"first\nsecond\n");
/// ```
#[derive(Debug)]
pub struct Printer<W> {
    writer: W,
    printed: u64,
    started: Instant,
    finished: Option<Duration>,
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            printed: 0,
            started: Instant::now(),
            finished: None,
        }
    }

    /// Number of records written so far.
    pub fn printed(&self) -> u64 {
        self.printed
    }

    /// Time between creating the printer and the completion notice, once
    /// the merge has completed.
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished
    }

    /// Consumes the printer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Printer<io::Stdout> {
    /// Create a printer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<T: Display, W: Write> Sink<T> for Printer<W> {
    type Error = io::Error;

    fn accept(&mut self, record: T) -> io::Result<()> {
        writeln!(self.writer, "{record}")?;
        self.printed += 1;
        Ok(())
    }

    fn complete(&mut self) -> io::Result<()> {
        self.writer.flush()?;
        let elapsed = self.started.elapsed();
        self.finished = Some(elapsed);

        let secs = elapsed.as_secs_f64();
        let rate = if secs > 0.0 {
            self.printed as f64 / secs
        } else {
            0.0
        };
        tracing::info!(
            printed = self.printed,
            elapsed_secs = secs,
            records_per_sec = rate,
            "printer complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure() {
        let mut printer = Printer::new(Broken);
        let err = printer.accept(1).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(printer.printed(), 0);
    }

    #[test]
    fn elapsed_after_complete() {
        let mut printer = Printer::new(Vec::new());
        assert!(printer.elapsed().is_none());
        Sink::<&str>::complete(&mut printer).unwrap();
        assert!(printer.elapsed().is_some());
    }
}
