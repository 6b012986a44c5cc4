//! Destinations for controller notices.

use std::io::{self, Write};

use tracing::warn;

use super::notice::Notice;

/// Receives one notice each time a transition has a visible effect.
///
/// Emitting never fails from the controller's point of view; a sink that
/// cannot deliver a line reports it through its own channel.
pub trait OutputSink {
    fn emit(&mut self, notice: &Notice);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, notice: &Notice) {
        (**self).emit(notice)
    }
}

/// Writes each notice as a line of text.
///
/// Write failures do not stop the machine; they are counted and the most
/// recent one is kept for the caller to inspect.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
    failures: usize,
    last_error: Option<io::Error>,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failures: 0,
            last_error: None,
        }
    }

    /// Notices that could not be written.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn last_error(&self) -> Option<&io::Error> {
        self.last_error.as_ref()
    }

    /// Take the most recent write error, leaving none behind.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, notice: &Notice) {
        if let Err(error) = writeln!(self.writer, "{notice}").and_then(|_| self.writer.flush()) {
            warn!(%error, %notice, "failed to write notice");
            self.failures += 1;
            self.last_error = Some(error);
        }
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notices: Vec<Notice>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Rendered display lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.notices.iter().map(ToString::to_string).collect()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    #[test]
    fn console_sink_writes_one_line_per_notice() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&Notice::Dispensed {
            item: InputEvent::Soap,
        });
        sink.emit(&Notice::Change { amount: 50 });

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "dispense SOAP\nchange: 50\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "display disconnected"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_sink_records_write_failures() {
        let mut sink = ConsoleSink::new(ClosedPipe);
        sink.emit(&Notice::Change { amount: 5 });
        sink.emit(&Notice::Halted);

        assert_eq!(sink.failures(), 2);
        assert_eq!(
            sink.last_error().map(io::Error::kind),
            Some(io::ErrorKind::BrokenPipe)
        );
        assert_eq!(
            sink.take_error().map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
        assert!(sink.last_error().is_none());
    }

    #[test]
    fn console_sink_without_failures_has_no_error() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&Notice::Halted);

        assert_eq!(sink.failures(), 0);
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn recording_sink_take_drains() {
        let mut sink = RecordingSink::new();
        sink.emit(&Notice::Halted);

        assert_eq!(sink.lines(), vec!["halted".to_string()]);
        assert_eq!(sink.take(), vec![Notice::Halted]);
        assert!(sink.notices().is_empty());
    }

    #[test]
    fn borrowed_sink_forwards() {
        fn halt<S: OutputSink>(mut sink: S) {
            sink.emit(&Notice::Halted);
        }

        let mut sink = RecordingSink::new();
        halt(&mut sink);
        assert_eq!(sink.notices().len(), 1);
    }
}
