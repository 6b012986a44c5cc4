//! What the machine shows its customer.

mod notice;
mod sink;

pub use notice::Notice;
pub use sink::{ConsoleSink, OutputSink, RecordingSink};
