//! Pull-based input sources.

use super::event::InputEvent;

/// Supplies the controller with one event per call.
///
/// A source may be finite or unbounded, but it must eventually yield
/// [`InputEvent::Stop`] for the driver loop to terminate.
pub trait InputSource {
    fn next_event(&mut self) -> InputEvent;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn next_event(&mut self) -> InputEvent {
        (**self).next_event()
    }
}

impl<S: InputSource + ?Sized> InputSource for Box<S> {
    fn next_event(&mut self) -> InputEvent {
        (**self).next_event()
    }
}

/// Adapts a closure into a source, e.g. for a sensor callback.
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> InputEvent> InputSource for FnSource<F> {
    fn next_event(&mut self) -> InputEvent {
        (self.0)()
    }
}
