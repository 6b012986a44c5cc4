//! Input events, their categories, and the sources that produce them.

mod category;
mod event;
mod random;
mod script;
mod source;

pub use category::{classify, InputCategory};
pub use event::{InputEvent, UnknownToken};
pub use random::RandomInput;
pub use script::{ScriptError, ScriptedInput, TokenError};
pub use source::{FnSource, InputSource};
