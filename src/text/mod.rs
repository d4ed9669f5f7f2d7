mod catalog;
mod html;
mod language;
mod texts;

pub use catalog::*;
pub use html::*;
pub use language::*;
pub use texts::*;
