//! Effect engines.

pub mod caret;
pub mod particles;
pub mod typewriter;
