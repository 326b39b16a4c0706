//! Cross-cutting wrappers around [`Controller`](crate::presentation::Controller).

mod log;

pub use log::LogControllerDecorator;
