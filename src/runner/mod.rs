mod request;
mod engine;
mod invoke;
mod worker;

pub use request::*;
pub use engine::*;
pub use invoke::*;
pub use worker::*;

#[cfg(all(test, unix))]
pub(crate) use invoke::fake_engine;
