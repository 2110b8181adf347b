pub mod clock;
pub mod dir;
pub mod host;
pub mod logging;
pub mod runtime;
pub mod time;
