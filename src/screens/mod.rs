//! Startup screens shown before the frame loop begins.

mod splash;

pub use splash::run_splash;
