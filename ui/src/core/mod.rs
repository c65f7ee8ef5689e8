//! Renderer-independent logic: section tracking, counters, timing and site facts.

pub mod counter;
pub mod format;
pub mod site;
pub mod timing;
pub mod tracker;
