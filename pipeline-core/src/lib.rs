//! # Pipeline Core
//!
//! Signal bus infrastructure shared by every service in the pipeline.
//!
//! ## Modules
//! - `bus`: in-process publish/subscribe fan-out with topic filters.
//! - `bus::topic`: topic naming conventions (`market:ticks:<SYM>`, ...).
//! - `bus::envelope`: versioned, tagged wire format with decode validation.
//! - `bus::socket`: strongly-typed publisher/subscriber endpoints.

pub mod bus;
