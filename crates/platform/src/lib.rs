//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Free-text input sanitization (normalize, bound, strip markup)
//! - Rate limiting infrastructure (sliding-window counters)
//!
//! Everything here is synchronous and domain-agnostic. Time is always
//! injected as a unix-millisecond parameter, never read from the system
//! clock, so windowing logic is testable without real delays.

pub mod rate_limit;
pub mod sanitize;
