//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`log_event`] - Request log event model and the injected logger handle
//! - [`log_worker`] - Asynchronous log-writing worker
//!
//! # Request Logging Flow
//!
//! 1. Middleware observes an inbound request
//! 2. A [`log_event::LogEntry`] is sent to a bounded channel (non-blocking)
//! 3. [`log_worker::run_log_worker`] appends it to the log file as a JSON
//!    line and mirrors it to the console stream
//!
//! The domain layer has no dependency on the HTTP or persistence layers;
//! repository traits are implemented in [`crate::infrastructure`].

pub mod entities;
pub mod log_event;
pub mod log_worker;
pub mod repositories;
