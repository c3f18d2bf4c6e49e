//! Core dispatcher types and traits

pub mod adapter;
pub mod binding;
pub mod config;
pub mod error;
pub mod facade;
pub mod in_flight;
pub mod log_event;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod registry;
pub mod severity;
pub mod template;

pub use adapter::{Adapter, AdapterConfig};
pub use binding::{Binding, Delivery};
pub use config::{LoggerConfig, OutputConfig};
pub use error::{ErrorMode, LoggerError, Result};
pub use in_flight::InFlight;
pub use log_event::{CallSite, LogEvent, UNKNOWN_FUNCTION};
pub use logger::{DeliveryMode, DuplicatePolicy, Logger, LoggerBuilder, DEFAULT_QUEUE_CAPACITY};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
pub use registry::{AdapterFactory, Registry};
pub use severity::Severity;
pub use template::{render, MessageTemplate, DEFAULT_TEMPLATE};
