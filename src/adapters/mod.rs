//! Built-in adapter implementations

pub mod console;
pub mod file;
pub mod memory;
pub mod network;

pub use console::{ConsoleAdapter, ConsoleConfig};
pub use file::{FileAdapter, FileConfig};
pub use memory::{MemoryAdapter, MemoryConfig, MemorySink};
pub use network::{NetworkAdapter, NetworkConfig};

pub use crate::core::{Adapter, AdapterConfig};

use crate::core::{error::strict, Registry};

/// Register the built-in sinks under their type names.
///
/// `memory` is not among them: a private sink nobody can read would only grow.
///
/// The names are fixed and distinct, so a failure here is a programming error
/// in this crate and aborts like any other startup misconfiguration.
pub(crate) fn register_builtin(registry: &mut Registry) {
    strict::exit_on_error(registry.register(console::NAME, ConsoleAdapter::factory()));
    strict::exit_on_error(registry.register(file::NAME, FileAdapter::factory()));
    strict::exit_on_error(registry.register(network::NAME, NetworkAdapter::factory()));
}
