//! Dispatch core: output bindings, delivery mode, drain queue and flush

use super::{
    adapter::AdapterConfig,
    binding::{panic_message, Binding, Delivery},
    error::{ErrorMode, LoggerError, Result},
    in_flight::InFlight,
    log_event::{CallSite, LogEvent},
    metrics::LoggerMetrics,
    registry::Registry,
    severity::Severity,
};
use crossbeam_channel::{bounded, select, Receiver, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Queue capacity used by [`Logger::set_asynchronous`].
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// What `attach` does when a binding with the same name already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Print a warning and attach anyway; both bindings receive events.
    #[default]
    Warn,
    /// Refuse with `LoggerError::DuplicateName`.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    Synchronous,
    Asynchronous,
}

/// Immutable view of the bindings; replaced wholesale on attach/detach.
type Snapshot = Arc<Vec<Arc<Binding>>>;

/// State reachable from both the logging threads and the drain thread.
struct Shared {
    bindings: RwLock<Snapshot>,
    metrics: LoggerMetrics,
    in_flight: InFlight,
}

impl Shared {
    fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.bindings.read())
    }

    fn dispatch(&self, event: &LogEvent) {
        for binding in self.snapshot().iter() {
            if binding.offer(event) == Delivery::Failed {
                self.metrics.record_write_failure();
            }
        }
        self.metrics.record_dispatched();
    }

    fn flush_bindings(&self) {
        for binding in self.snapshot().iter() {
            binding.flush();
        }
        self.metrics.record_flush();
    }
}

enum Control {
    /// Drain what is queued, flush every binding, then acknowledge.
    Flush(Sender<()>),
}

struct AsyncState {
    events: Sender<LogEvent>,
    control: Sender<Control>,
    handle: thread::JoinHandle<()>,
    capacity: usize,
}

pub struct Logger {
    shared: Arc<Shared>,
    /// Serializes attach/detach so concurrent writers never lose an update.
    attach_lock: Mutex<()>,
    registry: Arc<Registry>,
    async_state: Option<AsyncState>,
    error_mode: ErrorMode,
    duplicate_policy: DuplicatePolicy,
}

impl Logger {
    /// An empty, synchronous logger that attaches adapters from `registry`.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            shared: Arc::new(Shared {
                bindings: RwLock::new(Arc::new(Vec::new())),
                metrics: LoggerMetrics::new(),
                in_flight: InFlight::new(),
            }),
            attach_lock: Mutex::new(()),
            registry,
            async_state: None,
            error_mode: ErrorMode::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn set_error_mode(&mut self, mode: ErrorMode) {
        self.error_mode = mode;
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicatePolicy) {
        self.duplicate_policy = policy;
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Create, initialize and append a binding for `adapter_name`.
    ///
    /// `config` is anything serializable: one of the adapters' config
    /// structs, a `serde_json::Value`, or `()` for defaults.
    ///
    /// # Errors
    ///
    /// `UnknownAdapter`, `AdapterInitFailed`, or `DuplicateName` under
    /// [`DuplicatePolicy::Reject`]. In strict mode these terminate the process.
    pub fn attach(&self, adapter_name: &str, level: Severity, config: impl Serialize) -> Result<()> {
        let result = AdapterConfig::from_serialize(&config)
            .map_err(|e| LoggerError::adapter_init(adapter_name, e))
            .and_then(|config| self.attach_binding(adapter_name, level, &config));
        self.error_mode.apply(result)
    }

    /// Same as [`attach`](Self::attach) with an already captured config.
    pub fn attach_with_config(
        &self,
        adapter_name: &str,
        level: Severity,
        config: &AdapterConfig,
    ) -> Result<()> {
        self.error_mode
            .apply(self.attach_binding(adapter_name, level, config))
    }

    fn attach_binding(&self, adapter_name: &str, level: Severity, config: &AdapterConfig) -> Result<()> {
        let _guard = self.attach_lock.lock();

        if self.shared.snapshot().iter().any(|b| b.name() == adapter_name) {
            match self.duplicate_policy {
                DuplicatePolicy::Warn => eprintln!(
                    "[LOGGER WARNING] Adapter '{}' already attached; adding another binding",
                    adapter_name
                ),
                DuplicatePolicy::Reject => return Err(LoggerError::duplicate_name(adapter_name)),
            }
        }

        let mut adapter = self.registry.create(adapter_name)?;
        adapter
            .initialize(config)
            .map_err(|e| LoggerError::adapter_init(adapter_name, e))?;

        let binding = Arc::new(Binding::new(adapter_name, level, adapter));
        let mut bindings = self.shared.bindings.write();
        let mut next: Vec<Arc<Binding>> = Vec::with_capacity(bindings.len() + 1);
        next.extend(bindings.iter().cloned());
        next.push(binding);
        *bindings = Arc::new(next);
        Ok(())
    }

    /// Remove every binding named `adapter_name`, keeping the others in
    /// attach order. Returns how many were removed.
    pub fn detach(&self, adapter_name: &str) -> usize {
        let _guard = self.attach_lock.lock();

        let mut bindings = self.shared.bindings.write();
        let next: Vec<Arc<Binding>> = bindings
            .iter()
            .filter(|b| b.name() != adapter_name)
            .cloned()
            .collect();
        let removed = bindings.len() - next.len();
        if removed > 0 {
            *bindings = Arc::new(next);
        }
        removed
    }

    /// `(name, threshold)` of every binding, in attach order.
    pub fn outputs(&self) -> Vec<(String, Severity)> {
        self.shared
            .snapshot()
            .iter()
            .map(|b| (b.name().to_string(), b.level()))
            .collect()
    }

    pub fn delivery_mode(&self) -> DeliveryMode {
        if self.async_state.is_some() {
            DeliveryMode::Asynchronous
        } else {
            DeliveryMode::Synchronous
        }
    }

    /// Queue capacity while asynchronous.
    pub fn queue_capacity(&self) -> Option<usize> {
        self.async_state.as_ref().map(|state| state.capacity)
    }

    /// Events submitted but not yet delivered by the drain thread.
    pub fn pending(&self) -> usize {
        self.shared.in_flight.get()
    }

    pub fn set_asynchronous(&mut self) {
        self.set_asynchronous_with_capacity(DEFAULT_QUEUE_CAPACITY);
    }

    /// Switch to queued delivery with one background drain thread.
    ///
    /// Taking `&mut self` means no event can be logged concurrently with the
    /// switch. Calling it again replaces the queue: the previous drain thread
    /// delivers everything it holds and exits before the new one starts.
    /// A capacity of 0 makes every `log` hand its event directly to the
    /// drain thread.
    pub fn set_asynchronous_with_capacity(&mut self, capacity: usize) {
        self.stop_worker();

        let (events_tx, events_rx) = bounded::<LogEvent>(capacity);
        let (control_tx, control_rx) = bounded::<Control>(1);
        let shared = Arc::clone(&self.shared);

        let spawned = thread::Builder::new()
            .name("log-dispatch-drain".into())
            .spawn(move || drain_loop(&shared, &events_rx, &control_rx));

        match spawned {
            Ok(handle) => {
                self.async_state = Some(AsyncState {
                    events: events_tx,
                    control: control_tx,
                    handle,
                    capacity,
                });
            }
            Err(e) => {
                eprintln!(
                    "[LOGGER ERROR] Failed to start drain thread, staying synchronous: {}",
                    e
                );
            }
        }
    }

    /// Log `body` at `level`, recording the caller's location.
    #[track_caller]
    pub fn log(&self, level: Severity, body: impl Into<String>) {
        self.log_at(level, body.into(), CallSite::caller());
    }

    /// Log with a numeric level.
    ///
    /// # Errors
    ///
    /// `UnknownLevel` if `level` is not in `0..=7` (process exit in strict mode).
    #[track_caller]
    pub fn log_raw(&self, level: u8, body: impl Into<String>) -> Result<()> {
        let call_site = CallSite::caller();
        let level = self.error_mode.apply(Severity::try_from(level))?;
        self.log_at(level, body.into(), call_site);
        Ok(())
    }

    /// Log with an explicit call site. The logging macros end up here.
    pub fn log_at(&self, level: Severity, body: String, call_site: CallSite) {
        self.submit(LogEvent::new(level, body, call_site));
    }

    fn submit(&self, event: LogEvent) {
        self.shared.metrics.record_accepted();

        let Some(state) = &self.async_state else {
            self.shared.dispatch(&event);
            return;
        };

        self.shared.in_flight.add();
        match state.events.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                self.shared.metrics.record_backpressure();
                if state.events.send(event).is_err() {
                    self.abandon_event();
                }
            }
            Err(TrySendError::Disconnected(_)) => self.abandon_event(),
        }
    }

    fn abandon_event(&self) {
        self.shared.in_flight.done();
        eprintln!("[LOGGER ERROR] {}; event discarded", LoggerError::LoggerStopped);
    }

    /// Deliver everything submitted so far and flush every binding.
    ///
    /// Synchronous: flushes bindings immediately. Asynchronous: signals the
    /// drain thread and blocks until the in-flight count reaches zero and the
    /// drain thread has flushed every binding.
    pub fn flush(&self) {
        let Some(state) = &self.async_state else {
            self.shared.flush_bindings();
            return;
        };

        let (ack_tx, ack_rx) = bounded(1);
        if state.control.send(Control::Flush(ack_tx)).is_err() {
            eprintln!("[LOGGER ERROR] Flush requested after the drain thread stopped");
            return;
        }
        self.shared.in_flight.wait();
        let _ = ack_rx.recv();
    }

    /// [`flush`](Self::flush) with an upper bound on the wait. Returns false
    /// if pending events were still undelivered when `timeout` expired.
    pub fn flush_timeout(&self, timeout: Duration) -> bool {
        let Some(state) = &self.async_state else {
            self.shared.flush_bindings();
            return true;
        };

        let started = std::time::Instant::now();
        let (ack_tx, ack_rx) = bounded(1);
        if state.control.send_timeout(Control::Flush(ack_tx), timeout).is_err() {
            return false;
        }
        if !self.shared.in_flight.wait_timeout(timeout) {
            return false;
        }
        let remaining = timeout.saturating_sub(started.elapsed());
        ack_rx.recv_timeout(remaining).is_ok()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    /// Close the queue and wait for the drain thread to finish delivering.
    fn stop_worker(&mut self) {
        let Some(state) = self.async_state.take() else {
            return;
        };
        let AsyncState {
            events,
            control,
            handle,
            ..
        } = state;
        drop(events);
        drop(control);

        if let Err(panic_info) = handle.join() {
            eprintln!(
                "[LOGGER ERROR] Drain thread panicked: {}",
                panic_message(panic_info.as_ref())
            );
        }
    }
}

fn drain_pending(shared: &Shared, events: &Receiver<LogEvent>) {
    while let Ok(event) = events.try_recv() {
        shared.dispatch(&event);
        shared.in_flight.done();
    }
}

fn drain_loop(shared: &Shared, events: &Receiver<LogEvent>, control: &Receiver<Control>) {
    loop {
        select! {
            recv(events) -> event => match event {
                Ok(event) => {
                    shared.dispatch(&event);
                    shared.in_flight.done();
                }
                Err(_) => break,
            },
            recv(control) -> signal => match signal {
                Ok(Control::Flush(ack)) => {
                    drain_pending(shared, events);
                    shared.flush_bindings();
                    let _ = ack.send(());
                }
                Err(_) => break,
            },
        }
    }

    // Senders are gone; whatever is still buffered gets delivered.
    drain_pending(shared, events);
    shared.flush_bindings();
}

impl Default for Logger {
    /// Built-in adapters, with a `console` binding at `Debug`.
    fn default() -> Self {
        let logger = Logger::new(Arc::new(Registry::with_builtin_adapters()));
        if let Err(e) = logger.attach("console", Severity::Debug, ()) {
            eprintln!("[LOGGER ERROR] Default console adapter unavailable: {}", e);
        }
        logger
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.async_state.is_some() {
            self.stop_worker();
        } else {
            self.shared.flush_bindings();
        }
    }
}

/// Builder for constructing a Logger with a fluent API
///
/// # Example
/// ```
/// use rust_log_dispatcher::prelude::*;
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let mut registry = Registry::with_builtin_adapters();
/// registry
///     .register("memory", MemoryAdapter::factory_with_sink(sink.clone()))
///     .expect("memory is not built in");
///
/// let logger = Logger::builder()
///     .registry(Arc::new(registry))
///     .attach("memory", Severity::Warning, ())
///     .async_mode(1000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(logger.outputs(), vec![("memory".to_string(), Severity::Warning)]);
/// ```
pub struct LoggerBuilder {
    registry: Option<Arc<Registry>>,
    outputs: Vec<(String, Severity, Result<AdapterConfig>)>,
    async_capacity: Option<usize>,
    error_mode: ErrorMode,
    duplicate_policy: DuplicatePolicy,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            registry: None,
            outputs: Vec::new(),
            async_capacity: None,
            error_mode: ErrorMode::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Registry to resolve adapter names against. Defaults to the built-in adapters.
    #[must_use = "builder methods return a new value"]
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Queue a binding; it is attached, in order, by `build`.
    #[must_use = "builder methods return a new value"]
    pub fn attach(mut self, adapter_name: &str, level: Severity, config: impl Serialize) -> Self {
        let config = AdapterConfig::from_serialize(&config)
            .map_err(|e| LoggerError::adapter_init(adapter_name, e));
        self.outputs.push((adapter_name.to_string(), level, config));
        self
    }

    /// Enable asynchronous delivery with the given queue capacity.
    ///
    /// If not called, the logger will use synchronous mode.
    #[must_use = "builder methods return a new value"]
    pub fn async_mode(mut self, capacity: usize) -> Self {
        self.async_capacity = Some(capacity);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// # Errors
    ///
    /// The first error from attaching the queued outputs.
    pub fn build(self) -> Result<Logger> {
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(Registry::with_builtin_adapters()));

        let mut logger = Logger::new(registry);
        logger.set_error_mode(self.error_mode);
        logger.set_duplicate_policy(self.duplicate_policy);

        for (name, level, config) in self.outputs {
            let config = logger.error_mode.apply(config)?;
            logger.attach_with_config(&name, level, &config)?;
        }

        if let Some(capacity) = self.async_capacity {
            logger.set_asynchronous_with_capacity(capacity);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
