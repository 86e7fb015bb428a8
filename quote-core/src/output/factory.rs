use std::collections::HashMap;
use std::path::PathBuf;

use super::sink::{SinkError, SummarySink};

/// Backend-agnostic sink configuration.
///
/// `backend` must match the [`SinkFactory::backend_name`] of a registered
/// factory. `target` is passed through to that factory unchanged; its
/// meaning is entirely backend-specific.
///
/// | backend  | target                    |
/// |----------|---------------------------|
/// | `stdout` | ignored                   |
/// | `file`   | path of the summary file  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"file"`).
    pub backend: String,
    /// Optional backend-specific destination.
    pub target: Option<PathBuf>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            backend: "stdout".to_string(),
            target: None,
        }
    }
}

/// One implementation per sink backend, registered with a [`SinkRegistry`]
/// at startup.
pub trait SinkFactory {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Open the destination and return a ready-to-use sink.
    fn create(
        &self,
        config: &SinkConfig,
    ) -> Result<Box<dyn SummarySink>, SinkError>;
}

/// Registry of [`SinkFactory`] instances, keyed by backend name.
pub struct SinkRegistry {
    factories: HashMap<&'static str, Box<dyn SinkFactory>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn SinkFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`SinkError::Configuration`] if no factory is registered for the
    ///   requested backend name.
    /// * Any error the chosen factory itself returns.
    pub fn create(
        &self,
        config: &SinkConfig,
    ) -> Result<Box<dyn SummarySink>, SinkError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                SinkError::Configuration(format!(
                    "unknown sink '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config)
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::{SinkConfig, SinkError, SinkFactory, SinkRegistry, SummarySink};

    // ── stub sink ────────────────────────────────────────────────────────
    // Deliveries are discarded; the tests only check routing.
    struct StubSink;

    impl SummarySink for StubSink {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        fn deliver(
            &mut self,
            _summary: &str,
        ) -> Result<(), SinkError> {
            Ok(())
        }
    }

    // ── stub factory ─────────────────────────────────────────────────────
    struct StubFactory {
        name: &'static str,
        called: Rc<Cell<bool>>,
    }

    impl StubFactory {
        fn new(name: &'static str) -> (Self, Rc<Cell<bool>>) {
            let flag = Rc::new(Cell::new(false));
            (
                Self {
                    name,
                    called: Rc::clone(&flag),
                },
                flag,
            )
        }
    }

    impl SinkFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }

        fn create(
            &self,
            _config: &SinkConfig,
        ) -> Result<Box<dyn SummarySink>, SinkError> {
            self.called.set(true);
            Ok(Box::new(StubSink))
        }
    }

    #[test]
    fn default_config_targets_stdout() {
        let config = SinkConfig::default();

        assert_eq!(config.backend, "stdout");
        assert_eq!(config.target, None);
    }

    #[test]
    fn create_routes_to_matching_factory() {
        let (stdout, stdout_called) = StubFactory::new("stdout");
        let (file, file_called) = StubFactory::new("file");

        let mut registry = SinkRegistry::new();
        registry.register(Box::new(stdout));
        registry.register(Box::new(file));

        let config = SinkConfig {
            backend: "file".to_string(),
            target: Some("quote.txt".into()),
        };
        let sink = registry.create(&config).unwrap();

        assert_eq!(sink.describe(), "stub");
        assert!(file_called.get());
        assert!(!stdout_called.get());
    }

    #[test]
    fn create_rejects_unknown_backend() {
        let (stdout, _) = StubFactory::new("stdout");
        let mut registry = SinkRegistry::new();
        registry.register(Box::new(stdout));

        let config = SinkConfig {
            backend: "printer".to_string(),
            target: None,
        };

        match registry.create(&config) {
            Err(SinkError::Configuration(msg)) => {
                assert!(msg.contains("printer"));
                assert!(msg.contains("stdout"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error for an unknown backend"),
        }
    }

    #[test]
    fn available_backends_are_sorted() {
        let mut registry = SinkRegistry::default();
        registry.register(Box::new(StubFactory::new("stdout").0));
        registry.register(Box::new(StubFactory::new("file").0));

        assert_eq!(registry.available_backends(), vec!["file", "stdout"]);
    }

    #[test]
    fn register_replaces_same_name() {
        let (first, first_called) = StubFactory::new("stdout");
        let (second, second_called) = StubFactory::new("stdout");

        let mut registry = SinkRegistry::new();
        registry.register(Box::new(first));
        registry.register(Box::new(second));
        registry.create(&SinkConfig::default()).unwrap();

        assert!(!first_called.get());
        assert!(second_called.get());
        assert_eq!(registry.available_backends(), vec!["stdout"]);
    }
}
