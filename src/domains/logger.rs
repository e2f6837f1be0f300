use std::sync::Arc;

/// Domain-level logging port. Intentionally small and infallible so the
/// application layer can log without caring about the sink.
pub trait DomainLogger: Send + Sync + 'static {
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

pub type DynLogger = Arc<dyn DomainLogger>;
