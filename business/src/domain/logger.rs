/// Logging port for the business layer.
///
/// Use cases receive it as an injected `Arc<dyn Logger>` so the domain never
/// touches a process-wide logger.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
