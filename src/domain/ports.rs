use std::io;
use std::time::Duration;

/// Line-oriented output split across the two standard streams.
pub trait Console {
    /// Writes to stdout without a trailing newline.
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn println(&mut self, text: &str) -> io::Result<()>;
    fn eprintln(&mut self, text: &str) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Source of uniform values in `[0, 1)`.
pub trait RandomProvider {
    fn random_ratio(&mut self) -> f64;
}

pub trait ConfigProvider: Send + Sync {
    fn check_delay(&self) -> Duration;
    fn failure_threshold(&self) -> f64;
    fn seed(&self) -> Option<u64>;
    fn monitoring_enabled(&self) -> bool;
}
