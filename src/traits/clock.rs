use std::time::Duration;

/// Monotonic time source; readings are measured from an arbitrary fixed epoch
pub trait TimeSource {
    fn now(&self) -> Duration;
}
