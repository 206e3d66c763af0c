pub trait ClockPort: Send + Sync {
    /// Current wall-clock time in epoch milliseconds.
    fn now_ms(&self) -> i64;
}
