//! End-of-command diagnostics
//!
//! After an arc command finishes, the engine reports the elapsed tick
//! count to a sink. On controller hardware this would go out over a
//! serial console; here the transport is whatever the caller injects.

/// Receiver for the per-command elapsed-tick report
pub trait DiagnosticSink {
    /// Accept the elapsed tick count of one completed arc command
    fn report_elapsed(&mut self, ticks: u32);
}

/// Logs the report through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report_elapsed(&mut self, ticks: u32) {
        tracing::info!(elapsed_ticks = ticks, "arc command complete");
    }
}

/// Discards the report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn report_elapsed(&mut self, _ticks: u32) {}
}
