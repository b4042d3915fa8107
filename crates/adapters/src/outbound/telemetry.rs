//! Telemetry adapters - Observability implementations.

use application::ports::outbound::TelemetryPort;
use domain::identity::AccountId;

/// Tracing-based telemetry adapter, also feeding the metrics recorder.
#[derive(Default)]
pub struct TracingTelemetry;

impl TracingTelemetry {
    /// Create a new [`TracingTelemetry`].
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryPort for TracingTelemetry {
    fn record_account_created(&self, account_id: AccountId) {
        tracing::info!(%account_id, "account created");
        metrics::counter!("sign_up_total", "outcome" => "success").increment(1);
    }

    fn record_login_success(&self, account_id: AccountId) {
        tracing::info!(%account_id, "session issued");
        metrics::counter!("login_total", "outcome" => "success").increment(1);
    }

    fn record_failure(&self, operation: &str, reason: &str) {
        tracing::info!(operation, reason, "authentication failed");
        metrics::counter!(
            format!("{operation}_total"),
            "outcome" => reason.to_owned()
        )
        .increment(1);
    }
}
