//! Interface for observability.

use domain::identity::AccountId;

/// Port for telemetry/observability operations.
pub trait TelemetryPort: Send + Sync {
    /// Record a new account creation.
    fn record_account_created(&self, account_id: AccountId);

    /// Record a successful login.
    fn record_login_success(&self, account_id: AccountId);

    /// Record a failed operation with a short reason.
    fn record_failure(&self, operation: &str, reason: &str);
}
