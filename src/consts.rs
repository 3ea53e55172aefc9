pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Endpoints, action identifiers and display limits, grouped by the
    //! part of the client that uses them.

    // =============================================================================
    // HOST ENDPOINTS
    // =============================================================================

    /// JSON-RPC route returning campaign statistics and department expenditure.
    pub const DASHBOARD_STATS_ROUTE: &str = "/su_sms/dashboard_stats";

    /// JSON-RPC route returning the provider credit balance.
    pub const BALANCE_ROUTE: &str = "/su_sms/balance";

    /// Odoo session authentication route.
    pub const AUTHENTICATE_ROUTE: &str = "/web/session/authenticate";

    /// Name of the Odoo session cookie.
    pub const SESSION_COOKIE: &str = "session_id";

    // =============================================================================
    // HOST ACTIONS
    // =============================================================================

    /// Key under which the dashboard registers itself as a client action.
    pub const DASHBOARD_ACTION_KEY: &str = "su_sms_dashboard";

    /// Model backing the compose form.
    pub const COMPOSE_MODEL: &str = "su.sms.compose";

    /// Title of the compose dialog.
    pub const COMPOSE_TITLE: &str = "Send SMS";

    /// Context key carrying the preselected SMS type.
    pub const COMPOSE_TYPE_CONTEXT_KEY: &str = "default_sms_type";

    /// Host-registered list action for the message history.
    pub const HISTORY_ACTION_ID: &str = "su_sms_integrated.action_su_sms_message";

    // =============================================================================
    // DISPLAY
    // =============================================================================

    /// Placeholder shown for missing values (balance, dates).
    pub const PLACEHOLDER: &str = "-";

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for the channel logger
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Capacity of the field-change broadcast channel.
    pub const STATE_CHANGE_CAPACITY: usize = 64;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod network {
        use std::time::Duration;

        /// Connect timeout for the host server (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout for the host server (seconds)
        /// The balance route calls the SMS provider synchronously, so it gets some slack.
        pub const REQUEST_TIMEOUT_SECS: u64 = 20;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
