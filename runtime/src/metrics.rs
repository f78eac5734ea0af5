//! Metric names recorded by the Store.
//!
//! The store only talks to the `metrics` facade. Nothing is recorded until
//! the application installs a recorder (an exporter, or a test recorder).
//!
//! # Example
//!
//! ```
//! // Register human readable descriptions with whatever recorder is active
//! module_store_runtime::metrics::describe_metrics();
//! ```

use metrics::{Unit, describe_counter, describe_histogram};

/// Actions reduced, labelled by `action` name (includes feedback actions)
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Feedback actions queued through `Effect::Send`
pub const FEEDBACK_TOTAL: &str = "store.feedback.total";

/// Sends aborted because the feedback limit was reached
pub const FEEDBACK_LIMIT_EXCEEDED: &str = "store.feedback.limit_exceeded";

/// Time spent inside `Reducer::reduce`
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Listener invocations
pub const LISTENERS_NOTIFIED: &str = "store.listeners.notified";

/// Register descriptions for every store metric.
///
/// Call once after installing a recorder.
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, Unit::Count, "Actions reduced by the store");
    describe_counter!(
        FEEDBACK_TOTAL,
        Unit::Count,
        "Feedback actions requested by reducers"
    );
    describe_counter!(
        FEEDBACK_LIMIT_EXCEEDED,
        Unit::Count,
        "Sends aborted after too many feedback actions"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Reducer execution time"
    );
    describe_counter!(
        LISTENERS_NOTIFIED,
        Unit::Count,
        "Listener invocations after a send"
    );
}
