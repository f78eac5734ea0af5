//! # Module Store Runtime
//!
//! Runtime implementation for reducer-driven UI state modules.
//!
//! This crate provides the Store that owns a feature's state, runs its
//! reducer, executes the returned effects and notifies listeners.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer, environment and listeners
//! - **Feedback loop**: `Effect::Send` actions are reduced in the same `send`
//! - **Listeners**: Callbacks invoked with the new state after every `send`
//!
//! Everything runs synchronously on the caller's thread. A UI event handler
//! calls [`Store::send`], and by the time it returns every listener has seen
//! the resulting state.
//!
//! ## Example
//!
//! ```ignore
//! use module_store_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//! let subscription = store.subscribe(|state| render(state));
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state().some_field;
//!
//! // Tear down
//! store.unsubscribe(subscription);
//! ```

use module_store_core::{action::Action, reducer::Reducer};
use std::collections::VecDeque;
use std::time::Instant;

pub use error::StoreError;
pub use store::{Store, SubscriptionId};

/// Metric names and descriptions recorded by the Store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` produced more feedback actions than allowed
        ///
        /// State changes made before the limit was reached are kept and
        /// listeners are still notified. The remaining feedback is dropped.
        #[error("Feedback limit of {limit} actions exceeded in a single send")]
        FeedbackLimitExceeded {
            /// The configured `max_feedback_actions`
            limit: usize,
        },
    }
}

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use module_store_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of `Effect::Send` actions reduced during one `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Default for [`StoreConfig::max_feedback_actions`]
    pub const DEFAULT_MAX_FEEDBACK_ACTIONS: usize = 64;

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the maximum number of feedback actions per `send`
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, max: usize) -> Self {
        self.max_feedback_actions = max;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_FEEDBACK_ACTIONS)
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Action, Instant, Reducer, StoreConfig, StoreError, VecDeque};
    use crate::metrics as names;
    use module_store_core::effect::Effect;

    type Listener<S> = Box<dyn FnMut(&S)>;

    /// Handle returned by [`Store::subscribe`], used to unsubscribe
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct SubscriptionId(u64);

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (exclusively owned, mutated only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Feedback actions requested through `Effect::Send`
    /// 5. Listeners notified after every `send`
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        listeners: Vec<(SubscriptionId, Listener<S>)>,
        next_subscription: u64,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Action,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                listeners: Vec::new(),
                next_subscription: 0,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Calls the reducer with (state, action, environment)
        /// 2. Queues every `Effect::Send` action and reduces it, in FIFO order
        /// 3. Invokes every listener once with the resulting state
        ///
        /// Listeners are notified even when the call fails, since state may
        /// already have changed.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if the reducer keeps
        /// requesting feedback actions past `max_feedback_actions`.
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            let span = tracing::debug_span!("store_send", action = action.name());
            let _enter = span.enter();

            let result = self.run_feedback_loop(action);
            self.notify();

            if result.is_ok() {
                tracing::debug!("Action processing completed");
            }
            result
        }

        /// Register a listener invoked with the state after every `send`
        ///
        /// Listeners run in subscription order. The caller owns the returned
        /// id and must pass it to [`Store::unsubscribe`] on teardown.
        pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
        where
            F: FnMut(&S) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.listeners.push((id, Box::new(listener)));
            tracing::trace!(subscription = id.0, "Listener subscribed");
            id
        }

        /// Remove a listener
        ///
        /// Returns `false` if the id was not subscribed (already removed).
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.listeners.len();
            self.listeners.retain(|(subscribed, _)| *subscribed != id);
            let removed = self.listeners.len() != before;
            tracing::trace!(subscription = id.0, removed, "Listener unsubscribed");
            removed
        }

        /// Number of registered listeners
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.listeners.len()
        }

        /// Current state
        #[must_use]
        pub const fn state(&self) -> &S {
            &self.state
        }

        /// Active configuration
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }

        fn run_feedback_loop(&mut self, action: A) -> Result<(), StoreError> {
            let mut queue = VecDeque::from([action]);
            let mut feedback = 0_usize;

            while let Some(action) = queue.pop_front() {
                let name = action.name();
                metrics::counter!(names::ACTIONS_TOTAL, "action" => name).increment(1);

                let start = Instant::now();
                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                metrics::histogram!(names::REDUCER_DURATION_SECONDS)
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!(
                    action = name,
                    "Reducer completed, returned {} effects",
                    effects.len()
                );

                for next in effects.into_iter().filter_map(Effect::into_action) {
                    if feedback == self.config.max_feedback_actions {
                        let limit = self.config.max_feedback_actions;
                        tracing::warn!(limit, dropped = next.name(), "Feedback limit exceeded");
                        metrics::counter!(names::FEEDBACK_LIMIT_EXCEEDED).increment(1);
                        return Err(StoreError::FeedbackLimitExceeded { limit });
                    }
                    feedback += 1;
                    metrics::counter!(names::FEEDBACK_TOTAL).increment(1);
                    tracing::trace!(action = next.name(), "Queued feedback action");
                    queue.push_back(next);
                }
            }

            Ok(())
        }

        fn notify(&mut self) {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
            let notified = u64::try_from(self.listeners.len()).unwrap_or(u64::MAX);
            metrics::counter!(names::LISTENERS_NOTIFIED).increment(notified);
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("config", &self.config)
                .field("listeners", &self.listeners.len())
                .finish_non_exhaustive()
        }
    }
}
