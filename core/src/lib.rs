//! # Module Store Core
//!
//! Core traits and types for reducer-driven UI state modules.
//!
//! A feature is described by three pieces, and executed by the runtime crate:
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: Every input the feature reacts to (user intents, follow-ups)
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//!
//! Effects are descriptions, not execution. The only effect a reducer can
//! request is feeding another action back into the store, which the runtime
//! does synchronously before listeners are notified.
//!
//! ## Example
//!
//! ```
//! use module_store_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     IncrementTwice,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 SmallVec::new()
//!             }
//!             CounterAction::IncrementTwice => smallvec![
//!                 Effect::send(CounterAction::Increment),
//!                 Effect::send(CounterAction::Increment),
//!             ],
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::IncrementTwice, &());
//! assert_eq!(effects.len(), 2);
//! assert_eq!(state.count, 0);
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Action module - Unified input type for reducers
///
/// Actions represent every state transition a feature supports. The runtime
/// only needs a stable name for each of them, for logging and metrics.
pub mod action {
    /// Common behavior of action enums
    ///
    /// Usually derived with `#[derive(Action)]` from `module-store-macros`,
    /// which returns the variant name.
    pub trait Action {
        /// Stable, human readable name of this action
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions to be executed by the store
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are returned from reducers and executed by the Store runtime.
pub mod effect {
    /// Effect type - describes work for the store to do after a reduction
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the store
        ///
        /// Feedback actions are reduced in FIFO order within the same `send`.
        Send(Action),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the store
        #[must_use]
        pub const fn send(action: Action) -> Self {
            Self::Send(action)
        }

        /// Returns true for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }

        /// Returns the action carried by an [`Effect::Send`]
        #[must_use]
        pub fn into_action(self) -> Option<Action> {
            match self {
                Self::None => None,
                Self::Send(action) => Some(action),
            }
        }
    }
}
