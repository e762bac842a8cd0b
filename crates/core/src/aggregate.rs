//! Command/event state machine used for client-side state such as the cart.

/// State that changes only by applying events it decided on itself.
///
/// `handle` inspects the current state and answers a command with the events
/// that describe the change (or an error, leaving the state alone). `apply`
/// folds one of those events into the state. Neither step reads or writes
/// the preference store; the owner persists after applying.
pub trait Aggregate {
    type Command: core::fmt::Debug;
    type Event: Clone + core::fmt::Debug;
    type Error: core::fmt::Debug;

    /// Events applied since hydration. Hydrated state starts at 0.
    fn version(&self) -> u64;

    /// Fold one event into the state; bumps `version()` by one.
    fn apply(&mut self, event: &Self::Event);

    /// Decide the events for `command` without mutating anything.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;
}
