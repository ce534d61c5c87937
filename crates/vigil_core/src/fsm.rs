//! State Machine Runtime
//!
//! Flat state machines for widget interaction states.
//! Supports:
//! - Guards (conditional transitions)
//! - Entry/exit actions
//! - Transition actions
//!
//! States and events are caller-defined `Copy` enums, so an event that has no
//! transition from the current state is simply ignored.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action function executed during transitions
pub type Action = Box<dyn FnMut() + Send>;

/// Maximum number of transitions kept in the history ring
const HISTORY_LIMIT: usize = 64;

/// A transition in the state machine
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl<S, E> Transition<S, E> {
    /// Create a simple transition without guard or actions
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn allows(&self) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard())
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: S, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: S, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
    /// Most recent transitions, oldest first (for debugging)
    history: Vec<(S, E, S)>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq,
{
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.find(event).is_some()
    }

    fn find(&self, event: E) -> Option<usize> {
        let current = self.current_state;
        self.transitions
            .iter()
            .position(|t| t.from_state == current && t.event == event && t.allows())
    }

    /// Send an event to the state machine.
    ///
    /// Returns the new state when a transition fired, `None` when the event
    /// was ignored.
    pub fn send(&mut self, event: E) -> Option<S> {
        let idx = self.find(event)?;
        let current = self.current_state;
        let to_state = self.transitions[idx].to_state;

        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current_state = to_state;

        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((current, event, to_state));

        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        Some(to_state)
    }

    /// Register an entry callback for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(&mut self, state: S, callback: F) {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }

    /// Register an exit callback for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(&mut self, state: S, callback: F) {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Pointer {
        Idle,
        Hovered,
        Pressed,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Input {
        Enter,
        Leave,
        Down,
        Up,
    }

    use Input::*;
    use Pointer::*;

    #[test]
    fn test_simple_transitions() {
        let mut fsm = StateMachine::new(
            Idle,
            vec![
                Transition::new(Idle, Enter, Hovered),
                Transition::new(Hovered, Leave, Idle),
                Transition::new(Hovered, Down, Pressed),
                Transition::new(Pressed, Up, Hovered),
            ],
        );

        assert_eq!(fsm.current_state(), Idle);
        assert_eq!(fsm.send(Enter), Some(Hovered));
        assert_eq!(fsm.send(Down), Some(Pressed));
        assert_eq!(fsm.send(Up), Some(Hovered));
        assert_eq!(fsm.send(Leave), Some(Idle));
        assert_eq!(fsm.history().len(), 4);
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = StateMachine::new(Idle, vec![Transition::new(Idle, Enter, Hovered)]);

        // Down is not valid in Idle
        assert_eq!(fsm.send(Down), None);
        assert_eq!(fsm.current_state(), Idle);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_guard_conditions() {
        let enabled = Arc::new(Mutex::new(true));
        let enabled_clone = enabled.clone();

        let mut fsm = StateMachine::builder(Idle)
            .transition(
                Transition::new(Idle, Enter, Hovered)
                    .with_guard(move || *enabled_clone.lock().unwrap()),
            )
            .on(Hovered, Leave, Idle)
            .build();

        assert!(fsm.can_send(Enter));
        fsm.send(Enter);
        assert!(fsm.is_in(Hovered));

        fsm.send(Leave);
        *enabled.lock().unwrap() = false;
        assert!(!fsm.can_send(Enter));
        assert_eq!(fsm.send(Enter), None);
        assert!(fsm.is_in(Idle));
    }

    #[test]
    fn test_entry_exit_callbacks() {
        let entry_count = Arc::new(Mutex::new(0));
        let exit_count = Arc::new(Mutex::new(0));

        let entry_clone = entry_count.clone();
        let exit_clone = exit_count.clone();

        let mut fsm = StateMachine::builder(Idle)
            .on(Idle, Enter, Hovered)
            .on(Hovered, Leave, Idle)
            .on_enter(Hovered, move || {
                *entry_clone.lock().unwrap() += 1;
            })
            .on_exit(Hovered, move || {
                *exit_clone.lock().unwrap() += 1;
            })
            .build();

        fsm.send(Enter);
        assert_eq!(*entry_count.lock().unwrap(), 1);
        assert_eq!(*exit_count.lock().unwrap(), 0);

        fsm.send(Leave);
        assert_eq!(*exit_count.lock().unwrap(), 1);

        // Ignored events fire nothing
        fsm.send(Leave);
        assert_eq!(*exit_count.lock().unwrap(), 1);
    }

    #[test]
    fn test_transition_actions() {
        let action_count = Arc::new(Mutex::new(0));
        let action_clone = action_count.clone();

        let mut fsm = StateMachine::builder(Idle)
            .transition(Transition::new(Idle, Enter, Hovered).with_action(move || {
                *action_clone.lock().unwrap() += 1;
            }))
            .build();

        fsm.send(Enter);
        assert_eq!(*action_count.lock().unwrap(), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut fsm = StateMachine::builder(Idle)
            .on(Idle, Enter, Hovered)
            .on(Hovered, Leave, Idle)
            .build();

        for _ in 0..HISTORY_LIMIT {
            fsm.send(Enter);
            fsm.send(Leave);
        }
        assert_eq!(fsm.history().len(), HISTORY_LIMIT);
        assert_eq!(fsm.history().last(), Some(&(Hovered, Leave, Idle)));

        fsm.clear_history();
        assert!(fsm.history().is_empty());
    }
}
