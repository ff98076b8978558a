//! The persisted view-model pattern.
//!
//! Every studio feature owns one storage slot. A [`ViewModel`] describes the
//! slot (key, default, encoding), how actions change its state, and how the
//! state projects onto a view. A [`Binding`] pairs a view-model with a
//! [`KeyValueStore`] and runs the load → mutate → persist → render cycle.
//!
//! Views are plain values. Rendering never looks at a previous view, so the
//! same state always produces an equal view.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::storage::KeyValueStore;

pub trait ViewModel {
    type State: Serialize + DeserializeOwned + Clone;
    type Action;
    type View: PartialEq;

    /// Storage key of the slot.
    fn key(&self) -> &'static str;

    /// State used when the slot is absent or unreadable.
    fn default_state(&self) -> Self::State;

    /// Parse a stored value. `None` means the value is unreadable.
    fn decode(&self, raw: &str) -> Option<Self::State> {
        serde_json::from_str(raw).ok()
    }

    fn encode(&self, state: &Self::State) -> Result<String> {
        Ok(serde_json::to_string(state)?)
    }

    /// Apply an action to a loaded state, producing the next canonical state.
    fn mutate(&self, state: Self::State, action: Self::Action) -> Result<Self::State>;

    fn render(&self, state: &Self::State) -> Self::View;
}

/// A view-model bound to a store.
pub struct Binding<'a, S: ?Sized, M> {
    store: &'a S,
    model: M,
}

impl<'a, S, M> Binding<'a, S, M>
where
    S: KeyValueStore + ?Sized,
    M: ViewModel,
{
    pub fn new(store: &'a S, model: M) -> Self {
        Self { store, model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Read the slot. Absent and unreadable values both yield the default.
    pub fn load(&self) -> M::State {
        let key = self.model.key();
        match self.store.get(key) {
            None => self.model.default_state(),
            Some(raw) => self.model.decode(&raw).unwrap_or_else(|| {
                tracing::debug!("Unreadable value at {key}, using default");
                self.model.default_state()
            }),
        }
    }

    /// Overwrite the slot with `state`.
    pub fn persist(&self, state: &M::State) -> Result<()> {
        let raw = self.model.encode(state)?;
        self.store.set(self.model.key(), &raw)
    }

    pub fn render(&self, state: &M::State) -> M::View {
        self.model.render(state)
    }

    /// Render whatever is stored right now.
    pub fn current_view(&self) -> M::View {
        self.render(&self.load())
    }

    /// Load the slot and apply `action` without persisting.
    pub fn mutate(&self, action: M::Action) -> Result<M::State> {
        self.model.mutate(self.load(), action)
    }

    /// The full cycle: load, mutate, persist, render.
    ///
    /// A rejected action leaves storage untouched.
    pub fn dispatch(&self, action: M::Action) -> Result<M::View> {
        let next = self.mutate(action)?;
        self.persist(&next)?;
        tracing::debug!("Persisted {}", self.model.key());
        Ok(self.render(&next))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::error::StudioError;
    use crate::storage::MemoryStore;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    struct CounterModel;

    impl ViewModel for CounterModel {
        type State = Counter;
        type Action = u32;
        type View = String;

        fn key(&self) -> &'static str {
            "counter"
        }

        fn default_state(&self) -> Counter {
            Counter { value: 1 }
        }

        fn mutate(&self, state: Counter, by: u32) -> Result<Counter> {
            if by == 0 {
                return Err(StudioError::Validation("zero".into()));
            }
            Ok(Counter {
                value: state.value + by,
            })
        }

        fn render(&self, state: &Counter) -> String {
            format!("count={}", state.value)
        }
    }

    #[test]
    fn absent_and_malformed_load_default() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, CounterModel);
        assert_eq!(binding.load(), Counter { value: 1 });

        store.set("counter", "{not json").unwrap();
        assert_eq!(binding.load(), Counter { value: 1 });
    }

    #[test]
    fn dispatch_persists_then_renders() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, CounterModel);
        assert_eq!(binding.dispatch(4).unwrap(), "count=5");
        assert_eq!(store.get("counter").as_deref(), Some(r#"{"value":5}"#));
        assert_eq!(binding.current_view(), "count=5");
    }

    #[test]
    fn rejected_action_leaves_storage_alone() {
        let store = MemoryStore::new();
        let binding = Binding::new(&store, CounterModel);
        binding.dispatch(2).unwrap();
        assert!(binding.dispatch(0).unwrap_err().is_validation());
        assert_eq!(binding.load(), Counter { value: 3 });
    }
}
