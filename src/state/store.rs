use super::{GraphAction, GraphState, reduce};
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle of a [`GraphStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePhase {
    /// Empty graph and blank global data.
    Uninitialized,
    /// An `Initialize` transition has been applied.
    Ready,
}

/// Owner of the session's graph state.
///
/// Transitions are applied one at a time through [`GraphStore::dispatch`]; each
/// one swaps in the state returned by [`reduce`]. Readers hold on to cheap
/// `Arc` snapshots.
#[derive(Debug)]
pub struct GraphStore {
    state: Arc<GraphState>,
    phase: StorePhase,
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(GraphState::default()),
            phase: StorePhase::Uninitialized,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<GraphState> {
        Arc::clone(&self.state)
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == StorePhase::Ready
    }

    /// Applies `action`. Returns `true` if the state reference changed.
    pub fn dispatch(&mut self, action: GraphAction) -> bool {
        let initializes = matches!(action, GraphAction::Initialize(_));
        let next = reduce(&self.state, action);
        let changed = !Arc::ptr_eq(&next, &self.state);
        self.state = next;

        if initializes {
            info!(
                nodes = self.state.nodes.len(),
                edges = self.state.edges.len(),
                "Graph state initialized"
            );
            self.phase = StorePhase::Ready;
        } else if !changed {
            debug!("Transition left the graph state unchanged");
        }
        changed
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
