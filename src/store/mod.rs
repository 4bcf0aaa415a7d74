// Application state store
pub mod actions;
pub mod backend;
pub mod state;

pub use actions::Action;
pub use backend::{FileBackend, MemoryBackend, ProfileBackend};
pub use state::{get_network_error, AppState};

use crate::error::Result;
use crate::models::{AwsProfile, User};
use actions::{FETCH_AWS_PROFILES, REMOVE_AWS_PROFILE, SAVE_AWS_PROFILE};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion of a backend call started by `dispatch`
#[derive(Debug)]
pub enum StoreEvent {
    ProfilesFetched(Result<Vec<AwsProfile>>),
    ProfileSaved {
        index: usize,
        result: Result<AwsProfile>,
    },
    ProfileRemoved {
        id: String,
        result: Result<()>,
    },
}

/// Holds the state and executes actions against a backend.
///
/// Local actions apply immediately. Actions that need the backend run on a
/// blocking tokio task and report back through a channel; their results are
/// applied by `process_events` or `next_event`.
pub struct Store<B: ProfileBackend> {
    state: AppState,
    backend: Arc<B>,
    events_tx: mpsc::UnboundedSender<StoreEvent>,
    events_rx: mpsc::UnboundedReceiver<StoreEvent>,
    in_flight: usize,
}

impl<B: ProfileBackend> Store<B> {
    pub fn new(backend: B, user: Option<User>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        state.auth.user = user;

        Self {
            state,
            backend: Arc::new(backend),
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of backend calls that have not reported back yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching {:?}", action);
        let aws = &mut self.state.preferences.aws;

        match action {
            Action::FetchAwsProfiles => {
                self.spawn(|backend| StoreEvent::ProfilesFetched(backend.list()));
            }
            Action::AddAwsProfile => {
                aws.list.push(AwsProfile::draft());
                aws.active = aws.list.len() - 1;
            }
            Action::UpdateAwsProfile {
                index,
                profile,
                save,
            } => {
                if index >= aws.list.len() {
                    tracing::warn!("Ignoring update for out of range index {}", index);
                    return;
                }
                if save {
                    aws.pending = true;
                    self.spawn(move |backend| StoreEvent::ProfileSaved {
                        index,
                        result: backend.create(profile),
                    });
                } else {
                    aws.list[index] = profile;
                }
            }
            Action::RemoveAwsProfile { index, profile } => match profile.id {
                Some(id) => {
                    aws.pending = true;
                    self.spawn(move |backend| {
                        let result = backend.delete(&id);
                        StoreEvent::ProfileRemoved { id, result }
                    });
                }
                None => {
                    if index < aws.list.len() {
                        aws.list.remove(index);
                        aws.clamp_active();
                    }
                }
            },
            Action::UpdateActiveProfile(index) => {
                if index < aws.list.len() {
                    aws.active = index;
                }
            }
            Action::InvalidateErrors(keys) => {
                self.state.network.invalidate(&keys);
            }
        }
    }

    fn spawn<F>(&mut self, op: F)
    where
        F: FnOnce(&B) -> StoreEvent + Send + 'static,
    {
        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        self.in_flight += 1;

        tokio::task::spawn_blocking(move || {
            let event = op(&backend);
            // The receiver lives as long as the store
            let _ = tx.send(event);
        });
    }

    /// Apply every completion that is already available. Returns true if any was applied.
    pub fn process_events(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied = true;
        }
        applied
    }

    /// Wait for the next completion and apply it
    pub async fn next_event(&mut self) -> bool {
        match self.events_rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, event: StoreEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let network = &mut self.state.network;
        let aws = &mut self.state.preferences.aws;

        match event {
            StoreEvent::ProfilesFetched(Ok(list)) => {
                tracing::info!("Fetched {} AWS profiles", list.len());
                aws.list = list;
                aws.clamp_active();
                network.clear(FETCH_AWS_PROFILES);
            }
            StoreEvent::ProfilesFetched(Err(e)) => {
                tracing::warn!("Failed to fetch AWS profiles: {}", e);
                network.record(FETCH_AWS_PROFILES, e.to_string());
            }
            StoreEvent::ProfileSaved { index, result } => {
                aws.pending = false;
                match result {
                    Ok(saved) => {
                        tracing::info!("Saved AWS profile '{}'", saved.name);
                        if index < aws.list.len() {
                            aws.list[index] = saved;
                        } else {
                            aws.list.push(saved);
                        }
                        network.clear(SAVE_AWS_PROFILE);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to save AWS profile: {}", e);
                        network.record(SAVE_AWS_PROFILE, e.to_string());
                    }
                }
            }
            StoreEvent::ProfileRemoved { id, result } => {
                aws.pending = false;
                match result {
                    Ok(()) => {
                        tracing::info!("Removed AWS profile {}", id);
                        aws.list.retain(|p| p.id.as_deref() != Some(id.as_str()));
                        aws.clamp_active();
                        network.clear(REMOVE_AWS_PROFILE);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to remove AWS profile {}: {}", id, e);
                        network.record(REMOVE_AWS_PROFILE, e.to_string());
                    }
                }
            }
        }
    }
}
