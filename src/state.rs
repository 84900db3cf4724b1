use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::listing::Dashboard;
use crate::persist::{FileStore, Persistence};
use crate::session::SessionGate;
use crate::store::{RestStore, SubmissionStore};

/// Everything the handlers share: the store client, the dashboard's cached
/// set, the session gate, and the persistence backend behind the gate and
/// the column preferences.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubmissionStore>,
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub gate: Arc<SessionGate>,
    pub persist: Arc<dyn Persistence>,
}

impl AppState {
    /// Production wiring: REST store from env config, file-backed state.
    pub fn from_config(config: &AppConfig) -> Self {
        let persist: Arc<dyn Persistence> =
            Arc::new(FileStore::open(&config.persist.state_file));
        let store: Arc<dyn SubmissionStore> = Arc::new(RestStore::from_config(&config.store));
        Self::assemble(store, persist)
    }

    /// Wiring with explicit backends, for tests.
    pub fn with_backends(store: Arc<dyn SubmissionStore>, persist: Arc<dyn Persistence>) -> Self {
        Self::assemble(store, persist)
    }

    fn assemble(store: Arc<dyn SubmissionStore>, persist: Arc<dyn Persistence>) -> Self {
        let gate = Arc::new(SessionGate::restore(persist.clone()));
        Self {
            store,
            dashboard: Arc::new(RwLock::new(Dashboard::new())),
            gate,
            persist,
        }
    }
}
