use crate::budgets::BudgetBoard;
use crate::globe::GlobeScene;
use crate::http_handler::http_client::HTTPClient;
use crate::panels::{AstronautPanel, TimelinePanel};
use crate::preloader::Preloader;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, the preloader and the content holders the
/// loader tasks fill in.
///
/// Every holder starts in its offline/empty state; loader tasks replace the
/// contents and complete the matching readiness signal, so a failed load
/// leaves a valid (empty) collaborator behind.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for fetching the static JSON documents.
    client: Arc<HTTPClient>,
    /// The preloader gating the content reveal.
    preloader: Arc<Preloader>,
    /// The satellite globe scene context.
    globe: Arc<RwLock<GlobeScene>>,
    /// The budget board scene context.
    budgets: Arc<RwLock<BudgetBoard>>,
    /// The rendered milestone timeline.
    timeline: Arc<RwLock<TimelinePanel>>,
    /// The rendered astronaut records.
    astronauts: Arc<RwLock<AstronautPanel>>,
}

impl Keychain {
    pub fn new(url: &str) -> Self {
        Self {
            client: Arc::new(HTTPClient::new(url)),
            preloader: Arc::new(Preloader::new()),
            globe: Arc::new(RwLock::new(GlobeScene::offline())),
            budgets: Arc::new(RwLock::new(BudgetBoard::offline())),
            timeline: Arc::new(RwLock::new(TimelinePanel::offline())),
            astronauts: Arc::new(RwLock::new(AstronautPanel::offline())),
        }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the preloader.
    pub fn preloader(&self) -> Arc<Preloader> { Arc::clone(&self.preloader) }

    /// Provides a cloned reference to the globe scene.
    pub fn globe(&self) -> Arc<RwLock<GlobeScene>> { Arc::clone(&self.globe) }

    /// Provides a cloned reference to the budget board.
    pub fn budgets(&self) -> Arc<RwLock<BudgetBoard>> { Arc::clone(&self.budgets) }

    /// Provides a cloned reference to the timeline panel.
    pub fn timeline(&self) -> Arc<RwLock<TimelinePanel>> { Arc::clone(&self.timeline) }

    /// Provides a cloned reference to the astronaut panel.
    pub fn astronauts(&self) -> Arc<RwLock<AstronautPanel>> { Arc::clone(&self.astronauts) }
}
