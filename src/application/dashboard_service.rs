// Dashboard service - Session state and derived views for the dashboard
use crate::application::aggregation;
use crate::application::dataset_store::DatasetStore;
use crate::domain::dashboard::{DashboardSnapshot, DashboardView, DatasetViews, SelectionViews};
use crate::domain::forecast::Dataset;
use crate::domain::recommendation::{recommendation_context, recommendations};
use crate::domain::selection::Selection;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Lifecycle of the dataset within a session.
#[derive(Debug, Clone)]
pub enum DatasetState {
    Unloaded,
    Failed { message: String },
    Empty,
    Ready(Dataset),
}

type SelectionKey = (u64, (Option<String>, Option<String>));

#[derive(Debug, Default)]
struct ViewCache {
    dataset: Option<(u64, Arc<DatasetViews>)>,
    selection: Option<(SelectionKey, Arc<SelectionViews>)>,
}

#[derive(Debug)]
struct Session {
    dataset: DatasetState,
    selection: Selection,
    next_generation: u64,
    cache: ViewCache,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            dataset: DatasetState::Unloaded,
            selection: Selection::default(),
            next_generation: 1,
            cache: ViewCache::default(),
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DatasetStore>,
    session: Arc<RwLock<Session>>,
    fetch_lock: Arc<Mutex<()>>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self {
            store,
            session: Arc::new(RwLock::new(Session::default())),
            fetch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the dataset once. Later calls are no-ops, including after a failure.
    pub async fn load(&self) -> DashboardSnapshot {
        {
            let _fetching = self.fetch_lock.lock().await;
            let unloaded = matches!(self.session.read().await.dataset, DatasetState::Unloaded);
            if unloaded {
                self.fetch_and_replace().await;
            }
        }
        self.dashboard().await
    }

    /// Replace the dataset wholesale with a fresh fetch.
    pub async fn refresh(&self) -> DashboardSnapshot {
        {
            let _fetching = self.fetch_lock.lock().await;
            self.fetch_and_replace().await;
        }
        self.dashboard().await
    }

    async fn fetch_and_replace(&self) {
        let result = self.store.fetch_all().await;

        let mut session = self.session.write().await;
        session.cache = ViewCache::default();
        let state = match result {
            Ok(rows) if rows.is_empty() => {
                tracing::warn!("Forecast dataset is empty");
                DatasetState::Empty
            }
            Ok(rows) => {
                let generation = session.next_generation;
                session.next_generation += 1;
                let dataset = Dataset::new(generation, rows);
                tracing::info!(
                    generation,
                    rows = dataset.len(),
                    "Loaded forecast dataset"
                );

                if session.selection.apply_default(&dataset) {
                    tracing::debug!(
                        product = ?session.selection.product(),
                        region = ?session.selection.region(),
                        "Applied default selection"
                    );
                }
                DatasetState::Ready(dataset)
            }
            Err(e) => {
                tracing::error!("Error fetching forecast dataset: {:#}", e);
                DatasetState::Failed {
                    message: "Não foi possível carregar os dados.".to_string(),
                }
            }
        };
        session.dataset = state;
    }

    pub async fn set_product(&self, product: &str) -> DashboardSnapshot {
        {
            let mut session = self.session.write().await;
            session.selection.set_product(product);
            tracing::debug!(product, "Product selected");
        }
        self.dashboard().await
    }

    pub async fn set_region(&self, region: &str) -> DashboardSnapshot {
        {
            let mut session = self.session.write().await;
            session.selection.set_region(region);
            tracing::debug!(region, "Region selected");
        }
        self.dashboard().await
    }

    pub async fn product_catalog(&self) -> Vec<String> {
        match &self.session.read().await.dataset {
            DatasetState::Ready(dataset) => aggregation::product_catalog(dataset.rows()),
            _ => Vec::new(),
        }
    }

    pub async fn region_catalog(&self, product: Option<&str>) -> Vec<String> {
        match &self.session.read().await.dataset {
            DatasetState::Ready(dataset) => aggregation::region_catalog(dataset.rows(), product),
            _ => Vec::new(),
        }
    }

    /// Current dashboard contents, served from the view cache when the
    /// dataset and selection are unchanged.
    pub async fn dashboard(&self) -> DashboardSnapshot {
        let mut guard = self.session.write().await;
        let session = &mut *guard;

        let dataset = match &session.dataset {
            DatasetState::Unloaded => return DashboardSnapshot::Loading,
            DatasetState::Empty => return DashboardSnapshot::Empty,
            DatasetState::Failed { message } => {
                return DashboardSnapshot::Unavailable {
                    message: message.clone(),
                };
            }
            DatasetState::Ready(dataset) => dataset,
        };

        let cached = session
            .cache
            .dataset
            .as_ref()
            .filter(|(generation, _)| *generation == dataset.generation())
            .map(|(_, views)| views.clone());
        let dataset_views = match cached {
            Some(views) => views,
            None => {
                let views = Arc::new(build_dataset_views(dataset));
                session.cache.dataset = Some((dataset.generation(), views.clone()));
                views
            }
        };

        let key = (dataset.generation(), session.selection.key());
        let cached = session
            .cache
            .selection
            .as_ref()
            .filter(|(cached_key, _)| *cached_key == key)
            .map(|(_, views)| views.clone());
        let selection_views = match cached {
            Some(views) => views,
            None => {
                let views = Arc::new(build_selection_views(dataset, &session.selection));
                session.cache.selection = Some((key, views.clone()));
                views
            }
        };

        DashboardSnapshot::Ready(Box::new(DashboardView {
            generation: dataset.generation(),
            selection: session.selection.clone(),
            dataset: (*dataset_views).clone(),
            selected: (*selection_views).clone(),
        }))
    }
}

fn build_dataset_views(dataset: &Dataset) -> DatasetViews {
    let rows = dataset.rows();
    DatasetViews {
        products: aggregation::product_catalog(rows),
        market_distribution: aggregation::market_distribution(rows),
        regional_rollup: aggregation::regional_rollup(rows),
        accuracy_rollup: aggregation::accuracy_rollup(rows),
    }
}

fn build_selection_views(dataset: &Dataset, selection: &Selection) -> SelectionViews {
    let rows = dataset.rows();
    let regions = aggregation::region_catalog(rows, selection.product());
    let current = if selection.is_complete() {
        aggregation::resolve(rows, selection.product(), selection.region())
    } else {
        None
    };

    SelectionViews {
        region_offered: selection.region_is_offered(&regions),
        regions,
        current: current.cloned(),
        kpis: current.map(aggregation::kpi_summary),
        monthly_series: current.map(aggregation::monthly_series).unwrap_or_default(),
        recommendations: recommendations(current, selection.region()),
        recommendation_context: current
            .and(recommendation_context(selection.product(), selection.region())),
    }
}
