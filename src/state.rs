use crate::application::ports::{ThreadViewport, UserNotifier};
use crate::application::services::{DebouncedSearch, ResourceStore, ThreadSyncService};
use crate::domain::entities::{
    Assignment, AssignmentType, BankCheck, Color, Entity, Invoice, PaymentType, ResourceRecord,
    Vehicle, VehicleBrand, VehicleModel,
};
use crate::infrastructure::api::{RestClient, RestMessageGateway, RestResourceGateway};
use crate::shared::{AppConfig, AppError};
use std::sync::Arc;
use std::time::Duration;

fn build_store<R: ResourceRecord>(
    client: &RestClient,
    notifier: &Arc<dyn UserNotifier>,
) -> Arc<ResourceStore<R>> {
    Arc::new(ResourceStore::new(
        Arc::new(RestResourceGateway::<R>::new(client.clone())),
        Arc::clone(notifier),
    ))
}

/// Application-wide state, constructed once at boot and handed to the UI
/// layer. One store per resource is the single source of truth for that
/// resource; nothing else talks to the API.
#[derive(Clone)]
pub struct AppState {
    pub colors: Arc<ResourceStore<Color>>,
    pub entities: Arc<ResourceStore<Entity>>,
    pub assignment_types: Arc<ResourceStore<AssignmentType>>,
    pub payment_types: Arc<ResourceStore<PaymentType>>,
    pub vehicle_brands: Arc<ResourceStore<VehicleBrand>>,
    pub vehicle_models: Arc<ResourceStore<VehicleModel>>,
    pub vehicles: Arc<ResourceStore<Vehicle>>,
    pub invoices: Arc<ResourceStore<Invoice>>,
    pub checks: Arc<ResourceStore<BankCheck>>,
    pub assignments: Arc<ResourceStore<Assignment>>,
    pub assignment_thread: Arc<ThreadSyncService>,
    debounce: Duration,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        notifier: Arc<dyn UserNotifier>,
        viewport: Arc<dyn ThreadViewport>,
    ) -> Result<Self, AppError> {
        let client = RestClient::new(&config.api)?;

        let assignment_thread = Arc::new(ThreadSyncService::new(
            Arc::new(RestMessageGateway::new(client.clone())),
            Arc::clone(&notifier),
            viewport,
            Duration::from_secs(config.sync.poll_interval_secs),
        ));

        Ok(Self {
            colors: build_store(&client, &notifier),
            entities: build_store(&client, &notifier),
            assignment_types: build_store(&client, &notifier),
            payment_types: build_store(&client, &notifier),
            vehicle_brands: build_store(&client, &notifier),
            vehicle_models: build_store(&client, &notifier),
            vehicles: build_store(&client, &notifier),
            invoices: build_store(&client, &notifier),
            checks: build_store(&client, &notifier),
            assignments: build_store(&client, &notifier),
            assignment_thread,
            debounce: Duration::from_millis(config.list.debounce_ms),
        })
    }

    /// Search box binding for any of the held stores, using the configured
    /// quiet period.
    pub fn debounced_search<R: ResourceRecord>(
        &self,
        store: &Arc<ResourceStore<R>>,
    ) -> DebouncedSearch<R> {
        DebouncedSearch::new(Arc::clone(store), self.debounce)
    }
}
