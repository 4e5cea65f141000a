use async_trait::async_trait;
use expertise_backoffice::application::ports::{ResourceGateway, ResourcePage, UserNotifier};
use expertise_backoffice::application::services::ResourceStore;
use expertise_backoffice::domain::entities::{
    Color, ColorPayload, ResourceRecord, VehicleModel, VehicleModelPayload,
};
use expertise_backoffice::domain::value_objects::{FilterState, FilterValue, PageMeta, RecordId};
use expertise_backoffice::shared::AppError;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

struct NoopNotifier;

#[async_trait]
impl UserNotifier for NoopNotifier {
    async fn success(&self, _message: &str) {}
    async fn error(&self, _message: &str) {}
}

fn paginate<T: Clone>(rows: &[T], page: u32, per_page: u32) -> ResourcePage<T> {
    let total = rows.len() as u64;
    let last_page = (total.max(1) as u32).div_ceil(per_page).max(1);
    let start = ((page - 1) * per_page) as usize;
    let data: Vec<T> = rows.iter().skip(start).take(per_page as usize).cloned().collect();
    let from = if data.is_empty() {
        None
    } else {
        Some(start as u64 + 1)
    };
    let to = from.map(|from| from + data.len() as u64 - 1);
    ResourcePage {
        data,
        meta: PageMeta {
            current_page: page,
            last_page,
            per_page,
            total,
            from,
            to,
        },
    }
}

/// Backend double holding colors sorted by name, the way the server lists them.
struct InMemoryColors {
    rows: Mutex<Vec<Color>>,
    next_id: AtomicI64,
    per_page: u32,
}

impl InMemoryColors {
    fn seeded(names: &[&str], per_page: u32) -> Self {
        let rows = names
            .iter()
            .enumerate()
            .map(|(index, name)| Color {
                id: index as i64 + 1,
                name: name.to_string(),
                code: None,
            })
            .collect::<Vec<_>>();
        let next_id = rows.len() as i64 + 1;
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next_id),
            per_page,
        }
    }
}

#[async_trait]
impl ResourceGateway<Color> for InMemoryColors {
    async fn list(&self, page: u32, filters: &FilterState) -> Result<ResourcePage<Color>, AppError> {
        let mut rows = self.rows.lock().await.clone();
        if let Some(FilterValue::Text(search)) = filters.get("search") {
            let needle = search.to_lowercase();
            rows.retain(|row| row.name.to_lowercase().contains(&needle));
        }
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(&rows, page, self.per_page))
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Color, AppError> {
        self.rows
            .lock()
            .await
            .iter()
            .find(|row| RecordId::Number(row.id) == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("colors/{}", id)))
    }

    async fn create(&self, payload: &ColorPayload) -> Result<Color, AppError> {
        let color = Color {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: payload.name.clone(),
            code: payload.code.clone(),
        };
        self.rows.lock().await.push(color.clone());
        Ok(color)
    }

    async fn update(&self, id: &RecordId, payload: &ColorPayload) -> Result<Color, AppError> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .iter_mut()
            .find(|row| RecordId::Number(row.id) == *id)
            .ok_or_else(|| AppError::NotFound(format!("colors/{}", id)))?;
        row.name = payload.name.clone();
        row.code = payload.code.clone();
        Ok(row.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), AppError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|row| RecordId::Number(row.id) != *id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("colors/{}", id)));
        }
        Ok(())
    }
}

fn color_store(gateway: InMemoryColors) -> ResourceStore<Color> {
    ResourceStore::new(Arc::new(gateway), Arc::new(NoopNotifier))
}

#[tokio::test]
async fn refetching_the_same_page_is_idempotent() {
    let store = color_store(InMemoryColors::seeded(
        &["amber", "blue", "coral", "denim", "ebony"],
        2,
    ));

    store.fetch(Some(2), None).await;
    let first = store.snapshot().await;
    store.fetch(Some(2), None).await;
    let second = store.snapshot().await;

    assert_eq!(first.items, second.items);
    assert_eq!(first.cursor, second.cursor);
    assert_eq!(first.cursor.current_page, 2);
    assert_eq!(first.cursor.last_page, 3);
    assert_eq!(first.cursor.from, Some(3));
    assert_eq!(first.cursor.to, Some(4));
}

#[tokio::test]
async fn created_record_lands_where_server_pagination_puts_it() {
    let store = color_store(InMemoryColors::seeded(&["amber", "blue", "coral"], 2));
    store.fetch(None, None).await;

    store
        .create(&ColorPayload {
            name: "zinc".to_string(),
            code: None,
        })
        .await
        .unwrap();

    // page 1 is re-fetched and correctly omits the new record
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.cursor.total, 4);
    assert!(snapshot.items.iter().all(|row| row.name != "zinc"));

    store.fetch(Some(snapshot.cursor.last_page), None).await;
    let last_page = store.snapshot().await;
    assert!(last_page.items.iter().any(|row| row.name == "zinc"));
}

#[tokio::test]
async fn deleting_the_first_row_reshuffles_the_page() {
    let store = color_store(InMemoryColors::seeded(&["amber", "blue", "coral"], 2));
    store.fetch(None, None).await;

    let first_id = store.items().await[0].record_id();
    store.delete(&first_id).await.unwrap();

    let snapshot = store.snapshot().await;
    let names: Vec<&str> = snapshot.items.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["blue", "coral"]);
    assert_eq!(snapshot.cursor.total, 2);
}

#[tokio::test]
async fn search_filters_the_collection_and_resets_the_page() {
    let store = color_store(InMemoryColors::seeded(
        &["amber", "blue", "blush", "coral", "denim"],
        2,
    ));
    store.fetch(Some(3), None).await;
    assert_eq!(store.cursor().await.current_page, 3);

    store.set_filters(FilterState::with_search("bl")).await;
    store.fetch(None, None).await;

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.cursor.current_page, 1);
    assert_eq!(snapshot.cursor.total, 2);
    assert!(snapshot.items.iter().all(|row| row.name.starts_with("bl")));
}

struct InMemoryModels {
    rows: Vec<VehicleModel>,
}

#[async_trait]
impl ResourceGateway<VehicleModel> for InMemoryModels {
    async fn list(
        &self,
        page: u32,
        filters: &FilterState,
    ) -> Result<ResourcePage<VehicleModel>, AppError> {
        let mut rows = self.rows.clone();
        if let Some(FilterValue::Number(brand_id)) = filters.get("brand_id") {
            rows.retain(|row| row.brand_id == *brand_id);
        }
        Ok(paginate(&rows, page, 15))
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<VehicleModel, AppError> {
        self.rows
            .iter()
            .find(|row| RecordId::Number(row.id) == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("vehicle-models/{}", id)))
    }

    async fn create(&self, _payload: &VehicleModelPayload) -> Result<VehicleModel, AppError> {
        Err(AppError::Internal("read-only double".to_string()))
    }

    async fn update(
        &self,
        _id: &RecordId,
        _payload: &VehicleModelPayload,
    ) -> Result<VehicleModel, AppError> {
        Err(AppError::Internal("read-only double".to_string()))
    }

    async fn delete(&self, _id: &RecordId) -> Result<(), AppError> {
        Err(AppError::Internal("read-only double".to_string()))
    }
}

#[tokio::test]
async fn brand_scope_narrows_models_and_clears_the_dependent_selection() {
    let model = |id: i64, name: &str, brand_id: i64| VehicleModel {
        id,
        name: name.to_string(),
        brand_id,
    };
    let gateway = InMemoryModels {
        rows: vec![
            model(1, "Clio", 7),
            model(2, "Megane", 7),
            model(3, "Corolla", 9),
        ],
    };
    let store: ResourceStore<VehicleModel> =
        ResourceStore::new(Arc::new(gateway), Arc::new(NoopNotifier));

    store.fetch(None, None).await;
    store.set_current(model(3, "Corolla", 9)).await;

    let mut scope = FilterState::new();
    scope.set("brand_id", 7);
    store.set_filters(scope).await;
    store.fetch(None, None).await;

    let snapshot = store.snapshot().await;
    assert!(snapshot.items.iter().all(|row| row.brand_id == 7));
    assert_eq!(snapshot.items.len(), 2);
    assert!(snapshot.current.is_none());
}
