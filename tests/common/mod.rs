#![allow(dead_code)]

use actix_web::{web, App};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use trip_plan_api::config::EmptyActivitiesPolicy;
use trip_plan_api::error::{CatalogFetchError, CompletionError};
use trip_plan_api::models::catalog::{CatalogCategory, CatalogItem};
use trip_plan_api::routes;
use trip_plan_api::services::catalog_repository::CatalogRepository;
use trip_plan_api::services::completion_service::{CompletionRequest, CompletionService};
use trip_plan_api::services::plan_generator::PlanGenerator;
use trip_plan_api::services::trip_plan_service::TripPlanService;

/// In-memory catalog snapshot standing in for Supabase.
#[derive(Default)]
pub struct FakeCatalog {
    pub activities: Vec<CatalogItem>,
    pub restaurants: Vec<CatalogItem>,
    pub hotels: Vec<CatalogItem>,
    pub failing: Option<CatalogCategory>,
    pub unreachable: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CatalogRepository for FakeCatalog {
    async fn fetch_category(
        &self,
        category: CatalogCategory,
        _province: &str,
    ) -> Result<Vec<CatalogItem>, CatalogFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing == Some(category) {
            return Err(CatalogFetchError::Status {
                status: 500,
                body: "relation does not exist".to_string(),
            });
        }
        Ok(match category {
            CatalogCategory::Activities => self.activities.clone(),
            CatalogCategory::Restaurants => self.restaurants.clone(),
            CatalogCategory::Hotels => self.hotels.clone(),
        })
    }

    async fn ping(&self) -> Result<(), CatalogFetchError> {
        if self.unreachable {
            Err(CatalogFetchError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

pub struct FakeCompletion {
    pub reply: fn() -> Result<String, CompletionError>,
    pub calls: AtomicUsize,
    pub last: Mutex<Option<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn replying(reply: fn() -> Result<String, CompletionError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_user_message(&self) -> String {
        self.last
            .lock()
            .unwrap()
            .as_ref()
            .map(|request| request.messages[1].content.clone())
            .unwrap_or_default()
    }
}

impl Default for FakeCompletion {
    fn default() -> Self {
        Self::replying(|| Ok("วันที่ 1\nเช้า: ดอยสุเทพ".to_string()))
    }
}

#[async_trait]
impl CompletionService for FakeCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        (self.reply)()
    }

    fn credential_hint(&self) -> String {
        "sk-t***7890".to_string()
    }
}

pub struct TestApp {
    pub catalog: Arc<FakeCatalog>,
    pub completion: Arc<FakeCompletion>,
    pub service: web::Data<TripPlanService>,
}

impl TestApp {
    pub fn new(catalog: FakeCatalog, completion: FakeCompletion) -> Self {
        Self::with_policy(catalog, completion, EmptyActivitiesPolicy::Placeholder)
    }

    pub fn with_policy(
        catalog: FakeCatalog,
        completion: FakeCompletion,
        policy: EmptyActivitiesPolicy,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let completion = Arc::new(completion);
        let service = web::Data::new(TripPlanService::new(
            catalog.clone(),
            PlanGenerator::new(completion.clone(), "gpt-4o"),
            policy,
        ));

        Self {
            catalog,
            completion,
            service,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.service.clone())
            .configure(routes::config)
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog.calls.load(Ordering::SeqCst)
    }
}

pub fn item(name: &str, description: Option<&str>) -> CatalogItem {
    CatalogItem::new(name, description)
}

pub fn trip_body(province: &str) -> serde_json::Value {
    serde_json::json!({
        "province": province,
        "style": "สายวัฒนธรรม",
        "budget": "ปานกลาง",
        "days": 2
    })
}
