use async_trait::async_trait;
use std::sync::Arc;

use crate::db::supabase::{IlikeFilter, SupabaseClient};
use crate::error::{CatalogFetchError, TripPlanError};
use crate::models::catalog::{Catalog, CatalogCategory, CatalogItem};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Rows of one category whose province contains `province`, ignoring case.
    async fn fetch_category(
        &self,
        category: CatalogCategory,
        province: &str,
    ) -> Result<Vec<CatalogItem>, CatalogFetchError>;

    /// Cheap reachability check for `/health`.
    async fn ping(&self) -> Result<(), CatalogFetchError>;
}

async fn fetch_one(
    repository: &dyn CatalogRepository,
    category: CatalogCategory,
    province: &str,
) -> Result<Vec<CatalogItem>, TripPlanError> {
    match repository.fetch_category(category, province).await {
        Ok(items) => {
            log::debug!("Fetched {} {} for '{}'", items.len(), category, province);
            Ok(items)
        }
        Err(source) => {
            log::error!("Supabase error ({}): {}", category, source);
            Err(TripPlanError::Repository { category, source })
        }
    }
}

/// Runs the three category reads concurrently. The first failure wins and
/// whatever the other reads returned is dropped.
pub async fn fetch_by_province(
    repository: &dyn CatalogRepository,
    province: &str,
) -> Result<Catalog, TripPlanError> {
    let (activities, restaurants, hotels) = futures::try_join!(
        fetch_one(repository, CatalogCategory::Activities, province),
        fetch_one(repository, CatalogCategory::Restaurants, province),
        fetch_one(repository, CatalogCategory::Hotels, province),
    )?;

    Ok(Catalog {
        activities,
        restaurants,
        hotels,
    })
}

/// Table, projection and filter column for each category.
pub fn category_query(category: CatalogCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        CatalogCategory::Activities => (
            "activities",
            "*,destinations!inner(province)",
            "destinations.province",
        ),
        CatalogCategory::Restaurants => ("restaurants", "*", "province"),
        CatalogCategory::Hotels => ("hotels", "*", "province"),
    }
}

pub struct SupabaseCatalogRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseCatalogRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogRepository for SupabaseCatalogRepository {
    async fn fetch_category(
        &self,
        category: CatalogCategory,
        province: &str,
    ) -> Result<Vec<CatalogItem>, CatalogFetchError> {
        let (table, select, column) = category_query(category);
        let filter = IlikeFilter {
            column,
            contains: province,
        };
        self.client.select_ilike(table, select, &filter).await
    }

    async fn ping(&self) -> Result<(), CatalogFetchError> {
        self.client.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubRepository {
        failing: Option<CatalogCategory>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogRepository for StubRepository {
        async fn fetch_category(
            &self,
            category: CatalogCategory,
            province: &str,
        ) -> Result<Vec<CatalogItem>, CatalogFetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing == Some(category) {
                return Err(CatalogFetchError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(vec![CatalogItem::new(
                format!("{} in {}", category, province),
                None,
            )])
        }

        async fn ping(&self) -> Result<(), CatalogFetchError> {
            Ok(())
        }
    }

    #[test]
    fn test_fetch_by_province_fills_each_category() {
        let repository = StubRepository {
            failing: None,
            calls: AtomicUsize::new(0),
        };

        let catalog =
            tokio_test::block_on(fetch_by_province(&repository, "Chiang Mai")).unwrap();

        assert_eq!(catalog.activities[0].name, "activities in Chiang Mai");
        assert_eq!(catalog.restaurants[0].name, "restaurants in Chiang Mai");
        assert_eq!(catalog.hotels[0].name, "hotels in Chiang Mai");
        assert_eq!(repository.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_any_failure_aborts_with_its_category() {
        for failing in CatalogCategory::ALL {
            let repository = StubRepository {
                failing: Some(failing),
                calls: AtomicUsize::new(0),
            };

            match tokio_test::block_on(fetch_by_province(&repository, "Krabi")) {
                Err(TripPlanError::Repository { category, .. }) => assert_eq!(category, failing),
                other => panic!("expected repository error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_activity_query_filters_through_destination_join() {
        let (table, select, column) = category_query(CatalogCategory::Activities);
        assert_eq!(table, "activities");
        assert_eq!(select, "*,destinations!inner(province)");
        assert_eq!(column, "destinations.province");

        assert_eq!(
            category_query(CatalogCategory::Hotels),
            ("hotels", "*", "province")
        );
    }
}
