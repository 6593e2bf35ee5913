use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogCategory {
    Activities,
    Restaurants,
    Hotels,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 3] = [
        CatalogCategory::Activities,
        CatalogCategory::Restaurants,
        CatalogCategory::Hotels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogCategory::Activities => "activities",
            CatalogCategory::Restaurants => "restaurants",
            CatalogCategory::Hotels => "hotels",
        }
    }

    /// Sentence used in place of the bullet list when a province has no rows.
    pub fn empty_placeholder(&self) -> &'static str {
        match self {
            CatalogCategory::Activities => "ไม่มีข้อมูลกิจกรรมในจังหวัดนี้",
            CatalogCategory::Restaurants => "ไม่มีข้อมูลร้านอาหารในจังหวัดนี้",
            CatalogCategory::Hotels => "ไม่มีข้อมูลโรงแรมในจังหวัดนี้",
        }
    }
}

impl fmt::Display for CatalogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// PostgREST returns null for unset text columns
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A single activity, restaurant or hotel row. Only the columns the prompt
/// needs are read; joined `destinations` and any other columns are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub activities: Vec<CatalogItem>,
    pub restaurants: Vec<CatalogItem>,
    pub hotels: Vec<CatalogItem>,
}

impl Catalog {
    pub fn items(&self, category: CatalogCategory) -> &[CatalogItem] {
        match category {
            CatalogCategory::Activities => &self.activities,
            CatalogCategory::Restaurants => &self.restaurants,
            CatalogCategory::Hotels => &self.hotels,
        }
    }
}
