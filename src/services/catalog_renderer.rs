use std::fmt;

use crate::models::catalog::{Catalog, CatalogCategory, CatalogItem};

pub const MISSING_DESCRIPTION: &str = "ไม่มีคำอธิบาย";

/// Text block for one category: a bullet list, or the category placeholder.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection(String);

impl RenderedSection {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for RenderedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSections {
    pub activities: RenderedSection,
    pub restaurants: RenderedSection,
    pub hotels: RenderedSection,
}

impl RenderedSections {
    pub fn iter(&self) -> impl Iterator<Item = &RenderedSection> {
        [&self.activities, &self.restaurants, &self.hotels].into_iter()
    }
}

// Keeps each row on exactly one line
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_item(item: &CatalogItem) -> String {
    let description = item
        .description
        .as_deref()
        .map(single_line)
        .filter(|description| !description.is_empty())
        .unwrap_or_else(|| MISSING_DESCRIPTION.to_string());
    format!("- {}: {}", single_line(&item.name), description)
}

pub fn render(category: CatalogCategory, items: &[CatalogItem]) -> RenderedSection {
    if items.is_empty() {
        return RenderedSection(category.empty_placeholder().to_string());
    }

    RenderedSection(items.iter().map(render_item).collect::<Vec<_>>().join("\n"))
}

pub fn render_catalog(catalog: &Catalog) -> RenderedSections {
    RenderedSections {
        activities: render(CatalogCategory::Activities, &catalog.activities),
        restaurants: render(CatalogCategory::Restaurants, &catalog.restaurants),
        hotels: render(CatalogCategory::Hotels, &catalog.hotels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_placeholder() {
        for category in CatalogCategory::ALL {
            let section = render(category, &[]);
            assert_eq!(section.as_str(), category.empty_placeholder());
            assert!(!section.as_str().is_empty());
        }
    }

    #[test]
    fn test_one_line_per_item_in_order() {
        let items = vec![
            CatalogItem::new("Wat Phra Singh", Some("Old temple in the city")),
            CatalogItem::new("Night Bazaar", None),
            CatalogItem::new("Doi Inthanon", Some("")),
        ];

        let section = render(CatalogCategory::Activities, &items);
        let lines: Vec<&str> = section.lines().collect();

        assert_eq!(
            lines,
            vec![
                "- Wat Phra Singh: Old temple in the city",
                "- Night Bazaar: ไม่มีคำอธิบาย",
                "- Doi Inthanon: ไม่มีคำอธิบาย",
            ]
        );
    }

    #[test]
    fn test_multiline_description_is_flattened() {
        let items = vec![CatalogItem::new(
            "Khao Soi Mae Sai",
            Some("Famous khao soi.\r\nOpen from 8am\n\n"),
        )];

        let section = render(CatalogCategory::Restaurants, &items);
        assert_eq!(
            section.as_str(),
            "- Khao Soi Mae Sai: Famous khao soi. Open from 8am"
        );
    }

    #[test]
    fn test_whitespace_only_description_uses_placeholder() {
        let items = vec![CatalogItem::new("Riverside Hotel", Some("\n \n"))];
        assert_eq!(
            render(CatalogCategory::Hotels, &items).as_str(),
            "- Riverside Hotel: ไม่มีคำอธิบาย"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = Catalog {
            activities: vec![CatalogItem::new("Elephant Nature Park", Some("Sanctuary"))],
            restaurants: vec![],
            hotels: vec![CatalogItem::new("137 Pillars House", None)],
        };

        assert_eq!(render_catalog(&catalog), render_catalog(&catalog));
        assert_eq!(
            render_catalog(&catalog).restaurants.as_str(),
            CatalogCategory::Restaurants.empty_placeholder()
        );
    }
}
