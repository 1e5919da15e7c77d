//! The static service catalog.
//!
//! The catalog is a fixed built-in list: entries are immutable, never
//! created or destroyed at runtime, and carry hard-coded prices. Browsing
//! operations (category filter, substring search) are plain in-memory
//! filtering over the list.

use servex_core::{Price, ServiceId};

use crate::models::{Service, ServiceCategory};

/// The fixed catalog of service offerings.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    /// The built-in production catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            services: builtin_services(),
        }
    }

    /// A catalog with an explicit service list, for tests.
    #[must_use]
    pub const fn with_services(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// All entries, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Service] {
        &self.services
    }

    /// Look up a single entry by id.
    #[must_use]
    pub fn get(&self, id: &ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| &s.id == id)
    }

    /// Entries in the given category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: ServiceCategory) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Case-insensitive substring search over title and description.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Service> {
        let query = query.to_lowercase();
        self.services
            .iter()
            .filter(|s| {
                s.title.to_lowercase().contains(&query)
                    || s.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Categories that have at least one entry, in display order.
    #[must_use]
    pub fn categories(&self) -> Vec<ServiceCategory> {
        ServiceCategory::ALL
            .into_iter()
            .filter(|c| self.services.iter().any(|s| s.category == *c))
            .collect()
    }
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    category: ServiceCategory,
    dollars: u32,
    image: &str,
) -> Service {
    Service {
        id: ServiceId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        price: Price::from_dollars(dollars),
        image: image.to_owned(),
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_services() -> Vec<Service> {
    use ServiceCategory::{Ai, Api, App, Scraper, Testing, Web};

    vec![
        entry(
            "1",
            "Basic Website Development",
            "Responsive website development with up to 5 pages and basic SEO.",
            Web,
            999,
            "/assets/services/web-basic.jpg",
        ),
        entry(
            "2",
            "E-commerce Website",
            "Full-featured online store with payment processing and product management.",
            Web,
            2499,
            "/assets/services/web-ecommerce.jpg",
        ),
        entry(
            "3",
            "Mobile App Development (iOS)",
            "Native iOS app development with custom UI and core features.",
            App,
            3999,
            "/assets/services/app-ios.jpg",
        ),
        entry(
            "4",
            "Mobile App Development (Android)",
            "Native Android app development with custom UI and core features.",
            App,
            3999,
            "/assets/services/app-android.jpg",
        ),
        entry(
            "5",
            "Cross-Platform App Development",
            "React Native or Flutter app development for both iOS and Android.",
            App,
            4999,
            "/assets/services/app-cross.jpg",
        ),
        entry(
            "6",
            "Basic App Testing",
            "Functional testing, UI testing, and bug fixes for mobile apps.",
            Testing,
            799,
            "/assets/services/testing-basic.jpg",
        ),
        entry(
            "7",
            "Comprehensive App Testing",
            "In-depth testing including performance, security, and usability testing.",
            Testing,
            1499,
            "/assets/services/testing-comprehensive.jpg",
        ),
        entry(
            "8",
            "Basic AI Integration",
            "Integrate pre-built AI models into your application or website.",
            Ai,
            1999,
            "/assets/services/ai-basic.jpg",
        ),
        entry(
            "9",
            "Custom AI Solution",
            "Custom AI model development and integration for specific business needs.",
            Ai,
            4999,
            "/assets/services/ai-custom.jpg",
        ),
        entry(
            "10",
            "Basic Web Scraper",
            "Data extraction tool for single website with structured output.",
            Scraper,
            999,
            "/assets/services/scraper-basic.jpg",
        ),
        entry(
            "11",
            "Advanced Web Scraper",
            "Multi-site data extraction with API access and regular updates.",
            Scraper,
            2499,
            "/assets/services/scraper-advanced.jpg",
        ),
        entry(
            "12",
            "API Integration Service",
            "Connect your application with third-party APIs and services.",
            Api,
            1499,
            "/assets/services/api-integration.jpg",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_twelve_entries_with_unique_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all().len(), 12);

        let mut ids: Vec<_> = catalog.all().iter().map(|s| s.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let service = catalog.get(&ServiceId::new("1")).unwrap();
        assert_eq!(service.title, "Basic Website Development");
        assert_eq!(service.price, Price::from_dollars(999));
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(&ServiceId::new("404")).is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::builtin();
        let apps = catalog.by_category(ServiceCategory::App);
        assert_eq!(apps.len(), 3);
        assert!(apps.iter().all(|s| s.category == ServiceCategory::App));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let hits = catalog.search("SCRAPER");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_covers_descriptions() {
        let catalog = Catalog::builtin();
        // "Flutter" appears only in the cross-platform description.
        let hits = catalog.search("flutter");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().id, ServiceId::new("5"));
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories(), ServiceCategory::ALL.to_vec());
    }
}
