//! Catalog entry types.

use core::fmt;

use serde::{Deserialize, Serialize};

use servex_core::{Price, ServiceId};

/// A static, price-bearing service offering.
///
/// Services come from the built-in catalog only; they are never created or
/// mutated at runtime. The cart stores a snapshot of the whole entry so a
/// line stays self-describing even if the catalog changes between releases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Unique within the catalog.
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub category: ServiceCategory,
    /// Fixed unit price.
    pub price: Price,
    /// Marketing image path, relative to the asset root.
    pub image: String,
}

/// Category tag for catalog filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    /// Website development.
    Web,
    /// Mobile app development.
    App,
    /// App and QA testing.
    Testing,
    /// AI integration work.
    Ai,
    /// Web scraping tools.
    Scraper,
    /// Third-party API integration.
    Api,
}

impl ServiceCategory {
    /// All categories, in catalog display order.
    pub const ALL: [Self; 6] = [
        Self::Web,
        Self::App,
        Self::Testing,
        Self::Ai,
        Self::Scraper,
        Self::Api,
    ];

    /// The lowercase tag used in storage and URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
            Self::Testing => "testing",
            Self::Ai => "ai",
            Self::Scraper => "scraper",
            Self::Api => "api",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::App => "App Development",
            Self::Testing => "Testing",
            Self::Ai => "AI Solutions",
            Self::Scraper => "Web Scrapers",
            Self::Api => "API Integration",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Self::Web),
            "app" => Ok(Self::App),
            "testing" => Ok(Self::Testing),
            "ai" => Ok(Self::Ai),
            "scraper" => Ok(Self::Scraper),
            "api" => Ok(Self::Api),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Error for an unrecognized category tag.
#[derive(Debug, thiserror::Error)]
#[error("unknown service category: {0}")]
pub struct UnknownCategory(pub String);
