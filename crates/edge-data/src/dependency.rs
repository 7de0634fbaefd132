//! Dependency tagging for semantic categorization.

/// Upstreams a workload reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Catalog aggregate (flash deals, new arrivals, best sellers).
    Catalog,
    Custom(&'static str),
}

impl DependencyTag {
    /// Whether the page has nothing to show without this dependency.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Catalog)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Catalog => "catalog",
            Self::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(DependencyTag::Catalog.to_string(), "catalog");
        assert_eq!(DependencyTag::Custom("reviews").name(), "reviews");
        assert!(DependencyTag::Catalog.is_critical());
        assert!(!DependencyTag::Custom("reviews").is_critical());
    }
}
