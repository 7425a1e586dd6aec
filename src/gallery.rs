use crate::templates::Template;

/// Sort order for the gallery grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Name, SortKey::Category];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Category => "Category",
        }
    }
}

/// In-memory gallery filter state: free-text search over name, category
/// and tags, an optional category pin, and a sort key
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    pub query: String,
    pub category: Option<String>,
    pub sort: SortKey,
}

impl GalleryFilter {
    fn matches(&self, template: &Template) -> bool {
        if let Some(category) = &self.category {
            if !template.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        template.name.to_lowercase().contains(&query)
            || template.category.to_lowercase().contains(&query)
            || template
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// Pure filter + sort over the static catalog
pub fn filter_templates<'a>(
    catalog: &'a [Template],
    filter: &GalleryFilter,
) -> Vec<&'a Template> {
    let mut matched: Vec<&Template> = catalog
        .iter()
        .filter(|template| filter.matches(template))
        .collect();
    match filter.sort {
        SortKey::Name => matched.sort_by_key(|t| t.name),
        SortKey::Category => matched.sort_by_key(|t| (t.category, t.name)),
    }
    matched
}

/// Distinct categories present in the catalog, sorted
pub fn categories(catalog: &[Template]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = catalog.iter().map(|t| t.category).collect();
    out.sort_unstable();
    out.dedup();
    out
}
