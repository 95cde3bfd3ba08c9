//! Client-side filtering and pagination over small plant lists.

use crate::models::PlantListItem;

pub const CATALOG_PAGE_SIZE: usize = 20;
pub const LIST_PAGE_SIZE: usize = 15;

/// Known catalog categories, in display order.
pub const CATEGORIES: [&str; 6] = [
    "blomma",
    "buske",
    "träd",
    "ört",
    "inomhusväxt",
    "utomhusväxt",
];

/// Known plant types, in display order.
pub const TYPES: [&str; 7] = [
    "perenn",
    "sommarblomma",
    "lövträd",
    "barrträd",
    "kryddväxt",
    "suckulent",
    "kaktus",
];

/// Search and filter settings for the catalog. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    pub search: String,
    pub category: String,
    pub plant_type: String,
}

impl PlantFilter {
    pub fn matches(&self, plant: &PlantListItem) -> bool {
        let search = self.search.trim().to_lowercase();
        (search.is_empty() || plant.name.to_lowercase().contains(&search))
            && (self.category.is_empty() || plant.category == self.category)
            && (self.plant_type.is_empty() || plant.plant_type == self.plant_type)
    }

    pub fn apply<'a>(&self, plants: &'a [PlantListItem]) -> Vec<&'a PlantListItem> {
        plants.iter().filter(|p| self.matches(p)).collect()
    }
}

/// One page of a list, with the requested index clamped into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Zero-based index of the page actually returned.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}

/// Slices `items` into page `page` of `per_page` entries. A page past the end
/// is clamped to the last page; an empty list yields page 0 of 0.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let page_count = total.div_ceil(per_page);
    let page = page.min(page_count.saturating_sub(1));

    let start = page * per_page;
    let end = (start + per_page).min(total);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_count,
        total,
    }
}
