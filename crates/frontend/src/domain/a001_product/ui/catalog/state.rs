use contracts::domain::a001_product::{CatalogFilter, CatalogQuery};
use leptos::prelude::*;

/// Catalog page state, one per page view. Written only by the filter
/// buttons and the search input; read by the grid.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    // Фильтры
    pub filter: CatalogFilter,
    pub search: String,

    // Флаг загрузки
    pub is_loaded: bool,
}

impl CatalogState {
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::new(self.filter, self.search.clone())
    }

    /// Makes `filter` the only active one.
    pub fn select_filter(&mut self, filter: CatalogFilter) {
        self.filter = filter;
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}
