use std::rc::Rc;

use catalog::AssetCatalog;
use yew::prelude::*;

/// Catalog handed down from [`crate::App`] to every page.
#[derive(Clone)]
pub struct CatalogContext {
    catalog: Rc<dyn AssetCatalog>,
}

impl CatalogContext {
    pub fn new(catalog: Rc<dyn AssetCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn AssetCatalog {
        self.catalog.as_ref()
    }
}

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

/// Access the injected catalog.
///
/// Panics when used outside of the `ContextProvider` set up by the app.
#[hook]
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext must be provided by App")
}
