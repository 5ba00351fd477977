use std::rc::Rc;

use catalog::{AssetCatalog, StaticCatalog};
use yew::prelude::*;
use yew_router::prelude::*;

mod common;
mod components;
mod pages;
pub mod hooks;
pub mod router;
pub mod settings;

use hooks::CatalogContext;
use router::{switch, Route};

#[derive(Properties, Clone)]
pub struct AppProps {
    /// Catalog every page reads from
    pub catalog: Rc<dyn AssetCatalog>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let context = CatalogContext::new(props.catalog.clone());

    html! {
        <ContextProvider<CatalogContext> {context}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<CatalogContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Asset Viewer Starting ===");
    log::info!("Application settings: {:?}", settings);

    let catalog: Rc<dyn AssetCatalog> = Rc::new(StaticCatalog::builtin());
    log::debug!("Loaded built-in catalog with {} assets", catalog.len());

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::with_props(AppProps { catalog }).render();
    log::info!("Application initialized successfully");
}
