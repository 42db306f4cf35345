//! Leptos Storefront Demo Application

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{cart::CartService, catalog::Catalog, config::StorefrontConfig};

mod browser;
mod cart;
mod contact;
mod products;
mod state;

use browser::BrowserStore;
use state::{RevisionObserver, ShopCart};

const STOREFRONT_CONFIG_YAML: &str = include_str!("../../../fixtures/config/storefront.yml");

/// Loaded configuration and cart service used by the UI.
#[derive(Debug)]
struct AppData {
    /// Cart persisted in the browser.
    cart: Arc<ShopCart>,

    /// Storefront settings.
    config: Arc<StorefrontConfig>,
}

impl AppData {
    fn load(revision: RwSignal<u64>) -> Result<Self, String> {
        let config = StorefrontConfig::from_yaml(STOREFRONT_CONFIG_YAML)
            .map_err(|error| format!("Invalid storefront configuration: {error}"))?;
        let catalog = Catalog::storefront()
            .map_err(|error| format!("Failed to load products: {error}"))?;

        let cart = CartService::new(BrowserStore, Arc::new(catalog))
            .configured(&config)
            .with_observer(RevisionObserver::new(revision));

        Ok(Self {
            cart: Arc::new(cart),
            config: Arc::new(config),
        })
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    let revision = RwSignal::new(0_u64);

    match AppData::load(revision) {
        Ok(app_data) => {
            let action_message = RwSignal::new(None::<String>);

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || action_message.get().unwrap_or_default()}
                    </p>
                    <header class="mx-auto mb-6 flex max-w-5xl items-center justify-between">
                        <h1 class="text-2xl font-semibold tracking-tight">"Storefront"</h1>
                        <a href="#cart" class="flex items-center font-medium">
                            "Cart"
                            <cart::CartBadge cart=Arc::clone(&app_data.cart) revision=revision />
                        </a>
                    </header>
                    <div class="mx-auto grid max-w-5xl grid-cols-1 gap-6 md:grid-cols-2">
                        <products::ProductsPanel
                            cart=Arc::clone(&app_data.cart)
                            action_message=action_message
                        />
                        <cart::CartPanel
                            cart=Arc::clone(&app_data.cart)
                            config=Arc::clone(&app_data.config)
                            revision=revision
                            action_message=action_message
                        />
                    </div>
                    <div class="mx-auto mt-6 max-w-5xl">
                        <contact::ContactPanel config=Arc::clone(&app_data.config) />
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Storefront"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Main server function
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
