//! Product grid

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{pricing::format_price, products::Product};

use crate::{
    browser,
    state::{ShopCart, added_notice, report},
};

/// Product grid with an add button per product.
#[component]
pub fn ProductsPanel(
    /// Cart the add buttons write to.
    cart: Arc<ShopCart>,

    /// Status line for the last cart action.
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let products = cart.catalog().products().to_vec();

    view! {
        <section class="rounded-lg border border-slate-200 bg-white p-4 shadow-sm">
            <h2 class="mb-4 text-lg font-semibold">"Products"</h2>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                {products
                    .into_iter()
                    .map(|product| {
                        view! {
                            <ProductCard
                                product=product
                                cart=Arc::clone(&cart)
                                action_message=action_message
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(
    product: Product,
    cart: Arc<ShopCart>,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let price = format_price(product.price, cart.catalog().currency());
    let id = product.id;
    let name = product.name.clone();

    view! {
        <div class="flex flex-col rounded-md border border-slate-200 p-3">
            <div class="mb-2 text-4xl" aria-hidden="true">{product.image}</div>
            <span class="text-xs uppercase tracking-wide text-slate-500">{product.category}</span>
            <h3 class="font-medium">{product.name}</h3>
            <p class="mb-3 text-slate-700">{price}</p>
            <button
                type="button"
                class="mt-auto rounded-md bg-slate-900 px-3 py-2 text-sm font-medium text-white hover:bg-slate-700"
                on:click=move |_| {
                    let result = cart.add(id);
                    report(action_message, &name, &result);

                    if let Some(notice) = added_notice(&name, &result) {
                        browser::alert(&notice);
                    }
                }
            >
                "Add to Cart"
            </button>
        </div>
    }
}
