//! Cart panel

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{
    cart::{CartError, LineItem},
    checkout::{CheckoutOutcome, checkout},
    config::StorefrontConfig,
    pricing::format_price,
};

use crate::{
    browser,
    state::{ShopCart, report},
};

/// Number of distinct products in the cart, for the header.
#[component]
pub fn CartBadge(
    /// Cart to count.
    cart: Arc<ShopCart>,

    /// Cart revision; changes whenever the cart does.
    revision: RwSignal<u64>,
) -> impl IntoView {
    view! {
        <span
            class="ml-2 rounded-full bg-slate-900 px-2 py-0.5 text-xs font-semibold text-white"
            aria-label="Products in cart"
        >
            {move || {
                revision.track();
                cart.item_count()
            }}
        </span>
    }
}

/// Cart contents, totals and checkout.
#[component]
pub fn CartPanel(
    /// Cart to show.
    cart: Arc<ShopCart>,

    /// Checkout destination and storage settings.
    config: Arc<StorefrontConfig>,

    /// Cart revision; changes whenever the cart does.
    revision: RwSignal<u64>,

    /// Status line for the last cart action.
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <section id="cart" class="rounded-lg border border-slate-200 bg-white p-4 shadow-sm">
            <h2 class="mb-4 text-lg font-semibold">"Cart"</h2>
            {move || {
                revision.track();
                let snapshot = cart.read();

                if snapshot.is_empty() {
                    return view! {
                        <p class="text-sm text-slate-500">"Your cart is empty"</p>
                    }
                    .into_any();
                }

                view! {
                    <ul class="divide-y divide-slate-100">
                        {snapshot
                            .iter()
                            .cloned()
                            .map(|item| {
                                view! {
                                    <CartLine
                                        item=item
                                        cart=Arc::clone(&cart)
                                        action_message=action_message
                                    />
                                }
                            })
                            .collect_view()}
                    </ul>
                    <CartSummary cart=Arc::clone(&cart) config=Arc::clone(&config) />
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn CartLine(
    item: LineItem,
    cart: Arc<ShopCart>,
    action_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = item.id();
    let quantity = i64::from(item.quantity());
    let price = format_price(item.price(), cart.catalog().currency());
    let name = item.name().to_string();

    let decrease_cart = Arc::clone(&cart);
    let decrease_name = name.clone();
    let increase_cart = Arc::clone(&cart);
    let increase_name = name.clone();
    let remove_name = name.clone();

    view! {
        <li class="flex items-center gap-3 py-3">
            <span class="text-2xl" aria-hidden="true">{item.image().to_string()}</span>
            <div class="min-w-0 flex-1">
                <p class="truncate font-medium">{name.clone()}</p>
                <p class="text-sm text-slate-600">{price}</p>
            </div>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="h-7 w-7 rounded border border-slate-300"
                    aria-label=format!("Decrease quantity of {name}")
                    on:click=move |_| {
                        let result = decrease_cart.set_quantity(id, quantity.saturating_sub(1));
                        report(action_message, &decrease_name, &result);
                    }
                >
                    "-"
                </button>
                <span class="w-6 text-center tabular-nums">{quantity}</span>
                <button
                    type="button"
                    class="h-7 w-7 rounded border border-slate-300"
                    aria-label=format!("Increase quantity of {name}")
                    on:click=move |_| {
                        let result = increase_cart.set_quantity(id, quantity.saturating_add(1));
                        report(action_message, &increase_name, &result);
                    }
                >
                    "+"
                </button>
                <button
                    type="button"
                    class="text-sm text-red-700 hover:underline"
                    on:click=move |_| report(action_message, &remove_name, &cart.remove(id))
                >
                    "Remove"
                </button>
            </div>
        </li>
    }
}

#[component]
fn CartSummary(cart: Arc<ShopCart>, config: Arc<StorefrontConfig>) -> impl IntoView {
    let total = total_text(&cart);

    view! {
        <div class="mt-4 border-t border-slate-200 pt-4">
            <div class="flex justify-between text-sm">
                <span>"Subtotal"</span>
                <span class="tabular-nums">{total.clone()}</span>
            </div>
            <div class="mt-1 flex justify-between font-semibold">
                <span>"Total"</span>
                <span class="tabular-nums">{total}</span>
            </div>
            <button
                type="button"
                class="mt-4 w-full rounded-md bg-emerald-700 px-3 py-2 font-medium text-white hover:bg-emerald-600"
                on:click=move |_| complete_checkout(checkout(&*cart, &config))
            >
                "Checkout"
            </button>
        </div>
    }
}

fn total_text(cart: &ShopCart) -> String {
    match cart.total_money() {
        Ok(total) => format_price(*total.amount(), total.currency()),
        Err(error) => format!("unavailable ({error})"),
    }
}

fn complete_checkout(outcome: Result<CheckoutOutcome, CartError>) {
    match outcome {
        Ok(CheckoutOutcome::Redirect(url)) => browser::navigate(&url),
        Ok(outcome @ CheckoutOutcome::EmptyCart) => {
            if let Some(notice) = outcome.notice() {
                browser::alert(notice);
            }
        }
        Err(error) => browser::alert(&format!("Checkout failed: {error}")),
    }
}
