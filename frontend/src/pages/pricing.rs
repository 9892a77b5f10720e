use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

use crate::Route;
use crate::catalog::{catalog, Catalog, CatalogItem, ItemKind, Price};
use crate::contact::pricing::sum_prices;
use crate::contact::state::CartSeed;
use crate::format::format_usd;

/// Base item, its chosen add-ons and every bonus of its category, in that order.
pub fn build_cart(catalog: &Catalog, base_id: &str, addon_ids: &[String]) -> Vec<CatalogItem> {
    let base = match catalog.base_item(base_id) {
        Some(base) => base,
        None => return Vec::new(),
    };
    let category = base.category_id.primary().unwrap_or_default();

    let mut cart = vec![base.clone()];
    cart.extend(
        addon_ids
            .iter()
            .filter_map(|id| catalog.item(id))
            .filter(|item| item.kind == ItemKind::Addon && item.belongs_to(category))
            .cloned(),
    );
    cart.extend(catalog.bonuses(category).into_iter().cloned());
    cart
}

fn price_tag(price: &Price) -> String {
    match price {
        Price::Amount(amount) => format_usd(*amount),
        Price::Label(label) => label.clone(),
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let catalog = catalog();
    let navigator = use_navigator();
    let chosen = use_state(|| None::<String>);
    let addon_ids = use_state(Vec::<String>::new);

    let cart = chosen
        .as_deref()
        .map(|id| build_cart(catalog, id, &addon_ids))
        .unwrap_or_default();
    let total = sum_prices(&cart);

    let choose = |id: &str| {
        let chosen = chosen.clone();
        let addon_ids = addon_ids.clone();
        let id = id.to_string();
        Callback::from(move |_: MouseEvent| {
            chosen.set(Some(id.clone()));
            addon_ids.set(Vec::new());
        })
    };

    let request_quote = {
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| {
            if cart.is_empty() {
                return;
            }
            if let Some(navigator) = &navigator {
                info!("Sending {} items to the contact form", cart.len());
                navigator.push_with_state(&Route::Contact, CartSeed(cart.clone()));
            }
        })
    };

    let chosen_category = chosen
        .as_deref()
        .and_then(|id| catalog.base_item(id))
        .and_then(|base| base.category_id.primary())
        .unwrap_or_default()
        .to_string();

    html! {
        <div class="pricing-container">
            <style>
                {r#"
                .pricing-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .pricing-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }
                .pricing-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                }
                .pricing-card.chosen {
                    border-color: #1E90FF;
                    box-shadow: 0 0 20px rgba(30, 144, 255, 0.3);
                }
                .pricing-card .amount {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .pricing-card .kind {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    opacity: 0.6;
                }
                .quote-summary {
                    position: sticky;
                    bottom: 1rem;
                    padding: 1.5rem;
                    border-radius: 16px;
                    background: rgba(15, 15, 15, 0.95);
                    border: 1px solid #1E90FF;
                }
                .quote-summary li {
                    display: flex;
                    justify-content: space-between;
                }
                .quote-button {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="pricing-header">
                <h1>{"Planes y Precios"}</h1>
                <p>{"Elige un plan o servicio, agrega lo que necesites y te enviamos una cotización."}</p>
            </div>
            { for catalog.categories().iter().map(|category| {
                let bases: Vec<&CatalogItem> = catalog
                    .plans(&category.id)
                    .into_iter()
                    .chain(catalog.services(&category.id))
                    .collect();
                html! {
                    <section key={category.id.clone()} id={category.slug.clone()}>
                        <h2>
                            <Link<Route> to={Route::ServiceCategory { slug: category.slug.clone() }}>
                                {category.name.clone()}
                            </Link<Route>>
                        </h2>
                        <div class="pricing-grid">
                            { for bases.into_iter().map(|item| {
                                let is_chosen = chosen.as_deref() == Some(item.id.as_str());
                                html! {
                                    <div key={item.id.clone()} class={classes!("pricing-card", is_chosen.then(|| "chosen"))}>
                                        <span class="kind">
                                            { if item.kind == ItemKind::Plan { "Plan" } else { "Servicio" } }
                                        </span>
                                        <h3>{item.name.clone()}</h3>
                                        <div class="amount">{price_tag(&item.price)}</div>
                                        <button class="quote-button" onclick={choose(&item.id)} disabled={is_chosen}>
                                            { if is_chosen { "Seleccionado" } else { "Elegir" } }
                                        </button>
                                    </div>
                                }
                            }) }
                        </div>
                    </section>
                }
            }) }
            if !cart.is_empty() {
                <div class="quote-summary">
                    <h3>{"Tu Selección"}</h3>
                    <ul>
                        { for cart.iter().map(|item| html! {
                            <li key={item.id.clone()}>
                                <span>{item.name.clone()}</span>
                                <span>{price_tag(&item.price)}</span>
                            </li>
                        }) }
                    </ul>
                    <div class="addon-picker">
                        <p>{"Add-ons disponibles:"}</p>
                        { for catalog.addons(&chosen_category).into_iter().map(|addon| {
                            let checked = addon_ids.contains(&addon.id);
                            let toggle = {
                                let addon_ids = addon_ids.clone();
                                let id = addon.id.clone();
                                Callback::from(move |_: Event| {
                                    let mut next = (*addon_ids).clone();
                                    if let Some(pos) = next.iter().position(|a| *a == id) {
                                        next.remove(pos);
                                    } else {
                                        next.push(id.clone());
                                    }
                                    addon_ids.set(next);
                                })
                            };
                            html! {
                                <label key={addon.id.clone()}>
                                    <input type="checkbox" {checked} onchange={toggle} />
                                    {format!(" {} ({})", addon.name, price_tag(&addon.price))}
                                </label>
                            }
                        }) }
                    </div>
                    <p><b>{format!("Total (aproximado): {}", format_usd(total))}</b></p>
                    <button class="quote-button" onclick={request_quote}>{"Solicitar cotización"}</button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_carries_base_addons_and_bonuses() {
        let cart = build_cart(catalog(), "web-pro", &["web-blog".to_string(), "apps-push".to_string()]);
        let ids: Vec<&str> = cart.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["web-pro", "web-blog", "web-hosting"]);
        assert_eq!(sum_prices(&cart), 1420.0);
    }

    #[test]
    fn unknown_or_non_base_ids_give_an_empty_cart() {
        assert!(build_cart(catalog(), "nope", &[]).is_empty());
        assert!(build_cart(catalog(), "seo-audit", &[]).is_empty());
    }
}
