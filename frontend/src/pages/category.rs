use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::catalog::{catalog, CatalogItem};
use super::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct ServiceCategoryProps {
    pub slug: String,
}

fn item_list(title: &str, items: &[&CatalogItem]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="category-block">
            <h3>{title.to_string()}</h3>
            <ul>
                { for items.iter().map(|item| html! {
                    <li key={item.id.clone()}>
                        <span>{item.name.clone()}</span>
                        <span class="category-price">{item.price.to_string()}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(ServiceCategory)]
pub fn service_category(props: &ServiceCategoryProps) -> Html {
    let catalog = catalog();
    let category = match catalog.category_by_slug(&props.slug) {
        Some(category) => category,
        None => return html! { <NotFound /> },
    };

    html! {
        <div class="category-page">
            <style>
                {r#"
                .category-page {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .category-block {
                    margin-bottom: 2rem;
                }
                .category-block li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .category-price {
                    font-weight: 600;
                }
                "#}
            </style>
            <h1>{category.name2.clone()}</h1>
            { item_list("Planes", &catalog.plans(&category.id)) }
            { item_list("Servicios individuales", &catalog.services(&category.id)) }
            { item_list("Add-ons", &catalog.addons(&category.id)) }
            { item_list("Bonos incluidos", &catalog.bonuses(&category.id)) }
            <p>
                <Link<Route> to={Route::Pricing}>{"Arma tu cotización"}</Link<Route>>
                {" · "}
                <Link<Route> to={Route::Contact}>{"Contáctanos"}</Link<Route>>
            </p>
        </div>
    }
}
