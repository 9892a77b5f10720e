use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use crate::Route;
use crate::catalog::{catalog, CatalogItem, Price};
use crate::config;
use crate::format::{format_usd, format_whole};
use super::pricing::quote;
use super::state::{CartSeed, ContactFormState, Field, FormAction};
use super::submit::{after_submit, submit_contact, validate, HttpContactTransport, CONFIRMATION_MESSAGE};

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn cart_price(price: &Price) -> String {
    match price {
        Price::Amount(amount) => format_usd(*amount),
        Price::Label(label) => label.clone(),
    }
}

fn option_price(price: &Price) -> String {
    match price {
        Price::Amount(amount) => format!("${}", format_whole(*amount)),
        Price::Label(label) => label.clone(),
    }
}

fn details_href(slug: &str) -> String {
    Route::ServiceCategory { slug: slug.to_string() }.to_path()
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let location = use_location();
    let state = use_reducer(move || {
        let seed = location
            .and_then(|l| l.state::<CartSeed>())
            .map(|seed| seed.0.clone())
            .unwrap_or_default();
        ContactFormState::with_cart(seed)
    });
    let catalog = catalog();
    let quote = quote(&state, catalog);

    let on_field = |field: Field| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let on_category = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::SelectCategory(select.value()));
        })
    };

    let on_plan = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::SelectPlan(select.value()));
        })
    };

    let on_service = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::SelectService(select.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*state).clone();
            if let Err(invalid) = validate(&snapshot) {
                notify(invalid.user_message());
                return;
            }
            let dispatcher = state.dispatcher();
            spawn_local(async move {
                let transport = HttpContactTransport::default();
                let result = submit_contact(&snapshot, catalog, &transport).await;
                match &result {
                    Ok(_) => notify(CONFIRMATION_MESSAGE),
                    Err(err) => notify(err.user_message()),
                }
                if let Some(action) = after_submit(&result) {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    let cart_view = {
        let render_line = |item: &CatalogItem| {
            let remove = {
                let dispatcher = state.dispatcher();
                let id = item.id.clone();
                Callback::from(move |_: MouseEvent| dispatcher.dispatch(FormAction::RemoveCartItem(id.clone())))
            };
            html! {
                <li key={item.id.clone()} class="cart-line">
                    <div class="cart-line-name">
                        <span>{format!("- {}", item.name)}</span>
                        <button type="button" class="cart-remove" onclick={remove}
                            aria-label={format!("Eliminar {}", item.name)}>{"×"}</button>
                    </div>
                    <span class="cart-line-price">{cart_price(&item.price)}</span>
                </li>
            }
        };
        html! {
            <div class="selection-block">
                <p class="selection-title">{"Tu Selección:"}</p>
                <ul class="cart-list">
                    { for state.cart.iter().map(render_line) }
                </ul>
                <label class="field-label">{"Total (aproximado):"}</label>
                <input type="text" readonly=true class="total-display" value={format_usd(quote.total)} />
            </div>
        }
    };

    let selection_view = {
        let category = state.category.as_str();
        let plans = catalog.plans(category);
        let services = catalog.services(category);
        let addons = catalog.addons(category);
        let bonuses = catalog.bonuses(category);
        let details_link = catalog
            .base_item(&state.plan)
            .zip(catalog.category(category))
            .map(|(plan, cat)| html! {
                <div class="details-link">
                    <a href={details_href(&cat.slug)}
                        target="_blank" rel="noopener noreferrer">
                        {format!("Ver detalles de \"{}\" ↗", plan.name)}
                    </a>
                </div>
            });

        html! {
            <div class="selection-block">
                <div>
                    <label for="category" class="field-label">{"Categoría *"}</label>
                    <select id="category" name="category" onchange={on_category}>
                        <option value="" selected={category.is_empty()}>{"Elige una categoría"}</option>
                        { for catalog.categories().iter().map(|cat| html! {
                            <option key={cat.id.clone()} value={cat.id.clone()} selected={cat.id == category}>
                                {cat.name2.clone()}
                            </option>
                        }) }
                    </select>
                </div>
                <div>
                    <label for="plan" class="field-label">{"Plan *"}</label>
                    <select id="plan" name="plan" disabled={category.is_empty()} onchange={on_plan}>
                        <option value="" selected={state.plan.is_empty()}>{"Selecciona un plan"}</option>
                        { for plans.iter().map(|plan| html! {
                            <option key={plan.id.clone()} value={plan.id.clone()} selected={plan.id == state.plan}>
                                {format!("{} — {}", plan.name, option_price(&plan.price))}
                            </option>
                        }) }
                    </select>
                    { details_link.unwrap_or_default() }
                </div>
                if !services.is_empty() {
                    <div>
                        <label for="service" class="field-label">{"Servicio individual"}</label>
                        <select id="service" name="service" onchange={on_service}>
                            <option value="" selected={state.service.is_empty()}>{"O elige un servicio"}</option>
                            { for services.iter().map(|service| html! {
                                <option key={service.id.clone()} value={service.id.clone()} selected={service.id == state.service}>
                                    {format!("{} — {}", service.name, option_price(&service.price))}
                                </option>
                            }) }
                        </select>
                    </div>
                }
                if !addons.is_empty() {
                    <div>
                        <p class="selection-title">{"Add-ons Opcionales:"}</p>
                        <ul class="option-list">
                            { for addons.iter().map(|addon| {
                                let toggle = {
                                    let dispatcher = state.dispatcher();
                                    let id = addon.id.clone();
                                    Callback::from(move |_: Event| dispatcher.dispatch(FormAction::ToggleAddon(id.clone())))
                                };
                                html! {
                                    <li key={addon.id.clone()} class="option-line">
                                        <label class="option-label">
                                            <input type="checkbox" checked={state.is_addon_selected(&addon.id)} onchange={toggle} />
                                            <span>{addon.name.clone()}</span>
                                        </label>
                                        <span class="option-price">
                                            {addon.price.to_string()}
                                            <br/><small>{"USD"}</small>
                                        </span>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                }
                if !bonuses.is_empty() {
                    <div>
                        <p class="selection-title">{"Bonos Incluidos:"}</p>
                        <ul class="option-list">
                            { for bonuses.iter().map(|bonus| html! {
                                <li key={bonus.id.clone()} class="option-line included">
                                    <label class="option-label">
                                        <input type="checkbox" checked=true disabled=true />
                                        <span>{bonus.name.clone()}</span>
                                    </label>
                                    <span class="option-price">{bonus.price.to_string()}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
            </div>
        }
    };

    let text_input = |field: Field, id: &'static str, label: &'static str, kind: &'static str, placeholder: &'static str| {
        html! {
            <div>
                <label for={id} class="field-label">{label}</label>
                <input id={id} name={id} type={kind} placeholder={placeholder}
                    value={state.fields.get(field).to_string()}
                    oninput={on_field(field)}
                    required={label.ends_with('*')} />
            </div>
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1rem;
                }
                .contact-section h2 {
                    font-size: 3rem;
                    font-weight: 800;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .contact-intro {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    opacity: 0.7;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .glass-panel {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    backdrop-filter: blur(10px);
                }
                .selection-block {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .contact-form select,
                .contact-form input[type="text"],
                .contact-form input[type="email"],
                .contact-form input[type="tel"],
                .contact-form textarea,
                .selection-block select,
                .total-display {
                    width: 100%;
                    margin-top: 0.5rem;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.3);
                    color: inherit;
                }
                .total-display {
                    cursor: not-allowed;
                }
                .cart-line, .option-line {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                }
                .cart-remove {
                    background: none;
                    border: none;
                    color: #f87171;
                    cursor: pointer;
                }
                .option-line.included {
                    opacity: 0.8;
                }
                .details-link {
                    margin-top: 0.75rem;
                    text-align: right;
                    font-weight: 600;
                }
                .contact-submit {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                .info-card {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .info-note {
                    font-size: 0.75rem;
                    opacity: 0.6;
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <h2>{"Hablemos de tu Proyecto"}</h2>
            <p class="contact-intro">
                {"Estamos listos para escuchar tus ideas y ayudarte a encontrar la solución digital perfecta para tu negocio."}
            </p>
            <div class="contact-grid">
                <div class="glass-panel">
                    <h3>{"Inicia tu Proyecto"}</h3>
                    if state.is_cart_mode() {
                        { cart_view }
                    } else {
                        { selection_view }
                    }
                    <form class="contact-form" {onsubmit}>
                        if !state.is_cart_mode() {
                            <div>
                                <label class="field-label">{"Total (aproximado):"}</label>
                                <input type="text" readonly=true class="total-display" value={format_usd(quote.total)} />
                                if !quote.items.is_empty() {
                                    <p class="info-note">
                                        { quote.items.iter().map(|item| item.name.as_str()).collect::<Vec<_>>().join(" + ") }
                                    </p>
                                }
                            </div>
                        }
                        { text_input(Field::Name, "name", "Nombre *", "text", "Nombre completo") }
                        { text_input(Field::Email, "email", "Correo Electrónico *", "email", "Correo electrónico") }
                        { text_input(Field::Phone, "phone", "Teléfono (Opcional)", "tel", "Teléfono") }
                        { text_input(Field::Company, "company", "Empresa (Opcional)", "text", "Empresa") }
                        <div>
                            <label for="message" class="field-label">{"¿En qué podemos ayudarte? *"}</label>
                            <textarea id="message" name="message" rows="4" placeholder="Déjanos tu mensaje"
                                value={state.fields.message.clone()} oninput={on_message} required=true />
                        </div>
                        <button type="submit" class="contact-submit">{"Enviar Mensaje"}</button>
                    </form>
                </div>
                <div>
                    <div class="glass-panel">
                        <video src={config::SHOWREEL_VIDEO} autoplay=true muted=true loop=true playsinline=true />
                    </div>
                    <div class="glass-panel info-card">
                        <span>{"📞"}</span>
                        <div>
                            <p>{"Teléfono"}</p>
                            <span>{format!("Celular: {}", config::OFFICE_MOBILE)}</span><br/>
                            <span>{format!("Oficina: {}", config::OFFICE_PHONES)}</span>
                            <p class="info-note">{config::OFFICE_HOURS}</p>
                        </div>
                    </div>
                    <div class="glass-panel info-card">
                        <span>{"✉️"}</span>
                        <div>
                            <p>{"Correo Electrónico"}</p>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </div>
                    </div>
                    <div class="glass-panel info-card">
                        <span>{"📍"}</span>
                        <div>
                            <p>{"Ubicación"}</p>
                            <span>{config::OFFICE_ADDRESS}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_link_points_at_the_category_page() {
        assert_eq!(details_href("web"), "/servicios/web");
    }
}
