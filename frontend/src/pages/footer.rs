use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer" style="padding: 3rem 1rem; text-align: center; opacity: 0.7;">
            <p>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                {format!(" · {}", config::OFFICE_MOBILE)}
            </p>
            <p>{config::OFFICE_ADDRESS}</p>
            <p>
                <Link<Route> to={Route::Pricing}>{"Precios"}</Link<Route>>
                {" · "}
                <Link<Route> to={Route::Contact}>{"Contacto"}</Link<Route>>
            </p>
            <p>{"© Avanxia Labs"}</p>
        </footer>
    }
}
