use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
            <h1>{"404"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}
