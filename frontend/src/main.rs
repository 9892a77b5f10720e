use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod catalog;
mod format;
mod contact {
    pub mod state;
    pub mod pricing;
    pub mod submit;
    pub mod form;
}
mod pages {
    pub mod landing;
    pub mod hero;
    pub mod services;
    pub mod team;
    pub mod pricing;
    pub mod category;
    pub mod contact;
    pub mod footer;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    pricing::Pricing,
    category::ServiceCategory,
    contact::ContactPage,
    footer::Footer,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/precios")]
    Pricing,
    #[at("/contacto")]
    Contact,
    #[at("/servicios/:slug")]
    ServiceCategory { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::ServiceCategory { slug } => {
            info!("Rendering ServiceCategory page for {}", slug);
            html! { <ServiceCategory {slug} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let document = window.document();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|e| e.scroll_top())
                        .unwrap_or_default();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    gloo_console::error!("Failed to attach scroll listener");
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Avanxia"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <a href="/#services" class="nav-link">{"Servicios"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#team" class="nav-link">{"Equipo"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">
                            {"Precios"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Contacto"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
