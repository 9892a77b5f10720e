use yew::prelude::*;

use crate::contact::form::ContactForm;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="contact-page">
            <ContactForm />
        </div>
    }
}
