use yew::prelude::*;

use crate::contact::form::ContactForm;
use super::hero::Hero;
use super::services::Services;
use super::team::Team;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Services />
            <Team />
            <ContactForm />
        </div>
    }
}
