use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

const MOBILE_BREAKPOINT: f64 = 768.0;

#[function_component(Hero)]
pub fn hero() -> Html {
    let (width, _) = use_window_size();
    let is_mobile = width > 0.0 && width <= MOBILE_BREAKPOINT;

    html! {
        <section id="hero" class={classes!("hero", is_mobile.then(|| "hero-mobile"))}>
            <style>
                {r#"
                .hero {
                    width: 100%;
                    background: #101828;
                    color: white;
                    padding: 5rem 0;
                    position: relative;
                    overflow: hidden;
                }
                .hero-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2.5rem;
                }
                .hero-text {
                    flex: 1;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 800;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero h1 span {
                    color: #60a5fa;
                }
                .hero-tagline {
                    display: inline-block;
                    border-bottom: 2px solid #60a5fa;
                    padding: 0.1em 0.4em;
                    background: linear-gradient(90deg, #60a5fa, #22d3ee, #8b5cf6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                }
                .hero-video {
                    flex: 1;
                    display: flex;
                    justify-content: center;
                }
                .hero-video video {
                    width: 560px;
                    aspect-ratio: 1;
                    object-fit: cover;
                    border-radius: 50%;
                }
                .hero-mobile .hero-inner {
                    flex-direction: column;
                    text-align: center;
                    padding: 0 1rem;
                }
                .hero-mobile h1 {
                    font-size: 2rem;
                }
                .hero-mobile .hero-video video {
                    width: 260px;
                }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-text">
                    <h1>
                        {"Avanza con Avanxia "}
                        <span>{"Tu Negocio Listo para la Nueva Era Digital"}</span>
                    </h1>
                    <p>
                        {"Marketing digital, diseño impactante, desarrollo web y apps con tecnología de punta para tu ventaja competitiva en la era de la IA. "}
                        <span class="hero-tagline">{"Somos tu socio confiable hacia el futuro"}</span>
                    </p>
                    <a class="hero-cta" href="#contact">{"Cotiza tu Proyecto Gratis"}</a>
                </div>
                <div class="hero-video">
                    <video src={config::SHOWREEL_VIDEO} autoplay=true loop=true muted=true playsinline=true />
                </div>
            </div>
        </section>
    }
}
