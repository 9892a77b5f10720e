use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub struct ShowcaseEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image: &'static str,
}

pub struct ShowcaseGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub start: usize,
    pub end: usize,
}

pub const SHOWCASE: &[ShowcaseEntry] = &[
    ShowcaseEntry {
        title: "Branding e Identidad Corporativa",
        description: "Creamos marcas memorables. Desde el naming y diseño de logotipo hasta el desarrollo de un manual de marca completo que guíe la comunicación visual de tu empresa.",
        icon: "🎨",
        image: "/images/portfolio/services/branding.png",
    },
    ShowcaseEntry {
        title: "Diseño y Desarrollo Web",
        description: "Construimos sitios web modernos, rápidos y optimizados, con un rendimiento superior en cualquier dispositivo.",
        icon: "💻",
        image: "/images/portfolio/services/diseno_des.png",
    },
    ShowcaseEntry {
        title: "Desarrollo de Aplicaciones Web y Móviles",
        description: "Transformamos tus ideas en aplicaciones funcionales y escalables, adaptadas a tus necesidades específicas.",
        icon: "📱",
        image: "/images/portfolio/services/desarrollo.png",
    },
    ShowcaseEntry {
        title: "Gestión de Redes Sociales",
        description: "Maximizamos tu presencia en redes sociales con un estilo único. Te guiamos desde la estrategia hasta la gestión de comunidades.",
        icon: "🌐",
        image: "/images/portfolio/services/redes_sociales.png",
    },
    ShowcaseEntry {
        title: "Publicidad Pagada (Paid Media)",
        description: "Aumentamos tu visibilidad y generamos leads cualificados con campañas en Google Ads, Meta Ads, LinkedIn Ads y TikTok Ads.",
        icon: "📊",
        image: "/images/portfolio/services/publicidad.png",
    },
    ShowcaseEntry {
        title: "SEO y Marketing de Contenidos",
        description: "Mejoramos tu posicionamiento orgánico en buscadores con contenido relevante, optimización técnica y enlaces de calidad.",
        icon: "🔍",
        image: "/images/portfolio/services/seo.png",
    },
    ShowcaseEntry {
        title: "Email Marketing y Automatización",
        description: "Creamos y gestionamos campañas de email marketing para nutrir leads y fidelizar clientes, con flujos de automatización.",
        icon: "✉️",
        image: "/images/portfolio/services/email_mark.png",
    },
    ShowcaseEntry {
        title: "Producción Audiovisual",
        description: "Fotografía de producto, videos corporativos, motion graphics y spots publicitarios que dan vida a tu marca.",
        icon: "🎬",
        image: "/images/portfolio/services/digital.png",
    },
    ShowcaseEntry {
        title: "Impresión y Material POP",
        description: "Materiales impresos de alta calidad, desde tarjetas de presentación hasta elementos para puntos de venta.",
        icon: "🖨️",
        image: "/images/portfolio/services/pop.png",
    },
    ShowcaseEntry {
        title: "Mantenimiento y Soporte Web",
        description: "Mantenimiento técnico, actualizaciones de contenido y soporte continuo para el óptimo funcionamiento de tu sitio.",
        icon: "🛠️",
        image: "/images/portfolio/services/mant_soporte.png",
    },
];

pub const GROUPS: &[ShowcaseGroup] = &[
    ShowcaseGroup { id: "branding", title: "Branding & Web", start: 0, end: 3 },
    ShowcaseGroup { id: "marketing", title: "Marketing Digital", start: 3, end: 7 },
    ShowcaseGroup { id: "produccion", title: "Producción & Soporte", start: 7, end: 10 },
];

impl ShowcaseGroup {
    pub fn entries(&self) -> &'static [ShowcaseEntry] {
        let end = self.end.min(SHOWCASE.len());
        &SHOWCASE[self.start.min(end)..end]
    }
}

fn call_to_action(contact_label: &'static str) -> Html {
    html! {
        <div class="services-cta">
            <a class="secondary-button" href="#contact">{contact_label}</a>
            <Link<Route> to={Route::Pricing} classes="primary-button">
                {"Consulta nuestros planes"}
            </Link<Route>>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                .services-section {
                    padding: 6rem 1.5rem;
                }
                .services-section h2 {
                    font-size: 3rem;
                    font-weight: 800;
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .services-intro {
                    text-align: center;
                    max-width: 56rem;
                    margin: 0 auto 4rem;
                    font-size: 1.25rem;
                }
                .services-nav {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    margin-bottom: 3.5rem;
                }
                .services-cta {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin: 3rem auto 2.5rem;
                }
                .primary-button, .secondary-button {
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                    white-space: nowrap;
                }
                .primary-button {
                    background: #1E90FF;
                    color: white;
                }
                .secondary-button {
                    border: 1px solid #1E90FF;
                    color: #1E90FF;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .service-card {
                    display: flex;
                    overflow: hidden;
                    border-radius: 16px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                }
                .service-card-body {
                    width: 60%;
                    padding: 1.5rem;
                }
                .service-card img {
                    width: 40%;
                    object-fit: cover;
                }
                @media (max-width: 768px) {
                    .services-nav {
                        display: none;
                    }
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                    .services-cta {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
            <h2>{"Nuestros Servicios 360° para Impulsar tu Negocio"}</h2>
            <p class="services-intro">
                {"En Avanxia Labs ofrecemos una gama completa de servicios digitales. Desde la creación de tu marca hasta campañas de marketing avanzadas, nuestro equipo multidisciplinario está listo para ayudarte a alcanzar tus objetivos."}
            </p>
            <nav class="services-nav">
                { for GROUPS.iter().map(|group| html! {
                    <a key={group.id} href={format!("#services-{}", group.id)}>{group.title}</a>
                }) }
            </nav>
            { call_to_action("Impulsa tus ventas") }
            { for GROUPS.iter().map(|group| html! {
                <div key={group.id} id={format!("services-{}", group.id)}>
                    <h3>{group.title}</h3>
                    <div class="services-grid">
                        { for group.entries().iter().map(|entry| html! {
                            <div class="service-card">
                                <div class="service-card-body">
                                    <div class="service-icon">{entry.icon}</div>
                                    <h4>{entry.title}</h4>
                                    <p>{entry.description}</p>
                                </div>
                                <img src={entry.image} alt={entry.title} />
                            </div>
                        }) }
                    </div>
                </div>
            }) }
            { call_to_action("Contacta con nosotros") }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_cover_every_entry_once() {
        let mut covered = 0;
        for pair in GROUPS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for group in GROUPS {
            covered += group.entries().len();
        }
        assert_eq!(GROUPS[0].start, 0);
        assert_eq!(covered, SHOWCASE.len());
    }
}
