use yew::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

struct TeamMember {
    role: &'static str,
    skills: &'static str,
    description: &'static str,
    image: Option<&'static str>,
    object_position: Option<&'static str>,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        role: "Desarrollador",
        skills: "Backend y Frontend (Rust, WebAssembly, AWS, PostgreSQL)",
        description: "Aportando solidez técnica a nuestros proyectos más complejos.",
        image: Some("/images/portfolio/desenior.png"),
        object_position: None,
    },
    TeamMember {
        role: "Desarrollador",
        skills: "Frontend (Interfaces web, diseño responsivo)",
        description: "Asegurando interfaces modernas y funcionales.",
        image: Some("/images/portfolio/desjunior.png"),
        object_position: None,
    },
    TeamMember {
        role: "Diseñador",
        skills: "Creatividad Visual (Figma, Adobe CC)",
        description: "Dando vida a las marcas y experiencias de usuario.",
        image: Some("/images/portfolio/disjunior.png"),
        object_position: None,
    },
    TeamMember {
        role: "Socio Operativo",
        skills: "Gestión de Proyectos, Estrategia, UX, Relaciones con Clientes",
        description: "Lidera la ejecución y la visión estratégica de los proyectos.",
        image: Some("/images/portfolio/socioop.png"),
        object_position: Some("center 0%"),
    },
    TeamMember {
        role: "Socio Inversionista",
        skills: "Dirección Financiera, Visión Estratégica, Networking",
        description: "Supervisa la dirección financiera y aporta visión estratégica.",
        image: None,
        object_position: None,
    },
];

const STRENGTHS: &[&str] = &[
    "Colaboración Integrada: Combinamos habilidades para soluciones completas.",
    "Enfoque en Calidad: Apasionados por la tecnología y el diseño bien ejecutado.",
    "Adaptabilidad: Equipo ágil capaz de adaptarse a cada proyecto y cliente.",
];

fn scroll_to(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to("contact");
    });

    html! {
        <section id="team" class="team-section">
            <style>
                {r#"
                .team-section {
                    padding: 5rem 1rem;
                    text-align: center;
                }
                .team-section h2 {
                    font-size: 3rem;
                    font-weight: 800;
                    margin-bottom: 1.5rem;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin: 3rem 0;
                }
                .team-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .team-card:hover {
                    transform: scale(1.05);
                    box-shadow: 0 0 20px rgba(46, 104, 255, 0.4);
                }
                .team-avatar {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 1.75rem;
                }
                .team-avatar img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .team-skills {
                    color: #1E90FF;
                    font-size: 0.875rem;
                }
                .team-strengths {
                    display: inline-block;
                    text-align: left;
                    opacity: 0.7;
                }
                @media (max-width: 768px) {
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <h2>{"Conoce el Equipo Detrás de Avanxia"}</h2>
            <p>
                {"Somos un equipo apasionado y multidisciplinario de estrategas, diseñadores y desarrolladores comprometidos con el éxito de nuestros clientes."}
            </p>
            <div class="team-grid">
                { for TEAM.iter().map(|member| html! {
                    <div class="team-card">
                        <div class="team-avatar">
                            {
                                match member.image {
                                    Some(src) => html! {
                                        <img src={src} alt={member.role}
                                            style={format!("object-position: {}", member.object_position.unwrap_or("center"))} />
                                    },
                                    None => html! { <span>{"👤"}</span> },
                                }
                            }
                        </div>
                        <h3>{member.role}</h3>
                        <p class="team-skills">{member.skills}</p>
                        <p>{member.description}</p>
                    </div>
                }) }
            </div>
            <h3>{"Nuestra Fortaleza"}</h3>
            <ul class="team-strengths">
                { for STRENGTHS.iter().map(|s| html! { <li>{*s}</li> }) }
            </ul>
            <p>
                <i>
                    {"¿Quieres formar parte del equipo? "}
                    <a href="#contact" onclick={to_contact}>{"Contáctanos"}</a>
                </i>
            </p>
        </section>
    }
}
