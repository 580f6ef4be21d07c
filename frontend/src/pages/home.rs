use yew::prelude::*;

use crate::components::observers::{observe_reveals, track_sections};
use crate::components::status_ticker::StatusTicker;
use crate::config;
use crate::contact::form::ContactForm;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_section_change: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    {
        let on_section_change = props.on_section_change.clone();
        use_effect_with_deps(
            move |_| {
                let handles = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| {
                        (
                            observe_reveals(&document),
                            track_sections(&document, &config::SECTION_IDS, on_section_change),
                        )
                    });
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        text-align: center;
                        padding: 6rem 1.5rem 3rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        letter-spacing: 0.2em;
                        margin: 0 0 1rem;
                    }
                    .hero-subtitle {
                        color: rgba(230, 241, 255, 0.7);
                        max-width: 640px;
                        margin: 0 auto 2rem;
                    }
                    .system-status {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        color: rgba(230, 241, 255, 0.6);
                    }
                    .system-status .active {
                        color: #00ffaa;
                    }
                    .status-dot {
                        display: inline-block;
                        width: 8px;
                        height: 8px;
                        margin-right: 0.5rem;
                        border-radius: 50%;
                        background: #00ffaa;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        font-size: 0.7rem;
                        letter-spacing: 0.3em;
                        transition: opacity 0.3s ease;
                    }
                    .content-section {
                        max-width: 960px;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                    }
                    .content-section h2 {
                        letter-spacing: 0.15em;
                        font-size: 1.75rem;
                    }
                    .section-animate {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .section-animate.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                "#}
            </style>

            <header id="hero" class="hero">
                <div class="hero-content">
                    <StatusTicker />
                    <h1>{"ASTRANEX DEFENCE"}</h1>
                    <p class="hero-subtitle">
                        {"Autonomous sensing and counter-UAS systems for critical infrastructure."}
                    </p>
                    <a href="#contact" class="hero-cta">{"REQUEST A BRIEFING"}</a>
                </div>
                <a href="#mission" class="scroll-indicator">{"SCROLL ▾"}</a>
            </header>

            <section id="mission" class="content-section">
                <h2>{"MISSION"}</h2>
                <p>{"Give operators a clear, early picture of every object in their airspace and the tools to act on it."}</p>
            </section>

            <section id="vision" class="content-section">
                <h2>{"VISION"}</h2>
                <p>{"A layered, sovereign defence network where every sensor shares one picture in real time."}</p>
            </section>

            <section id="team" class="content-section">
                <h2>{"TEAM"}</h2>
                <div class="team-grid">
                    <div class="team-card">
                        <h3>{"Engineering"}</h3>
                        <p>{"Radar, RF and embedded specialists from aerospace and signals backgrounds."}</p>
                    </div>
                    <div class="team-card">
                        <h3>{"Operations"}</h3>
                        <p>{"Former field operators who shape every interface around real deployments."}</p>
                    </div>
                    <div class="team-card">
                        <h3>{"Research"}</h3>
                        <p>{"Sensor fusion and tracking research carried from the lab into hardened products."}</p>
                    </div>
                </div>
            </section>

            <section id="about" class="content-section">
                <h2>{"ABOUT"}</h2>
                <p>{"Astranex Defence designs and builds detection systems for government and industry partners."}</p>
            </section>

            <section id="contact" class="content-section">
                <h2>{"CONTACT"}</h2>
                <p>{"Tell us about your site and requirements. All enquiries are answered within two working days."}</p>
                <ContactForm />
            </section>
        </div>
    }
}
