use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::utils::hooks::use_scroll_listener;
use crate::utils::motion::{scroll_progress, Entrance, HeroFrame};
use crate::utils::scroll::{scroll_to, Anchor};

fn anchor_link(anchor: Anchor) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(anchor);
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section_ref = use_node_ref();
    let frame = use_state_eq(HeroFrame::default);

    {
        let section_ref = section_ref.clone();
        let frame = frame.clone();
        use_scroll_listener(move || {
            if let Some(section) = section_ref.cast::<Element>() {
                let rect = section.get_bounding_client_rect();
                frame.set(HeroFrame::at(scroll_progress(rect.top(), rect.height())));
            }
        });
    }

    let on_scroll_indicator = Callback::from(|_: MouseEvent| {
        scroll_to(Anchor::Services);
    });

    html! {
        <section ref={section_ref} id="home" class="hero">
            <div class="hero-parallax" style={frame.background_style()}>
                <img src={config::asset_url("hero-bg.jpg")} alt="Luxury abstract background" />
                <div class="hero-scrim"></div>
            </div>

            <div class="hero-blobs">
                <div class="hero-blob hero-blob--primary"></div>
                <div class="hero-blob hero-blob--silver"></div>
            </div>

            <div class="hero-content" style={frame.content_style()}>
                <h1 class="fade-up" style={Entrance::HERO_HEADING.style()}>
                    <span class="hero-title">{"Molunaire"}</span>
                    <span class="hero-title text-gradient">{"Where Luxury Meets Web Design"}</span>
                </h1>
                <p class="hero-subtitle fade-up" style={Entrance::HERO_SUBTITLE.style()}>
                    {"We create modern, fast, and visually striking websites that elevate brands to the next level."}
                </p>
                <div class="hero-cta-group fade-up" style={Entrance::HERO_CTA.style()}>
                    <a href={Anchor::Contact.href()} class="btn-luxury" onclick={anchor_link(Anchor::Contact)}>
                        {"Get Started"}
                    </a>
                    <a href={Anchor::Portfolio.href()} class="btn-outline-luxury" onclick={anchor_link(Anchor::Portfolio)}>
                        {"View Our Work"}
                    </a>
                </div>
            </div>

            <button class="hero-scroll fade-in" style={Entrance::SCROLL_INDICATOR.style()} onclick={on_scroll_indicator}>
                <span class="hero-scroll-label">{"Scroll"}</span>
                <span class="hero-scroll-arrow">{"↓"}</span>
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-parallax {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    will-change: transform;
                }
                .hero-parallax img {
                    width: 100%;
                    height: 120%;
                    object-fit: cover;
                }
                .hero-scrim {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to bottom,
                        rgba(10, 10, 10, 0.3) 0%,
                        rgba(10, 10, 10, 0.5) 50%,
                        rgba(10, 10, 10, 1) 100%
                    );
                }
                .hero-blobs {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }
                .hero-blob--primary {
                    top: 25%;
                    left: 25%;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(212, 175, 55, 0.05);
                    animation-name: driftA;
                    animation-duration: 10s;
                }
                .hero-blob--silver {
                    bottom: 33%;
                    right: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(192, 192, 192, 0.05);
                    animation-name: driftB;
                    animation-duration: 12s;
                }
                @keyframes driftA {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(50px, 30px); }
                }
                @keyframes driftB {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(-40px, -50px); }
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hero-content h1 {
                    font-weight: 300;
                    letter-spacing: 0.02em;
                    line-height: 1.2;
                    margin-bottom: 2rem;
                    font-size: clamp(2.25rem, 6vw, 6rem);
                }
                .hero-title {
                    display: block;
                }
                .hero-title + .hero-title {
                    margin-top: 0.5rem;
                }
                .text-gradient {
                    background: linear-gradient(90deg, #d4af37, #f5e6b3, #c0c0c0);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    font-weight: 300;
                    color: #a0a0a0;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    line-height: 1.7;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .btn-luxury,
                .btn-outline-luxury {
                    transition: transform 0.2s ease;
                }
                .btn-luxury:hover,
                .btn-outline-luxury:hover {
                    transform: scale(1.02);
                }
                .btn-luxury:active,
                .btn-outline-luxury:active {
                    transform: scale(0.98);
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #a0a0a0;
                    cursor: pointer;
                }
                .hero-scroll:hover {
                    color: #ffffff;
                }
                .hero-scroll-label {
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .hero-scroll-arrow {
                    animation: bob 2s ease-in-out infinite;
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                "#}
            </style>
        </section>
    }
}
