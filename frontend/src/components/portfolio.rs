use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::gallery::catalog::Catalog;
use crate::gallery::state::{GalleryAction, GalleryState};
use crate::utils::hooks::use_scroll_listener;
use crate::utils::motion::{card_entrance, in_view, Entrance};
use crate::utils::scroll::lock_body;

const REVEAL_MARGIN_PX: f64 = -100.0;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub catalog: Rc<Catalog>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let gallery = use_reducer(GalleryState::default);
    let container_ref = use_node_ref();
    let revealed = use_state_eq(|| false);

    // Reveal once; never hide again after the first hit
    {
        let container_ref = container_ref.clone();
        let revealed = revealed.clone();
        use_scroll_listener(move || {
            let viewport = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64());
            if let (Some(container), Some(viewport)) = (container_ref.cast::<Element>(), viewport) {
                let rect = container.get_bounding_client_rect();
                if in_view(rect.top(), rect.bottom(), viewport, REVEAL_MARGIN_PX) {
                    revealed.set(true);
                }
            }
        });
    }

    {
        let is_open = gallery.is_open();
        use_effect_with_deps(
            move |open| {
                lock_body(*open);
                || lock_body(false)
            },
            is_open,
        );
    }

    let on_action = {
        let dispatcher = gallery.dispatcher();
        Callback::from(move |action: GalleryAction| dispatcher.dispatch(action))
    };

    let reveal_class = if *revealed { "reveal visible" } else { "reveal" };

    html! {
        <section id="portfolio" class="portfolio">
            <div class="portfolio-blobs">
                <div class="portfolio-blob portfolio-blob--right"></div>
                <div class="portfolio-blob portfolio-blob--left"></div>
            </div>

            <div class="portfolio-container" ref={container_ref}>
                <div class={classes!("portfolio-header", reveal_class)} style={Entrance::PORTFOLIO_HEADER.style()}>
                    <span class="portfolio-eyebrow">{"Our Work"}</span>
                    <h2>{"Portfolio"}</h2>
                    <p>{"Explore our collection of premium websites crafted for exceptional brands."}</p>
                </div>

                <div class="portfolio-grid">
                    { for props.catalog.iter().enumerate().map(|(i, project)| {
                        let onclick = {
                            let on_action = on_action.clone();
                            let project = project.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_action.emit(GalleryAction::Open(project.clone()));
                            })
                        };
                        let cover = project.images.first().map(|image| image.url()).unwrap_or_default();
                        html! {
                            <div
                                key={project.title.clone()}
                                class={classes!(reveal_class, (i == 0).then_some("portfolio-card--wide"))}
                                style={card_entrance(i).style()}
                            >
                                <div class="portfolio-card" onclick={onclick}>
                                    <img src={cover} alt={project.title.clone()} />
                                    <div class="portfolio-card-overlay">
                                        <span class="portfolio-card-category">{project.category.clone()}</span>
                                        <h3>{project.title.clone()}</h3>
                                        <span class="portfolio-card-hint">{"Click to view gallery"}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <Lightbox state={(*gallery).clone()} on_action={on_action.clone()} />

            <style>
                {r#"
                .portfolio {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 0;
                }
                .portfolio-blobs {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .portfolio-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                }
                .portfolio-blob--right {
                    top: 25%;
                    right: 0;
                    background: rgba(212, 175, 55, 0.05);
                }
                .portfolio-blob--left {
                    bottom: 25%;
                    left: 0;
                    background: rgba(192, 192, 192, 0.05);
                }
                .portfolio-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .portfolio-header {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .portfolio-eyebrow {
                    display: inline-block;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(212, 175, 55, 0.8);
                    margin-bottom: 1rem;
                }
                .portfolio-header h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 300;
                    letter-spacing: 0.02em;
                    margin-bottom: 1.5rem;
                }
                .portfolio-header p {
                    color: #a0a0a0;
                    max-width: 36rem;
                    margin: 0 auto;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .portfolio-grid { grid-template-columns: repeat(2, 1fr); }
                    .portfolio-card--wide { grid-column: span 2; }
                }
                @media (min-width: 1024px) {
                    .portfolio-grid {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                }
                .reveal.visible {
                    animation-name: fadeUp;
                    animation-fill-mode: forwards;
                    animation-timing-function: ease-out;
                }
                .portfolio-card {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .portfolio-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .portfolio-card:hover img {
                    transform: scale(1.05);
                }
                .portfolio-card-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(10, 10, 10, 1), rgba(10, 10, 10, 0.5), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .portfolio-card:hover .portfolio-card-overlay {
                    opacity: 1;
                }
                .portfolio-card-category {
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }
                .portfolio-card-overlay h3 {
                    font-size: 1.875rem;
                    font-weight: 300;
                    margin-bottom: 0.5rem;
                }
                .portfolio-card-hint {
                    font-size: 0.875rem;
                    color: #a0a0a0;
                }
                "#}
            </style>
        </section>
    }
}
