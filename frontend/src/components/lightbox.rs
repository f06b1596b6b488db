use web_sys::MouseEvent;
use yew::prelude::*;

use crate::gallery::overlay::{consume, ClickTarget};
use crate::gallery::state::{GalleryAction, GalleryState};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub state: GalleryState,
    pub on_action: Callback<GalleryAction>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let LightboxProps { state, on_action } = props;

    let (project, index) = match (state.project(), state.current_index()) {
        (Some(project), Some(index)) => (project.clone(), index),
        _ => return html! {},
    };

    let emit = |action: GalleryAction| {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            consume(&e);
            on_action.emit(action.clone());
        })
    };

    let on_backdrop = {
        let on_action = on_action.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(action) = ClickTarget::Backdrop.handle(&e) {
                on_action.emit(action);
            }
        })
    };

    let on_content = Callback::from(|e: MouseEvent| {
        ClickTarget::Content.handle(&e);
    });

    let current = state.current_image().map(|image| image.url()).unwrap_or_default();
    let counter = state.counter_label().unwrap_or_default();

    html! {
        <div class="lightbox" onclick={on_backdrop}>
            <button class="lightbox-close" aria-label="Close gallery" onclick={emit(GalleryAction::Close)}>
                {"✕"}
            </button>

            <div class="lightbox-content" onclick={on_content}>
                <div class="lightbox-info">
                    <span class="lightbox-category">{project.category.clone()}</span>
                    <h3>{project.title.clone()}</h3>
                    <p>{project.description.clone()}</p>
                </div>

                <div class="lightbox-stage">
                    <img
                        key={index.to_string()}
                        class="lightbox-image"
                        src={current}
                        alt={format!("{} - Image {}", project.title, index + 1)}
                    />
                    <button class="lightbox-arrow lightbox-arrow--prev" aria-label="Previous image" onclick={emit(GalleryAction::Prev)}>
                        {"‹"}
                    </button>
                    <button class="lightbox-arrow lightbox-arrow--next" aria-label="Next image" onclick={emit(GalleryAction::Next)}>
                        {"›"}
                    </button>
                </div>

                <div class="lightbox-thumbs">
                    { for project.images.iter().enumerate().map(|(k, image)| {
                        let class = if k == index {
                            "lightbox-thumb active"
                        } else {
                            "lightbox-thumb"
                        };
                        html! {
                            <button key={k.to_string()} class={class} onclick={emit(GalleryAction::Select(k))}>
                                <img src={image.url()} alt={format!("Thumbnail {}", k + 1)} />
                            </button>
                        }
                    }) }
                </div>

                <p class="lightbox-counter">{counter}</p>
            </div>

            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(10, 10, 10, 0.98);
                    backdrop-filter: blur(24px);
                    animation: fadeIn 0.3s ease forwards;
                }
                .lightbox-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 20;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .lightbox-close:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .lightbox-content {
                    position: relative;
                    width: 100%;
                    max-width: 72rem;
                    margin: 0 1.5rem;
                    animation: popIn 0.35s cubic-bezier(0.2, 0.9, 0.3, 1.1) forwards;
                }
                @keyframes popIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .lightbox-info {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .lightbox-category {
                    display: block;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #d4af37;
                    margin-bottom: 0.5rem;
                }
                .lightbox-info h3 {
                    font-size: 2.25rem;
                    font-weight: 300;
                    margin-bottom: 0.5rem;
                }
                .lightbox-info p {
                    color: #a0a0a0;
                    max-width: 32rem;
                    margin: 0 auto;
                }
                .lightbox-stage {
                    position: relative;
                    aspect-ratio: 16 / 10;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    background: #1a1a1a;
                }
                .lightbox-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    animation: slideIn 0.3s ease forwards;
                }
                @keyframes slideIn {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .lightbox-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(10, 10, 10, 0.8);
                    color: #ffffff;
                    font-size: 1.75rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .lightbox-arrow:hover {
                    background: rgba(10, 10, 10, 1);
                }
                .lightbox-arrow--prev { left: 1rem; }
                .lightbox-arrow--next { right: 1rem; }
                .lightbox-thumbs {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                .lightbox-thumb {
                    width: 5rem;
                    height: 3.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 0.375rem;
                    overflow: hidden;
                    cursor: pointer;
                    opacity: 0.5;
                    transition: all 0.3s ease;
                }
                .lightbox-thumb:hover {
                    opacity: 0.8;
                }
                .lightbox-thumb.active {
                    opacity: 1;
                    transform: scale(1.05);
                    box-shadow: 0 0 0 2px #d4af37;
                }
                .lightbox-thumb img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .lightbox-counter {
                    text-align: center;
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #a0a0a0;
                }
                "#}
            </style>
        </div>
    }
}
