use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Runs `on_scroll` once after the first render and then on every window
/// scroll event until the component unmounts.
#[hook]
pub fn use_scroll_listener<F>(on_scroll: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                on_scroll();
                let callback = Closure::<dyn Fn()>::new(on_scroll);
                let _ = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            move || {
                destructor();
            }
        },
        (),
    );
}
