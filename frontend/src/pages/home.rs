use std::rc::Rc;

use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::portfolio::Portfolio;
use crate::gallery::catalog::Catalog;

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>().unwrap_or_default();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home">
            <Hero />
            <Portfolio catalog={catalog} />
        </main>
    }
}
