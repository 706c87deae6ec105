use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod overlay;
mod property;

mod gallery {
    pub mod navigator;
}
mod chat {
    pub mod gemini;
    pub mod session;
}
mod components {
    pub mod chat;
    pub mod lightbox;
}
mod pages {
    pub mod landing;
}

use pages::landing::{scroll_to_section, Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    // Threshold roughly matches the hero section height
                    is_scrolled.set(scroll_top > 600.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem 3rem;
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                        transition: background 0.3s;
                        font-family: 'Noto Serif TC', serif;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #111827;
                        text-decoration: none;
                        z-index: 50;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font: inherit;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #4b5563;
                        transition: color 0.2s;
                    }
                    .nav-link:hover { color: #000; }
                    .nav-cta {
                        background: none;
                        border: 1px solid #111827;
                        cursor: pointer;
                        font: inherit;
                        padding: 0.75rem 2rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #111827;
                        transition: all 0.3s;
                    }
                    .nav-cta:hover { background: #111827; color: #fff; }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        z-index: 50;
                        width: 2.5rem;
                        height: 2.5rem;
                        flex-direction: column;
                        justify-content: center;
                        gap: 0.375rem;
                    }
                    .burger-menu span {
                        display: block;
                        height: 2px;
                        width: 1.5rem;
                        background: #111827;
                        margin: 0 auto;
                    }
                    @media (max-width: 768px) {
                        .top-nav { padding: 1.5rem; }
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            position: fixed;
                            inset: 0;
                            z-index: 30;
                            flex-direction: column;
                            justify-content: center;
                            gap: 2rem;
                            background: rgba(255, 255, 255, 0.95);
                            backdrop-filter: blur(24px);
                        }
                        .nav-right.mobile-menu-open .nav-link { font-size: 1.5rem; }
                    }
                "#}
            </style>

            <a
                class="nav-logo"
                href="https://www.yuandevelopment.com/"
                target="_blank"
                rel="noopener noreferrer"
            >
                { "YUAN DEVELOPMENT" }
            </a>

            <button class="burger-menu" onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class={menu_class}>
                <button class="nav-link" onclick={go_to("features")}>{ "Features" }</button>
                <button class="nav-link" onclick={go_to("lifestyle")}>{ "Lifestyle" }</button>
                <button class="nav-link" onclick={go_to("contact")}>{ "Contact" }</button>
                <button class="nav-cta" onclick={go_to("contact")}>{ "預約賞屋" }</button>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
