//! The single marketing page: hero carousel, feature showcase, lifestyle
//! slider, contact section and footer. Owns every navigator plus the one
//! global keydown listener that routes keys by overlay priority.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::chat::ChatWidget;
use crate::components::lightbox::Lightbox;
use crate::gallery::navigator::{Navigator, NavigatorAction};
use crate::overlay::{dispatch_key, KeyAction, Overlay};
use crate::property::{BOOKING_URL, FEATURES, GALLERY_IMAGES, HERO_IMAGES, UNIT_PLANS};

/// Smooth-scrolls to a named section, leaving room for the fixed header.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let header_offset = 100.0;
        let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
            - header_offset;
        let mut options = web_sys::ScrollToOptions::new();
        options.top(top).behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero = use_reducer(|| Navigator::new(HERO_IMAGES.len()));
    let lifestyle = use_reducer(|| Navigator::new(GALLERY_IMAGES.len()));
    let lightbox = use_reducer(|| Navigator::new(GALLERY_IMAGES.len()));
    let lightbox_open = use_state(|| false);
    let selected_feature = use_state(|| None::<usize>);

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

    // Hero auto-advance. The interval is owned by this effect and cancelled
    // by dropping it on unmount, so a disposed view never ticks.
    {
        let hero = hero.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = gloo_timers::callback::Interval::new(6_000, move || {
                    hero.dispatch(NavigatorAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Lifestyle auto-advance, same ownership rules, its own cadence.
    {
        let lifestyle = lifestyle.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = gloo_timers::callback::Interval::new(5_000, move || {
                    lifestyle.dispatch(NavigatorAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    // Single global key listener. Re-registered whenever an overlay opens or
    // closes so the closure always sees the current routing mode.
    {
        let hero = hero.dispatcher();
        let lightbox_nav = lightbox.dispatcher();
        let lightbox_open = lightbox_open.clone();
        let selected_feature = selected_feature.clone();
        let deps = (*selected_feature, *lightbox_open);
        use_effect_with_deps(
            move |(feature, open): &(Option<usize>, bool)| {
                let feature = *feature;
                let open = *open;
                let window = web_sys::window().expect("no window");

                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let mode = if open {
                        Overlay::Lightbox
                    } else if feature.is_some() {
                        Overlay::FeatureModal
                    } else {
                        Overlay::None
                    };
                    match dispatch_key(mode, &e.key()) {
                        Some(KeyAction::HeroPrev) => hero.dispatch(NavigatorAction::Retreat),
                        Some(KeyAction::HeroNext) => hero.dispatch(NavigatorAction::Advance),
                        Some(KeyAction::FeaturePrev) => {
                            if let Some(i) = feature {
                                selected_feature
                                    .set(Some((i + FEATURES.len() - 1) % FEATURES.len()));
                            }
                        }
                        Some(KeyAction::FeatureNext) => {
                            if let Some(i) = feature {
                                selected_feature.set(Some((i + 1) % FEATURES.len()));
                            }
                        }
                        Some(KeyAction::CloseFeatureModal) => selected_feature.set(None),
                        Some(KeyAction::LightboxPrev) => {
                            lightbox_nav.dispatch(NavigatorAction::Retreat)
                        }
                        Some(KeyAction::LightboxNext) => {
                            lightbox_nav.dispatch(NavigatorAction::Advance)
                        }
                        Some(KeyAction::CloseLightbox) => lightbox_open.set(false),
                        None => {}
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                window
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(keydown);
                }
            },
            deps,
        );
    }

    let hero_prev = {
        let hero = hero.dispatcher();
        Callback::from(move |_: MouseEvent| hero.dispatch(NavigatorAction::Retreat))
    };
    let hero_next = {
        let hero = hero.dispatcher();
        Callback::from(move |_: MouseEvent| hero.dispatch(NavigatorAction::Advance))
    };

    // Opening the lightbox re-seeds it from whichever lifestyle slide is up.
    let open_lightbox = {
        let lightbox = lightbox.dispatcher();
        let lightbox_open = lightbox_open.clone();
        let start = lifestyle.index();
        Callback::from(move |_: MouseEvent| {
            lightbox.dispatch(NavigatorAction::Reset(start));
            lightbox_open.set(true);
        })
    };
    let close_lightbox = {
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_| lightbox_open.set(false))
    };
    let lightbox_prev = {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |_| lightbox.dispatch(NavigatorAction::Retreat))
    };
    let lightbox_next = {
        let lightbox = lightbox.dispatcher();
        Callback::from(move |_| lightbox.dispatch(NavigatorAction::Advance))
    };

    let close_feature = {
        let selected_feature = selected_feature.clone();
        Callback::from(move |_: MouseEvent| selected_feature.set(None))
    };
    let feature_prev = {
        let selected_feature = selected_feature.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(i) = *selected_feature {
                selected_feature.set(Some((i + FEATURES.len() - 1) % FEATURES.len()));
            }
        })
    };
    let feature_next = {
        let selected_feature = selected_feature.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(i) = *selected_feature {
                selected_feature.set(Some((i + 1) % FEATURES.len()));
            }
        })
    };

    html! {
        <div class="landing">
            <style>
                {r#"
                    .landing {
                        color: #1f2937;
                        font-family: 'Noto Serif TC', serif;
                        overflow-x: hidden;
                    }
                    .landing section { position: relative; }

                    /* Hero */
                    .hero {
                        position: relative;
                        height: 100vh;
                        min-height: 600px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        text-align: center;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                        background: #e5e7eb;
                    }
                    .hero-backdrop img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.9;
                        transition: opacity 1.5s ease-in-out;
                    }
                    .hero-backdrop::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #fff, transparent 40%, rgba(255,255,255,0.4));
                    }
                    .hero-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 20;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        border: 1px solid rgba(17, 24, 39, 0.1);
                        background: rgba(255, 255, 255, 0.5);
                        color: #374151;
                        font-size: 1.5rem;
                        cursor: pointer;
                        transition: background 0.3s;
                    }
                    .hero-arrow:hover { background: rgba(255, 255, 255, 0.8); }
                    .hero-arrow.prev { left: 2rem; }
                    .hero-arrow.next { right: 2rem; }
                    .hero-dots {
                        position: absolute;
                        bottom: 8rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.75rem;
                        z-index: 20;
                    }
                    .hero-dots button {
                        height: 0.25rem;
                        width: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #9ca3af;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .hero-dots button.active { width: 2rem; background: #111827; }
                    .hero-location {
                        display: inline-flex;
                        align-items: center;
                        gap: 1rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        font-size: 0.875rem;
                        color: #4b5563;
                        background: rgba(255, 255, 255, 0.8);
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        margin-bottom: 1.5rem;
                    }
                    .hero-location .dot {
                        width: 0.375rem;
                        height: 0.375rem;
                        background: #16a34a;
                        border-radius: 50%;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 8vw, 7rem);
                        letter-spacing: 0.2em;
                        color: #111827;
                        margin: 0;
                    }
                    .hero .latin-title {
                        font-size: 1.5rem;
                        letter-spacing: 0.5em;
                        color: #374151;
                        text-transform: uppercase;
                        margin-top: 1rem;
                    }
                    .hero-rule {
                        width: 6rem;
                        height: 0.25rem;
                        background: #111827;
                        margin: 2rem auto;
                    }
                    .hero-slogan { font-size: 1.25rem; line-height: 2; color: #1f2937; }
                    .hero-slogan span {
                        display: block;
                        font-size: 0.875rem;
                        letter-spacing: 0.2em;
                        color: #166534;
                        text-transform: uppercase;
                        margin-top: 0.75rem;
                    }

                    /* Sections */
                    .section-inner { max-width: 1600px; margin: 0 auto; padding: 6rem 1.5rem; }
                    .section-heading {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        border-bottom: 1px solid #e5e7eb;
                        padding-bottom: 2rem;
                        margin-bottom: 3rem;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .kicker {
                        color: #166534;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.875rem;
                        display: block;
                        margin-bottom: 0.5rem;
                    }
                    .section-heading h2 { font-size: clamp(2rem, 5vw, 3.75rem); margin: 0; }
                    .section-heading p { max-width: 28rem; color: #6b7280; }

                    /* Feature grid */
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        border-top: 1px solid #e5e7eb;
                        border-left: 1px solid #e5e7eb;
                    }
                    .feature-card {
                        border: none;
                        border-right: 1px solid #e5e7eb;
                        border-bottom: 1px solid #e5e7eb;
                        cursor: pointer;
                        overflow: hidden;
                        position: relative;
                        background: none;
                        padding: 0;
                        text-align: left;
                        font: inherit;
                        color: inherit;
                    }
                    .feature-card img {
                        width: 100%;
                        height: 24rem;
                        object-fit: cover;
                        display: block;
                        transition: transform 0.7s;
                    }
                    .feature-card:hover img { transform: scale(1.05); }
                    .feature-card .caption { padding: 1.5rem; }
                    .feature-card .tag {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #166534;
                    }
                    .feature-card h3 { margin: 0.5rem 0 0.25rem; font-size: 1.5rem; }
                    .feature-card .subtitle {
                        color: #9ca3af;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .feature-grid { grid-template-columns: 1fr; }
                    }

                    /* Lifestyle */
                    .lifestyle { background: #f3f4f6; }
                    .lifestyle-grid {
                        display: grid;
                        grid-template-columns: 5fr 7fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .lifestyle-copy h2 { font-size: clamp(2rem, 5vw, 3.75rem); margin: 0 0 2rem; }
                    .lifestyle-copy > p { color: #4b5563; line-height: 2; margin-bottom: 3rem; }
                    .lifestyle-point { display: flex; gap: 1.5rem; margin-bottom: 2rem; }
                    .lifestyle-point .badge {
                        width: 3.5rem;
                        height: 3.5rem;
                        flex: none;
                        border-radius: 50%;
                        background: #fff;
                        border: 1px solid #f3f4f6;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .lifestyle-point h4 { margin: 0 0 0.5rem; font-size: 1.25rem; }
                    .lifestyle-point p { margin: 0; color: #6b7280; font-size: 0.875rem; }
                    .lifestyle-stage {
                        position: relative;
                        height: 40rem;
                        overflow: hidden;
                        cursor: pointer;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .lifestyle-stage img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: opacity 1.5s ease-in-out;
                    }
                    .lifestyle-stage .quote {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        z-index: 10;
                        background: rgba(255, 255, 255, 0.9);
                        padding: 2.5rem;
                        max-width: 28rem;
                        font-size: 1.5rem;
                        font-style: italic;
                    }
                    @media (max-width: 1024px) {
                        .lifestyle-grid { grid-template-columns: 1fr; }
                        .lifestyle-stage { height: 28rem; }
                    }

                    /* Contact */
                    .contact-header { text-align: center; margin-bottom: 4rem; }
                    .contact-header h2 { font-size: clamp(2rem, 5vw, 3.75rem); margin: 0 0 1rem; }
                    .contact-header p {
                        color: #6b7280;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }
                    .plan-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .plan-card {
                        border: 1px solid #e5e7eb;
                        background: #f9fafb;
                        padding: 2.5rem;
                        min-height: 25rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        transition: all 0.3s;
                    }
                    .plan-card:hover {
                        background: #fff;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        transform: translateY(-0.5rem);
                    }
                    .plan-card .type {
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        color: #9ca3af;
                    }
                    .plan-card h3 { font-size: 1.875rem; margin: 0.5rem 0 1.5rem; }
                    .plan-card ul { list-style: none; padding: 0; margin: 0; }
                    .plan-card li {
                        color: #4b5563;
                        padding: 0.5rem 0;
                        border-bottom: 1px dotted #e5e7eb;
                    }
                    .plan-card a {
                        display: block;
                        margin-top: 2.5rem;
                        padding: 1rem;
                        text-align: center;
                        text-decoration: none;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-size: 0.875rem;
                        border: 1px solid #111827;
                        color: #111827;
                        transition: all 0.3s;
                    }
                    .plan-card a:hover { background: #111827; color: #fff; }
                    @media (max-width: 768px) {
                        .plan-grid { grid-template-columns: 1fr; }
                    }

                    /* Footer */
                    .footer {
                        border-top: 1px solid #e5e7eb;
                        background: #f9fafb;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-inner {
                        max-width: 1280px;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 3rem;
                    }
                    .footer h3 { letter-spacing: 0.2em; margin: 0 0 1.5rem; }
                    .footer address {
                        font-style: normal;
                        color: #6b7280;
                        font-size: 0.875rem;
                        line-height: 2;
                    }
                    .footer address a { color: inherit; text-decoration: none; }
                    .footer address a:hover { color: #111827; }
                    .footer-social { display: flex; gap: 2rem; }
                    .footer-social a {
                        color: #9ca3af;
                        text-decoration: none;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                    }
                    .footer-social a:hover { color: #111827; }
                    .footer-legal {
                        max-width: 1280px;
                        margin: 3rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid #e5e7eb;
                        color: #9ca3af;
                        font-size: 0.75rem;
                    }

                    /* Feature modal */
                    .feature-modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .feature-modal {
                        position: relative;
                        width: 100%;
                        max-width: 72rem;
                        background: #fff;
                        display: flex;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .feature-modal .image-side { width: 60%; height: 70vh; }
                    .feature-modal .image-side img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .feature-modal .content-side {
                        width: 40%;
                        padding: 4rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .feature-modal .content-side .tag {
                        color: #166534;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                    }
                    .feature-modal h3 { font-size: 2.5rem; margin: 1rem 0 0.5rem; }
                    .feature-modal .subtitle {
                        color: #9ca3af;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 2rem;
                    }
                    .feature-modal .description { color: #4b5563; line-height: 2; }
                    .feature-modal button {
                        position: absolute;
                        z-index: 20;
                        border: none;
                        border-radius: 50%;
                        width: 3rem;
                        height: 3rem;
                        cursor: pointer;
                        background: rgba(255, 255, 255, 0.8);
                        font-size: 1.25rem;
                        transition: all 0.2s;
                    }
                    .feature-modal button:hover { background: #111827; color: #fff; }
                    .feature-modal .close { top: 1rem; right: 1rem; }
                    .feature-modal .prev { left: 1rem; top: 50%; transform: translateY(-50%); }
                    .feature-modal .next { right: 1rem; top: 50%; transform: translateY(-50%); }
                    @media (max-width: 768px) {
                        .feature-modal { flex-direction: column; }
                        .feature-modal .image-side { width: 100%; height: 40vh; }
                        .feature-modal .content-side { width: 100%; padding: 2rem; }
                    }
                "#}
            </style>

            // HERO
            <header class="hero" id="hero">
                <div class="hero-backdrop">
                    <img
                        key={hero.index().to_string()}
                        src={HERO_IMAGES[hero.index()]}
                        alt="Pin Sen Ju atmosphere"
                    />
                </div>

                <button class="hero-arrow prev" onclick={hero_prev} aria-label="Previous slide">{ "‹" }</button>
                <button class="hero-arrow next" onclick={hero_next} aria-label="Next slide">{ "›" }</button>

                <div class="hero-dots">
                    { for (0..HERO_IMAGES.len()).map(|i| {
                        let dots = hero.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dots.dispatch(NavigatorAction::JumpTo(i));
                        });
                        let class = if hero.index() == i { "active" } else { "" };
                        html! {
                            <button {class} {onclick} aria-label={format!("Slide {}", i + 1)} />
                        }
                    }) }
                </div>

                <div class="hero-location">
                    <span>{ "潮州" }</span>
                    <span class="dot"></span>
                    <span>{ "屏東" }</span>
                </div>
                <h1>{ "品 森 居" }</h1>
                <p class="latin-title">{ "PIN SEN JU" }</p>
                <div class="hero-rule"></div>
                <p class="hero-slogan">
                    { "森呼吸 · 心居所" }
                    <span>{ "LIVING IN THE WOODS!" }</span>
                </p>
            </header>

            // FEATURES
            <section id="features">
                <div class="section-inner">
                    <div class="section-heading">
                        <div>
                            <span class="kicker">{ "Architecture & Design" }</span>
                            <h2>{ "建築美學" }</h2>
                        </div>
                        <p>{ "融合現代幾何與自然元素，打造會呼吸的建築。每一處細節，都體現了對生活的極致追求。" }</p>
                    </div>
                    <div class="feature-grid">
                        { for FEATURES.iter().enumerate().map(|(i, feature)| {
                            let selected_feature = selected_feature.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                selected_feature.set(Some(i));
                            });
                            html! {
                                <button class="feature-card" {onclick}>
                                    <img src={feature.image} alt={feature.title} />
                                    <div class="caption">
                                        <span class="tag">{ feature.tag }</span>
                                        <h3>{ feature.title }</h3>
                                        <span class="subtitle">{ feature.subtitle }</span>
                                    </div>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </section>

            // LIFESTYLE
            <section id="lifestyle" class="lifestyle">
                <div class="section-inner">
                    <div class="lifestyle-grid">
                        <div class="lifestyle-copy">
                            <span class="kicker">{ "The Experience" }</span>
                            <h2>{ "生活 質感體驗" }</h2>
                            <p>{ "品森居不僅是一座建築，更是一種生活態度。位於城市靜巷，隔絕喧囂，讓您在繁忙過後，回歸最純粹的寧靜。" }</p>
                            <div class="lifestyle-point">
                                <div class="badge">{ "☀" }</div>
                                <div>
                                    <h4>{ "自然共生" }</h4>
                                    <p>{ "與陽光、微風、綠意共處的日常。" }</p>
                                </div>
                            </div>
                            <div class="lifestyle-point">
                                <div class="badge">{ "🌲" }</div>
                                <div>
                                    <h4>{ "垂直森林" }</h4>
                                    <p>{ "層層疊翠的陽台植栽，淨化空氣與心靈。" }</p>
                                </div>
                            </div>
                            <div class="lifestyle-point">
                                <div class="badge">{ "⌂" }</div>
                                <div>
                                    <h4>{ "人本居住" }</h4>
                                    <p>{ "結合自然與人性化設計的舒適空間。" }</p>
                                </div>
                            </div>
                        </div>
                        <div class="lifestyle-stage" onclick={open_lightbox}>
                            <img
                                key={lifestyle.index().to_string()}
                                src={GALLERY_IMAGES[lifestyle.index()]}
                                alt="Interior lifestyle"
                            />
                            <div class="quote">
                                { "「家，是心靈的歸屬，是安放靈魂的容器。」" }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // CONTACT / BOOKING
            <section id="contact">
                <div class="section-inner">
                    <div class="contact-header">
                        <h2>{ "預約賞屋" }</h2>
                        <p>{ "Reserve Your Private Tour" }</p>
                    </div>
                    <div class="plan-grid">
                        { for UNIT_PLANS.iter().map(|plan| html! {
                            <div class="plan-card">
                                <div>
                                    <span class="type">{ plan.unit_type }</span>
                                    <h3>{ plan.name }</h3>
                                    <ul>
                                        { for plan.details.iter().map(|detail| html! {
                                            <li>{ detail }</li>
                                        }) }
                                    </ul>
                                </div>
                                <a href={BOOKING_URL} target="_blank" rel="noopener noreferrer">
                                    { "立即預約" }
                                </a>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-inner">
                    <div>
                        <h3>{ "YUAN DEVELOPMENT" }</h3>
                        <address>
                            <p>
                                <a
                                    href="https://maps.app.goo.gl/zWFNwJdhkA6Ts2Fk7"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "920屏東縣潮州鎮光復路一段28巷" }
                                </a>
                            </p>
                            <p>{ "(08) 766-2066" }</p>
                        </address>
                    </div>
                    <div class="footer-social">
                        <a
                            href="https://www.facebook.com/DONGYUAN.DEVELOPMENT"
                            target="_blank"
                            rel="noopener noreferrer"
                        >{ "Facebook" }</a>
                        <a
                            href="https://www.instagram.com/yuandevelopment/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >{ "Instagram" }</a>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{ "© 2025 品森居 Pin Sen Ju. All rights reserved. THINKLAB ARCHITECTS DESIGN" }</p>
                </div>
            </footer>

            // Feature detail modal
            if let Some(i) = *selected_feature {
                <div class="feature-modal-backdrop" onclick={close_feature.clone()}>
                    <div class="feature-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="close" onclick={close_feature} aria-label="Close">{ "✕" }</button>
                        <button class="prev" onclick={feature_prev} aria-label="Previous feature">{ "‹" }</button>
                        <button class="next" onclick={feature_next} aria-label="Next feature">{ "›" }</button>
                        <div class="image-side">
                            <img src={FEATURES[i].image} alt={FEATURES[i].title} />
                        </div>
                        <div class="content-side">
                            <span class="tag">{ FEATURES[i].tag }</span>
                            <h3>{ FEATURES[i].title }</h3>
                            <p class="subtitle">{ FEATURES[i].subtitle }</p>
                            <p class="description">{ FEATURES[i].description }</p>
                        </div>
                    </div>
                </div>
            }

            <Lightbox
                images={&GALLERY_IMAGES[..]}
                open={*lightbox_open}
                index={lightbox.index()}
                on_prev={lightbox_prev}
                on_next={lightbox_next}
                on_close={close_lightbox}
            />

            <ChatWidget />
        </div>
    }
}
