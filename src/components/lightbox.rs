//! Full-screen gallery overlay. Index state and keyboard routing live in the
//! landing page (one dispatcher, one owner); this component renders the
//! current image, translates drag gestures into navigation and keeps the
//! page from scrolling underneath while it is open.

use web_sys::PointerEvent;
use yew::prelude::*;

use crate::gallery::navigator::{classify_swipe, Swipe};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub images: &'static [&'static str],
    pub open: bool,
    pub index: usize,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    // (clientX, timestamp ms) where the pointer went down, pending release.
    // Pointer events cover mouse and touch drags through the same handler.
    let drag_origin = use_mut_ref(|| None::<(f64, f64)>);

    // Background scrolling is suspended for exactly as long as the overlay is
    // open; the cleanup runs on close and on unmount, whichever comes first.
    use_effect_with_deps(
        |open| {
            let open = *open;
            let body = || {
                web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
            };
            if open {
                if let Some(body) = body() {
                    let _ = body.style().set_property("overflow", "hidden");
                }
            }
            move || {
                if open {
                    if let Some(body) = body() {
                        let _ = body.style().remove_property("overflow");
                    }
                }
            }
        },
        props.open,
    );

    if !props.open {
        return html! {};
    }

    let onpointerdown = {
        let drag_origin = drag_origin.clone();
        Callback::from(move |e: PointerEvent| {
            *drag_origin.borrow_mut() = Some((e.client_x() as f64, e.time_stamp()));
        })
    };

    let onpointerup = {
        let drag_origin = drag_origin.clone();
        let on_prev = props.on_prev.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |e: PointerEvent| {
            let Some((start_x, start_ms)) = drag_origin.borrow_mut().take() else {
                return;
            };
            let offset_x = e.client_x() as f64 - start_x;
            let elapsed = ((e.time_stamp() - start_ms) / 1000.0).max(0.001);
            match classify_swipe(offset_x, offset_x / elapsed) {
                Some(Swipe::Advance) => on_next.emit(()),
                Some(Swipe::Retreat) => on_prev.emit(()),
                None => {}
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let prev = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_prev.emit(());
        })
    };
    let next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_next.emit(());
        })
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="lightbox" onclick={close.clone()}>
            <style>
                {r#"
                    .lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(0, 0, 0, 0.95);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 110;
                    }
                    .lightbox-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 110;
                    }
                    .lightbox-nav.prev { left: 2rem; }
                    .lightbox-nav.next { right: 2rem; }
                    .lightbox button {
                        background: rgba(255, 255, 255, 0.1);
                        border: none;
                        border-radius: 50%;
                        color: #fff;
                        width: 3.5rem;
                        height: 3.5rem;
                        font-size: 1.5rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .lightbox button:hover { background: rgba(255, 255, 255, 0.2); }
                    .lightbox-stage {
                        width: 100%;
                        height: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 5rem;
                    }
                    .lightbox-stage img {
                        max-width: 100%;
                        max-height: 100%;
                        object-fit: contain;
                        user-select: none;
                        touch-action: pan-y;
                    }
                    .lightbox-counter {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: rgba(255, 255, 255, 0.5);
                        letter-spacing: 0.2em;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .lightbox-nav { display: none; }
                        .lightbox-stage { padding: 1rem; }
                    }
                "#}
            </style>

            <button class="lightbox-close" onclick={close} aria-label="Close gallery">{ "✕" }</button>
            <button class="lightbox-nav prev" onclick={prev} aria-label="Previous image">{ "‹" }</button>
            <button class="lightbox-nav next" onclick={next} aria-label="Next image">{ "›" }</button>

            <div class="lightbox-stage">
                <img
                    src={props.images[props.index]}
                    alt={format!("Gallery image {}", props.index + 1)}
                    draggable="false"
                    onclick={swallow_click}
                    {onpointerdown}
                    {onpointerup}
                />
            </div>

            <div class="lightbox-counter">
                { format!("{} / {}", props.index + 1, props.images.len()) }
            </div>
        </div>
    }
}
