//! Floating concierge chat widget. The transcript logic lives in
//! `chat::session`; this component wires it to the input row, the Gemini
//! session handle and the message list markup.

use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::gemini::GeminiSession;
use crate::chat::session::{SendOutcome, Speaker, Transcript};
use crate::config;

pub enum ChatMsg {
    Toggle,
    SetInput(String),
    Send,
    Finished(SendOutcome),
}

pub struct ChatWidget {
    open: bool,
    input: String,
    transcript: Transcript,
    // Created on the first send, then reused for the page lifetime so the
    // service keeps prior-turn context.
    session: Option<Rc<RefCell<GeminiSession>>>,
    messages_ref: NodeRef,
}

impl Component for ChatWidget {
    type Message = ChatMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            transcript: Transcript::new(),
            session: None,
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatMsg::Toggle => {
                self.open = !self.open;
                true
            }
            ChatMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatMsg::Send => {
                let Some(text) = self.transcript.begin_send(&self.input) else {
                    return false;
                };
                self.input.clear();

                match config::gemini_api_key() {
                    None => {
                        // No credential configured: resolve locally, no I/O.
                        ctx.link()
                            .send_message(ChatMsg::Finished(SendOutcome::MissingCredential));
                    }
                    Some(key) => {
                        let session = self
                            .session
                            .get_or_insert_with(|| {
                                Rc::new(RefCell::new(GeminiSession::new(key)))
                            })
                            .clone();
                        ctx.link().send_future(async move {
                            // Only one send is ever in flight (the transcript
                            // rejects overlap), so this borrow is exclusive.
                            let result = session.borrow_mut().send_message(&text).await;
                            let outcome = match result {
                                Ok(reply) => SendOutcome::Reply(reply),
                                Err(err) => {
                                    error!("Gemini error: {}", err);
                                    SendOutcome::Failed
                                }
                            };
                            ChatMsg::Finished(outcome)
                        });
                    }
                }
                true
            }
            ChatMsg::Finished(outcome) => {
                self.transcript.complete_send(outcome);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest turn in view.
        if let Some(el) = self.messages_ref.cast::<web_sys::Element>() {
            el.set_scroll_top(el.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatMsg::Toggle);
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatMsg::SetInput(input.value())
        });
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                Some(ChatMsg::Send)
            } else {
                None
            }
        });
        let send = ctx.link().callback(|_| ChatMsg::Send);
        let send_disabled = self.transcript.is_loading() || self.input.trim().is_empty();

        html! {
            <div class="chat-widget">
                <style>
                    {r#"
                        .chat-widget {
                            position: fixed;
                            bottom: 1.5rem;
                            right: 1.5rem;
                            z-index: 50;
                            display: flex;
                            flex-direction: column;
                            align-items: flex-end;
                            font-family: 'Noto Serif TC', serif;
                        }
                        .chat-panel {
                            margin-bottom: 1rem;
                            width: min(24rem, 90vw);
                            background: rgba(255, 255, 255, 0.95);
                            border: 1px solid #e5e7eb;
                            border-radius: 1rem;
                            overflow: hidden;
                            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                        }
                        .chat-header {
                            background: #1f2937;
                            padding: 1rem;
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            color: #fff;
                            letter-spacing: 0.1em;
                        }
                        .chat-header button {
                            background: none;
                            border: none;
                            color: rgba(255, 255, 255, 0.5);
                            cursor: pointer;
                            font-size: 1rem;
                        }
                        .chat-header button:hover { color: #fff; }
                        .chat-messages {
                            height: 20rem;
                            overflow-y: auto;
                            padding: 1rem;
                            background: #f9fafb;
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                        }
                        .chat-row { display: flex; }
                        .chat-row.user { justify-content: flex-end; }
                        .chat-bubble {
                            max-width: 85%;
                            padding: 0.75rem;
                            border-radius: 1rem;
                            font-size: 0.875rem;
                            line-height: 1.6;
                        }
                        .chat-row.user .chat-bubble {
                            background: #1f2937;
                            color: #fff;
                            border-top-right-radius: 0;
                        }
                        .chat-row.assistant .chat-bubble {
                            background: #fff;
                            color: #374151;
                            border: 1px solid #f3f4f6;
                            border-top-left-radius: 0;
                        }
                        .chat-row.assistant .chat-bubble.error { color: #9ca3af; }
                        .chat-typing {
                            display: inline-flex;
                            gap: 0.25rem;
                            background: #fff;
                            border: 1px solid #f3f4f6;
                            border-radius: 1rem;
                            border-top-left-radius: 0;
                            padding: 1rem;
                        }
                        .chat-typing span {
                            width: 0.375rem;
                            height: 0.375rem;
                            background: #9ca3af;
                            border-radius: 50%;
                            animation: chat-bounce 1s infinite;
                        }
                        .chat-typing span:nth-child(2) { animation-delay: 0.15s; }
                        .chat-typing span:nth-child(3) { animation-delay: 0.3s; }
                        @keyframes chat-bounce {
                            0%, 80%, 100% { transform: translateY(0); }
                            40% { transform: translateY(-0.25rem); }
                        }
                        .chat-input-row {
                            display: flex;
                            gap: 0.5rem;
                            padding: 0.75rem;
                            border-top: 1px solid #f3f4f6;
                            background: #fff;
                        }
                        .chat-input-row input {
                            flex: 1;
                            background: #f9fafb;
                            border: none;
                            border-radius: 9999px;
                            padding: 0.5rem 1rem;
                            font-size: 0.875rem;
                            color: #1f2937;
                        }
                        .chat-input-row input:focus { outline: 1px solid #d1d5db; }
                        .chat-input-row button {
                            background: #1f2937;
                            color: #fff;
                            border: none;
                            border-radius: 9999px;
                            width: 2.25rem;
                            height: 2.25rem;
                            cursor: pointer;
                        }
                        .chat-input-row button:disabled { opacity: 0.5; cursor: default; }
                        .chat-toggle {
                            width: 3.5rem;
                            height: 3.5rem;
                            border-radius: 50%;
                            background: #1f2937;
                            color: #fff;
                            border: 1px solid #374151;
                            font-size: 1.25rem;
                            cursor: pointer;
                            box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
                        }
                    "#}
                </style>

                if self.open {
                    <div class="chat-panel">
                        <div class="chat-header">
                            <h3>{ "品森居 顧問" }</h3>
                            <button onclick={toggle.clone()} aria-label="Close chat">{ "✕" }</button>
                        </div>
                        <div class="chat-messages" ref={self.messages_ref.clone()}>
                            { for self.transcript.turns().iter().map(|turn| {
                                let row = match turn.speaker {
                                    Speaker::User => "chat-row user",
                                    Speaker::Assistant => "chat-row assistant",
                                };
                                let bubble = if turn.is_error { "chat-bubble error" } else { "chat-bubble" };
                                html! {
                                    <div class={row}>
                                        <div class={bubble}>{ &turn.text }</div>
                                    </div>
                                }
                            }) }
                            if self.transcript.is_loading() {
                                <div class="chat-row assistant">
                                    <div class="chat-typing">
                                        <span></span><span></span><span></span>
                                    </div>
                                </div>
                            }
                        </div>
                        <div class="chat-input-row">
                            <input
                                type="text"
                                value={self.input.clone()}
                                placeholder="詢問房型、價格..."
                                {oninput}
                                {onkeydown}
                            />
                            <button onclick={send} disabled={send_disabled} aria-label="Send">
                                { "➤" }
                            </button>
                        </div>
                    </div>
                }

                <button class="chat-toggle" onclick={toggle} aria-label="Toggle chat">
                    { if self.open { "✕" } else { "💬" } }
                </button>
            </div>
        }
    }
}
