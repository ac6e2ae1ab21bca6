use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::{ChatLog, ChatMessage, Role};
use crate::services::advice::{get_financial_advice, AdviceError};

pub enum AdviceChatMsg {
    SetPrompt(String),
    Submit,
    Answered(Result<Option<String>, AdviceError>),
}

pub struct AdviceChat {
    prompt: String,
    log: ChatLog,
}

impl Component for AdviceChat {
    type Message = AdviceChatMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            prompt: String::new(),
            log: ChatLog::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdviceChatMsg::SetPrompt(prompt) => {
                self.prompt = prompt;
                true
            }
            AdviceChatMsg::Submit => {
                let Some(prompt) = self.log.submit(&self.prompt) else {
                    return false;
                };
                self.prompt.clear();
                info!("Sending strategist prompt ({} chars)", prompt.len());
                ctx.link().send_future(async move {
                    AdviceChatMsg::Answered(get_financial_advice(&prompt).await)
                });
                true
            }
            AdviceChatMsg::Answered(outcome) => {
                if let Err(e) = &outcome {
                    error!("Strategist request failed: {}", e);
                }
                self.log.resolve(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AdviceChatMsg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AdviceChatMsg::SetPrompt(input.value())
        });

        html! {
            <div class="advice-chat">
                <style>{CHAT_STYLES}</style>
                <div class="advice-chat-header">
                    <div>
                        <h3>{"AI Financial Strategist"}</h3>
                        <p>{"Real-time analytical consultation"}</p>
                    </div>
                    <div class="status-dot"></div>
                </div>

                <div class="advice-chat-log">
                    <div class="advice-chat-title">
                        <h4>{"Chat with AI Strategist"}</h4>
                    </div>
                    if self.log.is_empty() {
                        <div class="advice-chat-empty">
                            <p>{"Input your financial query to begin"}<br/>{"a strategic simulation."}</p>
                        </div>
                    }
                    { for self.log.messages().iter().map(render_message) }
                    if self.log.is_loading() {
                        <div class="chat-row model">
                            <div class="chat-bubble typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    }
                </div>

                <form class="advice-chat-form" onsubmit={onsubmit}>
                    <input
                        type="text"
                        value={self.prompt.clone()}
                        oninput={oninput}
                        placeholder="Ask about ROI, risk, or cashflow..."
                    />
                    <button type="submit" disabled={self.log.is_loading()} aria-label="Send">
                        <svg fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                            <path d="M5 12h14M12 5l7 7-7 7" />
                        </svg>
                    </button>
                </form>
            </div>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let side = match message.role {
        Role::User => "user",
        Role::Model => "model",
    };
    html! {
        <div class={classes!("chat-row", side)}>
            <div class="chat-bubble">{ &message.text }</div>
        </div>
    }
}

const CHAT_STYLES: &str = r#"
.advice-chat {
    width: 100%;
    height: 600px;
    display: flex;
    flex-direction: column;
    overflow: hidden;
    background: #fff;
    border: 1px solid rgba(0, 0, 0, 0.05);
    border-radius: 16px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.advice-chat-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem;
    background: var(--brand-dark);
    color: #fff;
}
.advice-chat-header h3 {
    margin: 0;
    font-family: var(--font-display);
    font-size: 1.25rem;
    text-transform: uppercase;
}
.advice-chat-header p { margin: 0; font-family: var(--font-mono); font-size: 12px; opacity: 0.6; }
.status-dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    background: #22c55e;
    box-shadow: 0 0 10px #22c55e;
    animation: pulse 2s infinite;
}
.advice-chat-log {
    flex: 1;
    overflow-y: auto;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    background: #f8fafc;
}
.advice-chat-title {
    position: sticky;
    top: 0;
    padding-bottom: 1rem;
    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
    background: rgba(248, 250, 252, 0.8);
    backdrop-filter: blur(4px);
}
.advice-chat-title h4 {
    margin: 0;
    font-family: var(--font-mono);
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: rgba(0, 0, 0, 0.4);
}
.advice-chat-empty {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    opacity: 0.4;
    font-family: var(--font-mono);
    font-size: 14px;
}
.chat-row { display: flex; }
.chat-row.user { justify-content: flex-end; }
.chat-row.model { justify-content: flex-start; }
.chat-bubble {
    max-width: 85%;
    padding: 1rem;
    border-radius: 16px;
    font-size: 14px;
    line-height: 1.6;
    white-space: pre-wrap;
}
.chat-row.user .chat-bubble { background: var(--brand-accent); color: #fff; border-top-right-radius: 0; }
.chat-row.model .chat-bubble {
    background: #fff;
    border: 1px solid rgba(0, 0, 0, 0.05);
    border-top-left-radius: 0;
    font-family: var(--font-mono);
    color: var(--brand-text);
}
.chat-bubble.typing { display: flex; gap: 0.5rem; }
.chat-bubble.typing span {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: var(--brand-accent);
    animation: bounce 1s infinite;
}
.chat-bubble.typing span:nth-child(2) { animation-delay: 0.15s; }
.chat-bubble.typing span:nth-child(3) { animation-delay: 0.3s; }
.advice-chat-form {
    display: flex;
    gap: 0.5rem;
    padding: 1rem;
    border-top: 1px solid rgba(0, 0, 0, 0.1);
    background: #fff;
}
.advice-chat-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: none;
    border-radius: 12px;
    background: #f1f5f9;
    outline: none;
    font-family: var(--font-mono);
    font-size: 14px;
}
.advice-chat-form input:focus { box-shadow: 0 0 0 2px var(--brand-accent); }
.advice-chat-form button {
    padding: 0.75rem;
    border: none;
    border-radius: 12px;
    background: var(--brand-dark);
    color: #fff;
    cursor: pointer;
}
.advice-chat-form button:disabled { opacity: 0.5; cursor: default; }
.advice-chat-form svg { width: 20px; height: 20px; }
@keyframes pulse { 50% { opacity: 0.5; } }
@keyframes bounce { 50% { transform: translateY(-25%); } }
"#;
