use yew::prelude::*;

use crate::components::{
    advice_chat::AdviceChat, back_to_top::BackToTop, hero_curtain::HeroCurtain,
    lead_form::LeadFormCard, scroll_badge::ScrollBadge,
};
use crate::content::{CONTACT_CARDS, PROCESS, SERVICES};

#[function_component(Home)]
pub fn home() -> Html {
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
        <>
            <style>{HOME_STYLES}</style>
            <main id="top" class="home">
                <h1 class="sr-only">{"MTG GROUP: Digital Financial Strategy & Capital Management"}</h1>

                <HeroCurtain />

                <section id="services" class="services">
                    <div class="container">
                        <div class="section-intro">
                            <div class="ruled-title">
                                <div class="rule"></div>
                                <h2>{"Services"}</h2>
                                <div class="rule"></div>
                            </div>
                            <p>
                                {"We operate on hard data. We optimize cashflow, cost structure, and strategic decisions \
                                  for scalable long-term growth."}
                            </p>
                        </div>
                        <div class="services-grid">
                            { for SERVICES.iter().map(|service| html! {
                                <div class="service-item" key={service.label}>
                                    <div class="service-icon">
                                        <svg fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
                                            <path d={service.icon} />
                                        </svg>
                                    </div>
                                    <span>{service.label}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="process" class="process">
                    <div class="process-watermark">{"Process"}</div>
                    <div class="container">
                        <h2>{"Collaboration Path"}</h2>
                        <div class="process-grid">
                            { for PROCESS.iter().map(|step| html! {
                                <div class="process-step" key={step.number}>
                                    <span class="step-number">{step.number}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" class="contact">
                    <div class="contact-band" aria-hidden="true"></div>
                    <div class="container contact-body">
                        <div class="contact-grid">
                            <LeadFormCard />
                            <AdviceChat />
                        </div>

                        <div class="contact-cards">
                            { for CONTACT_CARDS.iter().map(|card| html! {
                                <div class="contact-card" key={card.label}>
                                    <svg fill="none" stroke="currentColor" stroke-width="1.5" viewBox="0 0 24 24" aria-hidden="true">
                                        <path d={card.icon} />
                                    </svg>
                                    <span class="card-label">{card.label}</span>
                                    <p>{card.value}</p>
                                </div>
                            }) }
                        </div>
                    </div>

                    <footer class="site-footer">
                        <span>{"© 2025 MTG GROUP. ALL RIGHTS RESERVED."}</span>
                        <nav>
                            <a href="#services">{"Services"}</a>
                            <a href="#process">{"Process"}</a>
                            <a href="#contact">{"Contact"}</a>
                        </nav>
                    </footer>
                </section>
            </main>

            <ScrollBadge />
            <BackToTop />
        </>
    }
}

const HOME_STYLES: &str = r#"
.home { position: relative; padding-top: 80px; }
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}
.container { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; }
.services {
    position: relative;
    z-index: 20;
    padding: 6rem 0;
    background: var(--brand-light);
    border-top: 1px solid rgba(0, 0, 0, 0.05);
}
.section-intro { max-width: 48rem; margin: 0 auto 4rem; text-align: center; }
.section-intro p { color: rgba(0, 0, 0, 0.6); line-height: 1.7; font-weight: 500; }
.ruled-title { display: flex; align-items: center; justify-content: center; gap: 1.5rem; margin-bottom: 1.5rem; }
.ruled-title .rule { width: 5rem; height: 1px; background: rgba(0, 0, 0, 0.1); }
.services h2, .process h2 {
    margin: 0;
    font-family: var(--font-display);
    font-size: 2.25rem;
    text-transform: uppercase;
    line-height: 1.2;
}
.services-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
@media (min-width: 640px) { .services-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .services-grid { grid-template-columns: repeat(5, 1fr); } }
.service-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    gap: 1.5rem;
    padding: 1.5rem;
    border-radius: 16px;
    transition: all 0.3s;
}
.service-item:hover { background: #fff; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
.service-icon {
    width: 64px;
    height: 64px;
    border-radius: 50%;
    border: 1px solid rgba(0, 0, 0, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    color: rgba(0, 0, 0, 0.5);
}
.service-icon svg { width: 24px; height: 24px; }
.service-item span {
    font-family: var(--font-mono);
    font-size: 11px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.15em;
}
.process {
    position: relative;
    z-index: 20;
    overflow: hidden;
    padding: 8rem 0;
    background: var(--brand-dark);
    color: #fff;
}
.process h2 { text-align: center; margin-bottom: 5rem; }
.process-watermark {
    position: absolute;
    left: 50%;
    bottom: -2.5rem;
    transform: translateX(-50%);
    font-family: var(--font-display);
    font-weight: 700;
    font-size: 18vw;
    line-height: 1;
    text-transform: uppercase;
    white-space: nowrap;
    color: rgba(255, 255, 255, 0.03);
    pointer-events: none;
}
.process-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; position: relative; z-index: 10; }
@media (min-width: 768px) { .process-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .process-grid { grid-template-columns: repeat(5, 1fr); } }
.process-step { display: flex; flex-direction: column; gap: 1rem; padding-left: 1.5rem; border-left: 1px solid rgba(255, 255, 255, 0.2); }
.step-number { font-family: var(--font-mono); font-size: 12px; color: rgba(255, 255, 255, 0.4); }
.process-step h3 { margin: 0; font-family: var(--font-display); font-size: 1.25rem; text-transform: uppercase; }
.process-step:hover h3 { color: var(--brand-accent); }
.process-step p { margin: 0; font-size: 14px; line-height: 1.7; color: rgba(255, 255, 255, 0.6); }
.contact { position: relative; z-index: 20; background: #fff; }
.contact-band { height: 10rem; background: var(--brand-dark); }
.contact-body { margin-top: -6rem; padding-bottom: 5rem; }
.contact-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; align-items: start; }
@media (min-width: 1024px) { .contact-grid { grid-template-columns: repeat(2, 1fr); } }
.contact-cards { display: grid; grid-template-columns: 1fr; margin-top: 5rem; border-top: 1px solid rgba(0, 0, 0, 0.1); }
@media (min-width: 768px) { .contact-cards { grid-template-columns: repeat(3, 1fr); } }
.contact-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    padding: 3rem;
    text-align: center;
    border-right: 1px solid rgba(0, 0, 0, 0.1);
}
.contact-card:last-child { border-right: none; }
.contact-card:hover { background: #f8fafc; }
.contact-card svg { width: 32px; height: 32px; color: var(--brand-dark); }
.card-label { font-family: var(--font-display); font-weight: 700; font-size: 1.125rem; text-transform: uppercase; }
.contact-card p { margin: 0; font-family: var(--font-mono); font-size: 14px; color: rgba(0, 0, 0, 0.6); }
.site-footer {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 2rem;
    border-top: 1px solid rgba(0, 0, 0, 0.1);
    font-size: 12px;
    color: rgba(0, 0, 0, 0.5);
}
@media (min-width: 768px) { .site-footer { flex-direction: row; } }
.site-footer nav { display: flex; gap: 2rem; font-family: var(--font-mono); text-transform: uppercase; letter-spacing: 0.1em; }
.site-footer a { color: inherit; text-decoration: none; }
.site-footer a:hover { color: #000; }
"#;
