use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::Faq;
use crate::components::guide_steps::GuideSteps;
use crate::service_flow::options::{FlowQuery, PartialOptions};
use crate::service_flow::stage::{load_catalog, Stage};
use crate::service_flow::ServiceFlow;
use crate::{navigate_to, Route};

/// Page defaults before any `?orientacion=...` style overrides.
fn page_options() -> PartialOptions {
    PartialOptions {
        show_features_in_compact_view: Some(true),
        ..Default::default()
    }
}

pub fn catalog_or_empty() -> Vec<Stage> {
    match load_catalog() {
        Ok(stages) => stages,
        Err(e) => {
            error!("Failed to load stage catalog: {}", e);
            Vec::new()
        }
    }
}

#[function_component(ComoFuncionaPage)]
pub fn como_funciona_page() -> Html {
    let stages = use_memo(|_| catalog_or_empty(), ());
    let selected = use_state(|| None::<String>);
    let navigator = use_navigator();
    let location = use_location();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let query = location
        .and_then(|location| location.query::<FlowQuery>().ok())
        .map(PartialOptions::from)
        .unwrap_or_default();
    let options = page_options().overlay(&query);

    let on_stage_select = {
        let selected = selected.clone();
        Callback::from(move |id: String| {
            info!("Visitor selected stage {}", id);
            selected.set(Some(id));
        })
    };

    let on_navigate = Callback::from(move |path: String| navigate_to(navigator.as_ref(), &path));

    let selected_title = (*selected)
        .as_ref()
        .and_then(|id| stages.iter().find(|stage| &stage.id == id))
        .map(|stage| stage.title.clone());

    html! {
        <div class="como-funciona-page">
            <section class="cf-hero">
                <h1>{"Cómo funciona"}</h1>
                <p class="cf-hero-subtitle">
                    {"Cinco niveles de ayuda legal. Empiezas por un diagnóstico gratuito y solo avanzas hasta donde tu caso lo necesite."}
                </p>
            </section>

            <ServiceFlow
                stages={(*stages).clone()}
                options={options}
                on_stage_select={on_stage_select}
                on_navigate={on_navigate}
            />

            {
                if let Some(title) = selected_title {
                    html! {
                        <p class="cf-selection" aria-live="polite">
                            {"Has seleccionado: "}<strong>{title}</strong>
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <GuideSteps />
            <Faq />

            <section class="cf-cta">
                <h2>{"¿Listo para empezar?"}</h2>
                <p>{"El diagnóstico es gratuito y sin compromiso."}</p>
                <Link<Route> to={Route::Diagnostico} classes="cf-cta-button">
                    {"Empezar diagnóstico"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .como-funciona-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #1f2933;
                    background: #f7f9fc;
                    --color-primary: #2563eb;
                    --color-info: #0891b2;
                    --color-success: #16a34a;
                    --color-warning: #d97706;
                    --color-danger: #dc2626;
                }

                .cf-hero {
                    text-align: center;
                    padding: 5rem 2rem 3rem;
                }

                .cf-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .cf-hero-subtitle {
                    font-size: 1.2rem;
                    color: #52606d;
                    max-width: 640px;
                    margin: 0 auto;
                }

                .service-flow {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 2rem;
                }

                .flow-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 2rem;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .flow-switch {
                    padding: 0.6rem 1.2rem;
                    border-radius: 999px;
                    border: 1px solid #2563eb;
                    background: #fff;
                    color: #2563eb;
                    cursor: pointer;
                }

                .flow-stages {
                    position: relative;
                }

                .flow-row {
                    display: flex;
                    align-items: stretch;
                    gap: 0.5rem;
                    overflow-x: auto;
                }

                .flow-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .flow-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding-left: 2rem;
                }

                .flow-timeline-line {
                    position: absolute;
                    left: 0.75rem;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    background: #cbd2d9;
                }

                .flow-timeline {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .flow-timeline-axis {
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    background: #cbd2d9;
                }

                .stage-card {
                    position: relative;
                    flex: 1;
                    min-width: 200px;
                    padding: 1.5rem;
                    border-radius: 12px;
                    background: #fff;
                    border: 1px solid #e4e7eb;
                    border-top: 4px solid var(--stage-accent);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .stage-card:focus {
                    outline: 2px solid var(--stage-accent);
                    outline-offset: 2px;
                }

                .stage-card--active {
                    transform: translateY(-4px);
                    box-shadow: 0 12px 24px rgba(15, 23, 42, 0.12);
                }

                .stage-card--animated {
                    animation: cardIn 0.5s ease-out both;
                    animation-delay: var(--stage-delay);
                }

                .stage-card--left {
                    width: calc(50% - 2rem);
                    align-self: flex-start;
                }

                .stage-card--right {
                    width: calc(50% - 2rem);
                    align-self: flex-end;
                }

                .stage-arrow {
                    align-self: center;
                    font-size: 1.5rem;
                    color: #9aa5b1;
                }

                .stage-card__header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .stage-number {
                    display: inline-flex;
                    width: 2.25rem;
                    height: 2.25rem;
                    border-radius: 50%;
                    align-items: center;
                    justify-content: center;
                    font-weight: bold;
                    background: #e4e7eb;
                    color: #1f2933;
                }

                .stage-number--active {
                    background: var(--stage-accent);
                    color: #fff;
                }

                .stage-number--animated {
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .stage-number--pulse {
                    animation: badgePulse 2s ease-in-out infinite;
                }

                .stage-icon {
                    font-size: 1.4rem;
                    opacity: 0.6;
                }

                .stage-icon--active {
                    opacity: 1;
                }

                .stage-card__features {
                    padding-left: 1.2rem;
                    color: #52606d;
                }

                .stage-card__footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-top: 1rem;
                }

                .stage-card__price {
                    font-weight: bold;
                }

                .stage-card__action {
                    color: var(--stage-accent);
                    font-weight: 600;
                    text-decoration: none;
                }

                .cf-selection {
                    text-align: center;
                    color: #52606d;
                }

                .guide-steps, .faq-section, .cf-cta {
                    max-width: 900px;
                    margin: 4rem auto;
                    padding: 0 2rem;
                }

                .guide-tabs {
                    position: relative;
                    display: flex;
                    gap: 1rem;
                    border-bottom: 1px solid #e4e7eb;
                }

                .guide-tab {
                    background: none;
                    border: none;
                    padding: 0.8rem 0.4rem;
                    font-size: 1rem;
                    color: #52606d;
                    cursor: pointer;
                }

                .guide-tab.active {
                    color: #2563eb;
                }

                .guide-tab-indicator {
                    position: absolute;
                    bottom: -1px;
                    height: 3px;
                    background: #2563eb;
                    transition: left 0.3s ease, width 0.3s ease;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #e4e7eb;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #2563eb;
                }

                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #52606d;
                    animation: answerIn 0.3s ease-out both;
                }

                .faq-item.closing .faq-answer {
                    animation: answerOut 0.3s ease-in both;
                }

                .cf-cta {
                    text-align: center;
                }

                .cf-cta-button {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: #2563eb;
                    color: #fff;
                    text-decoration: none;
                }

                @keyframes cardIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes badgePulse {
                    0%, 100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(37, 99, 235, 0.4); }
                    50% { transform: scale(1.08); box-shadow: 0 0 0 8px rgba(37, 99, 235, 0); }
                }

                @keyframes answerIn {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 600px; }
                }

                @keyframes answerOut {
                    from { opacity: 1; max-height: 600px; }
                    to { opacity: 0; max-height: 0; }
                }

                @media (max-width: 768px) {
                    .flow-row {
                        flex-direction: column;
                    }

                    .stage-arrow {
                        transform: rotate(90deg);
                    }

                    .stage-card--left, .stage-card--right {
                        width: 100%;
                    }

                    .flow-timeline-axis {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
