use web_sys::{Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::host::{self, ElementBox};

pub struct GuideStep {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct GuideTab {
    pub label: &'static str,
    pub steps: &'static [GuideStep],
}

pub const GUIDE_TABS: &[GuideTab] = &[
    GuideTab {
        label: "Antes de empezar",
        steps: &[
            GuideStep {
                title: "Reúne lo que tengas",
                text: "Contratos, cartas, correos o notificaciones. No hace falta que esté completo.",
            },
            GuideStep {
                title: "Haz el diagnóstico",
                text: "Responde el cuestionario guiado; tarda unos diez minutos.",
            },
            GuideStep {
                title: "Revisa la recomendación",
                text: "Te indicamos la etapa que mejor encaja con tu caso y por qué.",
            },
        ],
    },
    GuideTab {
        label: "Durante el proceso",
        steps: &[
            GuideStep {
                title: "Profesional asignado",
                text: "Un abogado con experiencia en tu materia se ocupa de tu caso.",
            },
            GuideStep {
                title: "Seguimiento",
                text: "Recibes avisos en cada paso relevante y puedes consultar el estado en cualquier momento.",
            },
            GuideStep {
                title: "Decisiones contigo",
                text: "Nada se presenta ni se firma sin tu aprobación.",
            },
        ],
    },
    GuideTab {
        label: "Después",
        steps: &[
            GuideStep {
                title: "Cierre del caso",
                text: "Te entregamos un resumen con lo realizado y la documentación final.",
            },
            GuideStep {
                title: "Dudas posteriores",
                text: "Durante 30 días puedes hacernos preguntas sobre el resultado sin coste.",
            },
        ],
    },
];

/// Next tab index for an arrow key, wrapping at both ends.
pub fn cycle_tab(current: usize, len: usize, key: &str) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowRight" => Some((current + 1) % len),
        "ArrowLeft" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

pub fn indicator_style(bounds: ElementBox) -> String {
    format!("left: {}px; width: {}px;", bounds.left, bounds.width)
}

#[function_component(GuideSteps)]
pub fn guide_steps() -> Html {
    let active = use_state(|| 0usize);
    let indicator = use_state(ElementBox::default);
    let tab_refs = use_memo(
        |_| GUIDE_TABS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    {
        let indicator = indicator.clone();
        let tab_refs = tab_refs.clone();
        use_effect_with_deps(
            move |active: &usize| {
                if let Some(bounds) = tab_refs.get(*active).and_then(host::measure_element) {
                    indicator.set(bounds);
                }
                || ()
            },
            *active,
        );
    }

    {
        let indicator = indicator.clone();
        let tab_refs = tab_refs.clone();
        let active = *active;
        use_event_with_window("resize", move |_: Event| {
            if let Some(bounds) = tab_refs.get(active).and_then(host::measure_element) {
                indicator.set(bounds);
            }
        });
    }

    let onkeydown = {
        let active = active.clone();
        let tab_refs = tab_refs.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(next) = cycle_tab(*active, GUIDE_TABS.len(), &e.key()) {
                e.prevent_default();
                active.set(next);
                if let Some(node) = tab_refs.get(next) {
                    host::focus(node);
                }
            }
        })
    };

    let tabs = GUIDE_TABS.iter().enumerate().map(|(index, tab)| {
        let selected = index == *active;
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(index))
        };
        html! {
            <button
                ref={tab_refs[index].clone()}
                id={format!("guide-tab-{}", index)}
                class={classes!("guide-tab", selected.then(|| "active"))}
                role="tab"
                aria-selected={if selected { "true" } else { "false" }}
                aria-controls="guide-panel"
                tabindex={if selected { "0" } else { "-1" }}
                onclick={onclick}
            >
                {tab.label}
            </button>
        }
    });

    let current = &GUIDE_TABS[*active];

    html! {
        <section class="guide-steps">
            <h2>{"Qué esperar en cada momento"}</h2>
            <div class="guide-tabs" role="tablist" onkeydown={onkeydown}>
                { for tabs }
                <span class="guide-tab-indicator" style={indicator_style(*indicator)}></span>
            </div>
            <ol
                id="guide-panel"
                class="guide-panel"
                role="tabpanel"
                aria-labelledby={format!("guide-tab-{}", *active)}
            >
                {
                    for current.steps.iter().map(|step| html! {
                        <li class="guide-step">
                            <h3>{step.title}</h3>
                            <p>{step.text}</p>
                        </li>
                    })
                }
            </ol>
        </section>
    }
}
