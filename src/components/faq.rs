use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::accordion::{AccordionAction, AccordionState, Phase};
use crate::config::{ACCORDION_EXIT_MS, SCROLL_DELAY_MS, SCROLL_OFFSET_PX};
use crate::host;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static [&'static str],
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "¿Por dónde empiezo si no sé qué tipo de problema legal tengo?",
        answer: &[
            "Empieza por el diagnóstico gratuito. Con un cuestionario breve clasificamos tu caso y te indicamos qué nivel de servicio encaja mejor.",
            "No necesitas tener toda la documentación preparada: basta con que nos cuentes qué ha pasado.",
        ],
    },
    FaqEntry {
        question: "¿Tengo que pasar por todas las etapas?",
        answer: &[
            "No. Las etapas son independientes. Muchos casos se resuelven con los recursos de autoayuda o con un reporte estratégico, y solo algunos requieren representación completa.",
        ],
    },
    FaqEntry {
        question: "¿Qué diferencia hay entre el reporte estratégico y la intervención especializada?",
        answer: &[
            "El reporte es un análisis escrito de tu caso con la estrategia recomendada para que decidas cómo seguir.",
            "En la intervención un abogado actúa por ti en un punto concreto: redacta un escrito, responde un requerimiento o negocia con la otra parte.",
        ],
    },
    FaqEntry {
        question: "¿Cuánto cuesta la representación completa?",
        answer: &[
            "Depende del tipo de procedimiento. Antes de empezar recibes un presupuesto cerrado por escrito, sin costes ocultos.",
        ],
    },
    FaqEntry {
        question: "¿Puedo pasar a otra etapa después de empezar?",
        answer: &[
            "Sí. Si durante una etapa vemos que tu caso necesita más apoyo, te lo proponemos y descontamos lo ya abonado cuando corresponde.",
        ],
    },
    FaqEntry {
        question: "¿Mis datos y documentos son confidenciales?",
        answer: &[
            "Toda la información que compartes está protegida por el secreto profesional y solo la ven los profesionales asignados a tu caso.",
        ],
    },
];

pub fn faq_item_id(index: usize) -> String {
    format!("faq-item-{}", index)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static [&'static str],
    phase: Phase,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    let is_open = props.phase == Phase::Open;
    let answer_id = format!("{}-answer", faq_item_id(props.index));

    html! {
        <div id={faq_item_id(props.index)} class={classes!("faq-item", props.phase.class_name())}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={if is_open { "true" } else { "false" }}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
            </button>
            {
                if props.phase.is_mounted() {
                    html! {
                        <div id={answer_id} class="faq-answer">
                            { for props.answer.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(AccordionState::default);

    // Bring a freshly opened answer into view once it has started to expand.
    use_effect_with_deps(
        move |open: &Option<usize>| {
            let timer = open.map(|index| {
                let id = faq_item_id(index);
                Timeout::new(SCROLL_DELAY_MS, move || {
                    host::scroll_into_view(&id, SCROLL_OFFSET_PX);
                })
            });
            move || drop(timer)
        },
        accordion.open,
    );

    // Unmount a closing answer after its exit transition.
    {
        let dispatcher = accordion.dispatcher();
        use_effect_with_deps(
            move |closing: &Option<usize>| {
                let timer = closing.map(|index| {
                    Timeout::new(ACCORDION_EXIT_MS, move || {
                        dispatcher.dispatch(AccordionAction::ExitElapsed(index));
                    })
                });
                move || drop(timer)
            },
            accordion.closing,
        );
    }

    let on_toggle = {
        let dispatcher = accordion.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(AccordionAction::Toggle(index)))
    };

    html! {
        <section class="faq-section" aria-labelledby="faq-title">
            <h2 id="faq-title">{"Preguntas frecuentes"}</h2>
            {
                for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        index={index}
                        question={entry.question}
                        answer={entry.answer}
                        phase={accordion.phase(index)}
                        on_toggle={on_toggle.clone()}
                    />
                })
            }
        </section>
    }
}
