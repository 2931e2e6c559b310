//! Interactive five-stage service flow.
//!
//! [`ServiceFlow`] owns the interaction state and mounts exactly one
//! [`view::FlowView`] for the current `(orientation, expanded)` pair. The
//! view is keyed by its variant so switching unmounts the previous layout.

pub mod layout;
pub mod options;
pub mod stage;
pub mod stage_icon;
pub mod stage_number;
pub mod state;
pub mod view;

use log::debug;
use yew::prelude::*;

use crate::config::DEFAULT_FLOW_TITLE;
use crate::host::{self, use_scoped_style};
use layout::ViewVariant;
use options::{PartialOptions, VisualStyle};
use stage::Stage;
use state::{FlowAction, FlowState};
use view::FlowView;

/// Scoped sheet for the classic look, mounted only while that style is active.
const CLASSIC_CSS: &str = r#"
    font-family: Georgia, 'Times New Roman', serif;

    .stage-card {
        border-radius: 2px;
        border: 1px solid #8b7355;
        background: #fbf8f1;
        color: #3b2f20;
        box-shadow: none;
    }

    .stage-card--active {
        border-color: #5a3e1b;
        background: #f3ead6;
    }

    .stage-number {
        border-radius: 2px;
        background: #5a3e1b;
        color: #fbf8f1;
    }

    .flow-switch {
        border-radius: 2px;
        background: transparent;
        border: 1px solid #5a3e1b;
        color: #5a3e1b;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ServiceFlowProps {
    pub stages: Vec<Stage>,
    #[prop_or_default]
    pub options: PartialOptions,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub on_stage_select: Option<Callback<String>>,
    /// Receives `stage.link_to` when an action control is used. Without it the
    /// control falls back to a plain link.
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

#[function_component(ServiceFlow)]
pub fn service_flow(props: &ServiceFlowProps) -> Html {
    let options = props.options.resolve();
    let state = use_state(|| FlowState::new(options.default_expanded));

    let card_refs = use_memo(
        |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        props.stages.len(),
    );

    // Stage list swapped under us: keep or drop the selection.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |stages: &Vec<Stage>| {
                let mut next = (*state).clone();
                if next.reconcile(stages) {
                    debug!("Stage list changed, selection now {:?}", next.active_id());
                    state.set(next);
                }
                || ()
            },
            props.stages.clone(),
        );
    }

    // Move keyboard focus only when the visitor picked a stage.
    {
        let card_refs = card_refs.clone();
        let index = state.active_index();
        use_effect_with_deps(
            move |_: &u32| {
                if let Some(node) = index.and_then(|i| card_refs.get(i)) {
                    host::focus(node);
                }
                || ()
            },
            state.focus_request,
        );
    }

    let on_action = {
        let state = state.clone();
        let stages = props.stages.clone();
        let on_stage_select = props.on_stage_select.clone();
        Callback::from(move |action: FlowAction| {
            let mut next = (*state).clone();
            let selected = next.apply(&stages, action);
            if action == FlowAction::ToggleExpanded {
                debug!("Switching to {} view", if next.expanded { "expanded" } else { "compact" });
            }
            state.set(next);
            if let Some(id) = selected {
                debug!("Stage selected: {}", id);
                if let Some(on_stage_select) = &on_stage_select {
                    on_stage_select.emit(id);
                }
            }
        })
    };

    let scope = use_scoped_style((options.visual_style == VisualStyle::Classic).then_some(CLASSIC_CSS));

    let variant = ViewVariant::select(options.orientation, state.expanded);
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| DEFAULT_FLOW_TITLE.to_string());
    let root_class = classes!(
        "service-flow",
        options.visual_style.class_name(),
        options.use_advanced_animations.then(|| "service-flow--animated"),
        options.class_name.clone(),
        scope
    );

    html! {
        <section class={root_class}>
            <FlowView
                key={variant.key()}
                title={title}
                stages={props.stages.clone()}
                variant={variant}
                options={options.clone()}
                active={state.active.clone()}
                card_refs={(*card_refs).clone()}
                on_action={on_action}
                on_navigate={props.on_navigate.clone()}
            />
        </section>
    }
}
