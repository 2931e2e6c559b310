use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::layout::{Connector, SelectionModel, Side, ViewVariant};
use super::options::FlowOptions;
use super::stage::Stage;
use super::stage_icon::StageIcon;
use super::stage_number::StageNumber;
use super::state::{card_key_action, ActiveStage, FlowAction};

#[derive(Properties, PartialEq)]
pub struct FlowViewProps {
    pub title: String,
    pub stages: Vec<Stage>,
    pub variant: ViewVariant,
    pub options: FlowOptions,
    pub active: Option<ActiveStage>,
    pub card_refs: Vec<NodeRef>,
    pub on_action: Callback<FlowAction>,
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

#[function_component(FlowView)]
pub fn flow_view(props: &FlowViewProps) -> Html {
    let variant = props.variant;

    let on_switch = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(FlowAction::ToggleExpanded);
        })
    };

    let axis = match variant.connector() {
        Connector::TimelineLine => html! { <div class="flow-timeline-line" aria-hidden="true"></div> },
        Connector::CentralTimeline => html! { <div class="flow-timeline-axis" aria-hidden="true"></div> },
        Connector::Arrows | Connector::None => html! {},
    };

    let len = props.stages.len();
    let cards = props.stages.iter().enumerate().map(|(index, stage)| {
        let card = stage_card(props, index, stage);
        if variant.connector_after(index, len) {
            html! {
                <>
                    {card}
                    <div class="stage-arrow" aria-hidden="true">{"→"}</div>
                </>
            }
        } else {
            card
        }
    });

    html! {
        <div class={classes!("flow-view", variant.key())}>
            <div class="flow-header">
                <h2 class="flow-title">{&props.title}</h2>
                <button class="flow-switch" onclick={on_switch}>
                    {variant.switch_label()}
                </button>
            </div>
            <div class={classes!("flow-stages", variant.container_class())} role="list">
                {axis}
                { for cards }
            </div>
        </div>
    }
}

fn stage_card(props: &FlowViewProps, index: usize, stage: &Stage) -> Html {
    let variant = props.variant;
    let options = &props.options;
    let is_active = props.active.as_ref().map_or(false, |a| a.id == stage.id);
    let toggles = variant.selection_model() == SelectionModel::Toggle;

    let onclick = {
        let on_action = props.on_action.clone();
        let action = if toggles { FlowAction::Toggle(index) } else { FlowAction::Direct(index) };
        Callback::from(move |_: MouseEvent| on_action.emit(action))
    };

    let onkeydown = toggles.then(|| {
        let on_action = props.on_action.clone();
        let orientation = options.orientation;
        Callback::from(move |e: KeyboardEvent| {
            let on_card = e.target() == e.current_target();
            if let Some(action) = card_key_action(orientation, index, &e.key(), on_card) {
                e.prevent_default();
                on_action.emit(action);
            }
        })
    });

    let on_link = {
        let on_navigate = props.on_navigate.clone();
        let path = stage.link_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(on_navigate) = &on_navigate {
                e.prevent_default();
                on_navigate.emit(path.clone());
            }
        })
    };

    let side = variant.card_side(index).map(|side| match side {
        Side::Left => "stage-card--left",
        Side::Right => "stage-card--right",
    });
    let card_class = classes!(
        "stage-card",
        is_active.then(|| "stage-card--active"),
        side,
        options.use_advanced_animations.then(|| "stage-card--animated")
    );
    let style = format!(
        "--stage-accent: var(--color-{}); --stage-delay: {}ms;",
        stage.color,
        index * 80
    );

    let features = variant.visible_features(stage.features(), options.show_features_in_compact_view);
    let node_ref = props.card_refs.get(index).cloned().unwrap_or_default();

    html! {
        <div
            ref={node_ref}
            class={card_class}
            style={style}
            role="listitem"
            tabindex={toggles.then(|| "0")}
            aria-current={is_active.then(|| "step")}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <div class="stage-card__header">
                <StageNumber
                    number={stage.number}
                    is_active={is_active}
                    visual_style={options.visual_style}
                    animated={options.use_advanced_animations}
                />
                <StageIcon
                    stage_number={stage.number}
                    is_active={is_active}
                    visual_style={options.visual_style}
                />
                <h3 class="stage-card__short-title">{&stage.short_title}</h3>
            </div>
            {
                if variant.shows_full_title() {
                    html! { <h4 class="stage-card__title">{&stage.title}</h4> }
                } else {
                    html! {}
                }
            }
            <p class="stage-card__description">{&stage.description}</p>
            {
                if features.is_empty() {
                    html! {}
                } else {
                    html! {
                        <ul class="stage-card__features">
                            { for features.iter().map(|feature| html! { <li>{feature}</li> }) }
                        </ul>
                    }
                }
            }
            <div class="stage-card__footer">
                <span class="stage-card__price">{&stage.price}</span>
                <a class="stage-card__action" href={stage.link_to.clone()} onclick={on_link}>
                    {&stage.button_text}
                </a>
            </div>
        </div>
    }
}
