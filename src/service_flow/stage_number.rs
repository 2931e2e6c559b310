use yew::prelude::*;

use super::options::VisualStyle;

/// How the badge moves, decided once per render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// CSS transitions plus an infinite pulse while active.
    Animated { pulsing: bool },
    Static,
}

impl Motion {
    pub fn select(animations_enabled: bool, is_active: bool) -> Self {
        if animations_enabled {
            Motion::Animated { pulsing: is_active }
        } else {
            Motion::Static
        }
    }
}

pub fn badge_classes(is_active: bool, visual_style: VisualStyle, motion: Motion) -> Classes {
    let (animated, pulsing) = match motion {
        Motion::Animated { pulsing } => (true, pulsing),
        Motion::Static => (false, false),
    };
    classes!(
        "stage-number",
        visual_style.class_name(),
        is_active.then(|| "stage-number--active"),
        animated.then(|| "stage-number--animated"),
        pulsing.then(|| "stage-number--pulse")
    )
}

#[derive(Properties, PartialEq)]
pub struct StageNumberProps {
    pub number: u32,
    pub is_active: bool,
    pub visual_style: VisualStyle,
    #[prop_or(true)]
    pub animated: bool,
}

#[function_component(StageNumber)]
pub fn stage_number(props: &StageNumberProps) -> Html {
    let motion = Motion::select(props.animated, props.is_active);
    html! {
        <span class={badge_classes(props.is_active, props.visual_style, motion)} aria-hidden="true">
            {props.number}
        </span>
    }
}
