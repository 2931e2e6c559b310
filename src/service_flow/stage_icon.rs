use yew::prelude::*;

use super::options::VisualStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct StageGlyph {
    pub symbol: &'static str,
    pub label: &'static str,
    pub class: Classes,
}

/// Glyph for one of the five tiers. Any other number has no icon.
pub fn stage_glyph(stage_number: u32, is_active: bool, visual_style: VisualStyle) -> Option<StageGlyph> {
    let (symbol, label) = match stage_number {
        1 => ("🔍", "Diagnóstico: analizamos tu situación legal"),
        2 => ("📘", "Autoayuda: recursos para resolverlo por tu cuenta"),
        3 => ("📊", "Reporte estratégico: informe con la estrategia recomendada"),
        4 => ("🛠️", "Intervención especializada: actuamos en un punto concreto"),
        5 => ("⚖️", "Representación completa: llevamos tu caso de principio a fin"),
        _ => return None,
    };
    let class = classes!(
        "stage-icon",
        visual_style.class_name(),
        is_active.then(|| "stage-icon--active")
    );
    Some(StageGlyph { symbol, label, class })
}

#[derive(Properties, PartialEq)]
pub struct StageIconProps {
    pub stage_number: u32,
    pub is_active: bool,
    pub visual_style: VisualStyle,
}

#[function_component(StageIcon)]
pub fn stage_icon(props: &StageIconProps) -> Html {
    match stage_glyph(props.stage_number, props.is_active, props.visual_style) {
        Some(glyph) => html! {
            <span class={glyph.class} role="img" aria-label={glyph.label} title={glyph.label}>
                {glyph.symbol}
            </span>
        },
        None => html! {},
    }
}
