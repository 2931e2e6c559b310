use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Modern,
    Classic,
}

impl VisualStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            VisualStyle::Modern => "style-modern",
            VisualStyle::Classic => "style-classic",
        }
    }
}

/// Fully resolved display options.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowOptions {
    pub orientation: Orientation,
    pub default_expanded: bool,
    pub show_features_in_compact_view: bool,
    pub use_advanced_animations: bool,
    pub visual_style: VisualStyle,
    pub class_name: Option<String>,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            default_expanded: false,
            show_features_in_compact_view: false,
            use_advanced_animations: true,
            visual_style: VisualStyle::Modern,
            class_name: None,
        }
    }
}

/// Caller-supplied options; anything left as `None` takes the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartialOptions {
    pub orientation: Option<Orientation>,
    pub default_expanded: Option<bool>,
    pub show_features_in_compact_view: Option<bool>,
    pub use_advanced_animations: Option<bool>,
    pub visual_style: Option<VisualStyle>,
    pub class_name: Option<String>,
}

impl PartialOptions {
    pub fn resolve(&self) -> FlowOptions {
        let defaults = FlowOptions::default();
        FlowOptions {
            orientation: self.orientation.unwrap_or(defaults.orientation),
            default_expanded: self.default_expanded.unwrap_or(defaults.default_expanded),
            show_features_in_compact_view: self
                .show_features_in_compact_view
                .unwrap_or(defaults.show_features_in_compact_view),
            use_advanced_animations: self
                .use_advanced_animations
                .unwrap_or(defaults.use_advanced_animations),
            visual_style: self.visual_style.unwrap_or(defaults.visual_style),
            class_name: self.class_name.clone().or(defaults.class_name),
        }
    }

    /// Fields set in `other` win.
    pub fn overlay(&self, other: &PartialOptions) -> PartialOptions {
        PartialOptions {
            orientation: other.orientation.or(self.orientation),
            default_expanded: other.default_expanded.or(self.default_expanded),
            show_features_in_compact_view: other
                .show_features_in_compact_view
                .or(self.show_features_in_compact_view),
            use_advanced_animations: other.use_advanced_animations.or(self.use_advanced_animations),
            visual_style: other.visual_style.or(self.visual_style),
            class_name: other.class_name.clone().or_else(|| self.class_name.clone()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryView {
    Compacta,
    Expandida,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStyle {
    Moderno,
    Clasico,
}

/// Page query string, e.g. `?orientacion=vertical&vista=expandida`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FlowQuery {
    #[serde(default)]
    pub orientacion: Option<Orientation>,
    #[serde(default)]
    pub vista: Option<QueryView>,
    #[serde(default)]
    pub estilo: Option<QueryStyle>,
    #[serde(default)]
    pub animaciones: Option<u8>,
    #[serde(default)]
    pub caracteristicas: Option<u8>,
}

impl From<FlowQuery> for PartialOptions {
    fn from(query: FlowQuery) -> Self {
        PartialOptions {
            orientation: query.orientacion,
            default_expanded: query.vista.map(|v| v == QueryView::Expandida),
            show_features_in_compact_view: query.caracteristicas.map(|flag| flag != 0),
            use_advanced_animations: query.animaciones.map(|flag| flag != 0),
            visual_style: query.estilo.map(|style| match style {
                QueryStyle::Moderno => VisualStyle::Modern,
                QueryStyle::Clasico => VisualStyle::Classic,
            }),
            class_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_partial_resolves_to_documented_defaults() {
        let options = PartialOptions::default().resolve();
        assert_eq!(options.orientation, Orientation::Horizontal);
        assert!(!options.default_expanded);
        assert!(!options.show_features_in_compact_view);
        assert!(options.use_advanced_animations);
        assert_eq!(options.visual_style, VisualStyle::Modern);
        assert!(options.class_name.is_none());
    }

    #[test]
    fn test_partial_fields_override_defaults() {
        let partial = PartialOptions {
            orientation: Some(Orientation::Vertical),
            use_advanced_animations: Some(false),
            ..Default::default()
        };
        let options = partial.resolve();
        assert_eq!(options.orientation, Orientation::Vertical);
        assert!(!options.use_advanced_animations);
        assert!(!options.default_expanded);
    }

    #[test]
    fn test_overlay_prefers_set_fields() {
        let base = PartialOptions {
            orientation: Some(Orientation::Vertical),
            show_features_in_compact_view: Some(true),
            ..Default::default()
        };
        let top = PartialOptions {
            orientation: Some(Orientation::Horizontal),
            ..Default::default()
        };
        let merged = base.overlay(&top);
        assert_eq!(merged.orientation, Some(Orientation::Horizontal));
        assert_eq!(merged.show_features_in_compact_view, Some(true));
    }

    #[test]
    fn test_query_maps_to_partial_options() {
        let query = FlowQuery {
            orientacion: Some(Orientation::Vertical),
            vista: Some(QueryView::Expandida),
            estilo: Some(QueryStyle::Clasico),
            animaciones: Some(0),
            caracteristicas: Some(1),
        };
        let partial = PartialOptions::from(query);
        assert_eq!(partial.orientation, Some(Orientation::Vertical));
        assert_eq!(partial.default_expanded, Some(true));
        assert_eq!(partial.visual_style, Some(VisualStyle::Classic));
        assert_eq!(partial.use_advanced_animations, Some(false));
        assert_eq!(partial.show_features_in_compact_view, Some(true));
    }

    #[test]
    fn test_query_deserializes_lowercase_values() {
        let query: FlowQuery =
            serde_json::from_str(r#"{"orientacion":"vertical","vista":"compacta"}"#).unwrap();
        assert_eq!(query.orientacion, Some(Orientation::Vertical));
        assert_eq!(query.vista, Some(QueryView::Compacta));
        assert!(query.estilo.is_none());
    }

    #[test]
    fn test_query_decodes_from_url_query_string() {
        let query: FlowQuery = serde_urlencoded::from_str(
            "orientacion=vertical&vista=expandida&estilo=clasico&animaciones=0&caracteristicas=1",
        )
        .unwrap();
        assert_eq!(query.orientacion, Some(Orientation::Vertical));
        assert_eq!(query.vista, Some(QueryView::Expandida));
        assert_eq!(query.estilo, Some(QueryStyle::Clasico));
        assert_eq!(query.animaciones, Some(0));
        assert_eq!(query.caracteristicas, Some(1));

        let partial = PartialOptions::from(query);
        assert_eq!(partial.use_advanced_animations, Some(false));
        assert_eq!(partial.show_features_in_compact_view, Some(true));
    }

    #[test]
    fn test_query_missing_keys_stay_unset() {
        let query: FlowQuery = serde_urlencoded::from_str("animaciones=1").unwrap();
        assert!(query.orientacion.is_none());
        assert!(query.vista.is_none());
        assert_eq!(query.animaciones, Some(1));
        assert!(query.caracteristicas.is_none());
    }
}
