//! One parameterized layout for all four stage-flow views.
//!
//! A view is keyed by `(orientation, density)`. Every per-variant difference
//! (selection model, feature slicing, connectors, card placement, the
//! compact/expanded switch) is answered here so the renderer stays uniform.

use super::options::Orientation;
use crate::config::COMPACT_FEATURE_LIMIT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    Compact,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionModel {
    /// Click toggles selection, arrow keys navigate.
    Toggle,
    /// Click reports the stage without touching selection state.
    Direct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    Arrows,
    TimelineLine,
    CentralTimeline,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewVariant {
    pub orientation: Orientation,
    pub density: Density,
}

impl ViewVariant {
    pub fn select(orientation: Orientation, expanded: bool) -> Self {
        let density = if expanded { Density::Expanded } else { Density::Compact };
        Self { orientation, density }
    }

    pub fn is_expanded(&self) -> bool {
        self.density == Density::Expanded
    }

    pub fn key(&self) -> &'static str {
        match (self.orientation, self.density) {
            (Orientation::Horizontal, Density::Compact) => "horizontal-compact",
            (Orientation::Horizontal, Density::Expanded) => "horizontal-expanded",
            (Orientation::Vertical, Density::Compact) => "vertical-compact",
            (Orientation::Vertical, Density::Expanded) => "vertical-expanded",
        }
    }

    pub fn selection_model(&self) -> SelectionModel {
        match self.density {
            Density::Compact => SelectionModel::Toggle,
            Density::Expanded => SelectionModel::Direct,
        }
    }

    pub fn connector(&self) -> Connector {
        match (self.orientation, self.density) {
            (Orientation::Horizontal, Density::Compact) => Connector::Arrows,
            (Orientation::Horizontal, Density::Expanded) => Connector::None,
            (Orientation::Vertical, Density::Compact) => Connector::TimelineLine,
            (Orientation::Vertical, Density::Expanded) => Connector::CentralTimeline,
        }
    }

    /// Only the vertical expanded timeline alternates cards around its axis.
    pub fn card_side(&self, index: usize) -> Option<Side> {
        if self.connector() != Connector::CentralTimeline {
            return None;
        }
        Some(if index % 2 == 0 { Side::Left } else { Side::Right })
    }

    /// Whether a connector is drawn after the card at `index`.
    pub fn connector_after(&self, index: usize, len: usize) -> bool {
        self.connector() == Connector::Arrows && index + 1 < len
    }

    pub fn visible_features<'a>(&self, features: &'a [String], show_in_compact: bool) -> &'a [String] {
        match self.density {
            Density::Expanded => features,
            Density::Compact if show_in_compact => {
                &features[..features.len().min(COMPACT_FEATURE_LIMIT)]
            }
            Density::Compact => &[],
        }
    }

    pub fn shows_full_title(&self) -> bool {
        self.is_expanded()
    }

    pub fn switch_label(&self) -> &'static str {
        match self.density {
            Density::Compact => "Ver detalles completos",
            Density::Expanded => "Ver vista compacta",
        }
    }

    pub fn container_class(&self) -> &'static str {
        match (self.orientation, self.density) {
            (Orientation::Horizontal, Density::Compact) => "flow-row",
            (Orientation::Horizontal, Density::Expanded) => "flow-grid",
            (Orientation::Vertical, Density::Compact) => "flow-column",
            (Orientation::Vertical, Density::Expanded) => "flow-timeline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("feature {}", i)).collect()
    }

    #[test]
    fn test_select_covers_all_four_variants() {
        let keys: Vec<&str> = [
            (Orientation::Horizontal, false),
            (Orientation::Horizontal, true),
            (Orientation::Vertical, false),
            (Orientation::Vertical, true),
        ]
        .iter()
        .map(|(o, e)| ViewVariant::select(*o, *e).key())
        .collect();
        assert_eq!(
            keys,
            vec!["horizontal-compact", "horizontal-expanded", "vertical-compact", "vertical-expanded"]
        );
    }

    #[test]
    fn test_selection_model_follows_density() {
        assert_eq!(
            ViewVariant::select(Orientation::Vertical, false).selection_model(),
            SelectionModel::Toggle
        );
        assert_eq!(
            ViewVariant::select(Orientation::Horizontal, true).selection_model(),
            SelectionModel::Direct
        );
    }

    #[test]
    fn test_compact_hides_features_when_disabled() {
        let all = features(4);
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let variant = ViewVariant::select(orientation, false);
            assert!(variant.visible_features(&all, false).is_empty());
        }
    }

    #[test]
    fn test_compact_previews_at_most_two_features() {
        let variant = ViewVariant::select(Orientation::Horizontal, false);
        let all = features(4);
        assert_eq!(variant.visible_features(&all, true), &all[..2]);
        let one = features(1);
        assert_eq!(variant.visible_features(&one, true).len(), 1);
    }

    #[test]
    fn test_expanded_shows_every_feature() {
        let all = features(4);
        for show in [false, true] {
            let variant = ViewVariant::select(Orientation::Vertical, true);
            assert_eq!(variant.visible_features(&all, show).len(), 4);
        }
    }

    #[test]
    fn test_arrows_only_between_horizontal_compact_cards() {
        let row = ViewVariant::select(Orientation::Horizontal, false);
        assert!(row.connector_after(0, 5));
        assert!(row.connector_after(3, 5));
        assert!(!row.connector_after(4, 5));
        let grid = ViewVariant::select(Orientation::Horizontal, true);
        assert!(!grid.connector_after(0, 5));
    }

    #[test]
    fn test_vertical_expanded_alternates_sides() {
        let timeline = ViewVariant::select(Orientation::Vertical, true);
        assert_eq!(timeline.card_side(0), Some(Side::Left));
        assert_eq!(timeline.card_side(1), Some(Side::Right));
        assert_eq!(timeline.card_side(2), Some(Side::Left));
        assert_eq!(ViewVariant::select(Orientation::Vertical, false).card_side(1), None);
    }

    #[test]
    fn test_switch_label_points_at_other_density() {
        assert_eq!(
            ViewVariant::select(Orientation::Vertical, false).switch_label(),
            "Ver detalles completos"
        );
        assert_eq!(
            ViewVariant::select(Orientation::Vertical, true).switch_label(),
            "Ver vista compacta"
        );
    }
}
