use super::options::Orientation;
use super::stage::Stage;

/// Id and index travel together so they can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveStage {
    pub id: String,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowAction {
    /// Click (or Enter/Space) on a compact card.
    Toggle(usize),
    /// Arrow key pressed while the card at `from` had focus.
    Navigate { from: usize, step: Step },
    /// Click on an expanded card.
    Direct(usize),
    ToggleExpanded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowState {
    pub expanded: bool,
    pub active: Option<ActiveStage>,
    /// Bumped whenever a user action selects a stage; focus follows this, not the index.
    pub focus_request: u32,
}

impl FlowState {
    pub fn new(default_expanded: bool) -> Self {
        Self { expanded: default_expanded, active: None, focus_request: 0 }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.id.as_str())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.index)
    }

    /// Applies `action` and returns the stage id to report as selected, if any.
    pub fn apply(&mut self, stages: &[Stage], action: FlowAction) -> Option<String> {
        match action {
            FlowAction::Toggle(index) => {
                let stage = stages.get(index)?;
                if self.active_id() == Some(stage.id.as_str()) {
                    self.active = None;
                    None
                } else {
                    self.select(stage, index)
                }
            }
            FlowAction::Navigate { from, step } => {
                if stages.is_empty() {
                    return None;
                }
                let last = stages.len() - 1;
                let target = match step {
                    Step::Next => (from + 1).min(last),
                    Step::Prev => from.saturating_sub(1),
                };
                // Reported even when clamped at either end.
                self.select(&stages[target], target)
            }
            FlowAction::Direct(index) => stages.get(index).map(|stage| stage.id.clone()),
            FlowAction::ToggleExpanded => {
                self.expanded = !self.expanded;
                self.active = None;
                None
            }
        }
    }

    fn select(&mut self, stage: &Stage, index: usize) -> Option<String> {
        self.active = Some(ActiveStage { id: stage.id.clone(), index });
        self.focus_request = self.focus_request.wrapping_add(1);
        Some(stage.id.clone())
    }

    /// Brings the selection back in line after the stage list changed.
    ///
    /// A stage that survived keeps its selection at its new position; a
    /// selection whose id is gone is cleared. Returns true when anything changed.
    pub fn reconcile(&mut self, stages: &[Stage]) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        match stages.iter().position(|stage| stage.id == active.id) {
            Some(index) => {
                let moved = index != active.index;
                self.active = Some(ActiveStage { id: active.id, index });
                moved
            }
            None => true,
        }
    }
}

/// Maps a key to a navigation step for the given orientation.
pub fn nav_step(orientation: Orientation, key: &str) -> Option<Step> {
    match (orientation, key) {
        (Orientation::Horizontal, "ArrowRight") | (Orientation::Vertical, "ArrowDown") => {
            Some(Step::Next)
        }
        (Orientation::Horizontal, "ArrowLeft") | (Orientation::Vertical, "ArrowUp") => {
            Some(Step::Prev)
        }
        _ => None,
    }
}

pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Action for a key pressed on a compact card. Keys that bubbled up from a
/// child (the action link) are left to that child.
pub fn card_key_action(
    orientation: Orientation,
    index: usize,
    key: &str,
    on_card: bool,
) -> Option<FlowAction> {
    if !on_card {
        return None;
    }
    if is_activation_key(key) {
        return Some(FlowAction::Toggle(index));
    }
    nav_step(orientation, key).map(|step| FlowAction::Navigate { from: index, step })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_flow::layout::ViewVariant;
    use crate::service_flow::stage::test_stages;

    #[test]
    fn test_new_state_has_no_selection() {
        let state = FlowState::new(false);
        assert!(!state.expanded);
        assert!(state.active.is_none());
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_toggle_selects_then_deselects() {
        let stages = test_stages();
        let mut state = FlowState::new(false);

        let emitted = state.apply(&stages, FlowAction::Toggle(1));
        assert_eq!(emitted.as_deref(), Some("autoayuda"));
        assert_eq!(state.active_id(), Some("autoayuda"));
        assert_eq!(state.active_index(), Some(1));

        let emitted = state.apply(&stages, FlowAction::Toggle(1));
        assert_eq!(emitted, None);
        assert_eq!(state.active_id(), None);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_toggle_other_stage_moves_selection() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        state.apply(&stages, FlowAction::Toggle(0));
        let emitted = state.apply(&stages, FlowAction::Toggle(4));
        assert_eq!(emitted.as_deref(), Some("representacion"));
        assert_eq!(state.active_index(), Some(4));
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        assert_eq!(state.apply(&stages, FlowAction::Toggle(9)), None);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_navigate_next_clamps_and_still_reports() {
        let stages = test_stages();
        let mut state = FlowState::new(false);

        let emitted = state.apply(&stages, FlowAction::Navigate { from: 2, step: Step::Next });
        assert_eq!(emitted.as_deref(), Some("intervencion"));
        assert_eq!(state.active_index(), Some(3));

        let emitted = state.apply(&stages, FlowAction::Navigate { from: 4, step: Step::Next });
        assert_eq!(emitted.as_deref(), Some("representacion"));
        assert_eq!(state.active_index(), Some(4));
    }

    #[test]
    fn test_navigate_prev_clamps_at_first() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        let emitted = state.apply(&stages, FlowAction::Navigate { from: 0, step: Step::Prev });
        assert_eq!(emitted.as_deref(), Some("diagnostico"));
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_navigate_reselecting_active_does_not_toggle_off() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        state.apply(&stages, FlowAction::Toggle(4));
        state.apply(&stages, FlowAction::Navigate { from: 4, step: Step::Next });
        assert_eq!(state.active_id(), Some("representacion"));
    }

    #[test]
    fn test_navigate_on_empty_stages_is_noop() {
        let mut state = FlowState::new(false);
        assert_eq!(state.apply(&[], FlowAction::Navigate { from: 0, step: Step::Next }), None);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_direct_reports_without_selecting() {
        let stages = test_stages();
        let mut state = FlowState::new(true);
        let emitted = state.apply(&stages, FlowAction::Direct(2));
        assert_eq!(emitted.as_deref(), Some("reporte"));
        assert!(state.active.is_none());
    }

    #[test]
    fn test_toggle_expanded_clears_selection() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        state.apply(&stages, FlowAction::Toggle(3));
        assert_eq!(state.apply(&stages, FlowAction::ToggleExpanded), None);
        assert!(state.expanded);
        assert!(state.active.is_none());

        state.apply(&stages, FlowAction::ToggleExpanded);
        assert!(!state.expanded);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_reconcile_follows_moved_stage() {
        let mut stages = test_stages();
        let mut state = FlowState::new(false);
        state.apply(&stages, FlowAction::Toggle(3));
        stages.remove(0);
        assert!(state.reconcile(&stages));
        assert_eq!(state.active_id(), Some("intervencion"));
        assert_eq!(state.active_index(), Some(2));
    }

    #[test]
    fn test_reconcile_clears_selection_for_removed_stage() {
        let mut stages = test_stages();
        let mut state = FlowState::new(false);
        state.apply(&stages, FlowAction::Toggle(4));
        stages.truncate(2);
        assert!(state.reconcile(&stages));
        assert!(state.active.is_none());
    }

    #[test]
    fn test_reconcile_unchanged_list_is_noop() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        assert!(!state.reconcile(&stages));
        state.apply(&stages, FlowAction::Toggle(1));
        assert!(!state.reconcile(&stages));
        assert_eq!(state.active_index(), Some(1));
    }

    #[test]
    fn test_nav_step_depends_on_orientation() {
        assert_eq!(nav_step(Orientation::Horizontal, "ArrowRight"), Some(Step::Next));
        assert_eq!(nav_step(Orientation::Horizontal, "ArrowLeft"), Some(Step::Prev));
        assert_eq!(nav_step(Orientation::Horizontal, "ArrowDown"), None);
        assert_eq!(nav_step(Orientation::Vertical, "ArrowDown"), Some(Step::Next));
        assert_eq!(nav_step(Orientation::Vertical, "ArrowUp"), Some(Step::Prev));
        assert_eq!(nav_step(Orientation::Vertical, "ArrowRight"), None);
        assert_eq!(nav_step(Orientation::Vertical, "Tab"), None);
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn test_card_key_action_on_card() {
        assert_eq!(
            card_key_action(Orientation::Horizontal, 2, "Enter", true),
            Some(FlowAction::Toggle(2))
        );
        assert_eq!(
            card_key_action(Orientation::Vertical, 2, "ArrowDown", true),
            Some(FlowAction::Navigate { from: 2, step: Step::Next })
        );
        assert_eq!(card_key_action(Orientation::Vertical, 2, "x", true), None);
    }

    #[test]
    fn test_card_key_action_ignores_keys_from_action_link() {
        assert_eq!(card_key_action(Orientation::Horizontal, 0, "Enter", false), None);
        assert_eq!(card_key_action(Orientation::Horizontal, 0, " ", false), None);
        assert_eq!(card_key_action(Orientation::Horizontal, 0, "ArrowRight", false), None);
    }

    #[test]
    fn test_user_selection_requests_focus() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        assert_eq!(state.focus_request, 0);
        state.apply(&stages, FlowAction::Toggle(1));
        assert_eq!(state.focus_request, 1);
        state.apply(&stages, FlowAction::Navigate { from: 1, step: Step::Next });
        assert_eq!(state.focus_request, 2);

        // Deselecting, direct clicks and view switches leave focus alone.
        state.apply(&stages, FlowAction::Toggle(2));
        state.apply(&stages, FlowAction::Direct(0));
        state.apply(&stages, FlowAction::ToggleExpanded);
        assert_eq!(state.focus_request, 2);
    }

    #[test]
    fn test_reconcile_does_not_request_focus() {
        let mut stages = test_stages();
        let mut state = FlowState::new(false);
        state.apply(&stages, FlowAction::Toggle(3));
        let before = state.focus_request;
        stages.remove(0);
        assert!(state.reconcile(&stages));
        assert_eq!(state.active_index(), Some(2));
        assert_eq!(state.focus_request, before);
    }

    #[test]
    fn test_vertical_compact_scenario_selects_third_stage() {
        let stages = test_stages();
        let mut state = FlowState::new(false);
        let variant = ViewVariant::select(Orientation::Vertical, state.expanded);
        assert_eq!(variant.key(), "vertical-compact");
        assert_eq!(variant.switch_label(), "Ver detalles completos");
        assert!(state.active.is_none());

        let mut selections = Vec::new();
        if let Some(id) = state.apply(&stages, FlowAction::Toggle(2)) {
            selections.push(id);
        }
        assert_eq!(state.active_id(), Some("reporte"));
        assert_eq!(selections, vec!["reporte".to_string()]);
    }
}
