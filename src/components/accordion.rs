use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Open,
    /// Collapsing; content stays mounted until the exit animation ends.
    Closing,
    Closed,
}

impl Phase {
    pub fn is_mounted(self) -> bool {
        self != Phase::Closed
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Phase::Open => "open",
            Phase::Closing => "closing",
            Phase::Closed => "",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    Toggle(usize),
    ExitElapsed(usize),
}

/// Single-open accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    pub open: Option<usize>,
    pub closing: Option<usize>,
}

impl AccordionState {
    pub fn phase(&self, index: usize) -> Phase {
        if self.open == Some(index) {
            Phase::Open
        } else if self.closing == Some(index) {
            Phase::Closing
        } else {
            Phase::Closed
        }
    }

    fn toggle(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
            self.closing = Some(index);
        } else {
            // A newer close replaces an older one still animating; that one just unmounts.
            let previous = self.open.replace(index);
            self.closing = previous;
        }
    }

    fn exit_elapsed(&mut self, index: usize) {
        if self.closing == Some(index) {
            self.closing = None;
        }
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AccordionAction::Toggle(index) => next.toggle(index),
            AccordionAction::ExitElapsed(index) => next.exit_elapsed(index),
        }
        Rc::new(next)
    }
}
