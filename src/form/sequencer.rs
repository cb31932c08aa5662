//! Focus sequencing across the fixed field order.
//!
//! The sequencer is a pure state machine: the facade feeds it discrete
//! events after validation has already passed and executes the commands it
//! returns. In paged mode an advance is two-phase: the scroll request goes
//! out first and the focus request only after the host acknowledges the
//! scroll, so the ordering survives any host concurrency model.

use tracing::debug;

use crate::fields::CardField;

/// Side effects the host must perform.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SequencerCommand {
    /// Scroll the paged layout to the given page.
    Scroll { page: usize },
    /// Move input focus to the given field.
    Focus(CardField),
    /// Dismiss the on-screen input affordance.
    DismissKeyboard,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Settled,
    /// Scroll requested; focus is withheld until the host acknowledges.
    AwaitingScroll { next: CardField },
}

#[derive(Clone, Debug)]
pub struct FocusSequencer {
    focused: Option<CardField>,
    paged: bool,
    completed: bool,
    phase: Phase,
}

impl FocusSequencer {
    /// The card-number field starts focused.
    pub fn new(paged: bool) -> Self {
        Self {
            focused: Some(CardField::CardNumber),
            paged,
            completed: false,
            phase: Phase::Settled,
        }
    }

    pub fn focused(&self) -> Option<CardField> {
        self.focused
    }

    pub fn is_paged(&self) -> bool {
        self.paged
    }

    /// Whether the full sequence has run to completion once.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// A field gained focus, by advance or by the user tapping it. Never
    /// triggers validation and never restores paged mode once completed.
    pub fn focus_gained(&mut self, field: CardField) {
        self.focused = Some(field);
        self.phase = Phase::Settled;
    }

    /// The focused field lost focus without another field taking it.
    pub fn focus_lost(&mut self, field: CardField) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// Advances past the focused field after its validation passed.
    pub fn advance(&mut self) -> Vec<SequencerCommand> {
        let Some(current) = self.focused else {
            return Vec::new();
        };
        let Some(next) = current.next() else {
            return self.complete();
        };
        if self.paged {
            debug!(from = %current, to = %next, "paged advance, awaiting scroll");
            self.phase = Phase::AwaitingScroll { next };
            vec![SequencerCommand::Scroll {
                page: next.page_index(),
            }]
        } else {
            debug!(from = %current, to = %next, "advancing focus");
            self.focused = Some(next);
            vec![SequencerCommand::Focus(next)]
        }
    }

    /// Host acknowledgment for a previously requested scroll; completes the
    /// pending advance.
    pub fn scroll_completed(&mut self) -> Vec<SequencerCommand> {
        match self.phase {
            Phase::AwaitingScroll { next } => {
                self.phase = Phase::Settled;
                self.focused = Some(next);
                vec![SequencerCommand::Focus(next)]
            }
            Phase::Settled => Vec::new(),
        }
    }

    /// Terminal transition after the zip code: nothing left to focus and the
    /// paged layout is switched off for the rest of the component lifetime.
    fn complete(&mut self) -> Vec<SequencerCommand> {
        debug!("entry sequence complete, switching to free scroll");
        self.focused = None;
        self.paged = false;
        self.completed = true;
        self.phase = Phase::Settled;
        vec![SequencerCommand::DismissKeyboard]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FIELD_ORDER;

    #[test]
    fn free_scroll_advance_walks_the_field_order_without_skips() {
        let mut sequencer = FocusSequencer::new(false);
        let mut visited = vec![sequencer.focused().expect("starts focused")];
        loop {
            let commands = sequencer.advance();
            match commands.as_slice() {
                [SequencerCommand::Focus(next)] => visited.push(*next),
                [SequencerCommand::DismissKeyboard] => break,
                other => panic!("unexpected commands {other:?}"),
            }
        }
        assert_eq!(visited, FIELD_ORDER);
        assert_eq!(sequencer.focused(), None);
    }

    #[test]
    fn paged_advance_is_two_phase() {
        let mut sequencer = FocusSequencer::new(true);
        let commands = sequencer.advance();
        assert_eq!(commands, vec![SequencerCommand::Scroll { page: 1 }]);
        // Focus stays put until the scroll is acknowledged.
        assert_eq!(sequencer.focused(), Some(CardField::CardNumber));

        let commands = sequencer.scroll_completed();
        assert_eq!(
            commands,
            vec![SequencerCommand::Focus(CardField::HolderName)]
        );
        assert_eq!(sequencer.focused(), Some(CardField::HolderName));

        // A second acknowledgment with nothing pending is a no-op.
        assert!(sequencer.scroll_completed().is_empty());
    }

    #[test]
    fn completion_disables_paged_mode_permanently() {
        let mut sequencer = FocusSequencer::new(true);
        sequencer.focus_gained(CardField::ZipCode);
        let commands = sequencer.advance();
        assert_eq!(commands, vec![SequencerCommand::DismissKeyboard]);
        assert_eq!(sequencer.focused(), None);
        assert!(!sequencer.is_paged());
        assert!(sequencer.is_completed());

        // Programmatic re-focus must not bring the paged layout back.
        sequencer.focus_gained(CardField::CardNumber);
        assert_eq!(sequencer.focused(), Some(CardField::CardNumber));
        assert!(!sequencer.is_paged());
        let commands = sequencer.advance();
        assert_eq!(
            commands,
            vec![SequencerCommand::Focus(CardField::HolderName)]
        );
    }

    #[test]
    fn focus_events_keep_a_single_owner() {
        let mut sequencer = FocusSequencer::new(false);
        sequencer.focus_gained(CardField::Expiration);
        assert_eq!(sequencer.focused(), Some(CardField::Expiration));
        sequencer.focus_lost(CardField::Cvv);
        assert_eq!(sequencer.focused(), Some(CardField::Expiration));
        sequencer.focus_lost(CardField::Expiration);
        assert_eq!(sequencer.focused(), None);
        assert!(sequencer.advance().is_empty());
    }
}
