//! Per-turn phase cycle.
//!
//! Every turn runs SelectDice -> RollDice -> SubmitPoints. The whole cycle
//! is the table in `transition`: given the current phase and the kind of
//! step being applied, it names the next phase and who decides next.
//! `QwintoState` consults it before mutating anything, so a step that is
//! not in the table is rejected without side effects.

use serde::{Deserialize, Serialize};

/// Turn phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active player picks which dice to roll.
    #[default]
    SelectDice,
    /// The dice are rolled; the active player may re-roll or accept.
    RollDice,
    /// Every player decides at once where to write the result.
    SubmitPoints,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::SelectDice => "Select",
            Phase::RollDice => "Roll",
            Phase::SubmitPoints => "Submit",
        };
        write!(f, "{}", name)
    }
}

/// Class of action being applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Active player chose a dice selection.
    Select,
    /// Chance resolved a roll.
    Roll,
    /// Active player asked for another roll.
    Reroll,
    /// Active player kept the roll.
    Accept,
    /// All players submitted their joint action.
    Submit,
}

impl Step {
    /// Operation name used in error reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Step::Select => "select dice",
            Step::Roll => "roll",
            Step::Reroll => "re-roll",
            Step::Accept => "accept roll",
            Step::Submit => "submit points",
        }
    }
}

/// Who decides after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// The chance node.
    Chance,
    /// The active player.
    Active,
    /// All players simultaneously.
    All,
    /// The next player in seat order, starting a new turn.
    NextPlayer,
}

/// The phase transition table.
///
/// Returns `None` if `step` is not valid in `phase`.
#[must_use]
pub fn transition(phase: Phase, step: Step) -> Option<(Phase, Control)> {
    match (phase, step) {
        (Phase::SelectDice, Step::Select) => Some((Phase::RollDice, Control::Chance)),
        (Phase::RollDice, Step::Roll) => Some((Phase::RollDice, Control::Active)),
        (Phase::RollDice, Step::Reroll) => Some((Phase::RollDice, Control::Chance)),
        (Phase::RollDice, Step::Accept) => Some((Phase::SubmitPoints, Control::All)),
        (Phase::SubmitPoints, Step::Submit) => Some((Phase::SelectDice, Control::NextPlayer)),
        _ => None,
    }
}
