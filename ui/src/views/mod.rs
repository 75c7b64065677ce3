mod generator;
pub use generator::Generator;

use dioxus::prelude::*;

use crate::core::state::ScorecardState;

/// Provide the live scorecard state to every descendant.
///
/// Call this above any subtree that is re-keyed on language change so edits
/// survive a locale switch.
pub fn provide_scorecard_state() -> Signal<ScorecardState> {
    use_context_provider(|| Signal::new(ScorecardState::default()))
}
