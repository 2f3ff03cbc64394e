use crate::shared::event::Event;

use super::stoppage_classifier::StoppageClassifier;
use super::stoppage_interval::{StoppageFamily, StoppageInterval};

/// Domain interface for turning a half's events into one family's stoppages.
///
/// Implementations are stateless; the same calculator may be shared across
/// threads computing different halves.
pub trait StoppageCalculator: Send + Sync {
    fn family(&self) -> StoppageFamily;

    /// Events without the data needed to date or measure a stoppage are
    /// left out of the result rather than reported.
    fn calculate<'a>(
        &self,
        events: &'a [Event],
        classifier: &StoppageClassifier,
    ) -> Vec<StoppageInterval<'a>>;
}
