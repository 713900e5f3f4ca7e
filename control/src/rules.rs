//! Ordered evaluation of controller rules.
//!
//! Every controller describes its behavior as a list of predicates, each
//! paired with the regime it selects. The list is walked top to bottom and the
//! first predicate holding for the current context wins. Reordering the list
//! changes the behavior.

/// Predicate over a controller context paired with the selected outcome.
pub(crate) type Rule<C, R> = (fn(&C) -> bool, R);

pub(crate) fn first_match<C, R: Copy>(rules: &[Rule<C, R>], context: &C) -> Option<R> {
    rules
        .iter()
        .find(|(predicate, _)| predicate(context))
        .map(|(_, outcome)| *outcome)
}
