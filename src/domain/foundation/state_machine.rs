//! State machine trait for status enums.
//!
//! Gives derived lifecycle states such as [`SegmentState`](super::SegmentState)
//! a single place to declare which transitions are legal.

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// assert!(SegmentState::Locked.can_transition_to(&SegmentState::Unlocked));
/// assert!(!SegmentState::Completed.can_transition_to(&SegmentState::Locked));
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;
}
