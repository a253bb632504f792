//! Mirrors upstream `setBalancingParameters.mjs`.
//!
//! DELTA bounds the size ratio tolerated between sibling subtrees; RATIO
//! picks between a single and a double rotation. The pair is process-wide
//! state read by every balancing operation: configure it once at startup.
//! Changing it concurrently with in-flight operations is not safe, and
//! trees built under earlier constants are not rebalanced retroactively —
//! they stay internally consistent under the constants that built them.

use crate::balance;

/// Sets the process-wide `(DELTA, RATIO)` pair. Defaults are `(3, 2)`.
pub fn set_balancing_parameters(delta: usize, ratio: usize) {
    balance::store_parameters(delta, ratio);
}

/// Adjusts DELTA only.
pub fn set_delta(delta: usize) {
    let (_, ratio) = balance::load_parameters();
    balance::store_parameters(delta, ratio);
}

/// The active `(DELTA, RATIO)` pair.
pub fn balancing_parameters() -> (usize, usize) {
    balance::load_parameters()
}

#[allow(non_snake_case)]
pub fn setBalancingParameters(delta: usize, ratio: usize) {
    set_balancing_parameters(delta, ratio);
}
