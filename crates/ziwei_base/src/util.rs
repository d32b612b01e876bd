//! Cyclic counting helpers over the 12-branch and 10-stem rings.

/// Wrap any signed offset into a branch index 0..12.
pub fn wrap_branch(i: i32) -> u8 {
    i.rem_euclid(12) as u8
}

/// Wrap any signed offset into a stem index 0..10.
pub fn wrap_stem(i: i32) -> u8 {
    i.rem_euclid(10) as u8
}

/// Jump a branch index by a signed offset.
pub fn jump_branch(branch_index: u8, offset: i32) -> u8 {
    wrap_branch(branch_index as i32 + offset)
}

/// Forward steps from `from` to `to`, 0..12 (same branch = 0).
pub fn branch_distance(from: u8, to: u8) -> u8 {
    wrap_branch(to as i32 - from as i32)
}

/// Position of a branch in the Tiger-first sequence (寅 = 0, 丑 = 11).
pub fn tiger_ordinal(branch_index: u8) -> u8 {
    jump_branch(branch_index, -2)
}
