//! In-place left rotation.

/// Rotate `items` left by `rotations` positions.
///
/// Rotation counts wrap modulo the length, so rotating by a multiple of the
/// length is a no-op. An empty slice is left untouched.
pub fn rotate_left<T>(items: &mut [T], rotations: usize) {
    if items.is_empty() {
        return;
    }
    let shift = rotations % items.len();
    items.rotate_left(shift);
}
