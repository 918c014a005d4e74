use glam::Vec2;

/// Advances one frame with semi-implicit Euler: velocity first (clamped to
/// `max_speed`), then position. The accumulated acceleration is consumed.
pub fn integrate(pos: &mut Vec2, vel: &mut Vec2, acc: &mut Vec2, max_speed: f32) {
    *vel = (*vel + *acc).clamp_length_max(max_speed);
    *pos += *vel;
    *acc = Vec2::ZERO;
}
