/// Hero background moves at half the scroll speed.
pub const PARALLAX_FACTOR: f32 = 0.5;

pub fn hero_offset(scroll: f32) -> f32 {
    scroll.max(0.0) * PARALLAX_FACTOR
}
