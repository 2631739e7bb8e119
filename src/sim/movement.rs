//! Per-tick movement for the player and entity groups
//!
//! Steps are expressed as a fraction of a screen dimension per tick, so the
//! same tuning works at any resolution.

use super::collision::Bounded;
use super::group::EntityGroup;
use super::state::{Player, Screen};

/// Slide the player left, stopping at the left screen edge
pub fn move_left(player: &mut Player, screen: &Screen, fraction: f32) {
    let new_x = player.bounds.pos.x - fraction * screen.width;
    player.bounds.pos.x = new_x.max(0.0);
}

/// Slide the player right, keeping the whole ship on screen
pub fn move_right(player: &mut Player, screen: &Screen, fraction: f32) {
    let new_x = player.bounds.pos.x + fraction * screen.width;
    player.bounds.pos.x = new_x.min(screen.width - player.bounds.size.width);
}

/// Move every entity in a falling group down one step.
///
/// An entity stays while its new y is past its own height; otherwise it is
/// culled. Returns the number culled.
pub fn move_down<T: Bounded>(group: &mut EntityGroup<T>, screen: &Screen, fraction: f32) -> usize {
    let step = fraction * screen.height;
    group.update_or_cull(|entity| {
        let bounds = entity.bounds_mut();
        let new_y = bounds.pos.y + step;
        if new_y > bounds.size.height {
            bounds.pos.y = new_y;
            true
        } else {
            false
        }
    })
}

/// Move every blast up one step.
///
/// The exit test compares against the screen *width*. Returns the number culled.
pub fn move_up<T: Bounded>(group: &mut EntityGroup<T>, screen: &Screen, fraction: f32) -> usize {
    let step = fraction * screen.height;
    group.update_or_cull(|entity| {
        let bounds = entity.bounds_mut();
        let new_y = bounds.pos.y - step;
        if new_y < screen.width {
            bounds.pos.y = new_y;
            true
        } else {
            false
        }
    })
}
