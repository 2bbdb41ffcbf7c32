//! Wall synthesis: ring each room with single-thickness walls

use super::layout::Layout;
use super::room::RoomId;

/// Claim every free Chebyshev neighbour of the room's floor as a wall owned
/// by the room.
///
/// Runs right after the room is expanded, so earlier rooms' cells are never
/// touched and the new walls block later rooms. Returns the number of walls
/// claimed.
pub fn synthesize_walls(layout: &mut Layout, id: RoomId) -> usize {
    let Some(room) = layout.room(id) else {
        return 0;
    };

    let ring: Vec<_> = room
        .coords()
        .iter()
        .flat_map(|c| c.neighbours())
        .filter(|n| layout.grid().is_free(*n))
        .collect();

    ring.into_iter()
        .filter(|&c| layout.claim_wall(id, c))
        .count()
}
