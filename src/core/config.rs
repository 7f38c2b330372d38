use super::ship::ShipDef;

/// Side length of the square grid.
pub const BOARD_SIZE: u8 = 7;
pub const NUM_SHIPS: usize = 4;
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Destroyer", 2),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Battleship", 4),
];

/// Total number of ship segments in the fleet, derived from [`SHIPS`].
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&SHIPS);

/// Interval between two ticks of the session driver.
pub const TICK_INTERVAL_MS: u64 = 500;

/// Score awarded for a human hit.
pub const HIT_REWARD: i64 = 100;
/// Score deducted for a human miss.
pub const MISS_PENALTY: i64 = 5;
/// Score deducted on every tick.
pub const TICK_DECAY: i64 = 1;

const fn fleet_cells(fleet: &[ShipDef]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

