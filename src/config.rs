/// Edge length of the board. The game is always played on a 10×10 grid.
pub const BOARD_SIZE: u8 = 10;

/// Shortest ship the engine will accept at placement time.
pub const MIN_SHIP_LENGTH: u8 = 2;

/// Row labels of the human-facing coordinate form ("A1" through "J10").
pub const ROW_LABELS: &str = "ABCDEFGHIJ";
