use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::default();
    assert_eq!(pos.perft(1, Color::White), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::default();
    assert_eq!(pos.perft(2, Color::White), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::default();
    assert_eq!(pos.perft(3, Color::White), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let pos = Position::default();
    assert_eq!(pos.perft(4, Color::White), 197281);
}
