use super::*;

// ==================== ENDGAME POSITION PERFT TESTS ====================
// Position 3: en passant with the king on the same rank as a rook.

fn endgame() -> Position {
    diagram([
        "........",
        "..p.....",
        "...p....",
        "KP.....r",
        ".R...p.k",
        "........",
        "....P.P.",
        "........",
    ])
}

#[test]
fn test_perft_endgame_depth_1() {
    assert_eq!(endgame().perft(1, Color::White), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    assert_eq!(endgame().perft(2, Color::White), 191);
}

#[test]
fn test_perft_endgame_depth_3() {
    assert_eq!(endgame().perft(3, Color::White), 2812);
}

#[test]
fn test_perft_endgame_depth_4() {
    assert_eq!(endgame().perft(4, Color::White), 43238);
}
