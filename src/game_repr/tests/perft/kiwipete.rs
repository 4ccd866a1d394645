use super::*;

// ==================== KIWIPETE PERFT TESTS ====================
// Position 2: castling both ways for both sides, en passant, pins.
// Shallow enough that no promotion is reached.

fn kiwipete() -> Position {
    diagram([
        "r...k..r",
        "p.ppqpb.",
        "bn..pnp.",
        "...PN...",
        ".p..P...",
        "..N..Q.p",
        "PPPBBPPP",
        "R...K..R",
    ])
}

#[test]
fn test_perft_kiwipete_depth_1() {
    assert_eq!(kiwipete().perft(1, Color::White), 48);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    assert_eq!(kiwipete().perft(2, Color::White), 2039);
}

#[test]
fn test_perft_kiwipete_depth_3() {
    assert_eq!(kiwipete().perft(3, Color::White), 97862);
}
