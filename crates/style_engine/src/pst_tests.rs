use super::*;
use chess_rules::coord_to_sq;

fn at(name: &str) -> u8 {
    coord_to_sq(name).unwrap()
}

#[test]
fn white_pawn_prefers_the_center_push() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    assert!(piece_square(pawn, at("e4")) > piece_square(pawn, at("e2")));
}

#[test]
fn black_mirrors_white_vertically() {
    let white = Piece::new(Color::White, PieceKind::Knight);
    let black = Piece::new(Color::Black, PieceKind::Knight);
    assert_eq!(piece_square(white, at("f3")), piece_square(black, at("f6")));
    assert_eq!(piece_square(white, at("b1")), piece_square(black, at("b8")));
}

#[test]
fn knight_on_the_rim_is_dim() {
    let knight = Piece::new(Color::White, PieceKind::Knight);
    assert!(piece_square(knight, at("a1")) < piece_square(knight, at("d4")));
}

#[test]
fn centrality_tiers() {
    for name in ["d4", "e4", "d5", "e5"] {
        assert_eq!(centrality(at(name)), 3);
    }
    assert_eq!(centrality(at("c3")), 2);
    assert_eq!(centrality(at("f6")), 2);
    assert_eq!(centrality(at("g3")), 1);
    assert_eq!(centrality(at("a1")), 0);
    assert_eq!(centrality(at("h8")), 0);
}

#[test]
fn center_square_constants_line_up() {
    for sq in CENTER_SQUARES {
        assert_eq!(centrality(sq), 3);
    }
}
