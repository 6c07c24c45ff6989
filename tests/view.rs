use checkers_engine::config::AppConfig;
use checkers_engine::view::{render_text, score_line, turn_line, Snapshot};
use checkers_engine::{Color, GameState, Scores, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

#[test]
fn turn_and_score_lines_match_the_player_labels() {
    let state = GameState::new_game();
    assert_eq!(turn_line(&state), "Current Turn: Player 1 (Red)");
    let next = state.apply_move(sq(5, 0), sq(4, 1)).unwrap();
    assert_eq!(turn_line(&next), "Current Turn: Player 2 (Black)");
    assert_eq!(score_line(Scores { red: 2, black: 1 }), "Red: 2  Black: 1");
}

#[test]
fn opening_board_renders_with_rulers() {
    let text = render_text(&GameState::new_game(), None, &AppConfig::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "   0 1 2 3 4 5 6 7");
    assert_eq!(lines[1], "0    b   b   b   b");
    assert_eq!(lines[4], "3  .   .   .   .  ");
    assert_eq!(lines[8], "7  r   r   r   r  ");
    assert_eq!(lines[9], "Current Turn: Player 1 (Red)");
    assert_eq!(lines[10], "Red: 0  Black: 0");
}

#[test]
fn selected_piece_marks_its_targets() {
    let mut config = AppConfig::default();
    config.display.coordinates = false;
    let text = render_text(&GameState::new_game(), Some(sq(5, 2)), &config);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[4], "   *   *   .   .");

    config.display.highlight = false;
    let plain = render_text(&GameState::new_game(), Some(sq(5, 2)), &config);
    assert!(!plain.contains('*'));
}

#[test]
fn snapshot_serialises_to_json() {
    let state = GameState::new_game().apply_move(sq(5, 0), sq(4, 1)).unwrap();
    let snap = Snapshot::of(&state);
    assert_eq!(snap.turn, Color::Black);
    assert_eq!(snap.pieces.len(), 24);
    assert_eq!(snap.winner, None);

    let json: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
    assert_eq!(json["turn"], "black");
    assert_eq!(json["turn_label"], "Player 2 (Black)");
    assert_eq!(json["scores"]["red"], 0);
    assert_eq!(json["pending_chain"], serde_json::Value::Null);
    assert!(json["pieces"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["row"] == 4 && p["col"] == 1 && p["color"] == "red" && p["king"] == false));
}
