use tui_tictactoe::core::{GameSettings, GameState};
use tui_tictactoe::term::{AnchorY, GameView, Rgb, Viewport};

fn top_view() -> GameView {
    GameView::default()
        .with_anchor_y(AnchorY::Top)
        .with_help(false)
}

#[test]
fn term_view_lays_out_title_scores_and_grid() {
    let snap = GameState::new(GameSettings::default()).snapshot();
    let fb = top_view().render(&snap, Viewport::new(40, 20));

    assert_eq!(fb.row_string(0).trim(), "Tic Tac Toe");
    assert_eq!(
        fb.row_string(2).trim(),
        "Player1(X): 0  -  Player2(O): 0"
    );

    // 3x3 grid is 11 columns wide, centered at x = 14.
    let row = fb.row_string(4);
    assert_eq!(&row[..14], " ".repeat(14));
    assert!(row.contains(" 1 │ 2 │ 3 "), "{row:?}");
    assert!(fb.row_string(5).contains("───┼───┼───"));
    assert!(fb.row_string(6).contains(" 4 │ 5 │ 6 "));
    assert!(fb.row_string(8).contains(" 7 │ 8 │ 9 "));
    assert_eq!(fb.get(14, 4).unwrap().ch, ' ');
    assert_eq!(fb.get(15, 4).unwrap().ch, '1');
    assert_eq!(fb.get(17, 4).unwrap().ch, '│');

    assert_eq!(
        fb.row_string(11).trim(),
        "Player1(X): Enter a field number > _"
    );
}

#[test]
fn term_view_replaces_field_numbers_with_marks() {
    let mut state = GameState::new(GameSettings::default());
    state.place_field(1).unwrap();
    state.place_field(9).unwrap();
    let fb = top_view().render(&state.snapshot(), Viewport::new(40, 20));

    assert!(fb.row_string(4).contains(" X │ 2 │ 3 "));
    assert!(fb.row_string(8).contains(" 7 │ 8 │ O "));
    assert!(fb.row_string(11).contains("Player1(X)"));
}

#[test]
fn term_view_echoes_typed_digits() {
    let snap = GameState::new(GameSettings::default()).snapshot();
    let fb = top_view().render_with_entry(&snap, "7", Viewport::new(40, 20));
    assert!(fb
        .row_string(11)
        .contains("Enter a field number > 7_"));
}

#[test]
fn term_view_pads_field_numbers_to_widest() {
    let snap = GameState::new(GameSettings::new(4, 4, 3).unwrap()).snapshot();
    let fb = top_view().render(&snap, Viewport::new(40, 20));

    assert!(fb.row_string(4).contains("  1 │  2 │  3 │  4 "));
    assert!(fb.row_string(5).contains("────┼────┼────┼────"));
    assert!(fb.row_string(10).contains(" 13 │ 14 │ 15 │ 16 "));
}

#[test]
fn term_view_shows_rejection_above_prompt() {
    let mut state = GameState::new(GameSettings::default());
    let _ = state.place_field(42);
    let fb = top_view().render(&state.snapshot(), Viewport::new(80, 20));

    assert_eq!(
        fb.row_string(10).trim(),
        "Please provide a valid field number in the range 1 - 9!"
    );
    assert!(fb.row_string(11).contains("Player1(X)"));
}

#[test]
fn term_view_announces_winner_and_highlights_run() {
    let mut state = GameState::new(GameSettings::default());
    for field in [1, 4, 2, 5, 3] {
        state.place_field(field).unwrap();
    }
    let fb = top_view().render(&state.snapshot(), Viewport::new(40, 20));

    assert_eq!(fb.row_string(2).trim(), "Player1(X): 1  -  Player2(O): 0");
    assert_eq!(fb.row_string(10).trim(), "=> Player1 wins!");
    assert_eq!(fb.row_string(11).trim(), "Do you want a rematch? [Y/N] (Y):");

    let run_bg = Rgb::new(40, 110, 60);
    for x in [15, 19, 23] {
        assert_eq!(fb.get(x, 4).unwrap().style.bg, run_bg);
    }
    // O on the second row is not part of the run.
    assert_ne!(fb.get(15, 6).unwrap().style.bg, run_bg);
}

#[test]
fn term_view_swaps_marks_in_score_line_after_rematch() {
    let mut state = GameState::new(GameSettings::default());
    for field in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
        state.place_field(field).unwrap();
    }
    let fb = top_view().render(&state.snapshot(), Viewport::new(40, 20));
    assert_eq!(fb.row_string(10).trim(), "=> It's a draw!");

    state.rematch();
    let fb = top_view().render(&state.snapshot(), Viewport::new(40, 20));
    assert_eq!(fb.row_string(2).trim(), "Player1(O): 0  -  Player2(X): 0");
    assert_eq!(
        fb.row_string(11).trim(),
        "Player2(X): Enter a field number > _"
    );
}

#[test]
fn term_view_centers_layout_vertically_by_default() {
    let snap = GameState::new(GameSettings::default()).snapshot();
    let view = GameView::default();
    // Layout: 4 + 5 + 3 + 2 = 14 rows, so 3 rows of margin in a 20 row viewport.
    let fb = view.render(&snap, Viewport::new(70, 20));
    assert_eq!(fb.row_string(3).trim(), "Tic Tac Toe");
    assert!(fb.row_string(7).contains(" 1 │ 2 │ 3 "));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = GameState::new(GameSettings::new(40, 60, 5).unwrap()).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}

#[test]
fn term_view_leaves_status_empty_once_finished() {
    let mut state = GameState::new(GameSettings::default());
    for field in [1, 4, 2, 5, 3] {
        state.place_field(field).unwrap();
    }
    assert!(state.decline());
    let fb = top_view().render(&state.snapshot(), Viewport::new(60, 20));

    assert!(fb.row_string(10).trim().is_empty());
    assert!(fb.row_string(11).trim().is_empty());
    assert_eq!(fb.row_string(2).trim(), "Player1(X): 1  -  Player2(O): 0");
}
