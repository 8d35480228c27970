use gomoku16::candidates::candidate_moves;
use gomoku16::eval::evaluate;
use gomoku16::{is_win_at, winning_five_cells, AIEngine, Board, ChoiceKind, EngineConfig, Game, GameMode, Outcome, Role};

fn board_with(stones: &[(usize, usize, Role)]) -> Board {
  let mut board = Board::new();
  for &(row, col, role) in stones {
    board.apply_move(row, col, role);
  }
  board
}

#[test]
fn reply_to_the_centre_stays_near_it() {
  let mut board = board_with(&[(7, 7, Role::X)]);
  for seed in 0..4 {
    let mut engine = AIEngine::seeded(Role::O, EngineConfig::default(), seed);
    let (row, col) = engine.best_move(&mut board, 2).unwrap();
    assert!(row.abs_diff(7) <= 2 && col.abs_diff(7) <= 2, "({row}, {col}) is too far");
    assert!(board.is_legal(row, col));
  }
  assert_eq!(board.stone_count(), 1);
}

#[test]
fn open_four_is_completed() {
  let mut board = board_with(&[(5, 5, Role::O), (5, 6, Role::O), (5, 7, Role::O), (5, 8, Role::O), (9, 9, Role::X)]);
  let mut engine = AIEngine::seeded(Role::O, EngineConfig::default(), 17);
  let (row, col) = engine.best_move(&mut board, 2).unwrap();
  assert!([(5, 4), (5, 9)].contains(&(row, col)));

  board.apply_move(row, col, Role::O);
  assert!(is_win_at(&board, row, col));
  let line = winning_five_cells(&board, row, col).unwrap();
  assert!(line.contains(&(row, col)));
}

#[test]
fn win_is_taken_even_with_a_deeper_search() {
  // O can win at (10, 3); X threatens nothing immediate
  let mut board = board_with(&[
    (10, 4, Role::O),
    (10, 5, Role::O),
    (10, 6, Role::O),
    (10, 7, Role::O),
    (10, 8, Role::X),
    (8, 6, Role::X),
    (8, 7, Role::X),
    (8, 8, Role::X),
  ]);
  let config = EngineConfig::default().with_depth(3);
  let choice = AIEngine::seeded(Role::O, config, 0).choose(&mut board, 3).unwrap();
  assert_eq!(choice.kind, ChoiceKind::ImmediateWin);
  assert_eq!(choice.mv, (10, 3));
}

#[test]
fn diagonal_four_is_blocked() {
  let mut board = board_with(&[
    (3, 3, Role::X),
    (4, 4, Role::X),
    (5, 5, Role::X),
    (6, 6, Role::X),
    (2, 2, Role::O),
    (4, 5, Role::O),
    (5, 4, Role::O),
  ]);
  let mut engine = AIEngine::seeded(Role::O, EngineConfig::default(), 4);
  assert_eq!(engine.best_move(&mut board, 2), Some((7, 7)));
}

#[test]
fn empty_board_opens_in_the_centre() {
  assert_eq!(candidate_moves(&Board::new(), 2), vec![(7, 7)]);
  let mut board = Board::new();
  let mut engine = AIEngine::seeded(Role::X, EngineConfig::default(), 0);
  assert_eq!(engine.best_move(&mut board, 2), Some((7, 7)));
}

#[test]
fn evaluation_is_zero_on_an_empty_board_for_either_side() {
  let board = Board::new();
  assert_eq!(evaluate(&board, Role::O, 1.1), 0.0);
  assert_eq!(evaluate(&board, Role::X, 1.1), 0.0);
}

#[test]
fn engines_of_different_strength_coexist() {
  let mut board = board_with(&[(7, 7, Role::X), (7, 8, Role::O), (8, 8, Role::X)]);
  let mut shallow = AIEngine::seeded(Role::O, EngineConfig::default().with_depth(1), 1);
  let mut narrow = AIEngine::seeded(
    Role::O,
    EngineConfig {
      move_limit: 4,
      ..EngineConfig::default()
    },
    1,
  );
  assert!(shallow.best_move(&mut board, 1).is_some());
  assert!(narrow.best_move(&mut board, 2).is_some());
  assert_eq!(board.stone_count(), 3);
}

#[test]
fn self_play_keeps_every_move_legal() {
  let config = EngineConfig::default().with_depth(1);
  let mut game = Game::new(GameMode::AIvAI, Role::X, config, Some(99));
  for _ in 0..12 {
    let before = game.board.clone();
    let Some(choice) = game.play_ai() else { break };
    assert!(before.is_legal(choice.mv.0, choice.mv.1));
    if game.is_over() {
      assert!(matches!(game.outcome, Some(Outcome::Win(_))));
      break;
    }
  }
}
