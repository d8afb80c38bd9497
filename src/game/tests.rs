use std::io::Cursor;

use crate::game::{Game, GameConfig, GameError, SessionEnd, prompt_game_count, read_answer};
use crate::generator::ExpressionGenerator;
use crate::operator::Operator;

const WRONG: &str = "1000000";

/// Correct answers for the first `count` expressions drawn with `seed`
fn correct_answers(seed: u64, operators: &[Operator], count: usize) -> Vec<String> {
    let mut generator = ExpressionGenerator::from_seed(seed);
    (0..count)
        .map(|_| {
            generator
                .generate(operators, Operator::Nothing)
                .map(|e| format!("{}", e.expected().as_f64()))
                .unwrap_or_default()
        })
        .collect()
}

fn config(games: u32, seed: u64) -> GameConfig {
    GameConfig {
        games,
        seed: Some(seed),
        ..GameConfig::default()
    }
}

fn play(config: GameConfig, script: &str) -> (Game, SessionEnd, String) {
    let mut game = Game::new(config);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let end = game.play(&mut input, &mut output);
    assert!(end.is_ok());
    let end = end.unwrap_or(SessionEnd::InputClosed);
    (game, end, String::from_utf8_lossy(&output).into_owned())
}

#[test]
fn test_finite_session_all_right() {
    let answers = correct_answers(42, &Operator::real_operators(), 3);
    let (game, end, output) = play(config(3, 42), &format!("{}\n", answers.join("\n")));

    assert_eq!(end, SessionEnd::Completed);
    let stats = game.statistics();
    assert_eq!(stats.total_turns(), 3);
    assert_eq!(stats.total_right(), 3);
    assert!(stats.is_finite());
    assert!(output.starts_with("\n1   : "));
    assert!(output.contains("\n2   : "));
    assert!(output.ends_with("\nYour game is OVER.\n"));
}

#[test]
fn test_finite_session_counts_wrong_answers() {
    let answers = correct_answers(8, &Operator::real_operators(), 2);
    let script = format!("{}\n{}\n", WRONG, answers.get(1).cloned().unwrap_or_default());
    let (game, end, _) = play(config(2, 8), &script);

    assert_eq!(end, SessionEnd::Completed);
    assert_eq!(game.statistics().total_wrong(), 1);
    assert_eq!(game.statistics().total_right(), 1);
}

#[test]
fn test_invalid_answer_is_reprompted_with_indent() {
    let answers = correct_answers(3, &Operator::real_operators(), 1);
    let script = format!("what\n\n{}\n", answers.join("\n"));
    let (game, end, output) = play(config(1, 3), &script);

    assert_eq!(end, SessionEnd::Completed);
    assert_eq!(game.statistics().total_right(), 1);

    let first = game.statistics().history().first().map(|e| e.prompt()).unwrap_or_default();
    let indent = " ".repeat(format!("{:<4}: {}", 1, first).len());
    assert!(output.contains(&format!("{}{}", indent, indent)));
}

#[test]
fn test_non_utf8_answer_is_reprompted() {
    let answers = correct_answers(3, &Operator::real_operators(), 1);
    let mut script = vec![0xff, 0xfe, b'\n'];
    script.extend_from_slice(format!("{}\n", answers.join("\n")).as_bytes());

    let mut game = Game::new(config(1, 3));
    let mut output = Vec::new();
    let end = game.play(&mut Cursor::new(script), &mut output);

    assert!(matches!(end, Ok(SessionEnd::Completed)));
    assert_eq!(game.statistics().total_turns(), 1);
    assert_eq!(game.statistics().total_right(), 1);
}

#[test]
fn test_comma_answers_are_accepted() {
    let answers = correct_answers(17, &Operator::real_operators(), 4);
    let script: Vec<String> = answers.iter().map(|a| a.replace('.', ",")).collect();
    let (game, _, _) = play(config(4, 17), &format!("{}\n", script.join("\n")));
    assert_eq!(game.statistics().total_right(), 4);
}

#[test]
fn test_infinite_session_stops_on_wrong_answer() {
    let answers = correct_answers(21, &Operator::real_operators(), 2);
    let script = format!("{}\n{}\n0.5\n", answers.join("\n"), WRONG);
    let (game, end, _) = play(config(0, 21), &script);

    assert_eq!(end, SessionEnd::WrongAnswer);
    let stats = game.statistics();
    assert_eq!(stats.total_turns(), 3);
    assert_eq!(stats.total_right(), 2);
    assert!(!stats.is_finite());
    assert!(stats.render_report().contains("The game was infinite."));
}

#[test]
fn test_infinite_session_turn_cap() {
    let answers = correct_answers(5, &Operator::real_operators(), 5);
    let cfg = GameConfig {
        max_infinite_turns: 3,
        ..config(0, 5)
    };
    let (game, end, _) = play(cfg, &format!("{}\n", answers.join("\n")));

    assert_eq!(end, SessionEnd::TurnCap);
    assert_eq!(game.statistics().total_turns(), 3);
}

#[test]
fn test_closed_input_ends_session() {
    let answers = correct_answers(9, &Operator::real_operators(), 1);
    let (game, end, output) = play(config(5, 9), &format!("{}\n", answers.join("\n")));

    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(game.statistics().total_turns(), 1);
    assert_eq!(game.statistics().history().len(), 1);
    assert!(output.contains("Your game is OVER."));
}

#[test]
fn test_custom_operator_list() {
    let operators = vec![Operator::Nothing, Operator::Modulo];
    let answers = correct_answers(12, &operators, 6);
    let cfg = GameConfig {
        operators,
        ..config(6, 12)
    };
    let (game, _, _) = play(cfg, &format!("{}\n", answers.join("\n")));

    let stats = game.statistics();
    assert_eq!(stats.tracked_operators(), vec![Operator::Modulo]);
    assert_eq!(stats.total(Operator::Modulo), Some(6));
    assert_eq!(stats.right(Operator::Modulo), Some(6));
}

#[test]
fn test_read_answer_skips_garbage() {
    let mut input = Cursor::new(b"x\ny\n4,5\n".to_vec());
    let mut output = Vec::new();
    let result = read_answer(&mut input, &mut output, 3);
    assert!(matches!(result, Ok(Some(v)) if (v - 4.5).abs() < 1e-12));
    assert_eq!(output, b"      ".to_vec());
}

#[test]
fn test_read_answer_end_of_input() {
    let mut input = Cursor::new(b"x\n".to_vec());
    let mut output = Vec::new();
    assert!(matches!(read_answer(&mut input, &mut output, 0), Ok(None)));
}

#[test]
fn test_prompt_game_count_retries() {
    let mut input = Cursor::new(b"abc\n2000\n12\n".to_vec());
    let mut output = Vec::new();
    let result = prompt_game_count(&mut input, &mut output);
    assert!(matches!(result, Ok(12)));

    let text = String::from_utf8_lossy(&output);
    assert_eq!(text.matches("Please type the number of games: ").count(), 3);
    assert_eq!(
        text.matches("Number of games has to be an integer between 0 (infinite) and 1024!")
            .count(),
        2
    );
}

#[test]
fn test_prompt_game_count_skips_non_utf8() {
    let mut input = Cursor::new(b"\xc3\x28\n7\n".to_vec());
    let mut output = Vec::new();
    let result = prompt_game_count(&mut input, &mut output);
    assert!(matches!(result, Ok(7)));

    let text = String::from_utf8_lossy(&output);
    assert_eq!(text.matches("Please type the number of games: ").count(), 2);
}

#[test]
fn test_prompt_game_count_closed_input() {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let result = prompt_game_count(&mut input, &mut output);
    assert!(matches!(result, Err(GameError::InputClosed)));
}
