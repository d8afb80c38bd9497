use crate::utils::{MAX_GAMES, UtilsError, parse_game_count, parse_user_answer};

#[test]
fn test_parse_user_answer_plain() {
    assert_eq!(parse_user_answer("42"), Ok(42.0));
    assert_eq!(parse_user_answer("  -3.25\n"), Ok(-3.25));
}

#[test]
fn test_parse_user_answer_comma_separator() {
    assert_eq!(parse_user_answer("3,5"), Ok(3.5));
    assert_eq!(parse_user_answer("0,33"), Ok(0.33));
}

#[test]
fn test_parse_user_answer_invalid() {
    assert_eq!(
        parse_user_answer("abc"),
        Err(UtilsError::InvalidAnswer("abc".to_string()))
    );
    assert!(parse_user_answer("").is_err());
    assert!(parse_user_answer("1,2,3").is_err());
    assert!(parse_user_answer("inf").is_err());
    assert!(parse_user_answer("NaN").is_err());
}

#[test]
fn test_parse_game_count_valid() {
    assert_eq!(parse_game_count("0"), Ok(0));
    assert_eq!(parse_game_count(" 10 "), Ok(10));
    assert_eq!(parse_game_count("1024"), Ok(MAX_GAMES));
}

#[test]
fn test_parse_game_count_invalid() {
    assert!(parse_game_count("1025").is_err());
    assert!(parse_game_count("-1").is_err());
    assert!(parse_game_count("ten").is_err());
    assert!(parse_game_count("2.5").is_err());

    if let Err(err) = parse_game_count("2000") {
        assert_eq!(
            err.to_string(),
            "Number of games has to be an integer between 0 (infinite) and 1024!"
        );
    }
}
