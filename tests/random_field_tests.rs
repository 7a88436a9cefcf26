use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{FieldState, TicTacToeField, RANDOM_DIMENSION_MAX, RANDOM_DIMENSION_MIN};

#[test]
fn test_random_field_bounds() {
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = TicTacToeField::random(&mut rng);
        assert!((RANDOM_DIMENSION_MIN..RANDOM_DIMENSION_MAX).contains(&field.rows()));
        assert!((RANDOM_DIMENSION_MIN..RANDOM_DIMENSION_MAX).contains(&field.columns()));
        assert_eq!(field.len(), field.rows() * field.columns());
        assert!(field.cells().iter().all(|c| !c.is_empty()));
        assert_eq!(field.listener_count(), 0);
    }
}

#[test]
fn test_reproducible_rng() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let a = TicTacToeField::random(&mut rng1);
    let b = TicTacToeField::random(&mut rng2);
    assert_eq!(FieldState::from(&a), FieldState::from(&b));
}
