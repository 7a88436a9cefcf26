use tictactoe::{Cell, FieldError, TicTacToeField};

#[test]
fn test_new_field_is_empty() {
    let field = TicTacToeField::new(3, 4).unwrap();
    assert_eq!(field.rows(), 3);
    assert_eq!(field.columns(), 4);
    assert_eq!(field.len(), 12);
    for r in 0..3 {
        for c in 0..4 {
            assert_eq!(field.get_cell(r, c).unwrap(), Cell::Empty);
        }
    }
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        TicTacToeField::new(0, 3).unwrap_err(),
        FieldError::InvalidDimension { rows: 0, columns: 3 }
    );
    assert_eq!(
        TicTacToeField::new(3, 0).unwrap_err(),
        FieldError::InvalidDimension { rows: 3, columns: 0 }
    );
    assert!(TicTacToeField::new(0, 0).is_err());
}

#[test]
fn test_three_by_three_scenario() {
    let mut field = TicTacToeField::new(3, 3).unwrap();
    field.set_cell(1, 1, Cell::PlayerOne).unwrap();
    assert_eq!(field.get_cell(1, 1).unwrap(), Cell::PlayerOne);
    assert_eq!(field.get_cell(0, 0).unwrap(), Cell::Empty);
}

#[test]
fn test_overwrite_allowed() {
    let mut field = TicTacToeField::new(1, 1).unwrap();
    field.set_cell(0, 0, Cell::PlayerOne).unwrap();
    field.set_cell(0, 0, Cell::PlayerTwo).unwrap();
    assert_eq!(field.get_cell(0, 0).unwrap(), Cell::PlayerTwo);

    // clearing is a plain write too
    field.set_cell(0, 0, Cell::Empty).unwrap();
    assert_eq!(field.get_cell(0, 0).unwrap(), Cell::Empty);
}

#[test]
fn test_upper_bound_is_exclusive() {
    let mut field = TicTacToeField::new(3, 5).unwrap();
    assert_eq!(
        field.get_cell(3, 0).unwrap_err(),
        FieldError::OutOfBounds { row: 3, column: 0 }
    );
    assert_eq!(
        field.get_cell(0, 5).unwrap_err(),
        FieldError::OutOfBounds { row: 0, column: 5 }
    );
    assert_eq!(
        field.set_cell(3, 5, Cell::PlayerOne).unwrap_err(),
        FieldError::OutOfBounds { row: 3, column: 5 }
    );
    assert!(field.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_inclusive_iteration_hits_out_of_bounds() {
    // walking 0..=rows must fail on the extra row instead of wrapping
    let mut field = TicTacToeField::new(2, 2).unwrap();
    let mut failures = 0;
    for r in 0..=field.rows() {
        for c in 0..=field.columns() {
            if field.set_cell(r, c, Cell::PlayerOne).is_err() {
                failures += 1;
            }
        }
    }
    assert_eq!(failures, 5);
    assert!(field.cells().iter().all(|c| *c == Cell::PlayerOne));
}

#[test]
fn test_error_display() {
    let err = FieldError::OutOfBounds { row: 4, column: 1 };
    assert_eq!(err.to_string(), "Coordinate (4, 1) is outside the field");
}
