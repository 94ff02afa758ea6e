//! Text rendering of a board snapshot.
//!
//! Geometry here is the CLI's own; the state-to-meaning mapping it draws
//! from is the shared contract: a filled edge renders as a solid mark, a
//! crossed edge as an `x`, an empty edge as nothing.

use board_session::BoardView;
use board_types::{ClueValue, EdgeState};

fn horizontal_mark(state: EdgeState) -> &'static str {
    match state {
        EdgeState::Empty => "   ",
        EdgeState::Filled => "---",
        EdgeState::Crossed => " x ",
    }
}

fn vertical_mark(state: EdgeState) -> char {
    match state {
        EdgeState::Empty => ' ',
        EdgeState::Filled => '|',
        EdgeState::Crossed => 'x',
    }
}

fn clue_mark(clue: ClueValue) -> char {
    match clue {
        ClueValue::None => ' ',
        other => other.as_str().chars().next().unwrap_or(' '),
    }
}

/// Render a snapshot as a dot grid with edge marks and clue digits.
pub fn board(view: &BoardView) -> String {
    let dims = view.dims();
    let mut out = String::new();
    for row in 0..dims.rows {
        push_horizontal_row(&mut out, view, row);
        for col in 0..=dims.cols {
            out.push(vertical_mark(view.vertical_edge(row, col)));
            if col < dims.cols {
                out.push(' ');
                out.push(clue_mark(view.clue(row, col)));
                out.push(' ');
            }
        }
        out.push('\n');
    }
    push_horizontal_row(&mut out, view, dims.rows);
    out
}

fn push_horizontal_row(out: &mut String, view: &BoardView, row: u32) {
    let dims = view.dims();
    for col in 0..dims.cols {
        out.push('+');
        out.push_str(horizontal_mark(view.horizontal_edge(row, col)));
    }
    out.push('+');
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_types::GridDims;

    #[test]
    fn renders_a_one_by_one_board() {
        let view = BoardView::from_rows(
            GridDims::new(1, 1),
            vec![ClueValue::Three],
            vec![EdgeState::Filled, EdgeState::Empty],
            vec![EdgeState::Crossed, EdgeState::Empty],
            true,
        );
        let text = board(&view);
        assert_eq!(text, "+---+\nx 3  \n+   +\n");
    }

    #[test]
    fn empty_board_is_just_dots() {
        let view = BoardView::from_rows(
            GridDims::new(1, 1),
            vec![ClueValue::None],
            vec![EdgeState::Empty; 2],
            vec![EdgeState::Empty; 2],
            true,
        );
        assert_eq!(board(&view), "+   +\n     \n+   +\n");
    }
}
