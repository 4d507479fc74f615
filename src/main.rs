use anyhow::Result;
use shatranj_core::{Board, Color};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let board = Board::starting_position();
    info!(
        white_moves = board.legal_moves(Color::White).len(),
        black_moves = board.legal_moves(Color::Black).len(),
        "shatranj starting"
    );
    Ok(())
}
