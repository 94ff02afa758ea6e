//! `show` - render a seeded board.

use std::sync::Arc;

use anyhow::Result;

use board_session::{BoardSeed, BoardSession, MockModalHost};
use board_store::StoreHub;
use board_types::SessionId;

use crate::render;

/// Render the board a fresh session would see.
pub fn run(seed: BoardSeed) -> Result<()> {
    let hub = StoreHub::new();
    let store = hub.attach(SessionId::new());
    let session = BoardSession::new(Arc::new(store), Arc::new(MockModalHost::new()), seed);

    let view = session.snapshot();
    print!("{}", render::board(&view));
    if view.controls_visible() {
        println!("resize controls: shown");
    }
    Ok(())
}
