//! `demo` - two scripted sessions editing one shared board.
//!
//! Walks the canonical interaction sequence: grow the grid, toggle an edge
//! through its cycle, commit a clue through the chooser handshake, race two
//! concurrent toggles on the same edge, and show that both sessions
//! converge on the same board.

use std::sync::Arc;

use anyhow::Result;

use board_session::{BoardSeed, BoardSession, MockModalHost};
use board_store::StoreHub;
use board_types::{CellCoord, ClueValue, EdgeCoord, SessionId};

use crate::render;

/// Run the scripted demo.
pub async fn run(seed: BoardSeed) -> Result<()> {
    let hub = StoreHub::new();
    let alice_store = hub.attach(SessionId::new());
    let bob_store = hub.attach(SessionId::new());

    let alice_host = MockModalHost::new();
    let alice = BoardSession::new(
        Arc::new(alice_store.clone()),
        Arc::new(alice_host.clone()),
        seed.clone(),
    );
    let bob = BoardSession::new(
        Arc::new(bob_store.clone()),
        Arc::new(MockModalHost::new()),
        seed,
    );

    println!("two sessions share one board\n");

    alice.grow_cols();
    println!("alice grows the grid to {:?}", bob.dims());

    let edge = EdgeCoord::new(0, 0);
    alice.toggle_horizontal_edge(edge);
    println!("alice fills horizontal-border-0-0");

    alice_host.script_selection(ClueValue::Three);
    let pending = alice.edit_clue(CellCoord::new(0, 0)).await?;
    pending.settled().await;
    println!(
        "alice picks 3 in the chooser; bob reads {:?}",
        bob.clue(CellCoord::new(0, 0))
    );

    // Both sessions toggle the same edge while cut off from each other.
    let race = EdgeCoord::new(1, 0);
    alice_store.hold_delivery();
    bob_store.hold_delivery();
    alice.toggle_horizontal_edge(race);
    bob.toggle_horizontal_edge(race);
    alice_store.release_delivery();
    bob_store.release_delivery();
    println!(
        "both toggle horizontal-border-1-0 concurrently; it converges to {:?}",
        bob.snapshot().horizontal_edge(1, 0)
    );

    alice.confirm_resize();
    println!("alice confirms the layout; controls hidden everywhere\n");

    println!("alice sees:");
    print!("{}", render::board(&alice.snapshot()));
    println!("\nbob sees:");
    print!("{}", render::board(&bob.snapshot()));

    anyhow::ensure!(alice.snapshot() == bob.snapshot(), "sessions diverged");
    println!("\nboards match");
    Ok(())
}
