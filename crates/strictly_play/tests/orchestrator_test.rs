//! Tests for full games driven through the orchestrator.

use std::io::{Cursor, sink};
use strictly_minimax::{Mark, Outcome};
use strictly_play::{EnginePlayer, HumanPlayer, Orchestrator};

#[test]
fn test_self_play_is_a_draw() {
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine X", false)),
        Box::new(EnginePlayer::new("Engine O", true)),
        Vec::new(),
    );
    let finished = orchestrator.run().expect("self-play completes");
    assert_eq!(finished.outcome(), Outcome::Draw);

    let transcript = String::from_utf8(orchestrator.into_output()).unwrap();
    assert_eq!(transcript.matches(" plays ").count(), 9);
    assert!(transcript.ends_with("It's a draw.\n"));
}

#[test]
fn test_careless_human_loses() {
    // The human (X) walks the squares in numeric order, ignoring every
    // threat; squares the engine already took are re-prompted past.
    let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(3);
    let human = HumanPlayer::new("You", Cursor::new(script), sink());
    let mut orchestrator = Orchestrator::new(
        Box::new(human),
        Box::new(EnginePlayer::new("Engine", false)),
        Vec::new(),
    );

    let finished = orchestrator.run().expect("game completes");
    assert_eq!(finished.outcome(), Outcome::Winner(Mark::O));
    assert_eq!(finished.history().len(), 6);

    let transcript = String::from_utf8(orchestrator.into_output()).unwrap();
    assert!(transcript.ends_with("Engine (O) wins!\n"));
}

#[test]
fn test_human_running_out_of_input_is_an_error() {
    let human = HumanPlayer::new("You", Cursor::new("5\n"), sink());
    let mut orchestrator = Orchestrator::new(
        Box::new(EnginePlayer::new("Engine", false)),
        Box::new(human),
        sink(),
    );
    assert!(orchestrator.run().is_err());
}
