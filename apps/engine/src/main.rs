//! Headless demo presentation: auto-plays one full game and renders every
//! engine event as a JSON line. A GUI host consumes the same event stream.

use engine::{DomainError, GameEvent, RoundEngine, MAX_ROUNDS, PICTURE_CARD_COUNT, TABLE_SLOTS};

mod telemetry;

fn main() {
    telemetry::init_tracing();

    if let Err(err) = run() {
        eprintln!("engine demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DomainError> {
    let mut engine = RoundEngine::from_entropy();
    render(&engine.deal_initial()?);

    // Auto-play: clear every picture on the table, then advance, until a
    // terminal event arrives. The removal "animation" completes instantly.
    for _ in 0..MAX_ROUNDS {
        for slot in 0..TABLE_SLOTS {
            let started = engine.attempt_remove(slot)?;
            if !started.is_empty() {
                render(&started);
                render(&engine.complete_removal(slot)?);
            }
        }
        println!("{}", engine.status_line());

        let events = engine.advance_round();
        let terminal = events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. } | GameEvent::DeckExhausted));
        render(&events);
        if terminal {
            break;
        }
    }

    let snapshot = engine.snapshot();
    if snapshot.removed_total >= PICTURE_CARD_COUNT {
        println!("🎉 You uncovered all pictures, you won!");
    } else {
        println!(
            "🃏 You uncovered {} pictures. Try again!",
            snapshot.removed_total
        );
    }
    Ok(())
}

fn render(events: &[GameEvent]) {
    for event in events {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("unserializable event: {err}"),
        }
    }
}
