//! Walk the intake form end to end against an in-memory draft store.
//!
//! Fills each step, shows validation catching a mistake, and prints the
//! payload that would be posted. The submit itself is attempted against
//! the default endpoint and its outcome printed either way.

use std::sync::Arc;

use intake_lib::forms::intake::{self, choices, fields};
use intake_lib::{IntakeSession, MemoryStore, SubmitClient};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let store = Arc::new(MemoryStore::new());
    let client = SubmitClient::builder()
        .endpoint(intake::DEFAULT_ENDPOINT)
        .build();
    let mut session = IntakeSession::new(store, client);
    session.restore();

    // Step 1 with a typo'd email first.
    session.set_text(fields::FULL_NAME, "Ada Lovelace");
    session.set_text(fields::DOB, "1990-12-10");
    session.set_text(fields::EMAIL, "ada@example");
    session.set_text(fields::PHONE, "(415) 555-2671");
    session.toggle_choice(fields::CONTACT_METHOD, choices::CONTACT_EMAIL, true);

    let result = session.advance();
    println!(
        "step {} ({}): {:?}",
        session.current_step(),
        session.current_step_title(),
        result.first_error()
    );

    session.set_text(fields::EMAIL, "ada@example.com");
    session.advance();

    // Step 2.
    session.set_text(fields::OCCUPATION, "Analyst");
    session.set_text(fields::RELATIONSHIP_STATUS, "Single");
    session.set_text(fields::EMG_NAME, "Annabella King");
    session.set_text(fields::EMG_PHONE, "14155552672");
    session.set_text(fields::EMG_RELATION, "Mother");
    session.advance();

    // Step 3.
    session.toggle_choice(fields::CONCERNS, "Anxiety", true);
    session.set_text(fields::PRESENTING_DESC, "Persistent worry affecting sleep.");
    session.set_text(fields::GOALS, "Build coping strategies for stress.");
    session.set_text(fields::MEDS_NOW, "No");
    session.set_text(fields::THERAPY_BEFORE, "No");
    session.advance();

    // Step 4.
    session.set_flag(fields::CONSENT, true);
    session.set_text(fields::SIGNATURE, "Ada Lovelace");
    session.set_text(fields::SIG_DATE, "2024-01-15");

    let payload = intake::IntakePayload::from_draft(session.draft());
    println!(
        "payload:\n{}",
        serde_json::to_string_pretty(&payload).expect("payload serializes")
    );

    match session.submit().await {
        Ok(outcome) => println!("submit outcome: {outcome:?}"),
        Err(e) => println!("submit failed: {e}"),
    }
}
