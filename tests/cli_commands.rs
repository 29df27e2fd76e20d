mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn ask_without_key_uses_keyword_answer() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "What", "are", "your", "service", "times?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00 AM").and(predicate::str::contains("6:00 PM")));
}

#[test]
fn ask_unmatched_question_gets_contact_message() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["ask", "Do you have a gym?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(555) 123-HOPE"))
        .stdout(predicate::str::contains("info@livinghopechurch.org"));
}

#[test]
fn ask_requires_a_question() {
    let ctx = TestContext::new();
    ctx.cli().arg("ask").assert().failure();
}

#[test]
fn placeholder_key_reports_unavailable() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("GEMINI_API_KEY", "PLACEHOLDER_API_KEY")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI service: unavailable"))
        .stdout(predicate::str::contains("gemini-pro"));
}

#[test]
fn configured_key_reports_available() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("API_KEY", "some-real-looking-key")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI service: available"))
        .stdout(predicate::str::contains("some-real-looking-key").not());
}

#[test]
fn prompt_uses_default_knowledge_without_content() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("CHURCH INFORMATION:"))
        .stdout(predicate::str::contains("Independent Christian Church"))
        .stdout(predicate::str::contains("STATEMENT OF FAITH:"))
        .stdout(predicate::str::contains("GUIDELINES:"));
}

#[test]
fn prompt_reflects_content_directory() {
    let ctx = TestContext::new();
    ctx.write_content(
        "church-info.json",
        r#"{"churchName": "Grace Chapel", "frequentlyAskedQuestions": [{"question": "Is there coffee?", "answer": "Always."}]}"#,
    );

    ctx.cli()
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI assistant for Grace Chapel"))
        .stdout(predicate::str::contains("Is there coffee?"));
}

#[test]
fn contact_shows_default_service_times() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("contact")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday:    10:00 AM and 6:00 PM"))
        .stdout(predicate::str::contains("123 Hope Street"));
}

#[test]
fn about_shows_default_hero() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to Living Hope Church"));
}

#[test]
fn chat_reads_questions_from_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("chat")
        .write_stdin("What is your address?\nbye\nWhat about baptism?\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What would you like to know?"))
        .stdout(predicate::str::contains("123 Hope Street"))
        .stdout(predicate::str::contains("Baptism").not());
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "absent.toml", "ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[assistant]\ntimeout_secs = 0\n");

    ctx.cli()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn unknown_config_key_fails() {
    let ctx = TestContext::new();
    ctx.write_config("[assistant]\nretries = 3\n");

    ctx.cli().arg("status").assert().failure().stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn leadership_lists_both_teams() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("leadership")
        .assert()
        .success()
        .stdout(predicate::str::contains("Eldership Team"))
        .stdout(predicate::str::contains("Deacons Team"))
        .stdout(predicate::str::contains("Gary & Lisa-Marie Marques"));
}

#[test]
fn beliefs_default_to_statement_of_faith() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("beliefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement of Faith for Living Hope Church:"));
}

#[test]
fn beliefs_render_detailed_beliefs_from_content() {
    let ctx = TestContext::new();
    ctx.write_content(
        "church-info.json",
        r#"{"detailedBeliefs": {"grace": {"title": "Grace", "content": "Unearned favour."}}}"#,
    );

    ctx.cli()
        .arg("beliefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Grace\nUnearned favour."))
        .stdout(predicate::str::contains("Statement of Faith for Living Hope Church:").not());
}
