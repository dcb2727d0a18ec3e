use drill_core::model::DrillSettings;
use drill_core::session::DRILL_COMPLETE_MESSAGE;

use super::test_harness::{ViewKind, setup_view_harness};
use crate::vm::DrillIntent;

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Drill, DrillSettings::default());
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Marketplace SQL Drill",
        "Target: 4 Minutes / Query",
        "Question 1 / 5",
        "04:00",
        "Warm Up",
        "badge badge-easy",
        "Need a hint?",
        "Compare Answer",
        "Database Schema",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Model Solution"), "solution shown early in {html}");
    assert!(!html.contains("timer-urgent"), "timer urgent at start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_renders_schema_markup() {
    let mut harness = setup_view_harness(ViewKind::Drill, DrillSettings::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("schema-table-name"), "missing schema markup in {html}");
    assert!(html.contains("return_reason"), "missing schema column in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn timer_turns_urgent_under_a_minute() {
    let settings = DrillSettings::with_time_limit(90).expect("settings");
    let mut harness = setup_view_harness(ViewKind::Drill, settings);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("01:30"), "missing 01:30 in {html}");
    assert!(!html.contains("timer-urgent"), "urgent too early in {html}");

    harness.tick(30);
    let html = harness.render();
    assert!(html.contains("01:00"), "missing 01:00 in {html}");
    assert!(!html.contains("timer-urgent"), "urgent at the threshold in {html}");

    harness.tick(1);
    let html = harness.render();
    assert!(html.contains("00:59"), "missing 00:59 in {html}");
    assert!(html.contains("timer timer-urgent"), "missing urgent class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn solution_modal_opens_after_a_draft() {
    let mut harness = setup_view_harness(ViewKind::Drill, DrillSettings::default());
    harness.rebuild();

    harness.dispatch(DrillIntent::Reveal);
    let html = harness.render();
    assert!(html.contains("Please type a query first!"), "missing notice in {html}");
    assert!(!html.contains("Model Solution"), "solution shown without draft in {html}");

    harness.dispatch(DrillIntent::EditDraft("SELECT 1;".into()));
    harness.dispatch(DrillIntent::Reveal);
    let html = harness.render();
    assert!(html.contains("Model Solution"), "missing modal in {html}");
    assert!(html.contains("Next Question →"), "missing next button in {html}");
    assert!(
        !html.contains("Get AI Feedback on Your Query"),
        "feedback offered without a key in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn finished_drill_shows_the_summary_panel() {
    let mut harness = setup_view_harness(ViewKind::Drill, DrillSettings::default());
    harness.rebuild();

    for _ in 0..5 {
        harness.dispatch(DrillIntent::Next);
    }
    let html = harness.render();
    for expected in [
        DRILL_COMPLETE_MESSAGE,
        "Questions: 5",
        "Solutions revealed: 0",
        "Hints used: 0",
        "Feedback requests: 0",
        "Finished: 2023-11-14 22:13 UTC",
        "Start Again",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Compare Answer"), "editor still shown in {html}");

    harness.dispatch(DrillIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 / 5"), "restart did not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn drill_survives_a_visit_to_the_questions_page() {
    let mut harness = setup_view_harness(ViewKind::Drill, DrillSettings::default());
    harness.rebuild();

    harness.dispatch(DrillIntent::Next);
    harness.tick(5);
    let html = harness.render();
    assert!(html.contains("Question 2 / 5"), "missing progress in {html}");
    assert!(html.contains("03:55"), "missing timer in {html}");

    harness.show(ViewKind::Questions);
    let html = harness.render();
    assert!(html.contains("5 questions, 4 minutes each"), "missing overview in {html}");
    assert!(!html.contains("Compare Answer"), "drill page still mounted in {html}");

    harness.show(ViewKind::Drill);
    let html = harness.render();
    assert_eq!(harness.current_index(), 1);
    assert!(html.contains("Question 2 / 5"), "drill restarted in {html}");
    assert!(html.contains("03:55"), "timer restarted in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_lists_every_question() {
    let mut harness = setup_view_harness(ViewKind::Questions, DrillSettings::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("5 questions, 4 minutes each"), "missing meta in {html}");
    for label in ["Warm Up", "Intermediate", "Exam Level", "String Logic", "Boss Level"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Tables: customers, orders, returns"), "missing tables in {html}");
}
