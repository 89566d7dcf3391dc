use prep_core::model::Company;
use storage::repository::InMemoryQuestionBank;

use super::practice::PracticeIntent;
use super::test_harness::{ViewKind, seeded_bank, setup_view_harness};

/// Titles in document order, extracted from the rendered summaries.
fn rendered_titles(html: &str) -> Vec<String> {
    html.split("<summary")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find('>')? + 1;
            let end = chunk[start..].find('<')? + start;
            Some(chunk[start..end].to_string())
        })
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn tutor_view_smoke_renders_toggle() {
    let mut harness =
        setup_view_harness(ViewKind::Tutor, InMemoryQuestionBank::new(), "unused");
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Ask Tutor"), "missing toggle in {html}");
    assert!(html.contains("AI Coding Tutor"), "missing title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_question_warns_without_invoking_the_model() {
    let mut harness =
        setup_view_harness(ViewKind::Tutor, InMemoryQuestionBank::new(), "unused");
    harness.rebuild();

    harness.dom.in_runtime(|| {
        let mut show_box = harness.tutor.show_box();
        show_box.set(true);
        let mut question = harness.tutor.question();
        question.set("   ".to_string());
        harness.tutor.ask().call(());
    });
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Please enter a valid question."),
        "missing warning in {html}"
    );
    assert_eq!(harness.model.invocations(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn asking_renders_the_three_sections() {
    let reply = "---SOLUTION---\nfn reverse() {}\n---EXPLANATION---\nWalk the list once.\n---RELATED QUESTIONS---\n1. Merge Two Sorted Lists\n";
    let mut harness = setup_view_harness(ViewKind::Tutor, InMemoryQuestionBank::new(), reply);
    harness.rebuild();

    harness.dom.in_runtime(|| {
        let mut show_box = harness.tutor.show_box();
        show_box.set(true);
        let mut question = harness.tutor.question();
        question.set("Reverse a linked list".to_string());
        harness.tutor.ask().call(());
    });
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("fn reverse() {}"), "missing solution in {html}");
    assert!(html.contains("Walk the list once."), "missing explanation in {html}");
    assert!(
        html.contains("Merge Two Sorted Lists"),
        "missing related questions in {html}"
    );

    let prompts = harness.model.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Reverse a linked list"));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_controls() {
    let bank = seeded_bank(Company::Amazon, 15);
    let mut harness = setup_view_harness(ViewKind::Practice, bank, "unused");
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Amazon"), "missing company option in {html}");
    assert!(html.contains("JPMorgan Chase"), "missing company option in {html}");
    assert!(
        html.contains("Show 10 Random OA Questions"),
        "missing sample button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn sampling_renders_ten_distinct_linked_items() {
    let bank = seeded_bank(Company::Amazon, 15);
    let mut harness = setup_view_harness(ViewKind::Practice, bank, "unused");
    harness.rebuild();

    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::Sample));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    let titles = rendered_titles(&html);
    assert_eq!(titles.len(), 10, "expected 10 items in {html}");

    let distinct: std::collections::HashSet<&String> = titles.iter().collect();
    assert_eq!(distinct.len(), 10, "titles must be distinct");

    assert_eq!(
        html.matches("https://leetcode.com/problems/").count(),
        10,
        "every item needs a clickable link"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn show_solution_opens_one_panel_with_one_invocation() {
    let bank = seeded_bank(Company::Amazon, 15);
    let mut harness = setup_view_harness(ViewKind::Practice, bank, "Use a hash map.");
    harness.rebuild();

    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::Sample));
    harness.drive_async().await;
    harness.drive_async().await;

    let titles = rendered_titles(&harness.render());

    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::ShowSolution(2)));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(harness.model.invocations(), 1);
    assert!(
        harness.model.prompts()[0].contains(&titles[2]),
        "prompt must embed item 3's title"
    );
    assert_eq!(
        html.matches("Use a hash map.").count(),
        1,
        "exactly one panel shows the solution"
    );
    assert_eq!(
        html.matches("Show Solution").count(),
        9,
        "the other panels keep their buttons"
    );

    // A second click on the same item must not trigger another call.
    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::ShowSolution(2)));
    harness.drive_async().await;
    assert_eq!(harness.model.invocations(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn sampling_again_resets_panel_state() {
    let bank = seeded_bank(Company::Amazon, 15);
    let mut harness = setup_view_harness(ViewKind::Practice, bank, "Use a hash map.");
    harness.rebuild();

    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::Sample));
    harness.drive_async().await;
    harness.drive_async().await;
    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::ShowSolution(0)));
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(harness.model.invocations(), 1);

    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::Sample));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(
        html.matches("Use a hash map.").count(),
        0,
        "new batches start with every panel closed"
    );
    assert_eq!(html.matches("Show Solution").count(), 10);

    // The second sample came from the cache, not a re-read.
    assert_eq!(harness.bank.load_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn missing_table_renders_a_load_error() {
    let bank = InMemoryQuestionBank::new();
    let mut harness = setup_view_harness(ViewKind::Practice, bank, "unused");
    harness.rebuild();

    harness
        .dom
        .in_runtime(|| harness.practice.dispatch().call(PracticeIntent::Sample));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Could not load the question table"),
        "missing load error in {html}"
    );
}
