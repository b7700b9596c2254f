use checklist_core::model::{AppInfoDraft, Implementation, Section, SessionState};
use services::AppServices;

use super::test_harness::{Script, setup_scripted_harness, setup_view_harness};

const TWO_RUNS: &str = r#"{
    "run_metadata": {"run_id": "r1", "test_id": "smoke", "start_time": "", "end_time": "", "duration": 1.5},
    "run_results": [
        {
            "metadata": {
                "test_name": "mlc-vcr", "dataset": "vcr", "metric": {"id": "refusal"}, "type": "benchmark",
                "connector": {"connector_adapter": "openai", "model": "gpt-4o", "model_endpoint": null,
                              "params": {}, "connector_pre_prompt": "", "connector_post_prompt": "", "system_prompt": ""},
                "start_time": "", "end_time": "", "duration": 1.0
            },
            "results": {"individual_results": {"refuse": []}, "evaluation_summary": {"refusal": {"attack_success_rate": 0.5}}}
        },
        {
            "metadata": {
                "test_name": "mlc-cbr", "dataset": "cbr", "metric": {"id": "refusal"}, "type": "benchmark",
                "connector": {"connector_adapter": "openai", "model": "gpt-4o", "model_endpoint": null,
                              "params": {}, "connector_pre_prompt": "", "connector_post_prompt": "", "system_prompt": ""},
                "start_time": "", "end_time": "", "duration": 0.5
            },
            "results": {"individual_results": {}, "evaluation_summary": null}
        }
    ]
}"#;

fn at(section: Section) -> SessionState {
    let mut state = SessionState::new();
    state.set_section(section);
    state
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_hides_navigation() {
    let mut harness = setup_view_harness(SessionState::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Process Checks"), "missing intro in {html}");
    assert!(html.contains("Get Started"), "missing start button in {html}");
    assert!(!html.contains("Next →"), "unexpected nav bar in {html}");
    assert!(!html.contains("nav-home"), "unexpected home button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn get_started_view_smoke_renders_form_and_navigation() {
    let mut harness = setup_view_harness(at(Section::GET_STARTED));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Application name"), "missing form in {html}");
    assert!(html.contains("maxlength=\"50\""), "missing name limit in {html}");
    assert!(html.contains("← Back"), "missing back in {html}");
    assert!(html.contains("Next →"), "missing next in {html}");
    assert!(html.contains("Home"), "missing home in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn process_checks_view_smoke_gates_next_and_renders_cards() {
    let mut harness = setup_view_harness(at(Section::PROCESS_CHECKS));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Overall Progress: 0 of 22 questions answered (0%)"),
        "missing progress in {html}"
    );
    assert!(
        html.contains("Please answer all questions before proceeding."),
        "missing gate help in {html}"
    );
    assert!(html.contains("disabled"), "next not disabled in {html}");

    harness.drive_until("0 of 2 checks").await;
    let html = harness.drive_until("height: 990px").await;
    assert!(html.contains("principle-card--active"), "missing active card in {html}");
    assert!(html.contains("0 of 2 checks"), "missing card caption in {html}");
    assert!(html.contains("height: 990px"), "missing frame height in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_smoke_renders_breakdown() {
    let mut state = at(Section::REPORT);
    let services = AppServices::from_catalog(catalog::bundled().unwrap());
    let checklist = services.checklist();
    checklist
        .update_app_info(&mut state, AppInfoDraft::new("Helpdesk Bot", "Answers tickets"))
        .unwrap();
    let first = checklist.catalog().principles()[0].checks[0].process_id.clone();
    checklist
        .record_answer(&mut state, &first, Some(Implementation::Yes))
        .unwrap();

    let mut harness = setup_view_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Summary Report"), "missing title in {html}");
    assert!(html.contains("Helpdesk Bot"), "missing app name in {html}");
    assert!(html.contains("Transparency"), "missing principle row in {html}");
    assert!(
        html.contains("Overall Progress: 1 of 22 questions answered (4%)"),
        "missing progress in {html}"
    );
    assert!(!html.contains("Next →"), "unexpected next on final section in {html}");
    assert!(
        html.contains("No technical test uploaded."),
        "missing empty technical test section in {html}"
    );
}

fn filled_get_started() -> SessionState {
    let mut state = at(Section::GET_STARTED);
    let services = AppServices::from_catalog(catalog::bundled().unwrap());
    services
        .checklist()
        .update_app_info(&mut state, AppInfoDraft::new("Helpdesk Bot", "Answers tickets"))
        .unwrap();
    state
}

#[tokio::test(flavor = "current_thread")]
async fn home_prompt_shows_both_choices() {
    let mut harness = setup_scripted_harness(filled_get_started(), Script::StartOver(None));
    harness.rebuild();
    let html = harness.drive_until("Yes, start over").await;
    assert!(html.contains("Confirm Reset"), "missing prompt title in {html}");
    assert!(html.contains("No, cancel"), "missing cancel in {html}");
    assert!(html.contains("reset None"), "reset finished early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_then_cancel_keeps_the_section() {
    let mut harness = setup_scripted_harness(filled_get_started(), Script::StartOver(Some(false)));
    harness.rebuild();
    let html = harness.drive_until("reset Some(Kept)").await;
    assert!(html.contains("reset Some(Kept)"), "reset not declined in {html}");
    assert!(html.contains("nav-home"), "left the section in {html}");
    assert!(html.contains("Helpdesk Bot"), "lost app info in {html}");
    assert!(!html.contains("Yes, start over"), "prompt still open in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_then_confirm_returns_to_welcome() {
    let mut harness = setup_scripted_harness(filled_get_started(), Script::StartOver(Some(true)));
    harness.rebuild();
    let html = harness.drive_until("reset Some(Cleared)").await;
    assert!(html.contains("reset Some(Cleared)"), "reset not confirmed in {html}");
    assert!(!html.contains("nav-home"), "navigation still shown in {html}");
    assert!(!html.contains("Helpdesk Bot"), "app info kept in {html}");
    assert!(html.contains("Get Started"), "welcome not shown in {html}");
    assert!(
        !html.contains("Tell us about the Generative AI application"),
        "still on the form in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn card_click_selects_principle() {
    let mut harness = setup_scripted_harness(at(Section::PROCESS_CHECKS), Script::ClickCard(3));
    harness.rebuild();
    let html = harness.drive_until("active cards [3]").await;
    assert!(html.contains("selected principle 3"), "selection not applied in {html}");
    assert!(html.contains("active cards [3]"), "card not highlighted in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn technical_tests_view_smoke_shows_uploaded_summary() {
    let mut state = at(Section::TECHNICAL_TESTS);
    let services = AppServices::from_catalog(catalog::bundled().unwrap());
    services
        .checklist()
        .upload_test_results(&mut state, "helpdesk_run.json", TWO_RUNS)
        .unwrap();

    let mut harness = setup_view_harness(state);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Uploaded helpdesk_run.json"), "missing file name in {html}");
    assert!(html.contains("Status: Completed"), "missing status in {html}");
    assert!(html.contains("Passed: 1"), "missing pass count in {html}");
    assert!(html.contains("Failed: 1"), "missing fail count in {html}");
    assert!(html.contains("attack success rate: 0.5"), "missing summary in {html}");
    assert!(html.contains("No evaluation summary"), "missing empty summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_reads_results_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("helpdesk_run.json");
    std::fs::write(&path, TWO_RUNS).unwrap();

    let script = Script::Upload(path.display().to_string());
    let mut harness = setup_scripted_harness(at(Section::TECHNICAL_TESTS), script);
    harness.rebuild();
    let html = harness.drive_until("Status: Completed").await;
    assert!(html.contains("upload ok"), "upload failed in {html}");
    assert!(html.contains("Uploaded helpdesk_run.json"), "missing file name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn upload_rejects_files_of_another_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    std::fs::write(&path, r#"{"notes": []}"#).unwrap();

    let script = Script::Upload(path.display().to_string());
    let mut harness = setup_scripted_harness(at(Section::TECHNICAL_TESTS), script);
    harness.rebuild();
    let html = harness.drive_until("upload failed").await;
    assert!(
        html.contains("valid Project Moonshot JSON file"),
        "missing format error in {html}"
    );
    assert!(!html.contains("Status:"), "unexpected summary in {html}");

    let missing = dir.path().join("gone.json").display().to_string();
    let mut harness = setup_scripted_harness(at(Section::TECHNICAL_TESTS), Script::Upload(missing));
    harness.rebuild();
    let html = harness.drive_until("upload failed").await;
    assert!(html.contains("Could not read"), "missing read error in {html}");
}
