//! Tests for the selection coordinator and the presentation shell.
mod common;
use common::*;
use planscope::prelude::*;
use serde_json::json;

fn task_node(shell: &Shell, id: &str) -> GraphNode {
    shell
        .view(Pane::Tasks)
        .unwrap()
        .node(id)
        .cloned()
        .expect("task node exists")
}

#[test]
fn test_mount_compiles_task_graph() {
    tokio_test::block_on(async {
        let source = MemorySource::sample();
        let mut shell = Shell::new(Theme::Light);
        assert!(matches!(shell.state(), ShellState::Loading));

        shell.mount(&source).await;

        let tasks = shell.view(Pane::Tasks).unwrap();
        assert_eq!(tasks.nodes().len(), 3);
        assert_eq!(tasks.edges().len(), 3);
        assert!(shell.view(Pane::Instructions).unwrap().nodes().is_empty());
    });
}

#[test]
fn test_primary_load_failure_blocks_the_view() {
    tokio_test::block_on(async {
        let source = MemorySource::new().with_status("plan.json", 500);
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;

        assert!(matches!(shell.state(), ShellState::Failed(_)));
        assert_eq!(shell.workspace().err(), Some(ShellError::NotReady));

        let mut frontend = TextFrontend::new();
        shell.render(&mut frontend);
        assert!(frontend.as_str().starts_with("Error: "));
        assert!(frontend.as_str().contains("500"));
    });
}

#[test]
fn test_selecting_a_task_loads_its_instructions() {
    tokio_test::block_on(async {
        let source = MemorySource::sample();
        let mut shell = Shell::new(Theme::Dark);
        shell.mount(&source).await;

        let outcome = shell.click_task_node(&source, "1").await.unwrap();
        assert_eq!(outcome, FetchOutcome::Applied);

        let view = shell.view(Pane::Instructions).unwrap();
        // 3 top-level + 2 branch arms + 2 loop children + virtual loop end
        assert_eq!(view.nodes().len(), 8);
        assert!(view.edges().iter().all(|e| e.style.stroke == "aqua"));
    });
}

#[test]
fn test_secondary_failure_keeps_previous_state() {
    tokio_test::block_on(async {
        let source = MemorySource::sample().with_status("2.json", 404);
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;
        shell.click_task_node(&source, "1").await.unwrap();

        let tasks_before = shell.view(Pane::Tasks).unwrap().clone();
        let instructions_before = shell.view(Pane::Instructions).unwrap().clone();

        let outcome = shell.click_task_node(&source, "2").await.unwrap();
        assert!(matches!(outcome, FetchOutcome::Failed(_)));

        assert_eq!(shell.view(Pane::Tasks).unwrap(), &tasks_before);
        assert_eq!(shell.view(Pane::Instructions).unwrap(), &instructions_before);
        let selected = shell.workspace().unwrap().selection.selected_task().unwrap();
        assert_eq!(selected.id, "2");
    });
}

#[test]
fn test_malformed_instructions_are_demoted_to_secondary_failure() {
    tokio_test::block_on(async {
        let source = MemorySource::sample().with_document(
            "2.json",
            json!({ "instructions": [{ "seq": 1, "type": "Loop", "objective": "x" }] }),
        );
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;

        let outcome = shell.click_task_node(&source, "2").await.unwrap();
        match outcome {
            FetchOutcome::Failed(message) => assert!(message.contains("args.instructions")),
            other => panic!("Expected a failed outcome, got {:?}", other),
        }
        assert!(matches!(shell.state(), ShellState::Ready(_)));
    });
}

#[test]
fn test_new_task_selection_clears_instruction_selection() {
    tokio_test::block_on(async {
        let source = MemorySource::sample()
            .with_document("2.json", json!({ "instructions": [step(1, "only")] }));
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;

        shell.click_task_node(&source, "1").await.unwrap();
        shell.click_instruction_node("3").unwrap();
        let selection = &shell.workspace().unwrap().selection;
        assert_eq!(selection.selected_instruction().unwrap().id, "3");

        shell.click_task_node(&source, "2").await.unwrap();
        let selection = &shell.workspace().unwrap().selection;
        assert!(selection.selected_instruction().is_none());
        assert_eq!(selection.instructions().nodes().len(), 1);
    });
}

#[test]
fn test_instruction_selection_keeps_task_selection() {
    tokio_test::block_on(async {
        let source = MemorySource::sample();
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;
        shell.click_task_node(&source, "1").await.unwrap();

        shell.click_instruction_node("6").unwrap();
        let selection = &shell.workspace().unwrap().selection;
        assert_eq!(selection.selected_task().unwrap().id, "1");
        assert_eq!(selection.selected_instruction().unwrap().id, "6");
    });
}

#[test]
fn test_stale_response_is_discarded() {
    tokio_test::block_on(async {
        let source = MemorySource::sample()
            .with_document("2.json", json!({ "instructions": [step(1, "newer")] }));
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;

        let first = task_node(&shell, "1");
        let second = task_node(&shell, "2");
        let mut selection = SelectionCoordinator::new(GraphCompiler::default());

        let older = selection.select_task(first);
        let newer = selection.select_task(second);
        assert!(newer.generation() > older.generation());

        // The newer response arrives first, then the older one.
        assert_eq!(selection.load(&source, newer).await, FetchOutcome::Applied);
        assert_eq!(selection.load(&source, older).await, FetchOutcome::Stale);

        assert_eq!(selection.instructions().nodes().len(), 1);
        assert_eq!(selection.instructions().nodes()[0].label(), "newer");
        assert_eq!(selection.selected_task().unwrap().id, "2");
    });
}

#[test]
fn test_stale_failure_is_not_reported() {
    let mut selection = SelectionCoordinator::new(GraphCompiler::default());
    let plan = sample_plan();
    let graph = GraphCompiler::default().compile_plan(&plan);

    let older = selection.select_task(graph.nodes[0].clone());
    let _newer = selection.select_task(graph.nodes[1].clone());
    let outcome = selection.resolve(older, Err(FetchError::NotFound("1.json".to_string())));
    assert_eq!(outcome, FetchOutcome::Stale);
}

#[test]
fn test_unknown_node_click_is_an_error() {
    tokio_test::block_on(async {
        let source = MemorySource::sample();
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;

        let err = shell.click_task_node(&source, "77").await.unwrap_err();
        assert_eq!(
            err,
            ShellError::NodeNotFound {
                pane: "tasks",
                node_id: "77".to_string()
            }
        );
    });
}

#[test]
fn test_user_edits_stay_local() {
    tokio_test::block_on(async {
        let source = MemorySource::sample();
        let mut shell = Shell::new(Theme::Light);
        shell.mount(&source).await;

        assert!(shell.connect(Pane::Tasks, "3", "1").unwrap());
        assert!(!shell.connect(Pane::Tasks, "3", "1").unwrap());
        shell
            .apply_edge_changes(
                Pane::Tasks,
                vec![EdgeChange::Remove {
                    id: "e1-2".to_string(),
                }],
            )
            .unwrap();
        shell
            .apply_node_changes(
                Pane::Tasks,
                vec![NodeChange::Position {
                    id: "1".to_string(),
                    position: Position::new(0.0, 0.0),
                }],
            )
            .unwrap();

        let tasks = shell.view(Pane::Tasks).unwrap();
        assert!(tasks.graph().has_edge("3", "1"));
        assert!(!tasks.graph().has_edge("1", "2"));
        assert_eq!(tasks.node("1").unwrap().position, Position::new(0.0, 0.0));
        assert_eq!(
            shell.connect(Pane::Detail, "1", "2"),
            Err(ShellError::NotAGraphPane("detail"))
        );
    });
}

#[test]
fn test_render_shows_panes_and_details() {
    tokio_test::block_on(async {
        let source = MemorySource::sample();
        let mut shell = Shell::new(Theme::Dark);
        shell.mount(&source).await;
        shell.click_task_node(&source, "1").await.unwrap();
        shell.click_instruction_node("2").unwrap();

        let mut frontend = TextFrontend::new();
        shell.render(&mut frontend);
        let output = frontend.into_string();

        assert!(output.contains("TASKS (20%)"));
        assert!(output.contains("INSTRUCTIONS (40%)"));
        assert!(output.contains("DETAIL (40%)"));
        assert!(output.contains("--- Task #1 [monokai] ---"));
        assert!(output.contains("--- Instruction #2 [monokai] ---"));
        assert!(output.contains("Config valid?"));
    });
}
