//! Unit tests for error messages, themes and the text frontend.
use planscope::prelude::*;
use planscope::shell::format_graph;

#[test]
fn test_error_messages() {
    let err = CompileError::MalformedInstruction {
        seq: Some(4),
        message: "missing 'then' array".to_string(),
    };
    assert_eq!(err.to_string(), "Instruction #4 is malformed: missing 'then' array");

    let err = CompileError::MalformedInstruction {
        seq: None,
        message: "missing 'seq'".to_string(),
    };
    assert!(err.to_string().contains("<unknown seq>"));

    assert_eq!(
        ConfigError::MissingWorkspace.to_string(),
        "Please set the WORKSPACE_PATH environment variable."
    );
    assert_eq!(
        FetchError::Status {
            path: "plan.json".to_string(),
            status: 500
        }
        .to_string(),
        "Request for 'plan.json' failed with status 500"
    );
}

#[test]
fn test_theme_parsing() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
    assert!("sepia".parse::<Theme>().is_err());
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn test_theme_colors() {
    assert_eq!(Theme::Light.edge_color(), "blue");
    assert_eq!(Theme::Dark.edge_color(), "aqua");
    assert_eq!(Theme::Light.inspector_theme(), "rjv-default");
    assert_eq!(Theme::Dark.inspector_theme(), "monokai");
}

#[test]
fn test_pane_widths() {
    let total: u32 = Pane::ALL.iter().map(|p| u32::from(p.width_percent())).sum();
    assert_eq!(total, 100);
    assert_eq!(Pane::Tasks.width_percent(), 20);
}

#[test]
fn test_format_graph_prints_branch_labels() {
    let document = InstructionDocument::from_json(
        r#"{ "instructions": [
            { "seq": 1, "type": "If", "objective": "ok?", "then": [], "else": [
                { "seq": 2, "type": "Shell", "objective": "retry" }
            ] },
            { "seq": 3, "type": "Shell", "objective": "done" }
        ] }"#,
    )
    .unwrap();
    let text = format_graph(&compile_instruction_graph(&document.instructions));

    assert!(text.contains("-> 2 [No], 3 [Yes]"));
    assert!(text.contains("-> 3"));
    assert_eq!(format_graph(&Graph::default()), "(empty)\n");
}

#[test]
fn test_loading_status_before_mount() {
    let shell = Shell::new(Theme::Light);
    let mut frontend = TextFrontend::new();
    shell.render(&mut frontend);
    assert_eq!(frontend.as_str(), "Loading...\n");
}
