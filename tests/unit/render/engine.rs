use super::*;

#[test]
fn command_args_select_layout_format_and_paths() {
    let args = GraphvizCli::command_args(
        Path::new("/tmp/triangle_pipeline"),
        Path::new("/tmp/triangle_pipeline.png"),
        OutputFormat::Png,
        LayoutEngine::Dot,
    );
    let args: Vec<String> = args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        args,
        [
            "-Kdot",
            "-Tpng",
            "-o",
            "/tmp/triangle_pipeline.png",
            "/tmp/triangle_pipeline"
        ]
    );
}

#[test]
fn missing_executable_is_engine_not_found() {
    let engine = GraphvizCli::with_executable("pipeline-diagram-no-such-engine");
    let err = engine
        .render_file(
            Path::new("in.gv"),
            Path::new("out.png"),
            OutputFormat::Png,
            LayoutEngine::Dot,
        )
        .unwrap_err();
    assert!(
        matches!(err, RenderingError::EngineNotFound { ref engine, .. } if engine == "pipeline-diagram-no-such-engine"),
        "unexpected error: {err}"
    );
    assert!(!is_engine_on_path("pipeline-diagram-no-such-engine"));
}

#[test]
fn default_engine_is_dot() {
    let engine = GraphvizCli::default();
    assert_eq!(engine.name(), "dot");
    assert_eq!(engine.executable(), Path::new("dot"));
}
