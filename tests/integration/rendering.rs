//! Rendering plans and the plot/validate/dot commands

use super::helpers::{write_plan, FailingEngine, RecordingEngine, CYCLIC_PLAN, LINEAR_PLAN};
use brickflow::commands::{dot, plot, validate, Outcome};
use brickflow::plan::Plan;
use brickflow::render::{ImageFormat, Layout, RenderOptions};

#[test]
fn test_render_writes_engine_output() {
    let (dir, path) = write_plan(LINEAR_PLAN);
    let output = dir.path().join("plan.svg");
    let engine = RecordingEngine::default();

    let plan = Plan::load(&path).unwrap();
    let written = plan
        .render(&output, &RenderOptions::new(Layout::Dot, None), &engine)
        .expect("Should render");

    assert!(written);
    assert_eq!(std::fs::read(&output).unwrap(), RecordingEngine::IMAGE);

    let calls = engine.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].layout, Layout::Dot);
    // Format inferred from the extension
    assert_eq!(calls[0].format, Some(ImageFormat::Svg));
    assert!(calls[0].dot.contains(r#"label="Linear build""#));
    assert!(calls[0].dot.contains(r#"shape="folder""#));
    assert!(calls[0].dot.contains(r#""A" -> "B";"#));
    assert!(calls[0].dot.contains(r#"fillcolor="lightblue", peripheries="2""#));
}

#[test]
fn test_render_unknown_extension_leaves_format_to_engine() {
    let (dir, path) = write_plan(LINEAR_PLAN);
    let output = dir.path().join("plan.out");
    let engine = RecordingEngine::default();

    Plan::load(&path)
        .unwrap()
        .render(&output, &RenderOptions::default(), &engine)
        .unwrap();

    let calls = engine.calls();
    assert_eq!(calls[0].layout, Layout::Neato);
    assert_eq!(calls[0].format, None);
}

#[test]
fn test_render_cyclic_plan_writes_nothing() {
    let (dir, path) = write_plan(CYCLIC_PLAN);
    let output = dir.path().join("loop.png");
    let engine = RecordingEngine::default();

    let written = Plan::load(&path)
        .unwrap()
        .render(&output, &RenderOptions::default(), &engine)
        .unwrap();

    assert!(!written);
    assert!(!output.exists());
    assert!(engine.calls().is_empty());
}

#[test]
fn test_render_engine_failure_propagates() {
    let (dir, path) = write_plan(LINEAR_PLAN);
    let output = dir.path().join("plan.png");

    let result = Plan::load(&path)
        .unwrap()
        .render(&output, &RenderOptions::default(), &FailingEngine);

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_plot_command() {
    let (dir, path) = write_plan(LINEAR_PLAN);
    let output = dir.path().join("plan.pdf");
    let engine = RecordingEngine::default();
    let options = RenderOptions::new(Layout::Circo, Some(ImageFormat::Png));

    let outcome = plot::execute_with_engine(&path, &output, options, &engine).unwrap();

    assert_eq!(outcome, Outcome::Done);
    assert!(output.exists());
    // Explicit format wins over the extension
    assert_eq!(engine.calls()[0].format, Some(ImageFormat::Png));
}

#[test]
fn test_plot_command_cyclic_plan() {
    let (dir, path) = write_plan(CYCLIC_PLAN);
    let output = dir.path().join("loop.png");
    let engine = RecordingEngine::default();

    let outcome =
        plot::execute_with_engine(&path, &output, RenderOptions::default(), &engine).unwrap();

    assert_eq!(outcome, Outcome::InvalidPlan);
    assert!(!output.exists());
}

#[test]
fn test_plot_command_missing_plan_is_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = RecordingEngine::default();

    let result = plot::execute_with_engine(
        &dir.path().join("missing.yaml"),
        &dir.path().join("out.png"),
        RenderOptions::default(),
        &engine,
    );

    assert!(result.is_err());
    assert!(engine.calls().is_empty());
}

#[test]
fn test_plot_cyclic_plan_does_not_need_graphviz() {
    let (dir, path) = write_plan(CYCLIC_PLAN);
    let output = dir.path().join("loop.png");

    // No engine given: Graphviz is only looked up for a renderable plan
    let outcome = plot::execute(&path, &output, RenderOptions::default(), None).unwrap();

    assert_eq!(outcome, Outcome::InvalidPlan);
    assert!(!output.exists());
}

#[test]
fn test_plot_missing_plan_reports_load_failure() {
    let dir = tempfile::TempDir::new().unwrap();

    let err = plot::execute(
        &dir.path().join("missing.yaml"),
        &dir.path().join("out.png"),
        RenderOptions::default(),
        None,
    )
    .unwrap_err();

    assert!(err.to_string().contains("Failed to load plan"));
}

#[test]
fn test_plot_with_missing_engine_program_fails() {
    let (dir, path) = write_plan(LINEAR_PLAN);
    let output = dir.path().join("plan.png");

    let result = plot::execute(
        &path,
        &output,
        RenderOptions::default(),
        Some(dir.path().join("no-such-dot")),
    );

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_validate_and_dot_commands() {
    let (_dir, valid) = write_plan(LINEAR_PLAN);
    assert_eq!(validate::execute(&valid).unwrap(), Outcome::Done);
    assert_eq!(dot::execute(&valid).unwrap(), Outcome::Done);

    let (_dir, cyclic) = write_plan(CYCLIC_PLAN);
    assert_eq!(validate::execute(&cyclic).unwrap(), Outcome::InvalidPlan);
    assert_eq!(dot::execute(&cyclic).unwrap(), Outcome::InvalidPlan);
}
