//! Pattern Scenario Demo Tests
//!
//! Drives the demo domain types directly, outside the canned `run` bodies.

use patternbook::capture::Output;
use patternbook::demos::composite::Employee;
use patternbook::demos::flyweight::TreeFactory;
use patternbook::demos::interpreter::{Context, Expression};
use patternbook::demos::memento::{EditorHistory, TextEditor};
use patternbook::demos::singleton::ServiceHolder;
use patternbook::demos::state::MusicPlayer;

#[test]
fn test_singleton_constructed_once() {
    let holder = ServiceHolder::new();
    assert_eq!(holder.constructions(), 0);

    let first = holder.instance();
    let second = holder.instance();
    assert!(std::ptr::eq(first, second));
    assert_eq!(holder.constructions(), 1);
}

#[test]
fn test_flyweight_reuses_types() {
    let mut factory = TreeFactory::new();
    let mut out = Output::new();
    let oak = factory.tree_type("Oak", "Green", "Rough", &mut out).unwrap();
    let again = factory.tree_type("Oak", "Green", "Rough", &mut out).unwrap();
    let autumn = factory.tree_type("Oak", "Red", "Rough", &mut out).unwrap();

    assert!(std::rc::Rc::ptr_eq(&oak, &again));
    assert!(!std::rc::Rc::ptr_eq(&oak, &autumn));
    assert_eq!(factory.len(), 2);
    assert_eq!(out.finish(), vec!["Creating new TreeType: Oak", "Creating new TreeType: Oak"]);
}

#[test]
fn test_interpreter_with_other_bindings() {
    let expr = Expression::sub(
        Expression::add(Expression::var("a"), Expression::var("b")),
        Expression::var("c"),
    );
    assert_eq!(expr.to_string(), "((a + b) - c)");

    let mut context = Context::new();
    context.insert("a".to_string(), 1);
    context.insert("c".to_string(), 10);
    // b is unbound and counts as zero
    assert_eq!(expr.interpret(&context), -9);
}

#[test]
fn test_memento_undo_past_history() {
    let mut editor = TextEditor::new();
    let mut history = EditorHistory::new();
    let mut out = Output::new();

    editor.write("draft");
    history.save(&editor);
    editor.write("final");
    history.undo(&mut editor, &mut out).unwrap();
    assert_eq!(editor.content(), Some("draft"));

    history.undo(&mut editor, &mut out).unwrap();
    assert_eq!(editor.content(), Some("draft"));
    assert_eq!(out.finish(), vec!["No states to undo."]);
}

#[test]
fn test_composite_tree_edits() {
    let mut lead = Employee::manager("Mike", "Project Manager");
    let mut design = Employee::manager("Ana", "Design Lead");
    design.add(Employee::designer("Italo", "UI/UX Designer"));
    lead.add(Employee::developer("Paulo", "Senior Developer"));
    lead.add(design);
    assert_eq!(lead.headcount(), 4);

    let removed = lead.remove("Paulo").expect("Paulo reports to Mike");
    assert_eq!(lead.headcount(), 3);

    let mut out = Output::new();
    removed.show_details(&mut out).unwrap();
    assert_eq!(out.finish(), vec!["Developer: Paulo, Position: Senior Developer"]);
}

#[test]
fn test_state_player_long_session() {
    let mut player = MusicPlayer::new();
    let mut out = Output::new();
    for _ in 0..3 {
        player.press_play(&mut out).unwrap();
        player.press_pause(&mut out).unwrap();
    }
    assert_eq!(player.state_name(), "paused");
    assert_eq!(out.lines().len(), 6);
    assert_eq!(out.lines()[2], "Resuming the music.");
}
