//! Memento: the editor snapshots its content; a separate history stack holds
//! the snapshots and restores them on undo.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// Opaque snapshot of editor content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMemento {
    content: Option<String>,
}

#[derive(Debug, Default)]
pub struct TextEditor {
    content: Option<String>,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.content = Some(text.to_string());
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn save(&self) -> TextMemento {
        TextMemento { content: self.content.clone() }
    }

    pub fn restore(&mut self, memento: TextMemento) {
        self.content = memento.content;
    }
}

/// Caretaker.
#[derive(Debug, Default)]
pub struct EditorHistory {
    snapshots: Vec<TextMemento>,
}

impl EditorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, editor: &TextEditor) {
        self.snapshots.push(editor.save());
    }

    pub fn undo(&mut self, editor: &mut TextEditor, out: &mut Output) -> fmt::Result {
        match self.snapshots.pop() {
            Some(memento) => {
                editor.restore(memento);
                Ok(())
            }
            None => writeln!(out, "No states to undo."),
        }
    }
}

fn show(editor: &TextEditor, out: &mut Output) -> fmt::Result {
    writeln!(out, "Content: {}", editor.content().unwrap_or("null"))
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut editor = TextEditor::new();
    let mut history = EditorHistory::new();

    editor.write("Version 1");
    history.save(&editor);
    show(&editor, out)?;

    editor.write("Version 2");
    history.save(&editor);
    show(&editor, out)?;

    editor.write("Version 3");
    show(&editor, out)?;

    writeln!(out, "\nUndoing changes:")?;
    history.undo(&mut editor, out)?;
    show(&editor, out)?;
    history.undo(&mut editor, out)?;
    show(&editor, out)?;
    Ok(())
}
