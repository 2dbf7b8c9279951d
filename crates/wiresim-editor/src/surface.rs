//! Editor collaborator interface.

/// Capabilities the execution controller needs from a hosting editor.
///
/// The controller tags the line it is executing so a user can follow
/// along in the source view; implementations decide how (or whether)
/// the tag is displayed.
pub trait EditorSurface: Send {
    /// Full text content of the editor.
    fn text(&self) -> String;

    /// Number of lines in the buffer.
    fn line_count(&self) -> usize;

    /// Tags a line as the one being executed.
    fn set_line_highlight(&mut self, line: usize);

    /// Removes the tag from a line.
    fn clear_line_highlight(&mut self, line: usize);

    /// Removes every line tag.
    fn clear_all_highlights(&mut self);
}

/// Editor that ignores every notification, for headless runs.
#[derive(Debug, Default, Clone)]
pub struct NullEditor;

impl EditorSurface for NullEditor {
    fn text(&self) -> String {
        String::new()
    }

    fn line_count(&self) -> usize {
        0
    }

    fn set_line_highlight(&mut self, _line: usize) {}

    fn clear_line_highlight(&mut self, _line: usize) {}

    fn clear_all_highlights(&mut self) {}
}
