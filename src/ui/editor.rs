use egui::{FontId, Ui};

/// Working-copy text editor.
#[derive(Default)]
pub struct Editor {
    content: String,
}

impl Editor {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Returns true when the user edited the text this frame.
    pub fn show(&mut self, ui: &mut Ui, font_size: f32) -> bool {
        let response = ui.add(
            egui::TextEdit::multiline(&mut self.content)
                .code_editor()
                .font(FontId::monospace(font_size))
                .desired_width(f32::INFINITY)
                .desired_rows(30),
        );
        response.changed()
    }
}
