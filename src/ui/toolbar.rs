use crate::config::Theme;
use crate::diff::{DiffAlgorithm, DiffStats};
use crate::loader::DocumentSlot;
use egui::{Align, Color32, Layout, RichText, Ui};
use std::path::PathBuf;

pub enum ToolbarAction {
    Open(DocumentSlot),
    OpenRecent(DocumentSlot, PathBuf),
    PreviousHunk,
    NextHunk,
    SetBaseline,
    ResetToBaseline,
    SetAlgorithm(DiffAlgorithm),
    ToggleInlineHighlight,
    ToggleTheme,
}

pub struct Toolbar;

pub struct ToolbarState<'a> {
    pub stats: DiffStats,
    pub cursor: Option<usize>,
    pub has_baseline: bool,
    pub recent_files: &'a [PathBuf],
    pub algorithm: DiffAlgorithm,
    pub inline_highlight: bool,
    pub theme: Theme,
}

impl Toolbar {
    pub fn show(ui: &mut Ui, state: ToolbarState<'_>) -> Option<ToolbarAction> {
        let ToolbarState {
            stats,
            cursor,
            has_baseline,
            recent_files,
            algorithm,
            inline_highlight,
            theme,
        } = state;

        let mut action = None;

        ui.horizontal(|ui| {
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                for (slot, label) in [
                    (DocumentSlot::Baseline, "📂 Baseline"),
                    (DocumentSlot::Working, "📂 Working"),
                ] {
                    ui.menu_button(label, |ui| {
                        for path in recent_files {
                            let file_name = path
                                .file_name()
                                .and_then(|n| n.to_str())
                                .unwrap_or("Unknown");
                            if ui
                                .button(file_name)
                                .on_hover_text(path.to_string_lossy().as_ref())
                                .clicked()
                            {
                                action = Some(ToolbarAction::OpenRecent(slot, path.clone()));
                                ui.close();
                            }
                        }
                        if !recent_files.is_empty() {
                            ui.separator();
                        }
                        if ui.button("Open File...").clicked() {
                            action = Some(ToolbarAction::Open(slot));
                            ui.close();
                        }
                    });
                }

                ui.separator();

                let can_navigate = stats.hunk_count > 0;
                if ui
                    .add_enabled(can_navigate, egui::Button::new("⬆"))
                    .on_hover_text("Previous change (Shift+F7)")
                    .clicked()
                {
                    action = Some(ToolbarAction::PreviousHunk);
                }
                if ui
                    .add_enabled(can_navigate, egui::Button::new("⬇"))
                    .on_hover_text("Next change (F7)")
                    .clicked()
                {
                    action = Some(ToolbarAction::NextHunk);
                }
                ui.label(RichText::new(format_hunk_position(cursor, stats.hunk_count)).small());

                ui.separator();

                if ui
                    .button("Set baseline")
                    .on_hover_text("Use the working copy as the new baseline")
                    .clicked()
                {
                    action = Some(ToolbarAction::SetBaseline);
                }
                if ui
                    .add_enabled(has_baseline, egui::Button::new("Reset"))
                    .on_hover_text("Discard edits and restore the baseline")
                    .on_disabled_hover_text("No baseline set")
                    .clicked()
                {
                    action = Some(ToolbarAction::ResetToBaseline);
                }

                ui.menu_button("⚙", |ui| {
                    for (choice, name) in [
                        (DiffAlgorithm::Myers, "Myers"),
                        (DiffAlgorithm::Patience, "Patience"),
                    ] {
                        if ui.selectable_label(algorithm == choice, name).clicked() {
                            action = Some(ToolbarAction::SetAlgorithm(choice));
                            ui.close();
                        }
                    }
                    ui.separator();
                    if ui
                        .selectable_label(inline_highlight, "Highlight words")
                        .clicked()
                    {
                        action = Some(ToolbarAction::ToggleInlineHighlight);
                        ui.close();
                    }
                    let theme_label = match theme {
                        Theme::Light => "🌙 Dark theme",
                        Theme::Dark => "☀ Light theme",
                    };
                    if ui.button(theme_label).clicked() {
                        action = Some(ToolbarAction::ToggleTheme);
                        ui.close();
                    }
                });
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("-{}", stats.removed_count))
                        .color(Color32::from_rgb(150, 0, 0)),
                );
                ui.label(
                    RichText::new(format!("+{}", stats.added_count))
                        .color(Color32::from_rgb(0, 100, 0)),
                );
            });
        });

        action
    }
}

/// "2/5" when a hunk is selected, "–/5" otherwise
fn format_hunk_position(cursor: Option<usize>, hunk_count: usize) -> String {
    match (cursor, hunk_count) {
        (_, 0) => "No changes".to_string(),
        (Some(i), n) if i < n => format!("{}/{}", i + 1, n),
        (_, n) => format!("–/{}", n),
    }
}
