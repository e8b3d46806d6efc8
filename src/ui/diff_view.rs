use crate::diff::{CellKind, SideCell};
use crate::session::DiffSession;
use egui::{Align, Color32, FontId, Response, RichText, Stroke, TextFormat, Ui, Vec2, text::LayoutJob};

struct Palette {
    removed_line_bg: Color32,
    added_line_bg: Color32,
    removed_word_bg: Color32,
    added_word_bg: Color32,
    removed_text: Color32,
    added_text: Color32,
    blank_bg: Color32,
    active_stroke: Color32,
}

const LIGHT: Palette = Palette {
    removed_line_bg: Color32::from_rgb(255, 230, 230),
    added_line_bg: Color32::from_rgb(230, 255, 230),
    removed_word_bg: Color32::from_rgb(255, 170, 170),
    added_word_bg: Color32::from_rgb(170, 255, 170),
    removed_text: Color32::from_rgb(150, 0, 0),
    added_text: Color32::from_rgb(0, 100, 0),
    blank_bg: Color32::from_gray(245),
    active_stroke: Color32::from_rgb(90, 140, 230),
};

const DARK: Palette = Palette {
    removed_line_bg: Color32::from_rgb(70, 30, 30),
    added_line_bg: Color32::from_rgb(30, 60, 35),
    removed_word_bg: Color32::from_rgb(140, 50, 50),
    added_word_bg: Color32::from_rgb(45, 110, 55),
    removed_text: Color32::from_rgb(255, 190, 190),
    added_text: Color32::from_rgb(190, 255, 190),
    blank_bg: Color32::from_gray(35),
    active_stroke: Color32::from_rgb(120, 170, 255),
};

/// Render the two-column grid.
///
/// `scroll_to` is the row the view should bring into the middle of the viewport
/// this frame, usually the first row of the hunk just navigated to.
pub fn render_diff_view(ui: &mut Ui, session: &DiffSession, scroll_to: Option<usize>, font_size: f32) {
    let rows = session.rows();

    if !session.has_baseline() {
        render_empty_state(ui, "No baseline", "Open a baseline or press \"Set baseline\" to start comparing.");
        return;
    }
    if rows.is_empty() {
        render_empty_state(ui, "No changes", "The working copy matches the baseline.");
        return;
    }

    let palette = if ui.visuals().dark_mode { &DARK } else { &LIGHT };
    let font_id = FontId::monospace(font_size);
    let number_width = rows.len().to_string().len().max(3);

    // Two columns plus a little padding to prevent horizontal scrollbar jitter
    let col_w = (ui.available_width() / 2.0 - 12.0).max(120.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("side_by_side_grid")
                .num_columns(2)
                .min_col_width(0.0)
                .spacing(Vec2::new(4.0, 0.0))
                .show(ui, |ui| {
                    for (row_idx, row) in rows.iter().enumerate() {
                        let active = session.is_active_row(row_idx);
                        let cell = CellStyle {
                            palette,
                            font_id: &font_id,
                            number_width,
                            width: col_w,
                            active,
                        };

                        let response = render_cell(ui, &row.left, &cell);
                        render_cell(ui, &row.right, &cell);
                        ui.end_row();

                        if scroll_to == Some(row_idx) {
                            response.scroll_to_me(Some(Align::Center));
                        }
                    }
                });
        });
}

struct CellStyle<'a> {
    palette: &'a Palette,
    font_id: &'a FontId,
    number_width: usize,
    width: f32,
    active: bool,
}

fn render_cell(ui: &mut Ui, cell: &SideCell, style: &CellStyle<'_>) -> Response {
    let palette = style.palette;
    let (line_bg, word_bg, word_color) = match cell.kind {
        CellKind::Removed => (palette.removed_line_bg, palette.removed_word_bg, palette.removed_text),
        CellKind::Added => (palette.added_line_bg, palette.added_word_bg, palette.added_text),
        CellKind::Blank => (palette.blank_bg, Color32::TRANSPARENT, Color32::TRANSPARENT),
        CellKind::Context => (Color32::TRANSPARENT, Color32::TRANSPARENT, Color32::TRANSPARENT),
    };
    let stroke = if style.active {
        Stroke::new(1.0, palette.active_stroke)
    } else {
        Stroke::NONE
    };

    egui::Frame::new()
        .fill(line_bg)
        .stroke(stroke)
        .inner_margin(2.0)
        .show(ui, |ui| {
            ui.set_min_width(style.width - 4.0);
            ui.set_max_width(style.width - 4.0);

            let Some(line_number) = cell.line_number else {
                ui.label(RichText::new(" ").font(style.font_id.clone()));
                return;
            };

            let base_text_color = ui.visuals().text_color();
            let mut job = LayoutJob::default();

            let prefix = match cell.kind {
                CellKind::Removed => "-",
                CellKind::Added => "+",
                _ => " ",
            };
            job.append(
                &format!("{:>width$} {} ", line_number, prefix, width = style.number_width),
                0.0,
                TextFormat {
                    font_id: style.font_id.clone(),
                    color: base_text_color.gamma_multiply(0.5),
                    ..Default::default()
                },
            );

            for segment in &cell.segments {
                let format = if segment.highlighted {
                    TextFormat {
                        font_id: style.font_id.clone(),
                        color: word_color,
                        background: word_bg,
                        ..Default::default()
                    }
                } else {
                    TextFormat {
                        font_id: style.font_id.clone(),
                        color: base_text_color,
                        ..Default::default()
                    }
                };
                job.append(&segment.text, 0.0, format);
            }

            if !cell.newline && cell.kind != CellKind::Context {
                job.append(
                    "  (no newline)",
                    0.0,
                    TextFormat {
                        font_id: style.font_id.clone(),
                        color: base_text_color.gamma_multiply(0.4),
                        italics: true,
                        ..Default::default()
                    },
                );
            }

            job.wrap.max_width = style.width - 8.0;
            ui.add(egui::Label::new(job).wrap());
        })
        .response
}

fn render_empty_state(ui: &mut Ui, heading: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.heading(heading);
        ui.add_space(10.0);
        ui.label(hint);
    });
}
