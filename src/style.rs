use crate::config::Theme;
use egui::{Color32, Context, Stroke, Style, Visuals};

pub fn configure_style(ctx: &Context, theme: Theme) {
    let mut style = Style::default();

    // Dense rows for the diff grid
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.window_margin = egui::Margin::same(10);

    ctx.set_style(style);

    let mut visuals = match theme {
        Theme::Light => Visuals::light(),
        Theme::Dark => Visuals::dark(),
    };
    visuals.window_shadow = egui::epaint::Shadow::NONE;
    visuals.popup_shadow = egui::epaint::Shadow::NONE;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.0, Color32::TRANSPARENT);

    if theme == Theme::Light {
        visuals.selection.bg_fill = Color32::from_rgb(200, 220, 255);
        visuals.selection.stroke = Stroke::new(1.0, Color32::from_rgb(100, 100, 100));
    }

    ctx.set_visuals(visuals);
}
