use eframe::egui::{self, Color32, FontId, TextStyle};

/// Window and panel background.
const BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);

/// Light, flat look with slightly larger text than egui's defaults.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(15.0));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(14.0));
        style.spacing.button_padding = egui::vec2(8.0, 6.0);
        style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    });
}
