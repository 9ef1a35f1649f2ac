//! Shared header widgets: flag buttons and level readouts.

use crate::theme::Theme;
use egui::{self, Color32, Rounding, Stroke, Vec2};

/// Small letter button for a track flag (mute, solo). Returns `true` if clicked.
pub fn flag_button(ui: &mut egui::Ui, letter: &str, on: bool, on_color: Color32) -> bool {
    let (text_color, fill) = if on {
        (Theme::with_alpha(on_color, 230), Theme::with_alpha(on_color, 40))
    } else {
        (Theme::with_alpha(Theme::t3(), 102), Color32::TRANSPARENT)
    };
    let button = egui::Button::new(
        egui::RichText::new(letter)
            .size(Theme::FONT_XS)
            .color(text_color)
            .strong(),
    )
    .fill(fill)
    .stroke(Stroke::NONE)
    .rounding(Rounding::same(2.0))
    .min_size(Vec2::new(18.0, 16.0));

    ui.add(button).clicked()
}

/// Compact 0..=100 level readout that can be dragged.
///
/// Returns the new value when the user changed it this frame.
pub fn level_readout(ui: &mut egui::Ui, label: &str, value: f32) -> Option<f32> {
    ui.label(
        egui::RichText::new(label)
            .size(Theme::FONT_XS)
            .color(Theme::t3()),
    );
    let mut edited = value;
    let response = ui.add(
        egui::DragValue::new(&mut edited)
            .range(0.0..=100.0)
            .speed(0.5)
            .max_decimals(0),
    );
    (response.changed() && edited != value).then_some(edited)
}

/// Icon-only button used in headers and the toolbar.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, tooltip: &str) -> bool {
    let button = egui::Button::new(
        egui::RichText::new(icon)
            .size(Theme::FONT_SM)
            .color(Theme::t2()),
    )
    .fill(Color32::TRANSPARENT)
    .stroke(Stroke::NONE)
    .rounding(Rounding::same(2.0));

    ui.add(button).on_hover_text(tooltip).clicked()
}
