// NetVision - ui/theme.rs
//
// Terminal colour scheme, risk colour mapping, and layout constants.
// No dependencies on app state or business logic.
//
// The palette imitates a phosphor CRT: near-black panels with a single
// accent hue (green or amber) for chrome, and fixed hues for risk levels.

use crate::core::model::{PortState, RiskLevel};
use egui::Color32;

/// Window and panel background.
pub const BACKGROUND: Color32 = Color32::from_rgb(5, 5, 5);

/// Recessed background for text inputs and the console feed.
pub const TERMINAL_BLACK: Color32 = Color32::from_rgb(0, 0, 0);

/// Classic green phosphor accent.
pub const PHOSPHOR_GREEN: Color32 = Color32::from_rgb(0, 255, 65);

/// Amber phosphor accent.
pub const PHOSPHOR_AMBER: Color32 = Color32::from_rgb(255, 176, 0);

/// Accent colour for the configured palette.
pub fn accent(amber: bool) -> Color32 {
    if amber {
        PHOSPHOR_AMBER
    } else {
        PHOSPHOR_GREEN
    }
}

/// Dimmed accent for secondary chrome (borders, inactive tabs).
pub fn accent_dim(amber: bool) -> Color32 {
    accent(amber).gamma_multiply(0.45)
}

/// Colour for a given risk level.
pub fn risk_colour(risk: &RiskLevel) -> Color32 {
    match risk {
        RiskLevel::Critical => Color32::from_rgb(248, 56, 56),  // red
        RiskLevel::High => Color32::from_rgb(249, 115, 22),     // orange
        RiskLevel::Medium => Color32::from_rgb(250, 204, 21),   // yellow
        RiskLevel::Low => Color32::from_rgb(34, 211, 238),      // cyan
    }
}

/// Background tint for a risk level (subtle, for card fills).
pub fn risk_bg_colour(risk: &RiskLevel) -> Option<Color32> {
    match risk {
        RiskLevel::Critical => Some(Color32::from_rgba_premultiplied(248, 56, 56, 22)),
        RiskLevel::High => Some(Color32::from_rgba_premultiplied(249, 115, 22, 16)),
        _ => None,
    }
}

/// Colour for a port state badge.
pub fn state_colour(state: &PortState, amber: bool) -> Color32 {
    match state {
        PortState::Open => accent(amber),
        PortState::Closed => Color32::from_rgb(107, 114, 128),
        PortState::Filtered => Color32::from_rgb(148, 163, 184),
    }
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 340.0;
pub const CONSOLE_MIN_HEIGHT: f32 = 180.0;
pub const STATUS_BAR_HEIGHT: f32 = 26.0;
pub const CARD_INNER_MARGIN: i8 = 10;

/// Apply the terminal style to the egui context.
///
/// Everything renders in the monospace family; egui's dark visuals are
/// recoloured to the near-black/accent palette. Explicitly coloured labels
/// (risk badges etc.) are unaffected by the text override.
pub fn apply(ctx: &egui::Context, amber: bool, font_size: f32) {
    use egui::{FontId, TextStyle};

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::monospace(font_size + 6.0)),
        (TextStyle::Body, FontId::monospace(font_size)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
        (TextStyle::Button, FontId::monospace(font_size)),
        (TextStyle::Small, FontId::monospace((font_size - 3.0).max(8.0))),
    ]
    .into();

    let mut visuals = egui::Visuals::dark();
    let accent = accent(amber);
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = TERMINAL_BLACK;
    visuals.override_text_color = Some(accent.gamma_multiply(0.85));
    visuals.selection.bg_fill = accent.gamma_multiply(0.35);
    visuals.hyperlink_color = accent;
    visuals.widgets.noninteractive.bg_stroke.color = accent_dim(amber);
    visuals.widgets.inactive.bg_stroke.color = accent_dim(amber);
    visuals.widgets.hovered.bg_stroke.color = accent;
    visuals.widgets.active.bg_stroke.color = accent;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}
