//! Draws a `ModalFrame` with egui.

use eframe::egui;
use txmodal_core::{Animation, ModalFrame, StatusIcon, TextEmphasis, ViewAction, ViewNode};

use crate::ui;

const MODAL_WIDTH: f32 = 380.0;
const BACKDROP_ID: &str = "txmodal_backdrop";

/// Show the dialog and return the actions the user triggered this frame.
///
/// Dismiss actions are already routed to the frame's handle; only host actions
/// are returned.
pub fn show_modal(ctx: &egui::Context, frame: &ModalFrame) -> Vec<ViewAction> {
    if !frame.is_open {
        return Vec::new();
    }

    let mut actions = Vec::new();
    let screen = ctx.screen_rect();

    if show_backdrop(ctx, screen) {
        actions.push(ViewAction::Dismiss);
    }

    let max_height = screen.height() * frame.max_height_percent / 100.0;

    egui::Window::new("transaction_confirmation")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .default_width(MODAL_WIDTH)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(max_height)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        render_node(ui, &frame.body, &mut actions);
                    });
                });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        actions.push(ViewAction::Dismiss);
    }

    actions
        .into_iter()
        .filter_map(|action| frame.dispatch(action))
        .collect()
}

/// Dimmed layer between the host panels and the dialog. It swallows pointer
/// input so nothing behind the dialog reacts; a click on it dismisses.
fn show_backdrop(ctx: &egui::Context, screen: egui::Rect) -> bool {
    egui::Area::new(egui::Id::new(BACKDROP_ID))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .interactable(true)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(screen.size(), egui::Sense::click_and_drag());
            ui.painter()
                .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(160));
            response.clicked()
        })
        .inner
}

fn render_node(ui: &mut egui::Ui, node: &ViewNode, actions: &mut Vec<ViewAction>) {
    match node {
        ViewNode::Column(children) => {
            for child in children {
                render_node(ui, child, actions);
            }
        }
        ViewNode::Close => {
            if ui::close_icon(ui).clicked() {
                actions.push(ViewAction::Dismiss);
            }
        }
        ViewNode::Header { title } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(title).size(18.0).strong());
                if ui::close_icon(ui).clicked() {
                    actions.push(ViewAction::Dismiss);
                }
            });
            ui.separator();
        }
        ViewNode::Animation(Animation::LoadingRollingCircle) => {
            ui.add_space(8.0);
            ui.add(egui::Spinner::new().size(72.0).color(ui::ACCENT));
            ui.add_space(12.0);
        }
        ViewNode::Icon(icon) => {
            let (glyph, color) = match icon {
                StatusIcon::Submitted => ("⬆", egui::Color32::from_rgb(9, 147, 236)),
                StatusIcon::Alert => ("⚠", egui::Color32::from_rgb(220, 80, 80)),
                StatusIcon::Success => ("✔", egui::Color32::from_rgb(80, 200, 120)),
            };
            ui.label(egui::RichText::new(glyph).size(64.0).color(color));
        }
        ViewNode::Text { text, emphasis } => {
            if text.is_empty() {
                return;
            }
            let rich = egui::RichText::new(text);
            let rich = match emphasis {
                TextEmphasis::Title => rich.size(20.0).strong(),
                TextEmphasis::Strong => rich.strong(),
                TextEmphasis::Secondary => rich.small().weak(),
                TextEmphasis::Error => rich.color(egui::Color32::from_rgb(220, 80, 80)),
            };
            ui.label(rich);
        }
        ViewNode::Link { label, url } => {
            let response = ui
                .link(egui::RichText::new(label).strong())
                .on_hover_text(url.as_str());
            if response.clicked() {
                actions.push(ViewAction::OpenLink(url.clone()));
            }
        }
        ViewNode::Button { label, action } => {
            let clicked = match action {
                ViewAction::Dismiss => ui::secondary_button(ui, label).clicked(),
                _ => ui::primary_button(ui, label).clicked(),
            };
            if clicked {
                actions.push(action.clone());
            }
        }
        ViewNode::Copyable { display, action } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).monospace());
                if ui
                    .small_button("📋")
                    .on_hover_text("Copy to clipboard")
                    .clicked()
                {
                    actions.push(action.clone());
                }
            });
        }
        ViewNode::Spacer => {
            ui.add_space(12.0);
        }
        ViewNode::Custom(marker) => {
            ui.label(marker);
        }
    }
}
