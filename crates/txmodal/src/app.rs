//! Main application state and update loop

use eframe::egui;
use txmodal_adapters::{ExplorerAdapter, ModalConfig, WatchAssetAdapter};
use txmodal_core::{
    ConfirmationModal, ContentView, ModalContent, ModalProps, TextEmphasis, ViewAction, ViewNode,
    WatchAssetPort,
};

use crate::render;
use crate::state::{DemoTxState, CONFIRM_SWAP_ACTION, DEMO_CHAINS};
use crate::ui;

type Modal = ConfirmationModal<ExplorerAdapter, WatchAssetAdapter>;

/// The demo host driving the confirmation dialog
pub struct App {
    modal: Modal,
    tx: DemoTxState,
    /// Config problems are shown in the side panel instead of aborting startup
    config_error: Option<String>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: eyre::Result<ModalConfig>) -> Self {
        let (config, config_error) = match config {
            Ok(config) => (config, None),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default dialog config");
                (ModalConfig::default(), Some(e.to_string()))
            }
        };
        let modal = config.configure(ConfirmationModal::new(
            ExplorerAdapter::with_config(&config),
            WatchAssetAdapter::default(),
        ));
        Self {
            modal,
            tx: DemoTxState::default(),
            config_error,
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Transaction Lifecycle");
        ui.label("Drive the dialog the way a swap page would.");

        if let Some(err) = &self.config_error {
            ui::error_message(ui, err);
        }

        ui::section_header(ui, "Session");
        egui::ComboBox::from_id_salt("chain_select")
            .selected_text(self.tx.chain_label())
            .show_ui(ui, |ui| {
                for (chain_id, name) in DEMO_CHAINS {
                    ui.selectable_value(&mut self.tx.session.chain_id, *chain_id, *name);
                }
            });
        ui.checkbox(&mut self.tx.offer_token, "Offer SUSHI watch-asset");

        ui::section_header(ui, "Pending text");
        ui.text_edit_singleline(&mut self.tx.pending.primary_text);
        ui.text_edit_singleline(&mut self.tx.pending.secondary_text);

        ui::section_header(ui, "Lifecycle");
        ui.horizontal_wrapped(|ui| {
            if ui::primary_button(ui, "Start attempt").clicked() {
                self.tx.start_attempt();
            }
            if ui::secondary_button(ui, "Submit").clicked() {
                self.tx.submit();
            }
            if ui::secondary_button(ui, "Fail").clicked() {
                self.tx.fail("Transaction rejected.");
            }
            if ui::secondary_button(ui, "Reset").clicked() {
                self.tx.reset();
            }
        });
        if !self.tx.is_open && ui::primary_button(ui, "Reopen dialog").clicked() {
            self.tx.reopen();
        }

        ui::section_header(ui, "Transitions");
        ui::card(ui, |ui| {
            if self.tx.history().is_empty() {
                ui.label(egui::RichText::new("No transitions yet").weak());
            }
            for t in self.tx.history() {
                ui.label(
                    egui::RichText::new(format!(
                        "{} -> {}  ({})",
                        t.from.label(),
                        t.to.label(),
                        t.reason
                    ))
                    .monospace(),
                );
            }
        });
    }

    fn handle_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::Dismiss => {}
            ViewAction::AddToken => {
                if let Some(token) = self.tx.watchable_token() {
                    if let Err(e) = self.modal.watch_asset.add_token(token) {
                        tracing::warn!(error = %e, "watch-asset request rejected");
                    }
                }
            }
            ViewAction::OpenLink(url) => {
                tracing::info!(%url, "opening explorer");
                ui::open_url_new_tab(&url);
            }
            ViewAction::CopyHash(hash) => ui::copy_to_clipboard(&hash),
            ViewAction::Custom(name) if name == CONFIRM_SWAP_ACTION => self.tx.start_attempt(),
            ViewAction::Custom(name) => tracing::debug!(%name, "unhandled custom action"),
        }
    }
}

/// Idle screen: a swap review with caller-owned slots.
fn swap_review(tx: &DemoTxState) -> ContentView {
    let summary = tx.pending.primary_text.clone();
    let chain = tx.chain_label();
    ContentView::new(
        "Confirm Swap",
        move || {
            ViewNode::Column(vec![
                ViewNode::text(summary.clone(), TextEmphasis::Strong),
                ViewNode::text(format!("Network: {chain}"), TextEmphasis::Secondary),
            ])
        },
        || {
            ViewNode::button(
                "Confirm Swap",
                ViewAction::Custom(CONFIRM_SWAP_ACTION.to_owned()),
            )
        },
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(10.0);
                    self.render_controls(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(
                egui::RichText::new("🍣 Swap")
                    .size(22.0)
                    .color(ui::ACCENT),
            );
            ui.label(format!("Network: {}", self.tx.chain_label()));
        });

        let tx = &self.tx;
        let props = ModalProps::new(tx.is_open, tx.dismiss.clone())
            .attempting(tx.attempting_txn)
            .hash(tx.hash.as_deref())
            .pending(&tx.pending)
            .currency_to_add(tx.token_to_add())
            .session(tx.session);
        let frame = self.modal.render(props, || match &tx.error {
            Some(message) => ModalContent::error(message.clone()),
            None => ModalContent::Idle(swap_review(tx)),
        });

        if frame.is_open {
            self.tx.tracker.observe(frame.state);
        }

        for action in render::show_modal(ctx, &frame) {
            self.handle_action(action);
        }

        if self.tx.sync_dismiss() {
            ctx.request_repaint();
        }

        // Watch-asset results land asynchronously in the browser
        if let Some(token) = self.tx.watchable_token() {
            if self.modal.watch_asset.is_in_flight(token) {
                ctx.request_repaint_after(std::time::Duration::from_millis(250));
            }
        }
    }
}
