//! txmodal: transaction confirmation dialog demo host

mod app;
mod render;
mod state;
mod ui;

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> eyre::Result<txmodal_adapters::ModalConfig> {
    use eyre::WrapErr;

    txmodal_adapters::ModalConfig::from_env().wrap_err("failed to load dialog config")
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting txmodal");

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("txmodal")
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "txmodal",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, load_config())))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    tracing_wasm::set_as_global_default();
    tracing::info!("Starting txmodal (web)");

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            web_sys::console::error_1(&"txmodal: canvas element not found".into());
            return;
        };

        // The browser has no process environment; always use defaults
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    Ok(Box::new(app::App::new(
                        cc,
                        Ok(txmodal_adapters::ModalConfig::default()),
                    )))
                }),
            )
            .await;
        if let Err(e) = result {
            web_sys::console::error_1(&format!("txmodal failed to start: {e:?}").into());
        }
    });
}
