use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, ChainId};
use serde_json::Value;

use txmodal_core::{PortError, Token, WatchAssetPort};

/// Wallet watch-asset (EIP-747) collaborator.
///
/// In the browser the request goes to `window.ethereum` and success is recorded
/// when the wallet resolves `true`. Elsewhere requests are accepted immediately.
#[derive(Debug, Clone, Default)]
pub struct WatchAssetAdapter {
    state: Arc<Mutex<WatchState>>,
}

#[derive(Debug, Default)]
struct WatchState {
    watched: HashSet<(ChainId, Address)>,
    in_flight: HashSet<(ChainId, Address)>,
    failures: HashMap<(ChainId, Address), String>,
}

impl WatchAssetAdapter {
    pub fn is_in_flight(&self, token: &Token) -> bool {
        self.state
            .lock()
            .map(|g| g.in_flight.contains(&key(token)))
            .unwrap_or(false)
    }

    fn record_result(&self, token_key: (ChainId, Address), result: Result<bool, PortError>) {
        let Ok(mut g) = self.state.lock() else {
            return;
        };
        g.in_flight.remove(&token_key);
        match result {
            Ok(true) => {
                g.watched.insert(token_key);
                g.failures.remove(&token_key);
            }
            Ok(false) => {
                tracing::info!(token = %token_key.1, "wallet declined watch-asset request");
                g.failures
                    .insert(token_key, "wallet declined the request".to_owned());
            }
            Err(e) => {
                tracing::warn!(token = %token_key.1, error = %e, "watch-asset request failed");
                g.failures.insert(token_key, e.to_string());
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn dispatch(&self, token_key: (ChainId, Address), request: Value) {
        let adapter = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = wasm_request("wallet_watchAsset", request)
                .await
                .map(|v| v.as_bool().unwrap_or(false));
            adapter.record_result(token_key, result);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn dispatch(&self, token_key: (ChainId, Address), _request: Value) {
        self.record_result(token_key, Ok(true));
    }
}

impl WatchAssetPort for WatchAssetAdapter {
    fn add_token(&self, token: &Token) -> Result<(), PortError> {
        let token_key = key(token);
        {
            let mut g = self
                .state
                .lock()
                .map_err(|e| PortError::Transport(format!("watch-asset lock poisoned: {e}")))?;
            if g.watched.contains(&token_key) || g.in_flight.contains(&token_key) {
                return Ok(());
            }
            g.in_flight.insert(token_key);
        }
        tracing::info!(
            symbol = %token.symbol,
            address = %token.address,
            "requesting wallet watch-asset"
        );
        self.dispatch(token_key, watch_asset_params(token));
        Ok(())
    }

    fn success(&self, token: &Token) -> bool {
        self.state
            .lock()
            .map(|g| g.watched.contains(&key(token)))
            .unwrap_or(false)
    }

    fn failure(&self, token: &Token) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|g| g.failures.get(&key(token)).cloned())
    }
}

fn key(token: &Token) -> (ChainId, Address) {
    (token.chain_id, token.address)
}

/// `wallet_watchAsset` params for an ERC-20 token.
pub fn watch_asset_params(token: &Token) -> Value {
    let mut options = serde_json::json!({
        "address": token.address.to_checksum(None),
        "symbol": token.symbol,
        "decimals": token.decimals,
    });
    if let Some(image) = &token.logo_uri {
        options["image"] = Value::String(image.clone());
    }
    serde_json::json!({
        "type": "ERC20",
        "options": options,
    })
}

#[cfg(target_arch = "wasm32")]
async fn wasm_request(method: &str, params: Value) -> Result<Value, PortError> {
    use wasm_bindgen::JsCast;

    let provider = browser_provider()?;
    let request_fn = js_sys::Reflect::get(&provider, &wasm_bindgen::JsValue::from_str("request"))
        .ok()
        .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        .ok_or(PortError::NotImplemented(
            "window.ethereum.request is unavailable",
        ))?;

    let request = serde_json::json!({
        "method": method,
        "params": params,
    });
    let request_js = serde_wasm_bindgen::to_value(&request)
        .map_err(|e| PortError::Transport(format!("failed to encode wasm request: {e}")))?;
    let promise_js = request_fn
        .call1(&provider, &request_js)
        .map_err(|e| PortError::Transport(format!("provider request dispatch failed: {e:?}")))?;
    let promise = promise_js.dyn_into::<js_sys::Promise>().map_err(|_| {
        PortError::Transport("provider request did not return Promise".to_owned())
    })?;
    let result_js = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| PortError::Transport(format!("provider request rejected: {e:?}")))?;
    serde_wasm_bindgen::from_value(result_js)
        .map_err(|e| PortError::Transport(format!("failed to decode wasm response: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn browser_provider() -> Result<wasm_bindgen::JsValue, PortError> {
    let window = web_sys::window().ok_or(PortError::NotImplemented("window is unavailable"))?;
    let provider = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("ethereum"))
        .map_err(|e| PortError::Transport(format!("read window.ethereum failed: {e:?}")))?;
    if provider.is_undefined() || provider.is_null() {
        return Err(PortError::NotImplemented("window.ethereum is unavailable"));
    }
    Ok(provider)
}
