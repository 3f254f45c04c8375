use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use hostlink_bridge::error::BridgeError;
use hostlink_bridge::level::remote::{HttpResponse, RemoteTransport, TransportCallback};
use hostlink_bridge::{GamepadSource, KeyValueStorage, Notifier};

/// localStorage-backed key-value store.
pub struct WebStorage {
    storage: web_sys::Storage,
}

impl WebStorage {
    /// Fails when the page denies storage access (private-mode policies).
    pub fn new(window: &web_sys::Window) -> Result<Self, JsValue> {
        let storage = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        // Quota exhaustion lands here; the save is dropped like any other error.
        if let Err(err) = self.storage.set_item(key, value) {
            log::warn!("storage write for {key} failed: {err:?}");
        }
    }
}

/// Gamepad API reads. The list is re-read on every poll; the UI polls per
/// frame, so nothing is cached.
pub struct WebGamepads;

impl GamepadSource for WebGamepads {
    fn buttons(&self, slot: usize) -> Option<Vec<bool>> {
        let window = web_sys::window()?;
        let pads = window.navigator().get_gamepads().ok()?;
        // Empty slots come back as null and fail the cast.
        let pad: web_sys::Gamepad = pads.get(slot as u32).dyn_into().ok()?;
        let buttons = pad
            .buttons()
            .iter()
            .map(|button| {
                button
                    .dyn_into::<web_sys::GamepadButton>()
                    .map(|button| button.pressed())
                    .unwrap_or(false)
            })
            .collect();
        Some(buttons)
    }
}

/// window.alert, the blocking acknowledgement for remote saves.
pub struct WebNotifier;

impl Notifier for WebNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// fetch()-backed transport. Each request runs as a detached future on the
/// page's event queue and reports through its completion callback.
pub struct FetchTransport;

impl FetchTransport {
    fn run(request: Result<web_sys::Request, JsValue>, url: String, done: TransportCallback) {
        spawn_local(async move {
            done(Self::exchange(request, &url).await);
        });
    }

    async fn exchange(
        request: Result<web_sys::Request, JsValue>,
        url: &str,
    ) -> Result<HttpResponse, BridgeError> {
        let transport_err = |reason: JsValue| BridgeError::Transport {
            url: url.to_string(),
            reason: format!("{reason:?}"),
        };

        let request = request.map_err(transport_err)?;
        let window = web_sys::window().ok_or_else(|| BridgeError::Transport {
            url: url.to_string(),
            reason: "no window".to_string(),
        })?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_err)?;
        let response: web_sys::Response = response.dyn_into().map_err(transport_err)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(transport_err)?)
            .await
            .map_err(transport_err)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

impl RemoteTransport for FetchTransport {
    fn post(&self, url: &str, body: &str, done: TransportCallback) {
        let request = (|| {
            let init = web_sys::RequestInit::new();
            init.set_method("POST");
            init.set_body(&JsValue::from_str(body));
            let headers = web_sys::Headers::new()?;
            headers.set("Content-Type", "application/json")?;
            init.set_headers(&headers);
            web_sys::Request::new_with_str_and_init(url, &init)
        })();
        Self::run(request, url.to_string(), done);
    }

    fn get(&self, url: &str, done: TransportCallback) {
        let init = web_sys::RequestInit::new();
        init.set_method("GET");
        let request = web_sys::Request::new_with_str_and_init(url, &init);
        Self::run(request, url.to_string(), done);
    }
}
