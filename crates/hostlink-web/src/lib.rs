pub mod capabilities;
pub mod listeners;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use hostlink_bridge::{
    BridgeConfig, BridgeError, HostBridge, HostCapabilities, HostReply, InitFlags,
    PersistencePolicy, ReplySink,
};

use capabilities::{FetchTransport, WebGamepads, WebNotifier, WebStorage};

type WebBridge = HostBridge<WebStorage>;

thread_local! {
    static BRIDGE: RefCell<Option<WebBridge>> = RefCell::new(None);
    static SUBSCRIPTIONS: Rc<Subscriptions> = Rc::new(Subscriptions::default());
}

fn with_bridge<R>(f: impl FnOnce(&mut WebBridge) -> R) -> R {
    BRIDGE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let bridge = borrow
            .as_mut()
            .expect("Bridge not mounted. Call bridge_mount() first.");
        f(bridge)
    })
}

/// Host→UI delivery: replies go to whichever JS callback subscribed to the
/// channel. A reply on an unsubscribed channel is dropped with a log line.
#[derive(Default)]
struct Subscriptions {
    callbacks: RefCell<HashMap<String, js_sys::Function>>,
}

impl Subscriptions {
    fn subscribe(&self, channel: &str, callback: js_sys::Function) {
        self.callbacks
            .borrow_mut()
            .insert(channel.to_string(), callback);
    }
}

impl ReplySink for Subscriptions {
    fn send(&self, reply: HostReply) {
        let channel = reply.channel();
        let callbacks = self.callbacks.borrow();
        let Some(callback) = callbacks.get(channel) else {
            log::warn!("no subscriber on {channel}, reply dropped");
            return;
        };
        // The UI side receives decoded structured data, not a JSON string.
        let payload = js_sys::JSON::parse(&reply.payload().to_string()).unwrap_or(JsValue::NULL);
        if let Err(err) = callback.call1(&JsValue::NULL, &payload) {
            log::warn!("subscriber on {channel} threw: {err:?}");
        }
    }
}

/// Mount against the element matching `selector` with local persistence.
/// Returns the init flags `{width, height}` for the UI component, which the
/// host page instantiates into the mount element itself.
#[wasm_bindgen]
pub fn bridge_mount(selector: &str) -> Result<JsValue, JsValue> {
    mount_with(selector, PersistencePolicy::Local)
}

/// Mount with saves POSTed to `save_endpoint` and level payloads fetched
/// from `level_url` instead of local storage.
#[wasm_bindgen]
pub fn bridge_mount_remote(
    selector: &str,
    save_endpoint: &str,
    level_url: &str,
) -> Result<JsValue, JsValue> {
    mount_with(
        selector,
        PersistencePolicy::Remote {
            save_endpoint: save_endpoint.to_string(),
            level_url: level_url.to_string(),
        },
    )
}

fn mount_with(selector: &str, persistence: PersistencePolicy) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document.query_selector(selector)?.ok_or_else(|| {
        let err = BridgeError::MountNotFound(selector.to_string());
        JsValue::from_str(&err.to_string())
    })?;

    let flags = InitFlags {
        width: viewport_dimension(window.inner_width()),
        height: viewport_dimension(window.inner_height()),
    };
    let config = BridgeConfig {
        flags,
        persistence,
        ..Default::default()
    };

    let caps = HostCapabilities {
        storage: WebStorage::new(&window)?,
        gamepads: Box::new(WebGamepads),
        transport: Box::new(FetchTransport),
        notifier: Rc::new(WebNotifier),
    };
    let sink: Rc<Subscriptions> = SUBSCRIPTIONS.with(Rc::clone);
    let bridge = HostBridge::new(config, caps, sink);

    listeners::install(&window, &document, bridge.fullscreen_key().to_string())?;

    BRIDGE.with(|cell| {
        *cell.borrow_mut() = Some(bridge);
    });
    log::info!("hostlink: mounted on {selector}");

    flags_to_js(flags)
}

/// UI→host: post one message on a named channel. Decode failures and unknown
/// channels are logged, never surfaced to the UI.
#[wasm_bindgen]
pub fn bridge_send(channel: &str, payload: &str) {
    if let Err(err) = with_bridge(|bridge| bridge.dispatch(channel, payload)) {
        log::warn!("{err}");
    }
}

/// Host→UI: register a callback for a named channel. The callback receives
/// the decoded payload. Re-subscribing a channel replaces the callback.
#[wasm_bindgen]
pub fn bridge_subscribe(channel: &str, callback: js_sys::Function) {
    SUBSCRIPTIONS.with(|subscriptions| subscriptions.subscribe(channel, callback));
}

fn viewport_dimension(raw: Result<JsValue, JsValue>) -> u32 {
    raw.ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u32
}

fn flags_to_js(flags: InitFlags) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(&flags)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    js_sys::JSON::parse(&json)
}
