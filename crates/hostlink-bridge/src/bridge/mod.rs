pub mod protocol;

use std::rc::Rc;

use crate::config::{BridgeConfig, InitFlags, PersistencePolicy};
use crate::error::BridgeResult;
use crate::gamepad::{self, GamepadSource};
use crate::level::remote::{self, RemoteTransport};
use crate::level::{KeyValueStorage, LevelStore};
use protocol::{HostReply, UiRequest};

/// Blocking, user-visible notification (alert in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Delivery of host→UI replies. The web crate routes these to subscribed
/// JS callbacks; tests collect them.
pub trait ReplySink {
    fn send(&self, reply: HostReply);
}

/// Host capabilities the bridge needs, injected at construction so tests
/// can substitute fakes.
pub struct HostCapabilities<S: KeyValueStorage> {
    pub storage: S,
    pub gamepads: Box<dyn GamepadSource>,
    pub transport: Box<dyn RemoteTransport>,
    pub notifier: Rc<dyn Notifier>,
}

/// Host-side adapter servicing the UI component's channel requests.
///
/// One instance per mounted UI. Handlers run on the host's event queue and
/// return without blocking; remote completions come back through the same
/// queue, so no handler ever runs concurrently with another.
pub struct HostBridge<S: KeyValueStorage> {
    config: BridgeConfig,
    store: LevelStore<S>,
    gamepads: Box<dyn GamepadSource>,
    transport: Box<dyn RemoteTransport>,
    notifier: Rc<dyn Notifier>,
    sink: Rc<dyn ReplySink>,
}

impl<S: KeyValueStorage> HostBridge<S> {
    pub fn new(
        config: BridgeConfig,
        caps: HostCapabilities<S>,
        sink: Rc<dyn ReplySink>,
    ) -> Self {
        let store = LevelStore::new(caps.storage, config.storage_key.clone());
        Self {
            config,
            store,
            gamepads: caps.gamepads,
            transport: caps.transport,
            notifier: caps.notifier,
            sink,
        }
    }

    /// Mount-time flags for the UI component.
    pub fn flags(&self) -> InitFlags {
        self.config.flags
    }

    /// Key code that requests fullscreen on the game canvas.
    pub fn fullscreen_key(&self) -> &str {
        &self.config.fullscreen_key
    }

    /// Decode and service one raw channel message from the UI side.
    pub fn dispatch(&mut self, channel: &str, payload: &str) -> BridgeResult<()> {
        let request = UiRequest::decode(channel, payload)?;
        self.handle(request);
        Ok(())
    }

    /// Service one decoded request.
    pub fn handle(&mut self, request: UiRequest) {
        match request {
            UiRequest::WriteLevelData { payload } => self.write_level_data(&payload),
            UiRequest::FetchLevelData { level } => self.fetch_level_data(level),
            UiRequest::GetGamePadState { slot } => self.poll_gamepad(slot),
        }
    }

    fn write_level_data(&mut self, payload: &str) {
        match &self.config.persistence {
            PersistencePolicy::Local => {
                log::info!("save level data");
                self.store.save(payload);
            }
            PersistencePolicy::Remote { save_endpoint, .. } => {
                remote::save(
                    &*self.transport,
                    Rc::clone(&self.notifier),
                    save_endpoint,
                    payload,
                );
            }
        }
    }

    /// The level number does not select a slot; see `LevelStore`.
    fn fetch_level_data(&mut self, _level: u32) {
        match &self.config.persistence {
            PersistencePolicy::Local => {
                let data = self.store.load().unwrap_or_else(|err| {
                    log::warn!("{err}");
                    None
                });
                self.sink.send(HostReply::ReceiveLevelData(data));
            }
            PersistencePolicy::Remote { level_url, .. } => {
                remote::fetch(&*self.transport, level_url, Rc::clone(&self.sink));
            }
        }
    }

    fn poll_gamepad(&self, slot: usize) {
        let snapshot = gamepad::poll(&*self.gamepads, slot);
        self.sink.send(HostReply::ReceiveGamePadState(snapshot));
    }
}
