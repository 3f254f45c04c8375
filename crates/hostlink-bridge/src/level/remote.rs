use std::rc::Rc;

use serde_json::Value;

use crate::bridge::protocol::HostReply;
use crate::bridge::{Notifier, ReplySink};
use crate::error::BridgeError;

/// A completed HTTP exchange, reduced to what the bridge looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Completion callback for one transport request.
pub type TransportCallback = Box<dyn FnOnce(Result<HttpResponse, BridgeError>)>;

/// Fire-and-forget HTTP the host provides. Completions run later on the same
/// event queue as the channel handlers; there is no cancellation and no
/// timeout.
pub trait RemoteTransport {
    /// POST `body` to `url` with a JSON content type.
    fn post(&self, url: &str, body: &str, done: TransportCallback);
    /// GET `url`.
    fn get(&self, url: &str, done: TransportCallback);
}

/// Upload a save. HTTP 200 surfaces the response body through `notifier`
/// exactly once; any other outcome is logged and dropped. No retry.
pub fn save(
    transport: &dyn RemoteTransport,
    notifier: Rc<dyn Notifier>,
    endpoint: &str,
    payload: &str,
) {
    let url = endpoint.to_string();
    transport.post(
        endpoint,
        payload,
        Box::new(move |result| match result {
            Ok(response) if response.status == 200 => notifier.notify(&response.body),
            Ok(response) => log::warn!(
                "{}",
                BridgeError::UnexpectedStatus {
                    status: response.status,
                    url,
                }
            ),
            Err(err) => log::warn!("save dropped: {err}"),
        }),
    );
}

/// Fetch a level payload. Every completion path resolves the response
/// channel: success with the decoded data, anything else with an explicit
/// null, so the requester is never left hanging.
pub fn fetch(transport: &dyn RemoteTransport, url: &str, sink: Rc<dyn ReplySink>) {
    let target = url.to_string();
    transport.get(
        url,
        Box::new(move |result| {
            let data: Option<Value> = match result {
                Ok(response) if response.status == 200 => {
                    match serde_json::from_str(&response.body) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            log::warn!("level data from {target} is not valid JSON: {err}");
                            None
                        }
                    }
                }
                Ok(response) => {
                    log::warn!(
                        "{}",
                        BridgeError::UnexpectedStatus {
                            status: response.status,
                            url: target,
                        }
                    );
                    None
                }
                Err(err) => {
                    log::warn!("fetch dropped: {err}");
                    None
                }
            };
            sink.send(HostReply::ReceiveLevelData(data));
        }),
    );
}
