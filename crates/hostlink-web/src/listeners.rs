use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Install the host-level listeners: fullscreen-on-keypress and the gamepad
/// connect/disconnect diagnostics. Called once at mount.
pub fn install(
    window: &web_sys::Window,
    document: &web_sys::Document,
    fullscreen_key: String,
) -> Result<(), JsValue> {
    install_fullscreen_key(document, fullscreen_key);
    install_gamepad_events(window)?;
    Ok(())
}

fn install_fullscreen_key(document: &web_sys::Document, key: String) {
    let doc = document.clone();
    let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.code() == key {
                request_canvas_fullscreen(&doc);
            }
        },
    );
    document.set_onkeydown(Some(closure.as_ref().unchecked_ref()));
    // The listener lives for the page lifetime.
    closure.forget();
}

/// Fullscreen the first canvas in the document. A page without a canvas, or
/// a host that refuses the request, is a silent no-op.
fn request_canvas_fullscreen(document: &web_sys::Document) {
    let canvases = document.get_elements_by_tag_name("canvas");
    if let Some(canvas) = canvases.item(0) {
        if let Err(err) = canvas.request_fullscreen() {
            log::warn!("fullscreen request refused: {err:?}");
        }
    }
}

/// Connect/disconnect currently only feed diagnostics; polling does not
/// depend on these events.
fn install_gamepad_events(window: &web_sys::Window) -> Result<(), JsValue> {
    let connected = Closure::<dyn FnMut(web_sys::GamepadEvent)>::new(
        |event: web_sys::GamepadEvent| {
            if let Some(pad) = event.gamepad() {
                log::info!("gamepad {} connected", pad.index());
            }
        },
    );
    window.add_event_listener_with_callback("gamepadconnected", connected.as_ref().unchecked_ref())?;
    connected.forget();

    let disconnected = Closure::<dyn FnMut(web_sys::GamepadEvent)>::new(
        |event: web_sys::GamepadEvent| {
            if let Some(pad) = event.gamepad() {
                log::info!("gamepad {} disconnected", pad.index());
            }
        },
    );
    window.add_event_listener_with_callback(
        "gamepaddisconnected",
        disconnected.as_ref().unchecked_ref(),
    )?;
    disconnected.forget();

    Ok(())
}
