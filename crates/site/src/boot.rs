//! Startup wiring: host-element lookup, bridge construction, and port subscription.

use std::rc::Rc;

use leptos::spawn_local;
use platform_bridge::{AppPorts, PlatformBridge};
use wasm_bindgen::{JsCast, UnwrapThrowExt};

use crate::web_app::TimerApp;

/// Handle to the mounted application and its outbound message ports.
pub struct AppHandle {
    ports: AppPorts,
    bridge: Rc<PlatformBridge>,
}

impl AppHandle {
    /// Ports the embedded application emits through.
    pub fn ports(&self) -> &AppPorts {
        &self.ports
    }

    /// The platform bridge serving this application instance.
    pub fn bridge(&self) -> &Rc<PlatformBridge> {
        &self.bridge
    }
}

/// Mounts the application into the element with the given DOM id and wires the bridge.
///
/// Also fires the one-shot notification-permission request; its completion is not
/// sequenced against later messages. A missing host element is a hosting-page markup
/// error and fails loudly on the platform's default error surface.
pub fn mount(host_element_id: &str) -> AppHandle {
    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .expect_throw("window is not available")
        .document()
        .expect_throw("document is not available");
    let host: web_sys::HtmlElement = document
        .get_element_by_id(host_element_id)
        .expect_throw("app host element not found")
        .unchecked_into();

    let ports = AppPorts::default();
    let bridge = Rc::new(PlatformBridge::new(platform_bridge_web::bridge_services()));
    wire_ports(&ports, Rc::clone(&bridge));

    {
        let bridge = Rc::clone(&bridge);
        spawn_local(async move {
            if let Err(err) = bridge.request_notification_permission().await {
                wasm_bindgen::throw_str(&err);
            }
        });
    }

    let app_ports = ports.clone();
    leptos::mount_to(host, move || leptos::view! { <TimerApp ports=app_ports/> });

    AppHandle { ports, bridge }
}

/// Subscribes the bridge to every outbound message channel.
///
/// Each message is handled in its own task; an unabsorbed handler error is rethrown
/// so it reaches the platform's default unhandled-error surface.
fn wire_ports(ports: &AppPorts, bridge: Rc<PlatformBridge>) {
    ports.subscribe(move |message| {
        let bridge = Rc::clone(&bridge);
        spawn_local(async move {
            if let Err(err) = bridge.handle(message).await {
                wasm_bindgen::throw_str(&err);
            }
        });
    });
}
