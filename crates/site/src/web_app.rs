use leptos::*;
use platform_bridge::{AppMessage, AppPorts};

/// Placeholder application view wired to the outbound message ports.
///
/// The real application replaces this view; anything rendered here reaches the host
/// page through the [`AppPorts`] provided in context. The controls below exercise one
/// channel each.
#[component]
pub fn TimerApp(ports: AppPorts) -> impl IntoView {
    provide_context(ports.clone());

    let (next_up, set_next_up) = create_signal("Alice".to_string());

    let title_ports = ports.clone();
    let alarm_ports = ports.clone();
    let notify_ports = ports;

    view! {
        <section class="timer-root">
            <label>
                "Next up"
                <input
                    prop:value=next_up
                    on:input=move |ev| set_next_up.set(event_target_value(&ev))
                />
            </label>
            <button on:click=move |_| {
                title_ports.emit(AppMessage::SetTitle(format!("{} is next", next_up.get())));
            }>"Set title"</button>
            <button on:click=move |_| alarm_ports.emit(AppMessage::Alarm)>
                "Sound the alarm"
            </button>
            <button on:click=move |_| notify_ports.emit(AppMessage::NotifyNext(next_up.get()))>
                "Notify"
            </button>
        </section>
    }
}
