use dioxus::prelude::*;

use widget::{CardView, HostSender, RenderArgs, SurfacePort, WidgetDom, WidgetMessage};

#[derive(Clone)]
struct WidgetHandles {
    sender: HostSender,
    surface: SurfacePort,
}

/// Live view of a hosted progress widget.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct ProgressWidgetHandle {
    pub dom: Signal<WidgetDom>,
    pub frame_height: Signal<u32>,
    /// Reports a click on the card at an index to the widget.
    pub click: Callback<usize>,
}

/// Start a progress widget for this scope and keep it fed with `args`.
///
/// Every change of `args` is pushed as a `render` frame; a selection coming
/// back from the widget is handed to `on_select`.
pub(crate) fn use_progress_widget(
    args: Memo<RenderArgs>,
    on_select: Callback<usize>,
) -> ProgressWidgetHandle {
    let mut frame_height = use_signal(|| 0_u32);
    let mut dom = use_signal(WidgetDom::default);

    let handles = use_hook(move || {
        let (runtime, host, surface) = widget::channel();
        let (sender, mut receiver) = host.split();
        spawn(runtime.run());
        spawn(async move {
            while let Some(message) = receiver.recv().await {
                match message {
                    WidgetMessage::ComponentReady { api_version } => {
                        tracing::debug!(api_version, "progress widget ready");
                    }
                    WidgetMessage::SetFrameHeight { height } => frame_height.set(height),
                    WidgetMessage::SetComponentValue { value, .. } => on_select.call(value),
                }
            }
        });
        let mut watcher = surface.clone();
        spawn(async move {
            while let Ok(next) = watcher.changed().await {
                dom.set(next);
            }
        });
        WidgetHandles { sender, surface }
    });

    let sender = handles.sender.clone();
    use_effect(move || {
        let args = args.read().clone();
        if let Err(error) = sender.render(&args) {
            tracing::warn!(%error, "progress widget stopped");
        }
    });

    let surface = handles.surface.clone();
    let click = use_callback(move |index: usize| {
        if let Err(error) = surface.click(index) {
            tracing::warn!(%error, index, "card click dropped");
        }
    });

    ProgressWidgetHandle {
        dom,
        frame_height,
        click,
    }
}

/// Hosts the progress widget and draws the cards it publishes.
#[component]
pub fn PrincipleCards(args: Memo<RenderArgs>, on_select: Callback<usize>) -> Element {
    let widget = use_progress_widget(args, on_select);
    let frame_height = widget.frame_height;
    let on_click = widget.click;
    let cards = widget.dom.read().cards.clone();

    rsx! {
        div {
            class: "principle-cards",
            style: "height: {frame_height}px;",
            for card in cards {
                PrincipleCard { key: "{card.index}", card: card.clone(), on_click }
            }
        }
    }
}

#[component]
fn PrincipleCard(card: CardView, on_click: Callback<usize>) -> Element {
    let index = card.index;

    rsx! {
        div {
            class: if card.is_active { "principle-card principle-card--active" } else { "principle-card" },
            onclick: move |evt| {
                evt.stop_propagation();
                on_click.call(index);
            },
            span {
                class: card.badge.class(),
                style: "background-color: {card.badge.color()};",
                "{card.badge_label()}"
            }
            div { class: "principle-card-body",
                div { class: "principle-card-name", "{card.name}" }
                div { class: "principle-card-caption", "{card.caption()}" }
                div { class: "principle-card-track",
                    div { class: "principle-card-bar", style: "width: {card.bar_width()};" }
                }
            }
        }
    }
}
