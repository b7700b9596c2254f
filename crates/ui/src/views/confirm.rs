use async_trait::async_trait;
use dioxus::prelude::*;
use tokio::sync::oneshot;

use services::{Confirm, ConfirmRequest};

pub struct PendingConfirm {
    request: ConfirmRequest,
    reply: oneshot::Sender<bool>,
}

/// `Confirm` backed by the on-screen modal.
///
/// The question stays pending until a button is pressed or the overlay is
/// dismissed; dismissal answers "no".
#[derive(Clone, Copy, PartialEq)]
pub struct ModalConfirm {
    pending: Signal<Option<PendingConfirm>>,
}

impl ModalConfirm {
    #[must_use]
    pub fn new(pending: Signal<Option<PendingConfirm>>) -> Self {
        Self { pending }
    }

    #[must_use]
    pub fn request(&self) -> Option<ConfirmRequest> {
        self.pending.read().as_ref().map(|pending| pending.request.clone())
    }

    pub fn answer(&self, accepted: bool) {
        let mut pending = self.pending;
        let taken = pending.write().take();
        if let Some(pending) = taken {
            // The asking task may be gone; nothing to tell it then.
            let _ = pending.reply.send(accepted);
        }
    }
}

#[async_trait(?Send)]
impl Confirm for ModalConfirm {
    async fn confirm(&self, request: &ConfirmRequest) -> bool {
        let (reply, answer) = oneshot::channel();
        let mut pending = self.pending;
        let stale = pending.write().replace(PendingConfirm {
            request: request.clone(),
            reply,
        });
        if let Some(stale) = stale {
            let _ = stale.reply.send(false);
        }
        answer.await.unwrap_or(false)
    }
}

#[component]
pub fn ConfirmModal(confirm: ModalConfirm) -> Element {
    let Some(request) = confirm.request() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| confirm.answer(false),
            div {
                class: "modal",
                role: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "{request.title}" }
                p { class: "modal-body", "{request.body}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| confirm.answer(true),
                        "{request.accept_label}"
                    }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| confirm.answer(false),
                        "{request.cancel_label}"
                    }
                }
            }
        }
    }
}
