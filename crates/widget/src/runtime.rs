//! Message-passing boundary between the widget and its host.
//!
//! The host and the widget only exchange JSON text frames. Frames are
//! fire-and-forget and arrive in order per sender. The rendered cards are
//! published to the drawing surface through a watch channel.

use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::cards::CardView;
use crate::protocol::{self, HostMessage, ProtocolError, RenderArgs, WidgetMessage};
use crate::widget::ProgressWidget;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RuntimeError {
    #[error("widget channel closed")]
    Closed,
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// What the surface draws: the current cards and the negotiated frame height.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetDom {
    pub cards: Vec<CardView>,
    pub height: u32,
}

/// Create a widget runtime together with its host and surface ends.
#[must_use]
pub fn channel() -> (WidgetRuntime, HostPort, SurfacePort) {
    let (host_tx, host_rx) = mpsc::unbounded_channel();
    let (widget_tx, widget_rx) = mpsc::unbounded_channel();
    let (click_tx, click_rx) = mpsc::unbounded_channel();
    let (dom_tx, dom_rx) = watch::channel(WidgetDom::default());

    let runtime = WidgetRuntime {
        widget: ProgressWidget::new(),
        host_rx,
        click_rx,
        widget_tx,
        dom_tx,
    };
    let host = HostPort {
        sender: HostSender { tx: host_tx },
        receiver: HostReceiver { rx: widget_rx },
    };
    let surface = SurfacePort {
        clicks: click_tx,
        dom: dom_rx,
    };
    (runtime, host, surface)
}

pub struct WidgetRuntime {
    widget: ProgressWidget,
    host_rx: mpsc::UnboundedReceiver<String>,
    click_rx: mpsc::UnboundedReceiver<usize>,
    widget_tx: mpsc::UnboundedSender<String>,
    dom_tx: watch::Sender<WidgetDom>,
}

impl WidgetRuntime {
    /// Announce readiness, then serve host frames and surface clicks.
    ///
    /// Returns when the host's sender is dropped. Undecodable frames are
    /// logged and skipped.
    pub async fn run(mut self) {
        let startup = self.widget.load();
        self.publish();
        self.emit(startup);

        let mut clicks_open = true;
        loop {
            tokio::select! {
                frame = self.host_rx.recv() => {
                    let Some(frame) = frame else {
                        tracing::debug!("host sender dropped, widget runtime stopping");
                        break;
                    };
                    match protocol::decode_host(&frame) {
                        Ok(message) => {
                            let out = self.widget.handle(message);
                            self.publish();
                            self.emit(out);
                        }
                        Err(error) => tracing::warn!(%error, "dropping host frame"),
                    }
                }
                index = self.click_rx.recv(), if clicks_open => {
                    match index {
                        Some(index) => {
                            let out = self.widget.click(index);
                            if !out.is_empty() {
                                self.publish();
                            }
                            self.emit(out);
                        }
                        None => clicks_open = false,
                    }
                }
            }
        }
    }

    fn publish(&self) {
        self.dom_tx.send_replace(WidgetDom {
            cards: self.widget.cards().to_vec(),
            height: self.widget.height(),
        });
    }

    fn emit(&self, messages: Vec<WidgetMessage>) {
        for message in messages {
            match protocol::encode_widget(&message) {
                Ok(frame) => {
                    if self.widget_tx.send(frame).is_err() {
                        tracing::debug!("host receiver dropped");
                        return;
                    }
                }
                Err(error) => tracing::error!(%error, "failed to encode widget message"),
            }
        }
    }
}

/// Host end of the boundary.
pub struct HostPort {
    sender: HostSender,
    receiver: HostReceiver,
}

impl HostPort {
    #[must_use]
    pub fn split(self) -> (HostSender, HostReceiver) {
        (self.sender, self.receiver)
    }
}

#[derive(Clone, Debug)]
pub struct HostSender {
    tx: mpsc::UnboundedSender<String>,
}

impl HostSender {
    /// Push a snapshot to the widget.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn render(&self, args: &RenderArgs) -> Result<(), RuntimeError> {
        let frame = protocol::encode_host(&HostMessage::Render {
            args: Some(args.clone()),
        })?;
        self.send_raw(frame)
    }

    /// Send an already encoded frame. The widget validates it on arrival.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn send_raw(&self, frame: impl Into<String>) -> Result<(), RuntimeError> {
        self.tx.send(frame.into()).map_err(|_| RuntimeError::Closed)
    }
}

#[derive(Debug)]
pub struct HostReceiver {
    rx: mpsc::UnboundedReceiver<String>,
}

impl HostReceiver {
    /// Next valid widget message, or `None` once the runtime has stopped.
    pub async fn recv(&mut self) -> Option<WidgetMessage> {
        while let Some(frame) = self.rx.recv().await {
            match protocol::decode_widget(&frame) {
                Ok(message) => return Some(message),
                Err(error) => tracing::warn!(%error, "dropping widget frame"),
            }
        }
        None
    }
}

/// Drawing surface end: reads the DOM and reports clicks.
#[derive(Clone, Debug)]
pub struct SurfacePort {
    clicks: mpsc::UnboundedSender<usize>,
    dom: watch::Receiver<WidgetDom>,
}

impl SurfacePort {
    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn click(&self, index: usize) -> Result<(), RuntimeError> {
        self.clicks.send(index).map_err(|_| RuntimeError::Closed)
    }

    #[must_use]
    pub fn dom(&self) -> WidgetDom {
        self.dom.borrow().clone()
    }

    /// Wait for the next published DOM.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` once the runtime has stopped.
    pub async fn changed(&mut self) -> Result<WidgetDom, RuntimeError> {
        self.dom.changed().await.map_err(|_| RuntimeError::Closed)?;
        Ok(self.dom.borrow_and_update().clone())
    }
}
