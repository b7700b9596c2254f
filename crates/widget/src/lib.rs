//! Principle progress widget.
//!
//! The widget is an isolated surface that only talks to its host through
//! JSON messages: it announces readiness, asks for a frame height, renders
//! one card per principle from each `render` push, and reports card clicks.

#![forbid(unsafe_code)]

pub mod cards;
pub mod protocol;
pub mod runtime;
mod widget;

pub use cards::{Badge, CardError, CardView, ROW_HEIGHT, build_cards, frame_height};
pub use protocol::{
    API_VERSION, DataType, HostMessage, ProtocolError, RenderArgs, WidgetMessage, decode_host,
    decode_widget, encode_host, encode_widget,
};
pub use runtime::{HostPort, HostReceiver, HostSender, RuntimeError, SurfacePort, WidgetDom, WidgetRuntime, channel};
pub use widget::ProgressWidget;
