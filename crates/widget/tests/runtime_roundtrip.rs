use std::time::Duration;

use serde_json::json;
use widget::{Badge, RenderArgs, WidgetMessage, channel};

fn three_principles(current_index: usize) -> RenderArgs {
    serde_json::from_value(json!({
        "principles_names": ["Transparency", "Explainability", "Repeatability"],
        "principles_keys": ["1) transparency", "2) explainability", "3) repeatability"],
        "principles_data": {
            "1) transparency": {"total_checks": 2, "answered_checks": 2},
            "2) explainability": {"total_checks": 3, "answered_checks": 1},
            "3) repeatability": {"total_checks": 0, "answered_checks": 0}
        },
        "current_index": current_index
    }))
    .unwrap()
}

async fn next(receiver: &mut widget::HostReceiver) -> WidgetMessage {
    tokio::time::timeout(Duration::from_secs(2), receiver.recv())
        .await
        .expect("widget message in time")
        .expect("runtime still running")
}

#[tokio::test]
async fn handshake_render_and_click() {
    let (runtime, host, mut surface) = channel();
    let task = tokio::spawn(runtime.run());
    let (sender, mut receiver) = host.split();

    assert_eq!(next(&mut receiver).await, WidgetMessage::ready());
    assert_eq!(
        next(&mut receiver).await,
        WidgetMessage::SetFrameHeight { height: 0 }
    );

    sender.render(&three_principles(1)).unwrap();
    assert_eq!(
        next(&mut receiver).await,
        WidgetMessage::SetFrameHeight { height: 270 }
    );

    let dom = surface.dom();
    assert_eq!(dom.height, 270);
    let badges: Vec<Badge> = dom.cards.iter().map(|card| card.badge).collect();
    assert_eq!(badges, vec![Badge::Completed, Badge::Active, Badge::Pending]);
    let bars: Vec<String> = dom.cards.iter().map(|card| card.bar_width()).collect();
    assert_eq!(bars, vec!["100%", "33.3%", "0%"]);

    surface.click(2).unwrap();
    assert_eq!(next(&mut receiver).await, WidgetMessage::select(2));
    let dom = surface.changed().await.unwrap();
    assert!(dom.cards[2].is_active);
    assert!(!dom.cards[1].is_active);

    drop(sender);
    task.await.unwrap();
}

#[tokio::test]
async fn malformed_frames_are_skipped() {
    let (runtime, host, surface) = channel();
    let task = tokio::spawn(runtime.run());
    let (sender, mut receiver) = host.split();
    next(&mut receiver).await;
    next(&mut receiver).await;

    sender.send_raw("{not json").unwrap();
    sender.send_raw(r#"{"type": "explode"}"#).unwrap();
    sender.send_raw(r#"{"type": "render"}"#).unwrap();

    assert_eq!(
        next(&mut receiver).await,
        WidgetMessage::SetFrameHeight { height: 0 }
    );
    assert!(surface.dom().cards.is_empty());

    drop(sender);
    task.await.unwrap();
}

#[tokio::test]
async fn click_on_unknown_card_sends_nothing() {
    let (runtime, host, surface) = channel();
    let task = tokio::spawn(runtime.run());
    let (sender, mut receiver) = host.split();
    next(&mut receiver).await;
    next(&mut receiver).await;

    sender.render(&three_principles(0)).unwrap();
    next(&mut receiver).await;

    surface.click(9).unwrap();
    surface.click(1).unwrap();
    assert_eq!(next(&mut receiver).await, WidgetMessage::select(1));

    drop(sender);
    task.await.unwrap();
    assert!(receiver.recv().await.is_none());
}

#[tokio::test]
async fn malformed_render_clears_previous_cards() {
    let (runtime, host, surface) = channel();
    let task = tokio::spawn(runtime.run());
    let (sender, mut receiver) = host.split();
    next(&mut receiver).await;
    next(&mut receiver).await;

    sender.render(&three_principles(1)).unwrap();
    assert_eq!(
        next(&mut receiver).await,
        WidgetMessage::SetFrameHeight { height: 270 }
    );
    assert_eq!(surface.dom().cards.len(), 3);

    sender
        .send_raw(r#"{"type": "render", "args": {"principles_names": "oops", "current_index": -1}}"#)
        .unwrap();
    assert_eq!(
        next(&mut receiver).await,
        WidgetMessage::SetFrameHeight { height: 0 }
    );
    let dom = surface.dom();
    assert!(dom.cards.is_empty());
    assert_eq!(dom.height, 0);

    drop(sender);
    task.await.unwrap();
}
