//! Publish/subscribe of query snapshots. A publish doesn't carry data: it tells every subscriber
//! of a topic that their snapshot is stale, and each subscriber reloads it.

use futures::stream::{self, Stream};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Weak};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, error};

/// Pending notifications kept per subscriber. A subscriber that falls further behind reloads once.
const TOPIC_CAPACITY: usize = 16;

pub const CHAT_TOPIC: &str = "chat";

pub fn comments_topic(comic_slug: &str) -> String {
    format!("comments:{}", comic_slug)
}

type Topics = HashMap<String, broadcast::Sender<()>>;

#[derive(Clone, Default)]
pub struct SnapshotHub {
    topics: Arc<Mutex<Topics>>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tell every live subscriber of `topic` to reload. Topics nobody listens to are ignored.
    pub fn publish(&self, topic: &str) {
        let topics = self.topics.lock();
        if let Some(sender) = topics.get(topic) {
            let notified = sender.send(()).unwrap_or(0);
            debug!(topic, notified, "Published snapshot change.");
        }
    }

    pub fn subscribe(&self, topic: &str) -> Subscription {
        let mut topics = self.topics.lock();
        let receiver = topics
            .entry(String::from(topic))
            .or_insert_with(|| broadcast::channel(TOPIC_CAPACITY).0)
            .subscribe();
        Subscription {
            topic: String::from(topic),
            receiver: Some(receiver),
            topics: Arc::downgrade(&self.topics),
            initial: true,
        }
    }

    #[cfg(test)]
    pub fn topic_count(&self) -> usize {
        self.topics.lock().len()
    }

    #[cfg(test)]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .lock()
            .get(topic)
            .map(|s| s.receiver_count())
            .unwrap_or(0)
    }
}

/// One consumer's interest in a topic. Dropping it unsubscribes, and the last subscription of a
/// topic removes the topic.
pub struct Subscription {
    topic: String,
    receiver: Option<broadcast::Receiver<()>>,
    topics: Weak<Mutex<Topics>>,
    initial: bool,
}

impl Subscription {
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Wait until a fresh snapshot should be taken. Resolves immediately the first time, then
    /// once per publish, folding any notifications that piled up meanwhile into one. Returns
    /// `false` once the hub is gone.
    pub async fn changed(&mut self) -> bool {
        if self.initial {
            self.initial = false;
            return true;
        }
        let receiver = match self.receiver.as_mut() {
            Some(r) => r,
            None => return false,
        };
        match receiver.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => {}
            Err(RecvError::Closed) => return false,
        }
        loop {
            match receiver.try_recv() {
                Ok(()) | Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Closed) => return true,
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let topics = match self.topics.upgrade() {
            Some(t) => t,
            None => return,
        };
        let mut topics = topics.lock();
        drop(self.receiver.take());
        let unused = topics
            .get(&self.topic)
            .map(|s| s.receiver_count() == 0)
            .unwrap_or(false);
        if unused {
            topics.remove(&self.topic);
            debug!(topic = self.topic.as_str(), "Removed topic without subscribers.");
        }
    }
}

/// Turn a [Subscription] into the sequence of snapshots produced by `load`: one straight away,
/// then one after every publish. The sequence ends when the hub is dropped or `load` fails; a
/// consumer restarts it by subscribing again.
pub fn snapshots<T, F, Fut>(subscription: Subscription, load: F) -> impl Stream<Item = T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    stream::unfold(
        (subscription, load),
        |(mut subscription, load)| async move {
            if !subscription.changed().await {
                return None;
            }
            match load().await {
                Ok(snapshot) => Some((snapshot, (subscription, load))),
                Err(e) => {
                    error!(
                        "Failed to load the snapshot for topic \"{}\": {:?}",
                        subscription.topic(),
                        e
                    );
                    None
                }
            }
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use futures::{FutureExt, StreamExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[actix_rt::test]
    async fn changed_resolves_immediately_for_initial_snapshot() {
        // Arrange
        let hub = SnapshotHub::new();
        let mut subscription = hub.subscribe(CHAT_TOPIC);

        // Act
        let first = subscription.changed().now_or_never();
        let second = subscription.changed().now_or_never();

        // Assert
        assert_eq!(Some(true), first);
        assert_eq!(None, second);
    }

    #[actix_rt::test]
    async fn changed_resolves_once_per_publish() {
        // Arrange
        let hub = SnapshotHub::new();
        let mut subscription = hub.subscribe(CHAT_TOPIC);
        subscription.changed().await;

        // Act
        hub.publish(CHAT_TOPIC);
        let actual = subscription.changed().await;

        // Assert
        assert!(actual);
        assert_eq!(None, subscription.changed().now_or_never());
    }

    #[actix_rt::test]
    async fn changed_coalesces_pending_publishes() {
        // Arrange
        let hub = SnapshotHub::new();
        let mut subscription = hub.subscribe(CHAT_TOPIC);
        subscription.changed().await;

        // Act
        for _ in 0..(TOPIC_CAPACITY * 2) {
            hub.publish(CHAT_TOPIC);
        }
        let actual = subscription.changed().await;

        // Assert
        assert!(actual);
        assert_eq!(None, subscription.changed().now_or_never());
    }

    #[actix_rt::test]
    async fn publish_only_reaches_subscribers_of_the_topic() {
        // Arrange
        let hub = SnapshotHub::new();
        let mut chat = hub.subscribe(CHAT_TOPIC);
        let mut comments = hub.subscribe(&comments_topic("solo-leveling"));
        chat.changed().await;
        comments.changed().await;

        // Act
        hub.publish(&comments_topic("solo-leveling"));

        // Assert
        assert_eq!(None, chat.changed().now_or_never());
        assert_eq!(Some(true), comments.changed().now_or_never());
    }

    #[test]
    fn dropping_last_subscription_removes_topic() {
        // Arrange
        let hub = SnapshotHub::new();
        let first = hub.subscribe(CHAT_TOPIC);
        let second = hub.subscribe(CHAT_TOPIC);

        // Act
        drop(first);
        let after_first = hub.topic_count();
        drop(second);

        // Assert
        assert_eq!(1, after_first);
        assert_eq!(0, hub.topic_count());
        assert_eq!(0, hub.subscriber_count(CHAT_TOPIC));
    }

    #[actix_rt::test]
    async fn changed_returns_false_once_hub_is_dropped() {
        // Arrange
        let hub = SnapshotHub::new();
        let mut subscription = hub.subscribe(CHAT_TOPIC);
        subscription.changed().await;

        // Act
        drop(hub);
        let actual = subscription.changed().await;

        // Assert
        assert!(!actual);
    }

    #[actix_rt::test]
    async fn snapshots_yields_initial_snapshot_then_one_per_publish() {
        // Arrange
        let hub = SnapshotHub::new();
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let stream = snapshots(hub.subscribe(CHAT_TOPIC), move || {
            let counter = counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        });
        futures::pin_mut!(stream);

        // Act
        let initial = stream.next().await;
        hub.publish(CHAT_TOPIC);
        let after_publish = stream.next().await;
        drop(hub);
        let after_drop = stream.next().await;

        // Assert
        assert_eq!(Some(1), initial);
        assert_eq!(Some(2), after_publish);
        assert_eq!(None, after_drop);
        assert_eq!(2, loads.load(Ordering::SeqCst));
    }

    #[actix_rt::test]
    async fn snapshots_ends_when_load_fails() {
        // Arrange
        let hub = SnapshotHub::new();
        let stream = snapshots(hub.subscribe(CHAT_TOPIC), || async {
            Err::<u32, _>(anyhow::anyhow!("database unavailable"))
        });
        futures::pin_mut!(stream);

        // Act
        let actual = stream.next().await;

        // Assert
        assert_eq!(None, actual);
    }
}
