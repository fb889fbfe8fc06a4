use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for a registered notification connection.
///
/// A user can hold several connections at once (several devices); each one
/// gets its own id so it can be dropped precisely when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

struct Connection {
    id: ConnectionId,
    sender: UnboundedSender<String>,
}

/// Registry of live notification connections, keyed by user.
///
/// Side collaborator of the like routes: when an incoming like lands, the
/// liker's id is pushed to every connection the target user holds. Not part
/// of the recommendation pipeline, and delivery is best effort.
#[derive(Default, Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<HashMap<Uuid, Vec<Connection>>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection for `user_id`.
    ///
    /// Returns the connection id (needed for `disconnect`) and the receiving
    /// end of the notification channel.
    pub async fn connect(&self, user_id: Uuid) -> (ConnectionId, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        let connection_id = ConnectionId::new();

        let mut guard = self.inner.write().await;
        guard.entry(user_id).or_default().push(Connection {
            id: connection_id,
            sender: tx,
        });

        tracing::debug!(
            "User {} connected, {} connection(s) open",
            user_id,
            guard.get(&user_id).map(|c| c.len()).unwrap_or(0)
        );

        (connection_id, rx)
    }

    /// Drop one connection. The user's entry disappears with its last
    /// connection, so the map never accumulates empty vectors.
    pub async fn disconnect(&self, user_id: Uuid, connection_id: ConnectionId) {
        let mut guard = self.inner.write().await;

        if let Some(connections) = guard.get_mut(&user_id) {
            connections.retain(|c| c.id != connection_id);
            if connections.is_empty() {
                guard.remove(&user_id);
            }
        }
    }

    /// Push `message` to every connection `user_id` holds.
    ///
    /// Connections whose receiver is gone are dropped on the way. A user with
    /// no connections is a silent no-op.
    pub async fn notify(&self, user_id: Uuid, message: String) {
        let mut guard = self.inner.write().await;
        if let Some(connections) = guard.get_mut(&user_id) {
            let before = connections.len();
            connections.retain(|c| c.sender.send(message.clone()).is_ok());
            let after = connections.len();

            if before != after {
                tracing::debug!(
                    "Notify {}: cleaned up {} dead connection(s), {} active",
                    user_id,
                    before - after,
                    after
                );
            }
            if connections.is_empty() {
                guard.remove(&user_id);
            }
        }
    }

    pub async fn connection_count(&self, user_id: Uuid) -> usize {
        let guard = self.inner.read().await;
        guard.get(&user_id).map(|c| c.len()).unwrap_or(0)
    }
}
