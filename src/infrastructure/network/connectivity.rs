use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

use crate::application::ports::{ConnectivityEvent, ConnectivityProvider};

/// In-process connectivity funnel. The platform shell pushes its
/// availability callbacks through `set_online`/`set_unmetered`; subscribers
/// see a single broadcast stream. State lives here, never in statics.
pub struct ChannelConnectivity {
    online: AtomicBool,
    unmetered: AtomicBool,
    events: broadcast::Sender<ConnectivityEvent>,
}

impl ChannelConnectivity {
    pub fn new(online: bool, unmetered: bool) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            online: AtomicBool::new(online),
            unmetered: AtomicBool::new(unmetered),
            events,
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
        let event = if online {
            ConnectivityEvent::Available
        } else {
            ConnectivityEvent::Lost
        };
        // No subscribers yet is fine.
        let _ = self.events.send(event);
    }

    pub fn set_unmetered(&self, unmetered: bool) {
        self.unmetered.store(unmetered, Ordering::SeqCst);
    }
}

impl ConnectivityProvider for ChannelConnectivity {
    fn has_internet(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    fn is_unmetered(&self) -> bool {
        self.unmetered.load(Ordering::SeqCst)
    }

    fn subscribe(&self) -> broadcast::Receiver<ConnectivityEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_subscribers() {
        let connectivity = ChannelConnectivity::new(true, true);
        let mut events = connectivity.subscribe();

        connectivity.set_online(false);
        assert_eq!(events.recv().await.unwrap(), ConnectivityEvent::Lost);
        assert!(!connectivity.has_internet());

        connectivity.set_online(true);
        assert_eq!(events.recv().await.unwrap(), ConnectivityEvent::Available);
        assert!(connectivity.has_internet());
    }

    #[test]
    fn unmetered_flag_tracks_transport() {
        let connectivity = ChannelConnectivity::new(true, false);
        assert!(!connectivity.is_unmetered());
        connectivity.set_unmetered(true);
        assert!(connectivity.is_unmetered());
    }
}
