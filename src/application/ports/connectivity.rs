use tokio::sync::broadcast;

/// Platform connectivity change notifications. These arrive on no guaranteed
/// task; subscribers funnel them into a single observable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    Available,
    Lost,
}

/// Port over the platform connectivity surface.
pub trait ConnectivityProvider: Send + Sync {
    /// Whether any transport currently has internet capability.
    fn has_internet(&self) -> bool;

    /// Whether the current transport is Wi-Fi-class / unmetered.
    fn is_unmetered(&self) -> bool;

    fn subscribe(&self) -> broadcast::Receiver<ConnectivityEvent>;
}
