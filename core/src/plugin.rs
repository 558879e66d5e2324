//! Plugin lifecycle — explicit attach/detach around the channel registration
//!
//! The host framework attaches the plugin when an engine comes up and
//! detaches it when the engine goes away. `attach` owns everything the
//! bridge keeps alive between calls: the registered handler and the main
//! queue worker. `detach` releases both.

use std::sync::Arc;

use crate::channel::dispatch::Dispatcher;
use crate::channel::queue::MainQueue;
use crate::channel::{ChannelTransport, CHANNEL_NAME};
use crate::places::PlacesSdk;

/// Plugin configuration. The channel name is overridable so embedding tests
/// can run several bridges against one transport.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    pub channel_name: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            channel_name: CHANNEL_NAME.to_string(),
        }
    }
}

/// Live registration returned by [`attach`]. Dropping the handle without
/// calling [`detach`] leaves the handler registered and the queue running.
pub struct PluginHandle {
    channel_name: String,
    transport: Arc<dyn ChannelTransport>,
    queue: MainQueue,
}

impl PluginHandle {
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    /// Handle to the UI-confined queue, for embedders that need to schedule
    /// their own work behind the bridge's responses.
    pub fn queue(&self) -> MainQueue {
        self.queue.clone()
    }
}

/// Register the bridge with the host transport. Spawns the main queue,
/// builds a dispatcher over `sdk`, and installs it under the configured
/// channel name.
pub fn attach(
    transport: Arc<dyn ChannelTransport>,
    sdk: Arc<dyn PlacesSdk>,
    config: PluginConfig,
) -> PluginHandle {
    let queue = MainQueue::spawn();
    let dispatcher = Arc::new(Dispatcher::new(sdk, queue.clone()));
    transport.register(&config.channel_name, dispatcher);
    tracing::info!(channel = %config.channel_name, "Places bridge attached");
    PluginHandle {
        channel_name: config.channel_name,
        transport,
        queue,
    }
}

/// Unregister the bridge and stop its queue. In-flight SDK callbacks that
/// post after this point are dropped with a warning, never delivered.
pub fn detach(handle: PluginHandle) {
    handle.transport.unregister(&handle.channel_name);
    handle.queue.shutdown();
    tracing::info!(channel = %handle.channel_name, "Places bridge detached");
}
