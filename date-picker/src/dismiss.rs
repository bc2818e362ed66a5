//! Dismissal of an open picker when the user presses outside of it.
//!
//! The renderer owns the global pointer-down event source, which is modeled
//! by [`ListenerHost`]. The picker only holds a registration on it while it is
//! open, through a [`ListenerGuard`] that releases it when dropped.

use std::fmt;

/// A source of global pointer-down events a listener can be registered on.
///
/// While registered, the host is expected to forward every press to
/// [`DatePicker::pointer_down`](crate::DatePicker::pointer_down).
pub trait ListenerHost: Clone {
    type Handle;

    fn register(&self) -> Self::Handle;
    fn unregister(&self, handle: Self::Handle);
}

/// A host that does not deliver any event, for renderers which handle
/// dismissal by themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHost;

impl ListenerHost for NoHost {
    type Handle = ();

    fn register(&self) -> Self::Handle {}
    fn unregister(&self, _handle: Self::Handle) {}
}

/// A listener registration which lasts until this guard is dropped.
pub struct ListenerGuard<H: ListenerHost> {
    host: H,
    handle: Option<H::Handle>,
}

impl<H: ListenerHost> ListenerGuard<H> {
    /// Register a new listener on the host.
    pub fn acquire(host: &H) -> Self {
        #[cfg(feature = "log")]
        log::trace!("Registering outside click listener");

        Self { handle: Some(host.register()), host: host.clone() }
    }
}

impl<H: ListenerHost> Drop for ListenerGuard<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            #[cfg(feature = "log")]
            log::trace!("Releasing outside click listener");

            self.host.unregister(handle);
        }
    }
}

impl<H: ListenerHost> fmt::Debug for ListenerGuard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("registered", &self.handle.is_some())
            .finish()
    }
}
