use std::time::Duration;

use leptos::prelude::*;

use crate::replay::{Cancel, Pending, Playback};

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// The one pending timeout an engine is allowed to have.
///
/// Arming clears whatever was pending, and the slot clears itself when the owning
/// component is torn down, so a callback never fires into a disposed view.
#[derive(Debug, Clone, Copy)]
pub struct TimerSlot {
    pending: StoredValue<Pending<TimeoutHandle>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        let slot = Self {
            pending: StoredValue::new(Pending::default()),
        };
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn arm(self, delay: Duration, cb: impl FnOnce() + 'static) {
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => {
                if self.pending.try_update_value(|p| p.install(handle)).is_none() {
                    // slot already disposed
                    handle.clear();
                }
            }
            Err(e) => log::error!("couldn't schedule timer: {e:?}"),
        }
    }

    pub fn cancel(self) {
        self.pending.try_update_value(Pending::cancel);
    }
}

/// Keeps `engine` ticking on `slot` until it reports no further delay.
pub fn drive<P>(engine: RwSignal<P>, slot: TimerSlot)
where
    P: Playback + Send + Sync + 'static,
{
    let Some(delay) = engine.try_with_untracked(Playback::next_delay).flatten() else {
        return;
    };
    slot.arm(delay, move || {
        if engine.try_update(Playback::advance).is_some() {
            drive(engine, slot);
        }
    });
}
