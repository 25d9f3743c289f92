use std::time::Duration;

use leptos::prelude::*;

use super::timer::TimerSlot;

/// How long a toast stays up unless replaced.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Shows one toast at a time; a new one replaces the old and restarts the clock.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    slot: TimerSlot,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            slot: TimerSlot::new(),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.current.set(Some(Toast {
            kind,
            message: message.into(),
        }));
        let current = self.current;
        self.slot.arm(TOAST_DURATION, move || {
            current.try_set(None);
        });
    }

    pub fn dismiss(&self) {
        self.slot.cancel();
        self.current.set(None);
    }
}

#[component]
pub fn ToastArea() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    move || {
        toaster.current.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "border-green text-green",
                ToastKind::Error => "border-red text-red",
            };
            view! {
                <div
                    role="status"
                    class=format!(
                        "fixed bottom-6 right-6 z-50 flex items-center gap-4 rounded-md border bg-background px-4 py-3 shadow-lg font-mono text-sm {class}",
                    )
                >
                    {toast.message}
                    <button on:click=move |_| toaster.dismiss() aria-label="Dismiss">
                        <i class="extra-close" />
                    </button>
                </div>
            }
        })
    }
}
