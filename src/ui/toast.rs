//! Transient error notifications.
//!
//! A `Signal<ToastManager>` lives in context; components push toasts through
//! it and the `Toasts` stack renders them bottom-right. Each toast dismisses
//! itself after [`TOAST_DURATION_MS`] and carries a manual dismiss button.

use dioxus::prelude::*;

pub const TOAST_DURATION_MS: u64 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastManager {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastManager {
    /// Queue an error toast, returning its id.
    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

async fn sleep_ms(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[component]
pub fn Toasts() -> Element {
    let manager = consume_context::<Signal<ToastManager>>();
    let toasts = manager.read().toasts().to_vec();
    rsx! {
        div {
            style: "
            position: fixed;
            bottom: 1rem;
            right: 1rem;
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            z-index: 1000;
            ",
            for t in toasts {
                ToastEl { key: "{t.id}", toast: t }
            }
        }
    }
}

#[component]
fn ToastEl(toast: Toast) -> Element {
    let mut manager = consume_context::<Signal<ToastManager>>();
    let id = toast.id;
    use_future(move || async move {
        sleep_ms(TOAST_DURATION_MS).await;
        manager.with_mut(|m| m.dismiss(id));
    });
    rsx! {
        div {
            style: "
            display: flex;
            align-items: flex-start;
            gap: 0.5rem;
            min-width: 16rem;
            background-color: #f8d7da;
            border: 1px solid #f5c6cb;
            border-radius: 4px;
            padding: 0.75rem 1rem;
            color: #721c24;
            ",
            div { style: "flex: 1;",
                div { style: "font-weight: bold; margin-bottom: 0.25rem;", "{toast.title}" }
                div { style: "font-size: 0.9rem;", "{toast.description}" }
            }
            button {
                style: "
                background: none;
                border: none;
                font-size: 1.1rem;
                cursor: pointer;
                padding: 0;
                color: #721c24;
                ",
                onclick: move |_| {
                    manager.with_mut(|m| m.dismiss(id));
                },
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut m = ToastManager::default();
        let a = m.error("a", "first");
        let b = m.error("b", "second");
        assert!(b > a);
        assert_eq!(m.toasts().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut m = ToastManager::default();
        let a = m.error("a", "first");
        let b = m.error("b", "second");
        m.dismiss(a);
        assert_eq!(m.toasts().len(), 1);
        assert_eq!(m.toasts()[0].id, b);
        // unknown ids are a no-op
        m.dismiss(999);
        assert_eq!(m.toasts().len(), 1);
    }
}
