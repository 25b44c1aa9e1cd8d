use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 5000;
const MAX_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u32,
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u32),
}

impl ToastStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, title: String, description: String, variant: ToastVariant) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, title, description, variant });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, description, variant } => {
                next.push(title, description, variant);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

pub type ToastContext = UseReducerHandle<ToastStack>;

pub trait Notify {
    fn success(&self, title: &str, description: &str);
    fn error(&self, title: &str, description: &str);
}

impl Notify for ToastContext {
    fn success(&self, title: &str, description: &str) {
        self.dispatch(ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Success,
        });
    }

    fn error(&self, title: &str, description: &str) {
        self.dispatch(ToastAction::Push {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Error,
        });
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_close: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_close = props.on_close.clone();
        let id = props.toast.id;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_close.emit(id));
                // dropping the timeout on unmount cancels it
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    let variant_class = match props.toast.variant {
        ToastVariant::Success => "toast-success",
        ToastVariant::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", variant_class)}>
            <div class="toast-body">
                <div class="toast-title">{&props.toast.title}</div>
                <div class="toast-description">{&props.toast.description}</div>
            </div>
            <button class="toast-close" onclick={close}>{"×"}</button>
        </div>
    }
}

/// Renders the toasts held by the surrounding `ToastContext`.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let stack = use_context::<ToastContext>();
    let Some(stack) = stack else {
        return html! {};
    };

    let on_close = {
        let stack = stack.clone();
        Callback::from(move |id: u32| stack.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        min-width: 300px;
                        max-width: 420px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fff;
                        box-shadow: 0 12px 32px rgba(1, 5, 77, 0.2);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-success { border-left: 4px solid #16a34a; }
                    .toast-error { border-left: 4px solid #dc2626; }
                    .toast-title { font-weight: 600; color: #01054d; }
                    .toast-description { font-size: 0.9rem; color: #555; margin-top: 0.25rem; }
                    .toast-close {
                        margin-left: auto;
                        background: none;
                        border: none;
                        font-size: 1.25rem;
                        cursor: pointer;
                        color: #888;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for stack.toasts().iter().map(|toast| html! {
                <ToastView key={toast.id} toast={toast.clone()} on_close={on_close.clone()} />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let a = stack.push("a".into(), String::new(), ToastVariant::Success);
        let b = stack.push("b".into(), String::new(), ToastVariant::Error);
        assert!(b > a);
        assert_eq!(stack.toasts().len(), 2);
    }

    #[test]
    fn oldest_toast_drops_past_limit() {
        let mut stack = ToastStack::default();
        for i in 0..5 {
            stack.push(format!("t{}", i), String::new(), ToastVariant::Success);
        }
        let titles: Vec<&str> = stack.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut stack = ToastStack::default();
        let a = stack.push("a".into(), String::new(), ToastVariant::Success);
        stack.push("b".into(), String::new(), ToastVariant::Success);
        stack.dismiss(a);
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].title, "b");
        stack.dismiss(99);
        assert_eq!(stack.toasts().len(), 1);
    }
}
