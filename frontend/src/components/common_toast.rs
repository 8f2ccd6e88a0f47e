use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error};
use shared::review::{Notification, NotificationKind, ReviewObserver};
use uuid::Uuid;
use yew::prelude::*;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
        }
    }
}

impl From<NotificationKind> for ToastType {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => ToastType::Success,
            NotificationKind::Error => ToastType::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            toast_type,
            duration: Some(Config::toast_duration_ms()),
        }
    }
}

impl From<Notification> for Toast {
    fn from(notification: Notification) -> Self {
        Toast::new(
            notification.title,
            notification.message,
            notification.kind.into(),
        )
    }
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn notify(&self, notification: Notification) {
        self.add_toast.emit(notification.into());
    }
}

/// Routes review notifications to the toast stack and re-renders the
/// owning page when review state changes.
pub struct ToastObserver {
    add_toast: Callback<Toast>,
    on_refresh: Callback<()>,
}

impl ToastObserver {
    pub fn new(add_toast: Callback<Toast>, on_refresh: Callback<()>) -> Self {
        Self {
            add_toast,
            on_refresh,
        }
    }
}

impl ReviewObserver for ToastObserver {
    fn notify(&self, notification: Notification) {
        if let Some(detail) = &notification.detail {
            error!("{}: {}", notification.message, detail);
        }
        self.add_toast.emit(notification.into());
    }

    fn refresh(&self) {
        self.on_refresh.emit(());
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let add_toast = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            debug!("Showing toast {}: {}", toast_id, toast.message);
            dispatcher.dispatch(ToastAction::Add(toast));

            // Auto-remove after duration if specified
            if let Some(duration_ms) = duration {
                let dispatcher = dispatcher.clone();
                let timeout = Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Remove(toast_id));
                });
                timeout.forget();
            }
        })
    };

    let remove_toast = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: toasts.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastStack />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let visible = use_state(|| false);

    // Animate in
    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(10, move || {
                visible.set(true);
            });
            timeout.forget();
            || {}
        });
    }

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            remove_toast.emit(toast_id);
        })
    };

    html! {
        <div class={classes!(
            "transform", "transition-all", "duration-300", "ease-in-out",
            if *visible { "translate-x-0 opacity-100" } else { "translate-x-full opacity-0" }
        )}>
            <div class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                props.toast.toast_type.classes()
            )}>
                <div class="flex-shrink-0 mr-3">
                    <span class="text-lg font-bold">{props.toast.toast_type.icon()}</span>
                </div>
                <div class="flex-1">
                    <p class="text-sm font-semibold">{&props.toast.title}</p>
                    <p class="text-sm">{&props.toast.message}</p>
                </div>
                <div class="flex-shrink-0 ml-3">
                    <button
                        onclick={on_close}
                        class="text-white hover:text-gray-200 focus:outline-none focus:text-gray-200 transition-colors duration-200"
                    >
                        <span class="text-lg">{"×"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
