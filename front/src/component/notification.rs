use {
    std::{
        cell::{Cell, RefCell},
        time::Duration,
    },
    yew::Callback,
};

thread_local! {
    static CALLBACK: RefCell<Option<Callback<Notification>>> = const { RefCell::new(None) };
    static CURRENT_ID: Cell<u32> = const { Cell::new(0) };
}

/// Shows a notification, dropped if no manager is mounted
pub fn push_notification(notification: Notification) {
    CALLBACK.with_borrow(|cb_opt| {
        let Some(cb) = cb_opt else {
            warn!(format!("No notification manager for: {}", notification.title));
            return;
        };
        cb.emit(notification)
    });
}

fn new_id() -> u32 {
    CURRENT_ID.with(|id| {
        let current = id.get();
        id.set(current.wrapping_add(1));
        current
    })
}

pub enum Message {
    Push(Notification),
    RemoveAnimation { id: u32 },
    Remove { id: u32 },
}

#[derive(PartialEq)]
pub enum NotificationStyle {
    Info,
    Error,
}

#[derive(PartialEq)]
pub struct Notification {
    id: u32,
    expired: bool,
    timeout_s: f64,
    title: String,
    content: Vec<String>,
    style: NotificationStyle,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        content: Vec<String>,
        timeout_s: f64,
        style: NotificationStyle,
    ) -> Self {
        Self {
            id: new_id(),
            expired: false,
            timeout_s,
            title: title.into(),
            content,
            style,
        }
    }

    pub fn info(title: impl Into<String>, content: Vec<String>, timeout_s: f64) -> Self {
        Self::new(title, content, timeout_s, NotificationStyle::Info)
    }

    pub fn error(title: impl Into<String>, content: Vec<String>, timeout_s: f64) -> Self {
        Self::new(title, content, timeout_s, NotificationStyle::Error)
    }

    fn render(&self) -> yew::Html {
        yew::html! {<div class={
                format!(
                    "notification{}{}",
                    if self.expired { " notification_expired" } else { "" },
                    match self.style {
                        NotificationStyle::Info => " notification_info",
                        NotificationStyle::Error => " notification_error"
                    }
                )
            }>
            <div class="notification_title">{
                &self.title
            }</div>
            <div class="notification_content">{
                for self.content.iter().map(|bit| {
                    yew::html! {<>{ bit }<br /></>}
                })
            }</div>
        </div>}
    }
}

pub struct NotificationManager {
    notifications: Vec<Notification>,
}

impl yew::Component for NotificationManager {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &yew::Context<Self>) -> Self {
        CALLBACK.set(Some(ctx.link().callback(Message::Push)));
        Self {
            notifications: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &yew::Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Push(notification) => {
                let id = notification.id;
                let timeout = Duration::from_secs_f64(notification.timeout_s.max(0.));

                ctx.link().send_future(async move {
                    gloo_timers::future::sleep(timeout).await;
                    Message::RemoveAnimation { id }
                });
                self.notifications.push(notification);
            }
            Message::RemoveAnimation { id } => {
                let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
                    debug!(format!("Notification {id} is already gone"));
                    return false;
                };

                notification.expired = true;
                ctx.link().send_future(async move {
                    // 1/10 of the css fade out, less leaves a remnant image
                    gloo_timers::future::sleep(Duration::from_secs_f64(0.1)).await;
                    Message::Remove { id }
                });
            }
            Message::Remove { id } => {
                self.notifications.retain(|n| n.id != id);
            }
        }
        true
    }

    fn view(&self, _ctx: &yew::Context<Self>) -> yew::Html {
        yew::html! {<div class="notification_block">{
            for self.notifications.iter().map(Notification::render)
        }</div>}
    }

    fn destroy(&mut self, _ctx: &yew::Context<Self>) {
        CALLBACK.set(None);
    }
}
