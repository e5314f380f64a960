/// Transient user-facing notices: validation failures, remote call errors,
/// and informational prompts. Rendered as dismissible toasts by the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    next_id: u64,
    pub notices: Vec<Notice>,
}

impl Notifications {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice { id, kind, message });
    }
}
