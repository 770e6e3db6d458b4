use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

/// A coloured box with a single line of text in it.
pub fn notice(kind: NoticeKind, text: &str) -> Markup {
    html! {
        div role="alert" class=(kind.class()) { (text) }
    }
}
