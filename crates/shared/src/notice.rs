use std::{cell::RefCell, collections::VecDeque, rc::Rc};

/// Most notices on screen at once
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A short lived message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Where notices are shown. The client shows them as toasts
pub trait NoticeSink: Clone + 'static {
    fn notify(&self, notice: Notice);
}

/// Collects notices, used outside the browser
impl NoticeSink for Rc<RefCell<Vec<Notice>>> {
    fn notify(&self, notice: Notice) {
        self.borrow_mut().push(notice);
    }
}

/// Appends `item`, dropping the oldest entries beyond [MAX_VISIBLE]
pub fn push_visible<T>(queue: &mut VecDeque<T>, item: T) {
    queue.push_back(item);
    while queue.len() > MAX_VISIBLE {
        queue.pop_front();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_visible_keeps_newest() {
        let mut queue = VecDeque::new();
        for i in 0..7 {
            push_visible(&mut queue, i);
        }
        assert_eq!(queue.len(), MAX_VISIBLE);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_push_visible_under_cap() {
        let mut queue = VecDeque::from([Notice::info("a")]);
        push_visible(&mut queue, Notice::error("b"));
        assert_eq!(queue.back(), Some(&Notice::error("b")));
        assert_eq!(queue.len(), 2);
    }
}
