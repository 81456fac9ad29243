//! Transient notification types.

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A message shown briefly in the corner of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    /// Creates a success toast. The id is assigned when it is shown.
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            ..Self::success(title)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Toasts currently on screen, oldest first.
///
/// Holds at most `capacity` entries; showing another one pushes the oldest
/// out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl ToastQueue {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ToastQueue capacity must be greater than 0");
        Self {
            toasts: Vec::new(),
            next_id: 1,
            capacity,
        }
    }

    /// Adds a toast and returns the id assigned to it.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        toast.id = id;
        if self.toasts.len() == self.capacity {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
        id
    }

    /// Removes a toast. Unknown ids (already dismissed) are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(Toast::success("one"));
        let b = queue.push(Toast::error("two").with_description("details"));
        assert_ne!(a, b);
        let shown: Vec<_> = queue.iter().map(|t| (t.id, t.kind)).collect();
        assert_eq!(shown, vec![(a, ToastKind::Success), (b, ToastKind::Error)]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.push(Toast::success("one"));
        queue.push(Toast::success("two"));
        queue.push(Toast::success("three"));
        let titles: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::new(3);
        let id = queue.push(Toast::success("one"));
        queue.dismiss(id);
        queue.dismiss(id);
        assert_eq!(queue.iter().next(), None);
    }
}
