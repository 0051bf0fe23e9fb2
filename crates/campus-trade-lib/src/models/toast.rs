use std::{
    fmt,
    str::FromStr,
    sync::atomic::{AtomicUsize, Ordering},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }

    /// Bootstrap contextual class, e.g. `alert-danger`.
    pub fn alert_class(&self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    // unknown names render as info rather than failing the caller
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" | "error" => Severity::Danger,
            _ => Severity::Info,
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self {
            id,
            message: message.into(),
            severity,
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Toast {
        let toast = Toast::new(message, severity);
        self.toasts.push(toast.clone());
        toast
    }

    /// Removes the toast with `id` and returns where it was. Dismissing a
    /// toast that is already gone is a no-op.
    pub fn dismiss(&mut self, id: usize) -> Option<usize> {
        let index = self.toasts.iter().position(|toast| toast.id == id)?;
        self.toasts.remove(index);
        Some(index)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_severity_from_str() {
        assert_eq!("success".parse::<Severity>().unwrap(), Severity::Success);
        assert_eq!("Danger".parse::<Severity>().unwrap(), Severity::Danger);
        assert_eq!("primary".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("".parse::<Severity>().unwrap(), Severity::Info);
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let first = Toast::new("a", Severity::Info);
        let second = Toast::new("a", Severity::Info);

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_alert_class() {
        let toast = Toast::new("操作失败，请重试", Severity::Danger);
        assert_eq!(toast.severity.alert_class(), "alert-danger");
        assert_eq!(Severity::default().alert_class(), "alert-info");
    }

    #[test]
    fn test_toasts_stack_independently() {
        let mut stack = ToastStack::new();
        let first = stack.push("收藏成功", Severity::Success);
        let second = stack.push("收藏成功", Severity::Success);
        let third = stack.push("操作失败，请重试", Severity::Danger);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.dismiss(second.id), Some(1));
        assert_eq!(
            stack.iter().map(|toast| toast.id).collect::<Vec<_>>(),
            vec![first.id, third.id]
        );
    }

    #[test]
    fn test_dismiss_twice_is_harmless() {
        let mut stack = ToastStack::new();
        let toast = stack.push("已取消收藏", Severity::Success);
        let other = stack.push("请先登录", Severity::Warning);

        // closed by hand, then the timer fires
        assert_eq!(stack.dismiss(toast.id), Some(0));
        assert_eq!(stack.dismiss(toast.id), None);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.dismiss(other.id), Some(0));
        assert!(stack.is_empty());
        assert_eq!(stack.dismiss(other.id), None);
    }
}
