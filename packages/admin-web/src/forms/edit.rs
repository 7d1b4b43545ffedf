/// How a record page opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    /// Read-only, no way into edit mode.
    ViewOnly,
    /// Read-only with an edit toggle.
    Viewing,
    Editing,
}

impl RecordMode {
    pub fn can_toggle(self) -> bool {
        self != RecordMode::ViewOnly
    }
}

/// View/edit toggle over a loaded record.
///
/// `draft` is what the form edits; `cancel` throws it away and goes back to
/// the last committed value.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T: Clone> {
    original: T,
    pub draft: T,
    editing: bool,
}

impl<T: Clone> EditSession<T> {
    pub fn new(value: T) -> Self {
        Self {
            draft: value.clone(),
            original: value,
            editing: false,
        }
    }

    /// Open in edit mode right away.
    pub fn editing(value: T) -> Self {
        let mut session = Self::new(value);
        session.editing = true;
        session
    }

    pub fn open(value: T, mode: RecordMode) -> Self {
        match mode {
            RecordMode::Editing => Self::editing(value),
            RecordMode::Viewing | RecordMode::ViewOnly => Self::new(value),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.original.clone();
        self.editing = true;
    }

    pub fn cancel(&mut self) {
        self.draft = self.original.clone();
        self.editing = false;
    }

    /// Accept the draft after a successful save.
    pub fn commit(&mut self) {
        self.original = self.draft.clone();
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_restores_original() {
        let mut session = EditSession::new(String::from("Juan"));
        session.begin_edit();
        session.draft.push_str(" Carlos");
        assert!(session.is_editing());

        session.cancel();
        assert!(!session.is_editing());
        assert_eq!(session.draft, "Juan");
    }

    #[test]
    fn test_commit_keeps_draft() {
        let mut session = EditSession::editing(1);
        session.draft = 2;
        session.commit();

        assert_eq!(*session.original(), 2);
        assert!(!session.is_editing());

        session.begin_edit();
        session.draft = 3;
        session.cancel();
        assert_eq!(session.draft, 2);
    }

    #[test]
    fn test_open_follows_mode() {
        assert!(EditSession::open('a', RecordMode::Editing).is_editing());
        assert!(!EditSession::open('a', RecordMode::Viewing).is_editing());
        assert!(!EditSession::open('a', RecordMode::ViewOnly).is_editing());

        assert!(RecordMode::Viewing.can_toggle());
        assert!(!RecordMode::ViewOnly.can_toggle());
    }
}
