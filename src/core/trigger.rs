// src/core/trigger.rs - One-shot "reached the end of the list" signal
//
// A registration is tied to the list length and the page cursor. It fires at
// most once, and a new registration is only made when either changes.

#[derive(Debug, Clone, Default)]
pub struct ContinuationTrigger {
    registration: Option<Registration>,
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    list_len: usize,
    next_page: u32,
    fired: bool,
}

impl ContinuationTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm for a list of `list_len` rows whose next page is `next_page`.
    /// Re-registering with the same pair keeps the fired state; an empty list
    /// has no last row to watch.
    pub fn register(&mut self, list_len: usize, next_page: u32) {
        if list_len == 0 {
            self.registration = None;
            return;
        }
        if self
            .registration
            .is_some_and(|r| r.list_len == list_len && r.next_page == next_page)
        {
            return;
        }
        self.registration = Some(Registration {
            list_len,
            next_page,
            fired: false,
        });
    }

    pub fn disarm(&mut self) {
        self.registration = None;
    }

    /// Report whether the last row is visible. Returns `true` the first time
    /// it is seen for the current registration.
    pub fn observe(&mut self, last_row_visible: bool) -> bool {
        match self.registration.as_mut() {
            Some(r) if last_row_visible && !r.fired => {
                r.fired = true;
                true
            }
            _ => false,
        }
    }
}
