/// Identifies a hoverable card: its group name and position in the group.
pub type HoverKey = (&'static str, usize);

/// Tracks which card the pointer is over and which cards it has left.
///
/// Cards that were left keep the `Left` phase until the next `clear`, so
/// their hover-leave animation is not replaced by a replayed entrance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<HoverKey>,
    released: Vec<HoverKey>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Rest,
    Entered,
    Left,
}

impl HoverState {
    /// Record a hover change. Returns true if the state changed.
    pub fn set(&mut self, key: HoverKey, hovered: bool) -> bool {
        if hovered {
            if self.current == Some(key) {
                return false;
            }
            if let Some(previous) = self.current.replace(key) {
                self.release(previous);
            }
            self.released.retain(|k| *k != key);
            true
        } else if self.current == Some(key) {
            self.current = None;
            self.release(key);
            true
        } else {
            false
        }
    }

    fn release(&mut self, key: HoverKey) {
        if !self.released.contains(&key) {
            self.released.push(key);
        }
    }

    pub fn phase(&self, key: HoverKey) -> HoverPhase {
        if self.current == Some(key) {
            HoverPhase::Entered
        } else if self.released.contains(&key) {
            HoverPhase::Left
        } else {
            HoverPhase::Rest
        }
    }

    /// Forget all hover state, e.g. after changing page.
    pub fn clear(&mut self) {
        self.current = None;
        self.released.clear();
    }
}
