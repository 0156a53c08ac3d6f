//! RAII checkpoint over the saved-position stack.
//!
//! ```text
//! let mut attempt = code.checkpoint();
//! if attempt.read_one().is_none() {
//!     return None; // position restored here
//! }
//! attempt.commit();
//! ```

use std::ops::{Deref, DerefMut};

use super::Code;

/// Guard that restores the cursor on drop unless committed.
///
/// Derefs to [`Code`], so reads go through the guard.
pub struct Checkpoint<'code> {
    code: &'code mut Code,
    committed: bool,
}

impl<'code> Checkpoint<'code> {
    pub(super) fn new(code: &'code mut Code) -> Self {
        code.save_position();
        Checkpoint {
            code,
            committed: false,
        }
    }

    /// Keep the current position and pop the saved entry.
    pub fn commit(mut self) {
        self.code.commit_position();
        self.committed = true;
    }
}

impl Drop for Checkpoint<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.code.restore_position();
        }
    }
}

impl Deref for Checkpoint<'_> {
    type Target = Code;

    fn deref(&self) -> &Code {
        self.code
    }
}

impl DerefMut for Checkpoint<'_> {
    fn deref_mut(&mut self) -> &mut Code {
        self.code
    }
}
