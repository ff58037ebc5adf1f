//! Tick-feedback capability.
//!
//! The engine knows only that a slot midline crossed the pointer; what that
//! sounds or looks like belongs to the presentation layer. Audio resource
//! handling (cloning an element per tick versus reusing one instance) is
//! that layer's concern and is deliberately not modeled here.

/// Receiver for the once-per-block tick.
pub trait TickFeedback {
    fn tick(&mut self);
}

/// Feedback that swallows ticks. The default when none is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl TickFeedback for NullFeedback {
    fn tick(&mut self) {}
}

/// Adapter turning any closure into tick feedback.
///
/// ```ignore
/// let bell = FnFeedback::new(|| print!("\x07"));
/// ```
pub struct FnFeedback<F: FnMut()>(F);

impl<F: FnMut()> FnFeedback<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: FnMut()> TickFeedback for FnFeedback<F> {
    fn tick(&mut self) {
        (self.0)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_fn_feedback_invokes_closure() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let mut feedback = FnFeedback::new(move || counter.set(counter.get() + 1));

        feedback.tick();
        feedback.tick();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_null_feedback_is_inert() {
        let mut feedback = NullFeedback;
        feedback.tick();
    }
}
