//! Message decoration seam.
//!
//! The hook plugin only knows it has "something that dresses up a message".
//! The balloon renderer is the real implementation; [`PlainDecorator`] leaves
//! messages untouched (used by `--plain` and by tests that only care about
//! wording).

use crate::ui::BalloonRenderer;

pub trait Decorator: Send + Sync {
    fn decorate(&self, message: &str) -> String;
}

impl Decorator for BalloonRenderer {
    fn decorate(&self, message: &str) -> String {
        BalloonRenderer::decorate(self, message)
    }
}

/// Returns messages unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecorator;

impl Decorator for PlainDecorator {
    fn decorate(&self, message: &str) -> String {
        message.to_string()
    }
}

impl<D: Decorator + ?Sized> Decorator for Box<D> {
    fn decorate(&self, message: &str) -> String {
        (**self).decorate(message)
    }
}
