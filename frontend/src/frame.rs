use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

use crate::motion::Tick;

type TickFn = Rc<RefCell<dyn FnMut(f64) -> Tick>>;

/// Owns one `requestAnimationFrame` handle and re-arms it for as long as the
/// tick asks to continue. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    tick: TickFn,
}

impl FrameLoop {
    pub fn new(tick: impl FnMut(f64) -> Tick + 'static) -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
            tick: Rc::new(RefCell::new(tick)),
        }
    }

    /// Schedules the next frame unless one is already pending.
    pub fn request(&self) {
        if self.pending.borrow().is_some() {
            return;
        }
        schedule(Rc::downgrade(&self.pending), self.tick.clone());
    }
}

fn schedule(pending: Weak<RefCell<Option<AnimationFrame>>>, tick: TickFn) {
    let Some(slot) = pending.upgrade() else {
        return;
    };
    let next = pending.clone();
    let handle = request_animation_frame(move |timestamp| {
        if let Some(slot) = next.upgrade() {
            slot.borrow_mut().take();
        } else {
            return;
        }
        let step = (&mut *tick.borrow_mut())(timestamp);
        if step == Tick::Continue {
            schedule(next, tick);
        }
    });
    *slot.borrow_mut() = Some(handle);
}
