use crate::audio::SoundBankPlayer;
use crate::core::{DialEffect, DialEvent, DialState, PlaybackId};
use crate::dom;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Browser host for one dial: owns the state machine and runs its effects.
pub struct DialApp {
    pub state: RefCell<DialState>,
    pub player: RefCell<SoundBankPlayer>,
    pub dial_el: web::Element,
    on_ended: Rc<dyn Fn(PlaybackId)>,
}

impl DialApp {
    pub fn new(state: DialState, player: SoundBankPlayer, dial_el: web::Element) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<DialApp>| {
            let weak = weak.clone();
            let on_ended: Rc<dyn Fn(PlaybackId)> = Rc::new(move |id: PlaybackId| {
                if let Some(app) = weak.upgrade() {
                    app.dispatch(DialEvent::ClipEnded { id });
                }
            });
            DialApp {
                state: RefCell::new(state),
                player: RefCell::new(player),
                dial_el,
                on_ended,
            }
        })
    }

    /// Feed one event through the state machine, then execute the resulting effects.
    pub fn dispatch(&self, event: DialEvent) {
        // release the state borrow before touching audio: a failed play re-enters here
        let effects = self.state.borrow_mut().update(event);
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: DialEffect) {
        match effect {
            DialEffect::ApplyRotation { degrees } => dom::apply_rotation(&self.dial_el, degrees),
            DialEffect::StopClip { id } => self.player.borrow_mut().stop(id),
            DialEffect::PlayClip { id, index } => {
                let result = self
                    .player
                    .borrow_mut()
                    .play(id, index, self.on_ended.clone());
                if let Err(e) = result {
                    log::warn!("[audio] clip {} (sound {}) failed: {}", id, index, e);
                    self.dispatch(DialEvent::PlaybackFailed { id });
                }
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state.borrow().is_animating()
    }
}
