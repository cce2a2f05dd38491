use std::fmt;

/// Identifies one started clip. Media callbacks carry it back so events from a
/// clip that has since been replaced can be told apart from the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackId(pub u64);

impl fmt::Display for PlaybackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    #[default]
    Idle,
    Playing { id: PlaybackId, index: usize },
}

/// What `advance_and_play` asks the audio layer to do, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub stop: Option<PlaybackId>,
    pub play: PlaybackId,
    pub index: usize,
}

/// Cyclic cursor over a fixed sound bank plus the single-clip playback state.
#[derive(Clone, Debug)]
pub struct SoundCycler {
    bank_len: usize,
    current: usize,
    playback: Playback,
    next_id: u64,
}

impl SoundCycler {
    /// `bank_len` must be non-zero; `DialConfig::validate` guarantees it.
    pub fn new(bank_len: usize) -> Self {
        Self {
            bank_len,
            current: 0,
            playback: Playback::Idle,
            next_id: 0,
        }
    }

    #[cfg(test)]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn advance_and_play(&mut self) -> Advance {
        let next = (self.current + 1) % self.bank_len;
        let stop = match self.playback {
            Playback::Playing { id, .. } => Some(id),
            Playback::Idle => None,
        };
        self.next_id += 1;
        let id = PlaybackId(self.next_id);
        self.current = next;
        self.playback = Playback::Playing { id, index: next };
        Advance {
            stop,
            play: id,
            index: next,
        }
    }

    /// Natural end of a clip. Returns false if `id` is not the clip in flight.
    pub fn clip_ended(&mut self, id: PlaybackId) -> bool {
        self.settle(id)
    }

    /// Playback of `id` could not start. Same bookkeeping as a natural end.
    pub fn playback_failed(&mut self, id: PlaybackId) -> bool {
        self.settle(id)
    }

    fn settle(&mut self, id: PlaybackId) -> bool {
        match self.playback {
            Playback::Playing { id: cur, .. } if cur == id => {
                self.playback = Playback::Idle;
                true
            }
            _ => false,
        }
    }
}
