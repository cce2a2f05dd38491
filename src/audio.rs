use crate::constants::MASTER_GAIN;
use crate::core::PlaybackId;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("{label} error: {detail}")]
    Node { label: &'static str, detail: String },
    #[error("failed to fetch {path}: {detail}")]
    Fetch { path: String, detail: String },
    #[error("failed to decode {path}: {detail}")]
    Decode { path: String, detail: String },
    #[error("sound {0} is not loaded")]
    NotLoaded(usize),
    #[error("failed to start clip: {0}")]
    Start(String),
    #[error("audio context is {0:?}, clip would not sound")]
    Suspended(web::AudioContextState),
}

/// A source started on a context that is not running stays silent and never ends.
pub fn ensure_running(state: web::AudioContextState) -> Result<(), AudioError> {
    match state {
        web::AudioContextState::Running => Ok(()),
        other => Err(AudioError::Suspended(other)),
    }
}

#[inline]
fn js_detail(v: &JsValue) -> String {
    format!("{:?}", v)
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &'static str,
) -> Result<web::GainNode, AudioError> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| AudioError::Node {
        label,
        detail: js_detail(&e),
    })?;
    g.gain().set_value(value);
    Ok(g)
}

// start/stop/onended through the parent interface; the per-node variants are not portable
#[inline]
fn scheduled(src: &web::AudioBufferSourceNode) -> &web::AudioScheduledSourceNode {
    src
}

struct ActiveClip {
    id: PlaybackId,
    source: web::AudioBufferSourceNode,
    _on_ended: Closure<dyn FnMut()>,
}

impl ActiveClip {
    fn halt(self) {
        let node = scheduled(&self.source);
        node.set_onended(None);
        _ = node.stop();
        self.source.disconnect().ok();
    }
}

/// Single shared player over a decoded sound bank.
///
/// Holds at most one source node; starting a clip always halts the previous one.
pub struct SoundBankPlayer {
    ctx: web::AudioContext,
    output: web::GainNode,
    buffers: Vec<Option<web::AudioBuffer>>,
    active: Option<ActiveClip>,
}

impl SoundBankPlayer {
    pub fn new(bank_len: usize) -> Result<Self, AudioError> {
        let ctx = web::AudioContext::new().map_err(|e| AudioError::Node {
            label: "AudioContext",
            detail: js_detail(&e),
        })?;
        let output = create_gain(&ctx, MASTER_GAIN, "Master GainNode")?;
        output
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| AudioError::Node {
                label: "Master connect",
                detail: js_detail(&e),
            })?;
        Ok(Self {
            ctx,
            output,
            buffers: vec![None; bank_len],
            active: None,
        })
    }

    #[inline]
    pub fn context(&self) -> &web::AudioContext {
        &self.ctx
    }

    /// Browsers keep a fresh context suspended until a user gesture.
    pub fn resume_if_suspended(&self) {
        if self.ctx.state() != web::AudioContextState::Suspended {
            return;
        }
        match self.ctx.resume() {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => log::info!("[audio] context resumed"),
                    Err(e) => log::warn!("[audio] resume rejected: {}", js_detail(&e)),
                }
            }),
            Err(e) => log::warn!("[audio] resume failed: {}", js_detail(&e)),
        }
    }

    pub fn set_clip(&mut self, index: usize, buffer: web::AudioBuffer) {
        if let Some(slot) = self.buffers.get_mut(index) {
            *slot = Some(buffer);
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.buffers.iter().filter(|b| b.is_some()).count()
    }

    /// Stop clip `id` if it is the one sounding.
    pub fn stop(&mut self, id: PlaybackId) {
        match self.active.take() {
            Some(clip) if clip.id == id => clip.halt(),
            other => self.active = other,
        }
    }

    /// Start bank entry `index` from the top. `on_ended` fires once on a natural end.
    pub fn play(
        &mut self,
        id: PlaybackId,
        index: usize,
        on_ended: Rc<dyn Fn(PlaybackId)>,
    ) -> Result<(), AudioError> {
        // a clip that ended on its own is still parked here
        if let Some(prev) = self.active.take() {
            prev.halt();
        }
        ensure_running(self.ctx.state())?;
        let buffer = self
            .buffers
            .get(index)
            .and_then(|b| b.as_ref())
            .ok_or(AudioError::NotLoaded(index))?;
        let source = self.ctx.create_buffer_source().map_err(|e| AudioError::Node {
            label: "AudioBufferSourceNode",
            detail: js_detail(&e),
        })?;
        source.set_buffer(Some(buffer));
        source
            .connect_with_audio_node(&self.output)
            .map_err(|e| AudioError::Node {
                label: "source connect",
                detail: js_detail(&e),
            })?;
        let on_ended = Closure::wrap(Box::new(move || on_ended(id)) as Box<dyn FnMut()>);
        let node = scheduled(&source);
        node.set_onended(Some(on_ended.as_ref().unchecked_ref()));
        if let Err(e) = node.start() {
            node.set_onended(None);
            source.disconnect().ok();
            return Err(AudioError::Start(js_detail(&e)));
        }
        self.active = Some(ActiveClip {
            id,
            source,
            _on_ended: on_ended,
        });
        Ok(())
    }
}

/// Fetch and decode one bank entry.
pub async fn load_clip(
    ctx: &web::AudioContext,
    path: &str,
) -> Result<web::AudioBuffer, AudioError> {
    let fetch_err = |detail: String| AudioError::Fetch {
        path: path.to_string(),
        detail,
    };
    let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_err(js_detail(&e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| fetch_err(js_detail(&e)))?;
    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {}", resp.status())));
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(|e| fetch_err(js_detail(&e)))?)
        .await
        .map_err(|e| fetch_err(js_detail(&e)))?
        .dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| fetch_err(js_detail(&e)))?;

    let decode_err = |e: JsValue| AudioError::Decode {
        path: path.to_string(),
        detail: js_detail(&e),
    };
    let decoded = JsFuture::from(ctx.decode_audio_data(&bytes).map_err(decode_err)?)
        .await
        .map_err(decode_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(decode_err)
}
