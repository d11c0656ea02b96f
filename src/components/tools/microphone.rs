//! Microphone tester page.
//!
//! Audio flows microphone → `MediaStreamAudioSourceNode` → `AnalyserNode`.
//! The analyser is sampled on an interval and fed to a [`LevelMeter`].

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_interval_fn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AnalyserNode, AudioContext, MediaStream, MediaStreamConstraints, MediaStreamTrack};
use webtools_core::format::format_number;
use webtools_core::tools::audio::{Level, LevelMeter, MIN_DBFS, meter_fraction};

use super::ToolPage;
use crate::components::icons as ic;
use crate::config::microphone::{FFT_SIZE, METER_INTERVAL_MS, PEAK_DECAY_DB};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/tools/device.module.css");

#[derive(Debug, Clone, Error)]
enum MicError {
    #[error("{0}")]
    Unsupported(&'static str),
    #[error("{0}")]
    Browser(String),
}

impl From<JsValue> for MicError {
    fn from(err: JsValue) -> Self {
        Self::Browser(dom::js_error_message(&err))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum MicState {
    Idle,
    Requesting,
    Live { device: Option<String> },
    Failed(String),
}

/// An open microphone stream wired into an analyser.
struct Session {
    stream: MediaStream,
    context: AudioContext,
    analyser: AnalyserNode,
    frame: Vec<f32>,
    meter: LevelMeter,
}

impl Session {
    async fn open() -> Result<Self, MicError> {
        let window = dom::window().ok_or(MicError::Unsupported("window not available"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| MicError::Unsupported("this browser cannot access microphones"))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let request = devices.get_user_media_with_constraints(&constraints)?;
        let stream: MediaStream = JsFuture::from(request).await?.dyn_into()?;

        let context = AudioContext::new()?;
        let source = context.create_media_stream_source(&stream)?;
        let analyser = context.create_analyser()?;
        analyser.set_fft_size(FFT_SIZE);
        source.connect_with_audio_node(&analyser)?;

        Ok(Self {
            stream,
            context,
            analyser,
            frame: vec![0.0; FFT_SIZE as usize],
            meter: LevelMeter::new(PEAK_DECAY_DB),
        })
    }

    fn tracks(&self) -> Vec<MediaStreamTrack> {
        self.stream
            .get_audio_tracks()
            .iter()
            .filter_map(|t| t.dyn_into::<MediaStreamTrack>().ok())
            .collect()
    }

    fn device_label(&self) -> Option<String> {
        self.tracks()
            .into_iter()
            .map(|t| t.label())
            .find(|l| !l.is_empty())
    }

    fn sample(&mut self) -> Level {
        self.analyser.get_float_time_domain_data(&mut self.frame);
        self.meter.update(&self.frame)
    }

    fn close(self) {
        for track in self.tracks() {
            track.stop();
        }
        if let Err(err) = self.context.close() {
            tracing::debug!(error = %dom::js_error_message(&err), "audio context close failed");
        }
        tracing::info!("microphone released");
    }
}

#[component]
pub fn MicrophoneTester() -> impl IntoView {
    let state = RwSignal::new(MicState::Idle);
    let level = RwSignal::new(Level::default());
    let session = StoredValue::new_local(None::<Session>);

    let _ = use_interval_fn(
        move || {
            let next = session
                .try_update_value(|s| s.as_mut().map(Session::sample))
                .flatten();
            if let Some(next) = next {
                level.set(next);
            }
        },
        METER_INTERVAL_MS,
    );

    let stop = move || {
        if let Some(open) = session.try_update_value(Option::take).flatten() {
            open.close();
        }
    };
    on_cleanup(stop);

    let start = move |_| {
        state.set(MicState::Requesting);
        spawn_local(async move {
            match Session::open().await {
                Ok(open) => {
                    let device = open.device_label();
                    tracing::info!(
                        device = device.as_deref().unwrap_or("unknown"),
                        "microphone opened"
                    );
                    // The page may have been left while the permission prompt was up.
                    if let Some(orphan) = session.try_set_value(Some(open)) {
                        if let Some(open) = orphan {
                            open.close();
                        }
                        return;
                    }
                    state.try_set(MicState::Live { device });
                }
                Err(err) => {
                    tracing::warn!(%err, "microphone unavailable");
                    state.try_set(MicState::Failed(err.to_string()));
                }
            }
        });
    };

    let on_stop = move |_| {
        stop();
        level.set(Level::default());
        state.set(MicState::Idle);
    };

    view! {
        <ToolPage name="microphone">
            {move || match state.get() {
                MicState::Idle => view! {
                    <div class=css::micControls>
                        <p class=css::prompt>"Nothing is recorded; audio never leaves this page."</p>
                        <button class=css::primaryButton on:click=start>
                            <Icon icon=ic::MICROPHONE />
                            <span>"Start microphone"</span>
                        </button>
                    </div>
                }
                .into_any(),
                MicState::Requesting => view! {
                    <p class=css::prompt>"Waiting for microphone permission..."</p>
                }
                .into_any(),
                MicState::Failed(message) => view! {
                    <div class=css::micControls>
                        <p class=css::failure role="alert">{message}</p>
                        <button class=css::primaryButton on:click=start>"Try again"</button>
                    </div>
                }
                .into_any(),
                MicState::Live { device } => view! {
                    <div class=css::micControls>
                        <p class=css::prompt>
                            "Listening to "
                            {device.unwrap_or_else(|| "the default microphone".to_string())}
                        </p>
                        <button class=css::resetButton on:click=on_stop>"Stop"</button>
                    </div>
                    <Meter level=level />
                }
                .into_any(),
            }}
        </ToolPage>
    }
}

fn db_label(db: f64) -> String {
    if db <= MIN_DBFS {
        "-∞ dBFS".to_string()
    } else {
        format!("{} dBFS", format_number(db, 1))
    }
}

#[component]
fn Meter(level: RwSignal<Level>) -> impl IntoView {
    let width = move || format!("{}%", meter_fraction(level.get().rms_db) * 100.0);
    let peak = move || format!("{}%", meter_fraction(level.get().peak_db) * 100.0);
    let hold = move || format!("{}%", meter_fraction(level.get().hold_db) * 100.0);

    view! {
        <div class=css::meter>
            <span class=css::meterPeak style:width=peak></span>
            <span class=css::meterRms style:width=width></span>
            <span class=css::meterHold style:left=hold></span>
        </div>
        <div class=css::summary>
            <span>{move || format!("RMS {}", db_label(level.get().rms_db))}</span>
            <span>{move || format!("Peak {}", db_label(level.get().peak_db))}</span>
            <Show when=move || level.get().clipping>
                <span class=css::clipping>"Clipping"</span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_label_floors_silence() {
        assert_eq!(db_label(MIN_DBFS), "-∞ dBFS");
        assert_eq!(db_label(-6.02), "-6 dBFS");
        assert_eq!(db_label(-12.34), "-12.3 dBFS");
    }
}
