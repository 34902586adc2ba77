//! Mount a toggle, drive it, and collect its frames.

use neumorph_core::{Binding, Color, DrawCommand, ReactiveCell, Rect, Widget};
use neumorph_widgets::{NeumorphicToggle, ToggleChanged, ToggleSettings};
use serde::Serialize;
use tracing::{debug, info};

/// Page color behind the toggle.
pub(crate) const BACKDROP: f32 = 0.33;

/// What to render.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
    pub(crate) on: bool,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) taps: u32,
    pub(crate) frames: u32,
    pub(crate) settings: ToggleSettings,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            on: true,
            width: 320.0,
            height: 320.0,
            taps: 0,
            frames: 0,
            settings: ToggleSettings::default(),
        }
    }
}

/// JSON document written to stdout.
#[derive(Debug, Serialize)]
pub(crate) struct Output {
    pub(crate) on: bool,
    pub(crate) side: f32,
    pub(crate) frames: Vec<Vec<DrawCommand>>,
}

pub(crate) fn render(options: &RenderOptions) -> Output {
    let state = ReactiveCell::new(options.on);
    let mut toggle = NeumorphicToggle::new(Binding::from_cell(&state))
        .config(options.settings.config)
        .transition(options.settings.transition);
    let bounds = Rect::new(0.0, 0.0, options.width, options.height);
    toggle.layout(bounds);

    let mut last: Option<ToggleChanged> = None;
    for _ in 0..options.taps {
        last = Some(toggle.activate());
    }

    let backdrop = DrawCommand::filled_rect(bounds, Color::white(BACKDROP));
    let frame = |body: DrawCommand| vec![backdrop.clone(), body];

    let frames = match last {
        Some(changed) if options.frames > 0 => {
            let n = options.frames;
            let duration = changed.transition.duration_ms;
            (0..=n)
                .map(|i| {
                    let elapsed = u64::from(duration) * u64::from(i) / u64::from(n);
                    let elapsed = u32::try_from(elapsed).unwrap_or(duration);
                    frame(toggle.render_transition(changed.transition.progress(elapsed)))
                })
                .collect()
        }
        _ => {
            if options.frames > 0 {
                debug!("no activation to animate, rendering a single frame");
            }
            vec![frame(toggle.render())]
        }
    };

    let output = Output {
        on: state.get(),
        side: toggle.geometry().side,
        frames,
    };
    info!(
        on = output.on,
        side = output.side,
        frames = output.frames.len(),
        "rendered toggle"
    );
    output
}
