use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, update};

/// Idle poll interval; short enough for toasts to expire on time.
const IDLE_POLL: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init().context(
            "Failed to initialize terminal; use --html for non-interactive output",
        )?;
        let size = terminal.size()?;
        drop(init_scope);

        if let Err(err) = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste) {
            tracing::warn!(%err, "mouse capture unavailable");
        }

        let mut model = Model::new(&self.initial_text, (size.width, size.height))
            .with_notation(self.notation)
            .with_theme(self.theme)
            .with_render_options(self.render_options);
        crate::perf::log_event(
            "init.model",
            format!(
                "terminal={}x{} notation={:?} theme={:?} options={:?}",
                size.width, size.height, model.notation, model.theme, model.render_options
            ),
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture);
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll = if needs_render { Duration::ZERO } else { IDLE_POLL };
            if event::poll(poll)? {
                needs_render |= Self::dispatch(&event::read()?, model, frame_idx);

                // Coalesce paste and key-repeat bursts into a single render.
                let mut drained = 0_u32;
                while event::poll(Duration::ZERO)? {
                    if Self::dispatch(&event::read()?, model, frame_idx) {
                        drained += 1;
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    crate::perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Translate one terminal event and apply it. Returns `true` if the
    /// model changed.
    fn dispatch(event: &Event, model: &mut Model, frame_idx: u64) -> bool {
        let Some(msg) = Self::handle_event(event, model) else {
            return false;
        };
        if crate::perf::is_debug_log_enabled() {
            crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
        }
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
        true
    }
}
