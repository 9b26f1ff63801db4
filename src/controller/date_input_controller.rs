use crate::api::{CalcApi, CalcResults, Endpoint, ResultField};
use crate::controller::events::{Key, UiEvent};
use crate::display::{calendar_date, military_time, utc_calendar_date};
use crate::input::format_date_input;
use crate::view::element::{ClockSlot, InputField};
use crate::view::traits::View;
use chrono::{DateTime, Local};
use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError};
use std::thread::{self, JoinHandle};
use strum::IntoEnumIterator;

/// What became of one remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// The results were written into the view.
    Rendered,
    /// A newer call had already been rendered, so these results were dropped.
    Stale,
    /// The call failed. The error was logged and the view left as it was.
    Failed,
}

/// Handle to a remote call running in the background.
///
/// Dropping it does not cancel the call.
#[derive(Debug)]
pub struct PendingCall {
    seq: u64,
    endpoint: Endpoint,
    handle: JoinHandle<CallOutcome>,
}

impl PendingCall {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn wait(self) -> CallOutcome {
        self.handle.join().unwrap_or_else(|_| {
            error!("{} call #{} panicked", self.endpoint, self.seq);
            CallOutcome::Failed
        })
    }
}

struct RenderState<V> {
    view: V,
    last_rendered: u64,
}

/// Binds the date and hundred-year input fields to the calculation service.
///
/// Events are handled on the caller's thread. Remote calls run on their own
/// thread each, and every call is numbered when issued. The view and the
/// number of the last rendered call sit behind one lock, so results older than
/// what is on screen are dropped instead of overwriting it.
pub struct DateInputController<V, A> {
    state: Arc<Mutex<RenderState<V>>>,
    api: Arc<A>,
    issued: AtomicU64,
    loaded: Once,
}

impl<V, A> DateInputController<V, A>
where
    V: View + Send + 'static,
    A: CalcApi + 'static,
{
    pub fn new(view: V, api: A) -> Self {
        Self {
            state: Arc::new(Mutex::new(RenderState {
                view,
                last_rendered: 0,
            })),
            api: Arc::new(api),
            issued: AtomicU64::new(0),
            loaded: Once::new(),
        }
    }

    /// Runs `f` with exclusive access to the view.
    pub fn with_view<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut lock(&self.state).view)
    }

    /// Dispatches one page event. Returns the pending call when the event
    /// triggered a calculation.
    pub fn handle(&self, event: UiEvent) -> Option<PendingCall> {
        match event {
            UiEvent::Input(field) => {
                self.on_input(field);
                None
            }
            UiEvent::Blur(field) => {
                self.on_blur(field);
                None
            }
            UiEvent::KeyUp(field, Key::Enter) => Some(self.submit(field)),
            UiEvent::KeyUp(_, Key::Other(_)) => None,
            UiEvent::Click(button) => Some(self.submit(button.source())),
            UiEvent::Load(now) => {
                self.on_load(now);
                None
            }
        }
    }

    fn on_input(&self, field: InputField) {
        if field != InputField::DateInput {
            return;
        }
        self.with_view(|view| {
            let raw = view.input_value(field);
            let formatted = format_date_input(&raw);
            if formatted != raw {
                view.set_input_value(field, &formatted);
            }
        });
    }

    fn on_blur(&self, field: InputField) {
        if field != InputField::DateInput {
            return;
        }
        self.with_view(|view| {
            if view.input_value(field).is_empty() {
                view.show_prompt();
            }
        });
    }

    fn on_load(&self, now: DateTime<Local>) {
        self.loaded.call_once(|| {
            self.with_view(|view| {
                view.set_text(ClockSlot::SystemDate.into(), &calendar_date(&now));
                view.set_text(ClockSlot::UtcDate.into(), &utc_calendar_date(&now));
                view.set_text(ClockSlot::PageTime.into(), &military_time(&now));
            });
        });
    }

    /// Sends the current value of `field` to its endpoint in the background.
    pub fn submit(&self, field: InputField) -> PendingCall {
        let endpoint = field.endpoint();
        let date = self.with_view(|view| view.input_value(field));
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Issuing {endpoint} call #{seq} for '{date}'");

        let state = Arc::clone(&self.state);
        let api = Arc::clone(&self.api);
        let handle = thread::spawn(move || match api.calculate(endpoint, &date) {
            Ok(results) => render_results(&state, seq, &results),
            Err(err) => {
                error!("{endpoint} call #{seq} failed: {err}");
                CallOutcome::Failed
            }
        });

        PendingCall {
            seq,
            endpoint,
            handle,
        }
    }
}

fn lock<V>(state: &Mutex<RenderState<V>>) -> MutexGuard<'_, RenderState<V>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn render_results<V: View>(
    state: &Mutex<RenderState<V>>,
    seq: u64,
    results: &CalcResults,
) -> CallOutcome {
    let mut state = lock(state);
    if seq < state.last_rendered {
        debug!(
            "Dropping results of call #{seq}, call #{} is already rendered",
            state.last_rendered
        );
        return CallOutcome::Stale;
    }

    for field in ResultField::iter() {
        state.view.set_text(field.into(), results.get(field));
    }
    state.last_rendered = seq;
    CallOutcome::Rendered
}
