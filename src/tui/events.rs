use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent};

/// Input for the UI loop. `Tick` is the clock heartbeat that drives the
/// next-prayer countdown; the schedule core never schedules itself.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Map a terminal event onto the loop's input, dropping what it ignores.
/// A resize only needs a fresh frame, which every tick draws.
fn translate(event: CEvent) -> Option<Event> {
    match event {
        CEvent::Key(key) => Some(Event::Key(key)),
        CEvent::Resize(..) => Some(Event::Tick),
        _ => None,
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let Ok(raw) = event::read() else { break };
                    if let Some(ev) = translate(raw) {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
