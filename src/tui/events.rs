use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyEvent};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Periodic tick from the timer started with this generation.
    Tick(u64),
}

/// A repeating timer thread. Dropping it cancels the timer.
struct TickTimer {
    _cancel: Sender<()>,
}

impl TickTimer {
    fn spawn(tx: Sender<Event>, generation: u64, period: Duration) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        thread::spawn(move || {
            let mut deadline = Instant::now() + period;
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match cancel_rx.recv_timeout(timeout) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.send(Event::Tick(generation)).is_err() {
                            break;
                        }
                        deadline = next_deadline(deadline, period, Instant::now());
                    }
                    // Cancelled or handle dropped
                    _ => break,
                }
            }
        });

        Self { _cancel: cancel_tx }
    }
}

/// Periods missed while the process was suspended are skipped, not replayed.
fn next_deadline(deadline: Instant, period: Duration, now: Instant) -> Instant {
    let next = deadline + period;
    if next < now { now + period } else { next }
}

pub struct EventHandler {
    tx: Sender<Event>,
    rx: mpsc::Receiver<Event>,
    timer: Option<TickTimer>,
    generation: u64,
}

impl EventHandler {
    /// Event queue fed by the terminal input reader.
    pub fn new() -> Self {
        let handler = Self::without_input();
        let tx = handler.tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(Duration::from_millis(250)).unwrap_or(false) {
                    match event::read() {
                        Ok(CEvent::Key(key)) => {
                            if tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    }
                }
            }
        });

        handler
    }

    fn without_input() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            timer: None,
            generation: 0,
        }
    }

    /// Cancel the running timer, if any, and start a new one. Returns the
    /// generation its ticks will carry.
    pub fn restart_ticker(&mut self, period: Duration) -> u64 {
        self.stop_ticker();
        self.generation += 1;
        self.timer = Some(TickTimer::spawn(self.tx.clone(), self.generation, period));
        self.generation
    }

    pub fn stop_ticker(&mut self) {
        self.timer = None;
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
