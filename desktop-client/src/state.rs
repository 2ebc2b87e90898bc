use std::sync::{Arc, Mutex, MutexGuard};

use common::games::snake::{Direction, GameSnapshot};
use common::log;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Turn(Direction),
    Start,
    Reset,
    Quit,
}

/// State shared between the game task and the UI thread.
#[derive(Clone)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new(event_log_capacity: usize) -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(event_log_capacity.max(1)))),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn publish(&self, snapshot: GameSnapshot) {
        *lock(&self.snapshot) = Some(snapshot);
        self.request_repaint();
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        lock(&self.snapshot).clone()
    }

    pub fn add_event(&self, event: String) {
        lock(&self.event_log).enqueue(event);
        self.request_repaint();
    }

    pub fn events(&self) -> Vec<String> {
        lock(&self.event_log).iter().cloned().collect()
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<ClientCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: ClientCommand) {
        if self.tx.send(command).is_err() {
            log!("Game task is gone, dropped command {:?}", command);
        }
    }
}
