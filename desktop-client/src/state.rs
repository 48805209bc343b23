use std::sync::{Arc, Mutex};

use chrono::Local;
use common::games::tictactoe::GameSnapshot;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

pub const EVENT_LOG_SIZE: usize = 16;

/// State shared between the session task and the egui thread. The session
/// writes snapshots and events; the UI reads them every frame. A stored
/// egui context lets the session request a repaint when something changes
/// between frames (the bot moving after its delay, for instance).
pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    egui_context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            egui_context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn add_event(&self, event: String) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), event);
        self.event_log.lock().unwrap().enqueue(line);
        self.request_repaint();
    }

    pub fn get_events(&self) -> Vec<String> {
        self.event_log.lock().unwrap().iter().cloned().collect()
    }

    pub fn has_context(&self) -> bool {
        self.egui_context.lock().unwrap().is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *self.egui_context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.egui_context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            event_log: Arc::clone(&self.event_log),
            egui_context: Arc::clone(&self.egui_context),
        }
    }
}
