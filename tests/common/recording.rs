#![allow(dead_code)]

use app_context_switch::{AppContextSwitchClient, ReturnUrl};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Client with a canned answer that records every URL it sees.
pub struct RecordingClient {
    name: String,
    canned_can_handle: AtomicBool,
    can_handle_urls: Mutex<Vec<ReturnUrl>>,
    handled_urls: Mutex<Vec<ReturnUrl>>,
}

impl RecordingClient {
    pub fn new(name: &str, can_handle: bool) -> Self {
        Self {
            name: name.to_owned(),
            canned_can_handle: AtomicBool::new(can_handle),
            can_handle_urls: Mutex::new(Vec::new()),
            handled_urls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_can_handle(&self, can_handle: bool) {
        self.canned_can_handle.store(can_handle, Ordering::SeqCst);
    }

    pub fn can_handle_urls(&self) -> Vec<ReturnUrl> {
        self.can_handle_urls.lock().expect("recording lock").clone()
    }

    pub fn handled_urls(&self) -> Vec<ReturnUrl> {
        self.handled_urls.lock().expect("recording lock").clone()
    }

    pub fn last_can_handle_url(&self) -> Option<ReturnUrl> {
        self.can_handle_urls().pop()
    }

    pub fn last_handle_return_url(&self) -> Option<ReturnUrl> {
        self.handled_urls().pop()
    }
}

impl AppContextSwitchClient for RecordingClient {
    fn can_handle_return_url(&self, url: &ReturnUrl) -> bool {
        self.can_handle_urls
            .lock()
            .expect("recording lock")
            .push(url.clone());
        self.canned_can_handle.load(Ordering::SeqCst)
    }

    fn handle_return_url(&self, url: &ReturnUrl) {
        self.handled_urls
            .lock()
            .expect("recording lock")
            .push(url.clone());
    }

    fn name(&self) -> &str {
        &self.name
    }
}
