//! Shared test support: an instrumented mock engine.
//!
//! The mock counts every handle it hands out and records the order in
//! which handles are released, so lifecycle tests can assert that nothing
//! leaks and that teardown runs transform-first. Its `apply` performs the
//! textbook ablative RGB -> CMYK separation, which is enough to check the
//! black/red swatch semantics without an ICC fixture on disk.

#![allow(dead_code)]

use inkpress_core::{Cmyk16, CmsEngine, ConvertOptions, Rgb16, CHANNEL_MAX};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Handle accounting shared between the engine and its handles.
#[derive(Default)]
pub struct Counters {
    pub profiles_opened: AtomicUsize,
    pub profiles_closed: AtomicUsize,
    pub transforms_built: AtomicUsize,
    pub transforms_destroyed: AtomicUsize,
    /// One entry per released handle, in release order.
    pub release_log: Mutex<Vec<String>>,
}

impl Counters {
    pub fn live_profiles(&self) -> usize {
        self.profiles_opened.load(Ordering::SeqCst) - self.profiles_closed.load(Ordering::SeqCst)
    }

    pub fn live_transforms(&self) -> usize {
        self.transforms_built.load(Ordering::SeqCst)
            - self.transforms_destroyed.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct MockError(pub String);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

pub struct MockProfile {
    name: String,
    counters: Arc<Counters>,
}

impl Drop for MockProfile {
    fn drop(&mut self) {
        self.counters.profiles_closed.fetch_add(1, Ordering::SeqCst);
        self.counters
            .release_log
            .lock()
            .unwrap()
            .push(format!("profile:{}", self.name));
    }
}

pub struct MockTransform {
    counters: Arc<Counters>,
}

impl Drop for MockTransform {
    fn drop(&mut self) {
        self.counters.transforms_destroyed.fetch_add(1, Ordering::SeqCst);
        self.counters
            .release_log
            .lock()
            .unwrap()
            .push("transform".to_string());
    }
}

/// Engine double. Profile paths whose file name starts with `bad` fail to
/// open; `fail_transform` makes every link attempt fail.
pub struct MockEngine {
    pub counters: Arc<Counters>,
    pub fail_transform: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(Counters::default()),
            fail_transform: false,
        }
    }

    pub fn failing_transform() -> Self {
        Self {
            fail_transform: true,
            ..Self::new()
        }
    }
}

impl CmsEngine for MockEngine {
    type Profile = MockProfile;
    type Transform = MockTransform;
    type Error = MockError;

    fn open_profile(&self, path: &Path) -> Result<MockProfile, MockError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if name.starts_with("bad") {
            return Err(MockError(format!("cannot open {name}")));
        }
        self.counters.profiles_opened.fetch_add(1, Ordering::SeqCst);
        Ok(MockProfile {
            name,
            counters: Arc::clone(&self.counters),
        })
    }

    fn build_transform(
        &self,
        _source: &MockProfile,
        _destination: &MockProfile,
        _options: &ConvertOptions,
    ) -> Result<MockTransform, MockError> {
        if self.fail_transform {
            return Err(MockError("engine refused profile combination".into()));
        }
        self.counters.transforms_built.fetch_add(1, Ordering::SeqCst);
        Ok(MockTransform {
            counters: Arc::clone(&self.counters),
        })
    }

    fn apply(&self, _transform: &MockTransform, input: &[Rgb16], output: &mut [Cmyk16]) {
        for (src, dst) in input.iter().zip(output.iter_mut()) {
            *dst = naive_separate(*src);
        }
    }
}

/// Ablative RGB -> CMYK separation with full black replacement.
pub fn naive_separate(px: Rgb16) -> Cmyk16 {
    let max = CHANNEL_MAX as f64;
    let r = px.r as f64 / max;
    let g = px.g as f64 / max;
    let b = px.b as f64 / max;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk16::new(0, 0, 0, CHANNEL_MAX);
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    let q = |v: f64| (v * max).round() as u16;
    Cmyk16::new(q(c), q(m), q(y), q(k))
}
