/// Millisecond stopwatch: `Date.now()` in the browser, `Instant` elsewhere
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Time `f` only when `on`, adding the elapsed ms to `slot`
#[inline]
pub(crate) fn timed<R>(on: bool, slot: &mut f64, f: impl FnOnce() -> R) -> R {
    if on {
        let t0 = PerfTimer::start();
        let r = f();
        *slot += t0.elapsed_ms();
        r
    } else {
        f()
    }
}
