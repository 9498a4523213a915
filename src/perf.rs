/// Step timing utilities

/// Time a block under a profiling scope and log its duration
/// Usage: timed!("operation name", { code })
#[macro_export]
macro_rules! timed {
    ($name:expr, $block:expr) => {{
        profiling::scope!($name);
        let _t = std::time::Instant::now();
        let r = $block;
        log::debug!("{}: {:?}", $name, _t.elapsed());
        r
    }};
}
