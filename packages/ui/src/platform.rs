//! Platform queries and the timer the playback driver sleeps on.
//!
//! Both queries run as JavaScript in the webview and degrade to zero values
//! when the evaluation fails.

use std::time::Duration;

use dioxus::prelude::*;
use motion::{FrameClock, SafeAreaInset, ScreenMetrics};
use web_time::Instant;

const SAFE_AREA_JS: &str = r#"
    const marker = document.createElement('div');
    marker.style.cssText = 'position:fixed;top:0;visibility:hidden;padding-top:env(safe-area-inset-top)';
    document.body.appendChild(marker);
    const top = parseFloat(getComputedStyle(marker).paddingTop) || 0;
    marker.remove();
    return { top };
"#;

const SCREEN_JS: &str = r#"
    return { width: window.innerWidth, height: window.innerHeight };
"#;

/// Top safe-area inset. Only iOS reports one; everywhere else it is 0.
pub async fn safe_area_inset() -> SafeAreaInset {
    if !cfg!(target_os = "ios") {
        return SafeAreaInset::default();
    }
    match document::eval(SAFE_AREA_JS).join::<SafeAreaInset>().await {
        Ok(inset) => inset,
        Err(e) => {
            tracing::warn!("Safe area query failed: {e}");
            SafeAreaInset::default()
        }
    }
}

/// Screen size in CSS pixels.
pub async fn screen_metrics() -> ScreenMetrics {
    match document::eval(SCREEN_JS).join::<ScreenMetrics>().await {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::warn!("Screen metrics query failed: {e}");
            ScreenMetrics::default()
        }
    }
}

/// Sleeps on the runtime the app is running on and reports how long the
/// timer really took, which is often more than asked for in a busy webview.
pub struct TimerClock;

impl FrameClock for TimerClock {
    async fn sleep(&self, duration: Duration) -> Duration {
        let start = Instant::now();
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
        start.elapsed()
    }
}
