/// Resolves after `ms` milliseconds without blocking the UI thread.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(ms: u32) {
    use wasm_bindgen::JsValue;

    let promise = js_sys::Promise::new(
        &mut |resolve, _reject| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    &resolve,
                    i32::try_from(ms).unwrap_or(i32::MAX)
                )
            });
            if !matches!(scheduled, Some(Ok(_))) {
                log::warn!("setTimeout unavailable, resolving {}ms timer immediately", ms);
                let _ = resolve.call0(&JsValue::NULL);
            }
        }
    );
    if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
        log::warn!("Timer rejected: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(ms: u32) {
    use std::time::Duration;

    let (tx, rx) = futures::channel::oneshot::channel();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
        let _ = tx.send(());
    });
    let _ = rx.await;
}
