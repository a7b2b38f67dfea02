//! Browser geolocation.
//!
//! Wraps the callback-style `navigator.geolocation.getCurrentPosition` in a
//! future so pages can `await` a fix inside `spawn_local`.

/// A latitude/longitude fix in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fix {
    pub lat: f64,
    pub lng: f64,
}

/// Ask the browser for the current position.
///
/// # Errors
///
/// Returns a message when geolocation is unsupported, denied or times out.
#[cfg(feature = "hydrate")]
pub async fn current_position() -> Result<Fix, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let geolocation = web_sys::window()
        .ok_or_else(|| "no window".to_owned())?
        .navigator()
        .geolocation()
        .map_err(|_| "Geolocation is not supported by this browser".to_owned())?;

    let (tx, rx) = futures::channel::oneshot::channel::<Result<Fix, String>>();
    let tx = std::rc::Rc::new(std::cell::RefCell::new(Some(tx)));

    let ok_tx = tx.clone();
    let on_ok = Closure::once(move |pos: web_sys::Position| {
        let coords = pos.coords();
        if let Some(tx) = ok_tx.borrow_mut().take() {
            let _ = tx.send(Ok(Fix { lat: coords.latitude(), lng: coords.longitude() }));
        }
    });
    let err_tx = tx;
    let on_err = Closure::once(move |err: web_sys::PositionError| {
        if let Some(tx) = err_tx.borrow_mut().take() {
            let _ = tx.send(Err(err.message()));
        }
    });

    geolocation
        .get_current_position_with_error_callback(
            on_ok.as_ref().unchecked_ref(),
            Some(on_err.as_ref().unchecked_ref()),
        )
        .map_err(|_| "Unable to request location".to_owned())?;

    let result = rx.await.map_err(|_| "Location request was dropped".to_owned())?;
    drop((on_ok, on_err));
    result
}

/// Geolocation is browser-only.
///
/// # Errors
///
/// Always errors outside the browser.
#[cfg(not(feature = "hydrate"))]
pub async fn current_position() -> Result<Fix, String> {
    Err("not available on server".to_owned())
}
