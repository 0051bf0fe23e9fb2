use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::utils::select_all;

const DEFERRED_SOURCE: &str = "data-src";

fn load(img: &Element) {
    if let Some(src) = img.get_attribute(DEFERRED_SOURCE) {
        if let Err(e) = img.set_attribute("src", &src) {
            error!("error set src: {:?}", e);
        }
        if let Err(e) = img.remove_attribute(DEFERRED_SOURCE) {
            error!("error remove {}: {:?}", DEFERRED_SOURCE, e);
        }
    }
}

/// Defers `img[data-src]` until the image scrolls into view. Without
/// `IntersectionObserver` the images are loaded right away.
pub fn observe_images() -> Result<(), anyhow::Error> {
    let images = select_all("img[data-src]")?;
    if images.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let img = entry.target();
                    load(&img);
                    observer.unobserve(&img);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("no intersection observer, loading images eagerly: {:?}", e);
            images.iter().for_each(load);
            return Ok(());
        }
    };

    // the observer calls back for the lifetime of the page
    callback.forget();

    for img in &images {
        observer.observe(img);
    }

    debug!("observing {} deferred images", images.len());

    Ok(())
}
