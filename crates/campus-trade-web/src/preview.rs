use std::{cell::RefCell, rc::Rc};

use anyhow::anyhow;
use campus_trade_lib::{
    models::Severity,
    tracker::RequestTracker,
    upload::{check_image, rejection_notice},
};
use futures::channel::oneshot;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File, FileReader, HtmlImageElement, HtmlInputElement, ProgressEvent};

use crate::{
    common::toast,
    utils::{document, element_by_id, settings},
};

const PREVIEW_CONTAINER: &str = "image-preview";

thread_local! {
    // a newer selection supersedes previews still being read
    static SELECTIONS: RefCell<RequestTracker<&'static str>> = RefCell::new(RequestTracker::new());
}

async fn read_data_url(file: &File) -> Result<String, anyhow::Error> {
    let reader = FileReader::new().map_err(|e| anyhow!("error create reader: {:?}", e))?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload: Closure<dyn FnMut(ProgressEvent)> = Closure::once({
        let tx = tx.clone();
        move |_: ProgressEvent| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(true);
            }
        }
    });
    let onerror: Closure<dyn FnMut(ProgressEvent)> = Closure::once(move |_: ProgressEvent| {
        if let Some(tx) = tx.borrow_mut().take() {
            let _ = tx.send(false);
        }
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| anyhow!("error read {}: {:?}", file.name(), e))?;

    if !rx.await? {
        return Err(anyhow!("failed to read {}", file.name()));
    }

    reader
        .result()
        .map_err(|e| anyhow!("error get result: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow!("{} produced no data url", file.name()))
}

fn append_image(container: &Element, src: &str) -> Result<(), anyhow::Error> {
    let img = document()
        .create_element("img")
        .map_err(|e| anyhow!("error create img: {:?}", e))?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| anyhow!("img is not an image element"))?;
    img.set_src(src);
    img.set_class_name("image-preview");

    container
        .append_child(&img)
        .map_err(|e| anyhow!("error append img: {:?}", e))?;

    Ok(())
}

/// Replaces the preview area with thumbnails of the files picked in `input`,
/// in the order they were picked.
pub fn preview(input: HtmlInputElement) {
    let Some(container) = element_by_id(PREVIEW_CONTAINER) else {
        return;
    };
    container.set_inner_html("");

    // taken before anything else so reads of an earlier selection stop
    let ticket = SELECTIONS.with(|s| s.borrow_mut().issue(PREVIEW_CONTAINER));

    let Some(list) = input.files() else {
        SELECTIONS.with(|s| s.borrow_mut().settle(&ticket));
        return;
    };
    let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    let settings = settings();

    spawn_local(async move {
        let is_latest = || SELECTIONS.with(|s| s.borrow().is_latest(&ticket));

        for file in files {
            if !is_latest() {
                return;
            }

            let name = file.name();
            if let Err(e) = check_image(&name, file.size() as u64, &settings) {
                warn!("not previewing {}: {}", name, e);
                toast::show(rejection_notice(&e, &settings), Severity::Warning);
                continue;
            }

            let src = match read_data_url(&file).await {
                Ok(src) => src,
                Err(e) => {
                    error!("{}", e);
                    continue;
                }
            };

            if !is_latest() {
                return;
            }
            if let Err(e) = append_image(&container, &src) {
                error!("{}", e);
            }
        }

        SELECTIONS.with(|s| s.borrow_mut().settle(&ticket));
    });
}
