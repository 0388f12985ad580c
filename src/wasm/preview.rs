//! DOM glue for the image preview: a file input feeds an `<img>` through an
//! object URL, and a range slider scales the displayed size.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement, HtmlImageElement, HtmlInputElement, Url};

use crate::scale;

const INPUT_ID: &str = "image_input";
const IMAGE_ID: &str = "image_display";
const SLIDER_ID: &str = "image_size_slider";
const LABEL_ID: &str = "slider_label";

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(Into::into)
}

fn apply_scale(image: &HtmlImageElement, label: &HtmlElement, percent: u32) -> Result<(), JsValue> {
    let css = scale::css_percent(percent);
    let style = image.style();
    style.set_property("width", &css)?;
    style.set_property("height", &css)?;
    label.set_inner_html(&scale::label_text(percent));
    Ok(())
}

/// Wires up the file input, the image's load event, and the slider, and puts
/// the slider and its label into their default state.
pub fn bind(document: &Document) -> Result<(), JsValue> {
    let input: HtmlInputElement = lookup(document, INPUT_ID)?;
    let image: HtmlImageElement = lookup(document, IMAGE_ID)?;
    let slider: HtmlInputElement = lookup(document, SLIDER_ID)?;
    let label: HtmlElement = lookup(document, LABEL_ID)?;

    slider.set_value(&scale::DEFAULT_PERCENT.to_string());
    label.set_inner_html(&scale::label_text(scale::DEFAULT_PERCENT));

    // File selection: a cancelled dialog yields no file and is a no-op.
    let on_change = {
        let image = image.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(input) = event.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => image.set_src(&url),
                Err(err) => web_sys::console::warn_1(&err),
            }
        }) as Box<dyn FnMut(Event)>)
    };
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    // A freshly loaded image snaps back to the default scale.
    let on_load = {
        let image = image.clone();
        let slider = slider.clone();
        let label = label.clone();
        Closure::wrap(Box::new(move |_event: Event| {
            slider.set_value(&scale::DEFAULT_PERCENT.to_string());
            if let Err(err) = apply_scale(&image, &label, scale::DEFAULT_PERCENT) {
                web_sys::console::warn_1(&err);
            }
        }) as Box<dyn FnMut(Event)>)
    };
    image.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    let on_input = {
        let slider = slider.clone();
        Closure::wrap(Box::new(move |_event: Event| {
            let percent = scale::parse_percent(&slider.value());
            if let Err(err) = apply_scale(&image, &label, percent) {
                web_sys::console::warn_1(&err);
            }
        }) as Box<dyn FnMut(Event)>)
    };
    slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    Ok(())
}
