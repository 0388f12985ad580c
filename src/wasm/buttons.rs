//! DOM glue for the button toggle: three buttons share one label element.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement};

use crate::toggle;

const BUTTON_IDS: [&str; 3] = ["button_a", "button_b", "button_c"];
const DISPLAY_ID: &str = "display_text";

fn element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(Into::into)
}

/// Registers a click handler on each button. The handler reads the clicked
/// button's caption and toggles the shared label through
/// [`toggle::next_label`].
pub fn bind(document: &Document) -> Result<(), JsValue> {
    let display = element(document, DISPLAY_ID)?;

    for id in BUTTON_IDS {
        let button = element(document, id)?;
        let display = display.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let caption = target.inner_html();
            display.set_inner_html(&toggle::next_label(&display.inner_html(), &caption));
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}
