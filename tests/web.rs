#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use playground_wasm::wasm::{buttons, preview};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

fn html_element(id: &str) -> web_sys::HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn input_element(id: &str) -> web_sys::HtmlInputElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn buttons_toggle_the_shared_label() {
    install(
        r#"<button id="button_a">Alpha</button>
           <button id="button_b">Beta</button>
           <button id="button_c">Gamma</button>
           <p id="display_text"></p>"#,
    );
    buttons::bind(&document()).unwrap();

    let display = html_element("display_text");
    let a = html_element("button_a");
    let b = html_element("button_b");

    a.click();
    assert_eq!(display.inner_html(), "Alpha");

    // A different button replaces the label rather than appending.
    b.click();
    assert_eq!(display.inner_html(), "Beta");

    // Re-clicking the active button clears it.
    b.click();
    assert_eq!(display.inner_html(), "");

    a.click();
    assert_eq!(display.inner_html(), "Alpha");
}

#[wasm_bindgen_test]
fn preview_bind_resets_slider_and_label_to_defaults() {
    install(
        r#"<input id="image_input" type="file" />
           <img id="image_display" />
           <input id="image_size_slider" type="range" min="0" max="100" value="80" />
           <label id="slider_label">stale</label>"#,
    );
    preview::bind(&document()).unwrap();

    assert_eq!(input_element("image_size_slider").value(), "50");
    assert_eq!(html_element("slider_label").inner_html(), "Scale: 50%");
}

#[wasm_bindgen_test]
fn slider_input_rescales_the_image() {
    install(
        r#"<input id="image_input" type="file" />
           <img id="image_display" />
           <input id="image_size_slider" type="range" min="0" max="100" value="50" />
           <label id="slider_label"></label>"#,
    );
    preview::bind(&document()).unwrap();

    let slider = input_element("image_size_slider");
    slider.set_value("70");
    let event = web_sys::Event::new("input").unwrap();
    slider.dispatch_event(&event).unwrap();

    let image: web_sys::HtmlImageElement = document()
        .get_element_by_id("image_display")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(image.style().get_property_value("width").unwrap(), "70%");
    assert_eq!(image.style().get_property_value("height").unwrap(), "70%");
    assert_eq!(html_element("slider_label").inner_html(), "Scale: 70%");
}

#[wasm_bindgen_test]
fn finished_image_load_snaps_the_scale_back_to_default() {
    install(
        r#"<input id="image_input" type="file" />
           <img id="image_display" />
           <input id="image_size_slider" type="range" min="0" max="100" value="50" />
           <label id="slider_label"></label>"#,
    );
    preview::bind(&document()).unwrap();

    // Drag the slider away from the default first.
    let slider = input_element("image_size_slider");
    slider.set_value("70");
    slider
        .dispatch_event(&web_sys::Event::new("input").unwrap())
        .unwrap();

    let image: web_sys::HtmlImageElement = document()
        .get_element_by_id("image_display")
        .unwrap()
        .dyn_into()
        .unwrap();
    image
        .dispatch_event(&web_sys::Event::new("load").unwrap())
        .unwrap();

    assert_eq!(slider.value(), "50");
    assert_eq!(image.style().get_property_value("width").unwrap(), "50%");
    assert_eq!(image.style().get_property_value("height").unwrap(), "50%");
    assert_eq!(html_element("slider_label").inner_html(), "Scale: 50%");
}

#[wasm_bindgen_test]
fn cancelled_file_selection_leaves_the_image_untouched() {
    install(
        r#"<input id="image_input" type="file" />
           <img id="image_display" />
           <input id="image_size_slider" type="range" min="0" max="100" value="50" />
           <label id="slider_label"></label>"#,
    );
    preview::bind(&document()).unwrap();

    // A change event with an empty file list is what a cancelled dialog fires.
    let input = input_element("image_input");
    let event = web_sys::Event::new("change").unwrap();
    input.dispatch_event(&event).unwrap();

    let image: web_sys::HtmlImageElement = document()
        .get_element_by_id("image_display")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(image.get_attribute("src"), None);
}
