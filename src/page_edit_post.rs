use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::api::PostApi;
use crate::controller::{self, EditPostController, OnChange};
use crate::document_and_root;
use crate::form::PostForm;
use crate::navigator::Navigator;
use crate::route::PostId;
use crate::view_state::ViewState;
use crate::POST_ROUTE_PREFIX;

/// Mounts the edit-post page into the root element and issues the initial
/// fetch.
pub fn mount(api: Rc<dyn PostApi>, navigator: Rc<dyn Navigator>, post_id: PostId) {
    let controller = controller::create(api, navigator, post_id);
    controller::start(&controller, on_change_for(&controller));
}

fn on_change_for(controller: &Rc<RefCell<EditPostController>>) -> OnChange {
    let controller = controller.clone();
    Rc::new(move || render(&controller))
}

fn render(controller: &Rc<RefCell<EditPostController>>) {
    let (document, root) = document_and_root();
    root.set_inner_html("");

    let c = controller.borrow();
    match c.view_state() {
        ViewState::Loading => render_loading(&document, &root),
        ViewState::Errored(message) => render_error(&document, &root, message),
        ViewState::NotFound => render_not_found(&document, &root),
        ViewState::Ready(post) => {
            render_form(&document, &root, post.id, c.form(), controller);
        }
    }
}

fn render_loading(document: &Document, root: &Element) {
    let message = document.create_element("div").unwrap();
    message.set_text_content(Some("Loading..."));
    root.append_child(&message).unwrap();
}

fn render_error(document: &Document, root: &Element, message: &str) {
    let heading = document.create_element("h1").unwrap();
    heading.set_text_content(Some(message));
    root.append_child(&heading).unwrap();
}

fn render_not_found(document: &Document, root: &Element) {
    let heading = document.create_element("h1").unwrap();
    heading.set_text_content(Some("404: Could not find post"));
    root.append_child(&heading).unwrap();
}

fn render_form(
    document: &Document,
    root: &Element,
    post_id: PostId,
    form: &PostForm,
    controller: &Rc<RefCell<EditPostController>>,
) {
    let heading = document.create_element("h2").unwrap();
    heading.set_text_content(Some("Edit Post"));
    root.append_child(&heading).unwrap();

    let title_label = document.create_element("label").unwrap();
    title_label.set_text_content(Some("Title"));
    title_label.set_attribute("for", "title").unwrap();
    root.append_child(&title_label).unwrap();

    let title_input = document.create_element("input").unwrap();
    title_input.set_id("title");
    root.append_child(&title_input).unwrap();
    title_input
        .dyn_ref::<HtmlInputElement>()
        .unwrap()
        .set_value(&form.values.title);

    let text_label = document.create_element("label").unwrap();
    text_label.set_text_content(Some("Text"));
    text_label.set_attribute("for", "text").unwrap();
    root.append_child(&text_label).unwrap();

    let text_area = document.create_element("textarea").unwrap();
    text_area.set_id("text");
    root.append_child(&text_area).unwrap();
    text_area
        .dyn_ref::<HtmlTextAreaElement>()
        .unwrap()
        .set_value(&form.values.text);

    let hint = document.create_element("p").unwrap();
    hint.set_text_content(Some(
        "Additional information (such as source, etc.) of the meme.",
    ));
    root.append_child(&hint).unwrap();

    if let Some(message) = form.errors.title {
        append_error_line(document, root, message);
    }
    if let Some(message) = form.errors.text {
        append_error_line(document, root, message);
    }
    if let Some(message) = &form.submit_error {
        append_error_line(document, root, message);
    }

    if form.is_submitting() {
        let submitting = document.create_element("div").unwrap();
        submitting.set_text_content(Some("Updating Post..."));
        root.append_child(&submitting).unwrap();
        return;
    }

    let cancel = document.create_element("a").unwrap();
    cancel.set_text_content(Some("Cancel"));
    cancel
        .set_attribute("href", &format!("{}{}", POST_ROUTE_PREFIX, post_id))
        .unwrap();
    root.append_child(&cancel).unwrap();

    let submit = document.create_element("button").unwrap();
    submit.set_text_content(Some("Update Post"));
    root.append_child(&submit).unwrap();

    let submit_click = {
        let controller = controller.clone();
        let title_input = title_input.clone();
        let text_area = text_area.clone();

        Closure::<dyn FnMut()>::new(move || {
            let title = title_input.dyn_ref::<HtmlInputElement>().unwrap().value();
            let text = text_area.dyn_ref::<HtmlTextAreaElement>().unwrap().value();

            {
                let mut c = controller.borrow_mut();
                c.set_title(title);
                c.set_text(text);
            }

            controller::submit(&controller, on_change_for(&controller));
        })
    };

    let submit_el = submit.dyn_ref::<HtmlElement>().unwrap();
    submit_el.set_onclick(Some(submit_click.as_ref().unchecked_ref()));
    submit_click.forget();
}

fn append_error_line(document: &Document, root: &Element, message: &str) {
    let error = document.create_element("p").unwrap();
    error.set_text_content(Some(message));
    root.append_child(&error).unwrap();
}
