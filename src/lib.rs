extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

pub mod api;
pub mod auth;
pub mod connection;
pub mod controller;
pub mod form;
pub mod navigator;
pub mod page_edit_post;
pub mod post;
pub mod route;
pub mod view_state;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage};

use crate::auth::LocalStorageSession;
use crate::connection::ForumConnection;
use crate::navigator::BrowserNavigator;

pub const SESSION_TOKEN_LOCAL_STORAGE_KEY: &'static str = "meme_forum_session_token";
pub const WEBSOCKET_URL: &'static str = "ws://127.0.0.1:5050";
pub const LOGIN_ROUTE: &'static str = "/login";
pub const EDIT_POST_ROUTE_PREFIX: &'static str = "/post/edit/";
pub const POST_ROUTE_PREFIX: &'static str = "/post/";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);
}

pub fn get_local_storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

pub fn document_and_root() -> (Document, Element) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let root = document.query_selector("#meme_forum_root").unwrap().unwrap();

    (document, root)
}

#[wasm_bindgen]
pub fn bootstrap() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let navigator = Rc::new(BrowserNavigator);
    let session = LocalStorageSession;

    let path = web_sys::window().unwrap().location().pathname().unwrap();
    if !auth::require_auth(&session, navigator.as_ref(), &path) {
        return;
    }

    let api = Rc::new(ForumConnection::new(WEBSOCKET_URL));
    let post_id = route::post_id_from_path(&path);
    log(&format!("editing post {}", post_id));

    page_edit_post::mount(api, navigator, post_id);
}
