use web_sys::Event;
use web_sys::MessageEvent as WebSocketMessageEvent;
use web_sys::WebSocket;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::{ApiError, ApiResult, ClientRequest, Completion, PostApi, ServerResponse};
use crate::log;
use crate::post::PostRecord;
use crate::route::PostId;

type PendingCompletion = Box<dyn FnOnce(ApiResult<ServerResponse>)>;

/// WebSocket client for the forum API. Every request carries a request id;
/// the matching completion runs when the server answers with the same id.
pub struct ForumConnection {
    websocket: Rc<RefCell<WebSocket>>,
    pending: Rc<RefCell<HashMap<u64, PendingCompletion>>>,
    next_request_id: Cell<u64>,
}

impl ForumConnection {
    pub fn new(url: &str) -> Self {
        let websocket = Rc::new(RefCell::new(WebSocket::new(url).unwrap()));
        let pending = Rc::new(RefCell::new(HashMap::<u64, PendingCompletion>::new()));

        let onopen = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            log("websocket opened");
        });
        websocket
            .borrow()
            .set_onopen(Some(onopen.as_ref().unchecked_ref()));
        onopen.forget();

        let onclose = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            log("websocket closed");
        });
        websocket
            .borrow()
            .set_onclose(Some(onclose.as_ref().unchecked_ref()));
        onclose.forget();

        let pending0 = pending.clone();
        let onmessage = Closure::<dyn FnMut(WebSocketMessageEvent)>::new(
            move |message: WebSocketMessageEvent| {
                let data = match message.data().as_string() {
                    Some(data) => data,
                    None => {
                        log("discarding non-text websocket message");
                        return;
                    }
                };
                log(&format!("got websocket message: {:?}", data));

                let responses: Vec<ServerResponse> = match serde_json::from_str(&data) {
                    Ok(responses) => responses,
                    Err(err) => {
                        log(&format!("could not parse ServerResponses: {}", err));
                        return;
                    }
                };

                for response in responses {
                    let completion = pending0.borrow_mut().remove(&response.request_id());
                    match completion {
                        Some(done) => done(Ok(response)),
                        None => log(&format!("no pending request for response: {:?}", response)),
                    }
                }
            },
        );
        websocket
            .borrow()
            .set_onmessage(Some(onmessage.as_ref().unchecked_ref()));
        onmessage.forget();

        ForumConnection {
            websocket,
            pending,
            next_request_id: Cell::new(1),
        }
    }

    fn take_request_id(&self) -> u64 {
        let id = self.next_request_id.get();
        self.next_request_id.set(id + 1);
        id
    }

    // TODO: queue requests issued before the socket opens
    fn send_request(&self, request: ClientRequest, request_id: u64, done: PendingCompletion) {
        self.pending.borrow_mut().insert(request_id, done);

        let msg = serde_json::to_string(&vec![request]).unwrap();
        if let Err(err) = self.websocket.borrow().send_with_str(&msg) {
            if let Some(done) = self.pending.borrow_mut().remove(&request_id) {
                done(Err(ApiError::Transport(format!("{:?}", err))));
            }
        }
    }
}

impl PostApi for ForumConnection {
    fn fetch_post_by_id(&self, id: PostId, done: Completion<Option<PostRecord>>) {
        let request_id = self.take_request_id();
        self.send_request(
            ClientRequest::FetchPostById { request_id, id },
            request_id,
            Box::new(move |result| {
                done(result.and_then(|response| match response {
                    ServerResponse::Post { post, .. } => Ok(post),
                    ServerResponse::RequestFailed { message, .. } => Err(ApiError::Server(message)),
                    _ => Err(ApiError::Protocol),
                }))
            }),
        );
    }

    fn update_post(&self, id: PostId, title: String, text: String, done: Completion<()>) {
        let request_id = self.take_request_id();
        self.send_request(
            ClientRequest::UpdatePost {
                request_id,
                id,
                title,
                text,
            },
            request_id,
            Box::new(move |result| {
                done(result.and_then(|response| match response {
                    ServerResponse::PostUpdated { .. } => Ok(()),
                    ServerResponse::RequestFailed { message, .. } => Err(ApiError::Server(message)),
                    _ => Err(ApiError::Protocol),
                }))
            }),
        );
    }
}
