use std::cell::RefCell;
use std::rc::Rc;

use crate::api::PostApi;
use crate::form::{validate, FieldErrors, PostForm, SubmissionState};
use crate::navigator::Navigator;
use crate::route::{PostId, INVALID_POST_ID};
use crate::view_state::{view_state, LoadState, ViewState};

/// Change notification fired after controller state settles; the DOM layer
/// re-renders in response.
pub type OnChange = Rc<dyn Fn()>;

/// Behavioral core of the edit-post page, free of any DOM binding.
pub struct EditPostController {
    post_id: PostId,
    load: LoadState,
    form: PostForm,
    epoch: u64,
    api: Rc<dyn PostApi>,
    navigator: Rc<dyn Navigator>,
}

impl EditPostController {
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn view_state(&self) -> ViewState<'_> {
        view_state(&self.load)
    }

    pub fn set_title(&mut self, title: String) {
        self.form.values.title = title;
    }

    pub fn set_text(&mut self, text: String) {
        self.form.values.text = text;
    }

    /// Invalidates every outstanding completion; late callbacks for a torn
    /// down view become no-ops.
    pub fn dispose(&mut self) {
        self.epoch += 1;
    }
}

pub fn create(
    api: Rc<dyn PostApi>,
    navigator: Rc<dyn Navigator>,
    post_id: PostId,
) -> Rc<RefCell<EditPostController>> {
    Rc::new(RefCell::new(EditPostController {
        post_id,
        load: LoadState::default(),
        form: PostForm::new(),
        epoch: 0,
        api,
        navigator,
    }))
}

/// Issues the initial fetch. `on_change` fires after every state
/// transition, including this one.
pub fn start(controller: &Rc<RefCell<EditPostController>>, on_change: OnChange) {
    issue_fetch(controller, on_change);
}

/// Points the controller at a different post without remounting; the draft
/// re-seeds when the new record arrives and stale completions are dropped.
pub fn navigate_to(
    controller: &Rc<RefCell<EditPostController>>,
    post_id: PostId,
    on_change: OnChange,
) {
    {
        let mut c = controller.borrow_mut();
        c.post_id = post_id;
        c.epoch += 1;
        c.load = LoadState::default();
    }

    issue_fetch(controller, on_change);
}

fn issue_fetch(controller: &Rc<RefCell<EditPostController>>, on_change: OnChange) {
    let (api, post_id, epoch) = {
        let mut c = controller.borrow_mut();
        if c.post_id == INVALID_POST_ID {
            // No fetch for the sentinel: resolves straight to "not found".
            c.load = LoadState::default();
            drop(c);
            on_change();
            return;
        }

        c.load.fetching = true;
        (c.api.clone(), c.post_id, c.epoch)
    };

    on_change();

    let weak = Rc::downgrade(controller);
    let done = on_change;
    api.fetch_post_by_id(
        post_id,
        Box::new(move |result| {
            let controller = match weak.upgrade() {
                Some(controller) => controller,
                None => return,
            };

            {
                let mut c = controller.borrow_mut();
                if c.epoch != epoch {
                    return;
                }

                c.load.fetching = false;
                match result {
                    Ok(post) => {
                        if let Some(post) = &post {
                            c.form.seed(post);
                        }
                        c.load.data = post;
                        c.load.error = None;
                    }
                    Err(err) => {
                        c.load.error = Some(err.to_string());
                        c.load.data = None;
                    }
                }
            }

            done();
        }),
    );
}

/// Validates the draft and, when clean, drives the update plus
/// navigate-back pipeline. Calls while a submission is in flight are
/// ignored.
pub fn submit(controller: &Rc<RefCell<EditPostController>>, on_change: OnChange) {
    let (api, navigator, post_id, title, text, epoch) = {
        let mut c = controller.borrow_mut();
        if c.form.is_submitting() {
            return;
        }
        c.form.submit_error = None;

        let errors = validate(&c.form.values);
        if !errors.is_empty() {
            c.form.errors = errors;
            drop(c);
            on_change();
            return;
        }

        c.form.errors = FieldErrors::default();
        c.form.submission = SubmissionState::Submitting;
        (
            c.api.clone(),
            c.navigator.clone(),
            c.post_id,
            c.form.values.title.clone(),
            c.form.values.text.clone(),
            c.epoch,
        )
    };

    on_change();

    let weak = Rc::downgrade(controller);
    let done = on_change;
    api.update_post(
        post_id,
        title,
        text,
        Box::new(move |result| {
            let controller = match weak.upgrade() {
                Some(controller) => controller,
                None => return,
            };

            match result {
                Ok(()) => {
                    let stale = controller.borrow().epoch != epoch;
                    if !stale {
                        // Submission state stays Submitting: navigation
                        // tears the page down.
                        navigator.go_back();
                    }
                }
                Err(err) => {
                    {
                        let mut c = controller.borrow_mut();
                        if c.epoch != epoch {
                            return;
                        }

                        c.form.submission = SubmissionState::Idle;
                        c.form.submit_error = Some(err.to_string());
                    }

                    done();
                }
            }
        }),
    );
}
