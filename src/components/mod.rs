pub mod app;
pub mod camera_overlay;
pub mod controls_panel;
pub mod phone_preview;
pub mod print_info_panel;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlImageElement;

use crate::state::Session;

/// Shared session for components. Compares by identity so props stay cheap.
#[derive(Clone)]
pub struct SessionHandle(pub Rc<RefCell<Session<HtmlImageElement>>>);

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
