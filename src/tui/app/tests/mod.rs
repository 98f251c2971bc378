pub(crate) use super::*;
pub(crate) use crate::engine::CountdownDisplay;
pub(crate) use crate::tui::test_utils::{make_app, make_app_with_texts, test_texts};

mod interaction;
