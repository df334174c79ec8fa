use std::sync::Arc;

use crate::application::messages::MessageService;

#[derive(Clone)]
pub struct ApiState {
    pub messages: Arc<MessageService>,
}
