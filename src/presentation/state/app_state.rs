use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::ChatService;
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub chat_service: Arc<ChatService<L>>,
    pub settings: Settings,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            chat_service: Arc::clone(&self.chat_service),
            settings: self.settings.clone(),
        }
    }
}
