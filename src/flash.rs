use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Redirect;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use utoipa::{IntoParams, ToSchema};

/// How long a shown message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    pub fn query_key(self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Success => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Default)]
struct RegionSlot {
    message: Option<StatusMessage>,
    pending_hide: Option<JoinHandle<()>>,
    generation: u64,
}

/// The portal's single status-message region. At most one message is visible
/// at a time; showing a new one cancels the pending hide of the previous
/// message before scheduling its own.
#[derive(Clone)]
pub struct MessageRegion {
    slot: Arc<Mutex<RegionSlot>>,
    ttl: Duration,
}

impl MessageRegion {
    pub fn new() -> Self {
        Self::with_ttl(MESSAGE_TTL)
    }

    /// Region with a custom hide delay. Production uses [`MESSAGE_TTL`].
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(RegionSlot::default())),
            ttl,
        }
    }

    /// Show `text` verbatim and schedule the one-shot hide.
    pub fn show(&self, text: impl Into<String>, kind: MessageKind) {
        let text = text.into();
        let mut slot = self.slot.lock().expect("message region lock poisoned");
        if let Some(pending) = slot.pending_hide.take() {
            pending.abort();
        }
        slot.generation += 1;
        slot.message = Some(StatusMessage { text, kind });

        let generation = slot.generation;
        let region = Arc::clone(&self.slot);
        let ttl = self.ttl;
        slot.pending_hide = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = region.lock().expect("message region lock poisoned");
            // A newer show supersedes this hide even if abort lost the race.
            if slot.generation == generation {
                slot.message = None;
                slot.pending_hide = None;
            }
        }));
    }

    pub fn current(&self) -> Option<StatusMessage> {
        self.slot
            .lock()
            .expect("message region lock poisoned")
            .message
            .clone()
    }

    pub fn hide(&self) {
        let mut slot = self.slot.lock().expect("message region lock poisoned");
        if let Some(pending) = slot.pending_hide.take() {
            pending.abort();
        }
        slot.message = None;
    }
}

impl Default for MessageRegion {
    fn default() -> Self {
        Self::new()
    }
}

/// Page-load query parameters recognized for transient feedback. Values are
/// percent-decoded by the query extractor.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct FlashParams {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Surface `?error=` / `?success=` into the region. Both may fire; the later
/// call owns the visible slot.
pub fn bootstrap(region: &MessageRegion, params: &FlashParams) {
    if let Some(error) = params.error.as_deref() {
        region.show(error, MessageKind::Error);
    }
    if let Some(success) = params.success.as_deref() {
        region.show(success, MessageKind::Success);
    }
}

/// Redirect carrying a transient message as a query parameter, to be picked
/// up by the target page's bootstrap.
pub fn redirect_with(path: &str, kind: MessageKind, text: &str) -> Redirect {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(kind.query_key(), text)
        .finish();
    Redirect::to(&format!("{path}?{query}"))
}
