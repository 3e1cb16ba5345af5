/// Collaborators for the backends the landing page does not have yet.
///
/// Every action that would leave the page goes through one of these traits:
///
/// - `assistant` - the chat widget's responder (a canned reply today)
/// - `submit` - delivery of the contact form
/// - `sale` - the hero's "Sell My Licenses" call to action
///
/// The unwired implementations keep the page inert. `Services::from_config`
/// swaps in real ones where configuration provides them.
mod assistant;
mod sale;
mod submit;

pub use assistant::{BotReply, CannedResponder, ChatResponder, FIXED_REPLY, send_chat_message};
pub use sale::{SaleIntake, UnwiredSaleIntake};
pub use submit::{Ack, ContactSubmitter, HttpSubmitter, UnwiredSubmitter, submit_contact_form};

use crate::config::SiteConfig;
use crate::contact::ContactError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0} is not wired to a backend")]
    Unwired(&'static str),

    #[error("invalid contact form: {0}")]
    Invalid(#[from] ContactError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint error {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("malformed acknowledgement: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// The set of collaborators handed to the view through context.
#[derive(Clone)]
pub struct Services {
    pub assistant: Arc<dyn ChatResponder>,
    pub contact: Arc<dyn ContactSubmitter>,
    pub sale: Arc<dyn SaleIntake>,
}

impl Services {
    pub fn from_config(config: &SiteConfig) -> Self {
        let contact: Arc<dyn ContactSubmitter> = match &config.contact_endpoint {
            Some(endpoint) => {
                tracing::info!(%endpoint, "contact form posts to endpoint");
                Arc::new(HttpSubmitter::new(
                    endpoint.clone(),
                    config.contact_api_key.clone(),
                ))
            }
            None => Arc::new(UnwiredSubmitter),
        };

        Self {
            assistant: Arc::new(CannedResponder),
            contact,
            sale: Arc::new(UnwiredSaleIntake),
        }
    }
}
