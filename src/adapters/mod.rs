// Adapters layer: HTTP implementations of the domain ports.

pub mod fathom;
pub mod webhook;

pub use fathom::FathomClient;
pub use webhook::{send_webhook, WebhookNotifier};
