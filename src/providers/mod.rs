//! Delivery providers and the fixed fallback order.

mod emailjs;
mod formkeep;
mod traits;
mod web3forms;

pub use emailjs::EmailJsProvider;
pub use formkeep::FormKeepProvider;
pub use traits::DeliveryProvider;
pub use web3forms::Web3FormsProvider;

use crate::client::AsyncRelayClient;
use crate::config::Config;
use std::sync::Arc;

/// Build the provider chain for every configured provider.
///
/// Priority is fixed: Web3Forms, then FormKeep, then EmailJS. Unconfigured
/// providers are skipped.
pub fn build_chain(config: &Config, client: AsyncRelayClient) -> Vec<Arc<dyn DeliveryProvider>> {
    let mut chain: Vec<Arc<dyn DeliveryProvider>> = Vec::new();

    if let Some(web3forms) = &config.web3forms {
        chain.push(Arc::new(Web3FormsProvider::new(
            client.clone(),
            web3forms.clone(),
        )));
    }

    if let Some(formkeep) = &config.formkeep {
        chain.push(Arc::new(FormKeepProvider::new(
            client.clone(),
            formkeep.clone(),
        )));
    }

    if let Some(emailjs) = &config.emailjs {
        chain.push(Arc::new(EmailJsProvider::new(client, emailjs.clone())));
    }

    chain
}
