//! Background model listing for the settings dialog
//!
//! Listing can hit the network, so it runs on its own thread and the dialog
//! polls for the result once per frame.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::client::{ClientError, ModelCatalog};
use crate::ClientType;

pub struct ModelFetch {
    rx: Receiver<Result<Vec<String>, ClientError>>,
}

impl ModelFetch {
    pub fn start(
        catalog: Arc<dyn ModelCatalog>,
        client: ClientType,
        api_version: Option<String>,
    ) -> Self {
        let (tx, rx) = channel();
        debug!("Listing models for {}", client);

        thread::spawn(move || {
            let result = catalog.list_models(client, api_version.as_deref());
            let _ = tx.send(result);
        });

        Self { rx }
    }

    /// Non-blocking; `None` while the listing is still running
    pub fn poll(&self) -> Option<Result<Vec<String>, String>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result.map_err(|e| e.to_string())),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("model listing thread exited without a result".to_string()))
            }
        }
    }
}
