//! Network actor - runs country fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::borders::resolve_borders;
use crate::network::client::CountryClient;

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: CountryClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: CountryClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::LoadAll { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                let response = match client.load_all().await {
                                    Ok(countries) => NetworkResponse::CountriesLoaded { id, countries },
                                    Err(e) => {
                                        tracing::error!(id, error = %e, "Loading countries failed");
                                        NetworkResponse::LoadFailed { id, message: e.to_string() }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::ResolveBorders { id, codes }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, count = codes.len(), "Resolving border countries");
                                let countries = resolve_borders(&codes, |code| {
                                    let client = client.clone();
                                    async move { client.load_one(&code).await }
                                })
                                .await;
                                tracing::info!(id, resolved = countries.len(), "Border countries resolved");
                                let _ = response_tx.send(NetworkResponse::BordersResolved { id, countries });
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::test_server;

    #[tokio::test]
    async fn test_failed_load_becomes_load_failed() {
        let base = test_server::serve("503 Service Unavailable", "{}").await;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(CountryClient::new(base), resp_tx).run(cmd_rx));

        cmd_tx.send(NetworkCommand::LoadAll { id: 7 }).unwrap();
        match resp_rx.recv().await {
            Some(NetworkResponse::LoadFailed { id, message }) => {
                assert_eq!(id, 7);
                assert!(message.contains("503"));
            }
            other => panic!("expected LoadFailed, got {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_borders_resolve_empty() {
        let base = test_server::refused().await;
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(NetworkActor::new(CountryClient::new(base), resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::ResolveBorders { id: 3, codes: vec!["FRA".to_string(), "ESP".to_string()] })
            .unwrap();
        match resp_rx.recv().await {
            Some(NetworkResponse::BordersResolved { id, countries }) => {
                assert_eq!(id, 3);
                assert!(countries.is_empty());
            }
            other => panic!("expected BordersResolved, got {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
