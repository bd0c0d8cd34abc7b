//! Table board
//!
//! One-shot fetch plus an optional background refresher that republishes
//! the board every [`REFRESH_INTERVAL`] on a `watch` channel until
//! cancelled.

use crate::{ClientError, ClientResult, DineInClient};
use shared::models::DiningTable;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Latest state of the board
#[derive(Debug, Clone, Default)]
pub enum TableBoard {
    #[default]
    Loading,
    Ready(Vec<DiningTable>),
    /// Last refresh failed; message for the notification
    Failed(String),
}

impl TableBoard {
    pub fn tables(&self) -> &[DiningTable] {
        match self {
            TableBoard::Ready(tables) => tables,
            _ => &[],
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            TableBoard::Ready(tables) if tables.is_empty() => {
                Some("No tables found. Please generate tables first.")
            }
            _ => None,
        }
    }
}

/// Tables of the business stored in the session
pub async fn fetch_tables(client: &DineInClient) -> ClientResult<Vec<DiningTable>> {
    let business_id = client
        .session()
        .business_id()
        .ok_or_else(|| ClientError::Validation("Business ID not found".into()))?;
    client.tables(business_id).await
}

/// Background refresher handle
///
/// Cancelled on [`TableRefresher::stop`] or when dropped.
#[derive(Debug)]
pub struct TableRefresher {
    rx: watch::Receiver<TableBoard>,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl TableRefresher {
    /// Fetch now, then every `interval`
    pub fn spawn(client: &DineInClient, interval: Duration) -> Self {
        let (tx, rx) = watch::channel(TableBoard::Loading);
        let shutdown = CancellationToken::new();
        let client = client.clone();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let board = match fetch_tables(&client).await {
                            Ok(tables) => TableBoard::Ready(tables),
                            Err(e) => {
                                tracing::warn!(error = %e, "Fetch tables error");
                                TableBoard::Failed(e.user_message())
                            }
                        };
                        if tx.send(board).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Table refresher stopped");
        });

        Self {
            rx,
            shutdown,
            handle: Some(handle),
        }
    }

    /// New receiver for the board
    pub fn subscribe(&self) -> watch::Receiver<TableBoard> {
        self.rx.clone()
    }

    pub fn current(&self) -> TableBoard {
        self.rx.borrow().clone()
    }

    /// Cancel and wait for the task to finish
    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TableRefresher {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_empty_message() {
        assert_eq!(
            TableBoard::Ready(vec![]).empty_message(),
            Some("No tables found. Please generate tables first.")
        );
        assert!(TableBoard::Loading.empty_message().is_none());
        assert!(TableBoard::Failed("x".into()).tables().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_without_business_id() {
        let client = DineInClient::new(crate::ClientConfig::default()).unwrap();
        let err = fetch_tables(&client).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref m) if m == "Business ID not found"));
    }
}
