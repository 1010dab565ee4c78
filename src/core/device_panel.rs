//! Device list panel session.
//!
//! The panel owns its [`DeviceListState`]. A refresh runs the source on a
//! tokio task and sends the outcome back over a channel; the state only
//! changes when the owner applies that outcome with [`DevicePanel::wait_for_refresh`]
//! or [`DevicePanel::poll_refresh`]. While one fetch is running, further
//! refresh requests are dropped.

use crate::core::labels;
use crate::domain::model::{DeviceListState, DeviceRecord};
use crate::domain::ports::DeviceSource;
use crate::utils::error::{PanelError, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

type FetchOutcome = Result<Vec<DeviceRecord>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshRequest {
    Dispatched,
    /// A fetch was already in flight; nothing was started.
    Suppressed,
}

pub struct DevicePanel<S: DeviceSource + 'static> {
    source: Arc<S>,
    state: DeviceListState,
    in_flight: bool,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl<S: DeviceSource + 'static> DevicePanel<S> {
    /// Creates an idle panel in the `Loading` state without fetching.
    pub fn new(source: S) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            state: DeviceListState::Loading,
            in_flight: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Creates the panel and starts the initial load.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, see [`DevicePanel::request_refresh`].
    pub fn open(source: S) -> Self {
        let mut panel = Self::new(source);
        panel.request_refresh();
        panel
    }

    /// Starts a background fetch unless one is already running.
    ///
    /// The fetch always reports back, even when the source panics, so the
    /// refresh trigger is re-enabled once the outcome is applied.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, since the fetch is
    /// started with [`tokio::spawn`].
    pub fn request_refresh(&mut self) -> RefreshRequest {
        if self.in_flight {
            tracing::debug!("Refresh ignored, a device fetch is already running");
            return RefreshRequest::Suppressed;
        }

        self.in_flight = true;
        self.state = DeviceListState::Loading;

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let fetch = tokio::spawn(async move { source.list_devices().await });
            let outcome = fetch.await.unwrap_or_else(|e| Err(PanelError::from(e)));
            // the receiver lives as long as the panel
            let _ = tx.send(outcome);
        });

        tracing::debug!("Device fetch dispatched");
        RefreshRequest::Dispatched
    }

    /// Waits for the running fetch, if any, and applies its outcome.
    pub async fn wait_for_refresh(&mut self) -> &DeviceListState {
        if self.in_flight {
            if let Some(outcome) = self.outcome_rx.recv().await {
                self.apply(outcome);
            }
        }
        &self.state
    }

    /// Applies a finished fetch without waiting. Returns whether the state changed.
    pub fn poll_refresh(&mut self) -> bool {
        match self.outcome_rx.try_recv() {
            Ok(outcome) => {
                self.apply(outcome);
                true
            }
            Err(_) => false,
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.in_flight = false;
        self.state = match outcome {
            Ok(records) => {
                tracing::info!("Found {} device(s)", records.len());
                DeviceListState::Loaded(records)
            }
            Err(e) => {
                tracing::warn!("Device fetch failed: {} ({})", e, e.recovery_suggestion());
                DeviceListState::Failed(format!("{}{}", labels::ERROR_PREFIX, e))
            }
        };
    }

    pub fn state(&self) -> &DeviceListState {
        &self.state
    }

    pub fn is_refresh_enabled(&self) -> bool {
        !self.in_flight
    }

    pub fn refresh_label(&self) -> &'static str {
        if self.in_flight {
            labels::REFRESH_BUTTON_BUSY
        } else {
            labels::REFRESH_BUTTON
        }
    }

    /// The panel body below the title row, one entry per line.
    pub fn body_lines(&self) -> Vec<String> {
        match &self.state {
            DeviceListState::Loading => vec![labels::SEARCHING.to_string()],
            DeviceListState::Failed(message) => vec![message.clone()],
            DeviceListState::Loaded(records) if records.is_empty() => {
                vec![labels::NO_DEVICES.to_string()]
            }
            DeviceListState::Loaded(records) => records
                .iter()
                .map(|r| labels::device_row(&r.serial, &r.state))
                .collect(),
        }
    }
}
