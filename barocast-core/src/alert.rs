//! Storm Alert Policy
//!
//! ## State Machine
//!
//! ```text
//!              Storm ∧ alerts enabled / send
//!   ┌──────────┐ ───────────────────────────► ┌───────┐
//!   │ NotSent  │                              │ Sent  │ ◄─┐ Storm / hold
//!   └──────────┘ ◄─────────────────────────── └───────┘ ──┘
//!     ▲      │        not Storm / cancel
//!     └──────┘
//!   not Storm / cancel, Storm ∧ alerts disabled / hold
//! ```
//!
//! The "alert sent" flag is the only state the forecasting core carries from
//! one update cycle to the next. It lives behind an [`AlertStateStore`] handle
//! supplied by the caller, so the policy itself stays stateless and a replay
//! with the same forecast and the same stored flag produces the same flag and
//! no second notification.
//!
//! Cancelling is unconditional whenever the forecast is not a storm, which
//! also clears a notification left over from a previous process.

use crate::errors::ForecastResult;
use crate::forecast::Weather;

/// Whether a storm notification is currently outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    NotSent,
    Sent,
}

impl AlertState {
    pub fn from_sent(sent: bool) -> Self {
        if sent {
            AlertState::Sent
        } else {
            AlertState::NotSent
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, AlertState::Sent)
    }
}

/// Directive for the notification collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// Show the storm notification
    Send,
    /// Remove any storm notification
    Cancel,
    /// Storm forecast but nothing to do (already sent or alerts disabled)
    Hold,
}

/// Persisted "already sent storm alert" flag
pub trait AlertStateStore {
    fn alert_sent(&self) -> ForecastResult<bool>;
    fn set_alert_sent(&mut self, sent: bool) -> ForecastResult<()>;
}

/// Delivers storm notifications
pub trait StormNotifier {
    fn send_storm_alert(&mut self) -> ForecastResult<()>;
    fn cancel_storm_alert(&mut self) -> ForecastResult<()>;
}

/// Flag kept in memory for the lifetime of the store
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryAlertStore {
    sent: bool,
}

impl InMemoryAlertStore {
    pub fn new(sent: bool) -> Self {
        Self { sent }
    }
}

impl AlertStateStore for InMemoryAlertStore {
    fn alert_sent(&self) -> ForecastResult<bool> {
        Ok(self.sent)
    }

    fn set_alert_sent(&mut self, sent: bool) -> ForecastResult<()> {
        self.sent = sent;
        Ok(())
    }
}

/// Decides when to raise and clear storm notifications
#[derive(Debug, Clone, Copy)]
pub struct StormAlertPolicy {
    send_storm_alerts: bool,
}

impl StormAlertPolicy {
    pub fn new(send_storm_alerts: bool) -> Self {
        Self { send_storm_alerts }
    }

    /// Pure transition: action to take and the state to persist
    pub fn decide(&self, forecast: Weather, state: AlertState) -> (AlertAction, AlertState) {
        match (forecast, state) {
            (Weather::Storm, AlertState::NotSent) if self.send_storm_alerts => {
                (AlertAction::Send, AlertState::Sent)
            }
            (Weather::Storm, state) => (AlertAction::Hold, state),
            (_, _) => (AlertAction::Cancel, AlertState::NotSent),
        }
    }

    /// Read the stored flag, notify or cancel, and persist the new flag.
    ///
    /// The flag is only written after the notifier succeeded, so a failed
    /// send is retried on the next cycle.
    pub fn evaluate<S, N>(&self, forecast: Weather, store: &mut S, notifier: &mut N) -> ForecastResult<AlertAction>
    where
        S: AlertStateStore + ?Sized,
        N: StormNotifier + ?Sized,
    {
        let state = AlertState::from_sent(store.alert_sent()?);
        let (action, next) = self.decide(forecast, state);

        match action {
            AlertAction::Send => {
                log_info!("Storm forecast, sending alert");
                notifier.send_storm_alert()?;
            }
            AlertAction::Cancel => {
                if state.is_sent() {
                    log_info!("Storm cleared ({}), cancelling alert", forecast);
                }
                notifier.cancel_storm_alert()?;
            }
            AlertAction::Hold => {
                log_debug!("Storm forecast, alert held (sent: {})", state.is_sent());
            }
        }

        if next != state || action == AlertAction::Cancel {
            store.set_alert_sent(next.is_sent())?;
        }

        Ok(action)
    }
}
