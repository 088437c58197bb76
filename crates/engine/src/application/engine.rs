use std::sync::{Arc, Mutex as StdMutex, MutexGuard};

use log::{debug, info, warn};
use rust_decimal::Decimal;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use paperdesk_clock::SystemClock;
use paperdesk_core::{Order, OrderDraft, OrderStatus, OrderType, Session, Ticker};
use paperdesk_ports::{Clock, PriceNoise};

use crate::error::{EngineError, Result};
use crate::infrastructure::RandomWalkNoise;
use crate::model::EngineConfig;

/// The session engine: sole writer over one client's [`Session`].
///
/// Commands run under the session mutex; the simulation tick is a spawned
/// task that takes the same mutex, so commands and tick firings never
/// interleave. Observers receive a full committed snapshot on the watch
/// channel after every mutation.
pub struct SessionEngine {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
    noise: Arc<Mutex<Box<dyn PriceNoise>>>,
    session: Arc<Mutex<Session>>,
    snapshot_tx: watch::Sender<Session>,
    // Held so the watch channel never closes and late subscribers always
    // observe the latest committed snapshot
    _snapshot_rx: watch::Receiver<Session>,
    tick_task: StdMutex<Option<JoinHandle<()>>>,
}

impl SessionEngine {
    /// Create an engine with the default configuration
    pub fn new(clock: Arc<dyn Clock>, noise: Box<dyn PriceNoise>) -> Self {
        Self::with_config(EngineConfig::default(), clock, noise)
    }

    /// Create an engine with explicit tuning
    pub fn with_config(
        config: EngineConfig,
        clock: Arc<dyn Clock>,
        noise: Box<dyn PriceNoise>,
    ) -> Self {
        let session = Session::default();
        let (snapshot_tx, snapshot_rx) = watch::channel(session.clone());
        Self {
            config,
            clock,
            noise: Arc::new(Mutex::new(noise)),
            session: Arc::new(Mutex::new(session)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
            tick_task: StdMutex::new(None),
        }
    }

    /// Wall-clock time and entropy-seeded noise
    pub fn with_system_defaults() -> Self {
        Self::new(
            Arc::new(SystemClock::new()),
            Box::new(RandomWalkNoise::from_entropy()),
        )
    }

    /// Subscribe to committed session snapshots.
    ///
    /// The receiver is notified after every mutation, including each tick
    /// firing, and always observes a whole-session snapshot - never a
    /// partial mid-tick state.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.snapshot_tx.subscribe()
    }

    /// Clone of the current session state
    pub async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    /// Connect the session: installs the seed portfolio and (re)starts the
    /// simulation tick. Idempotent with respect to the tick - a live tick
    /// task is cancelled before its replacement is spawned, so exactly one
    /// is ever active.
    pub async fn connect(&self) {
        {
            let mut session = self.session.lock().await;
            session.connected = true;
            session.portfolio = self.config.seed_portfolio.clone();
            info!(
                "session connected, {} positions seeded",
                session.portfolio.len()
            );
            self.publish(&session);
        }
        self.restart_tick();
    }

    /// Disconnect the session: stops the tick and clears all collections.
    /// Safe to call when already disconnected.
    pub async fn disconnect(&self) {
        // Cancel the timer before touching state so no firing can land on
        // the cleared session.
        if let Some(task) = self.tick_slot().take() {
            task.abort();
        }
        let mut session = self.session.lock().await;
        session.clear();
        info!("session disconnected, state cleared");
        self.publish(&session);
    }

    /// Subscribe to a market-data ticker.
    ///
    /// The symbol is trimmed and uppercased before keying. Duplicate
    /// subscriptions are no-ops: the existing entry keeps its price.
    pub async fn subscribe_ticker(&self, symbol: &str) {
        let key = symbol.trim().to_uppercase();
        if key.is_empty() {
            warn!("ignoring ticker subscription with empty symbol");
            return;
        }

        let mut session = self.session.lock().await;
        if session.tickers.contains_key(&key) {
            return;
        }

        let seed = {
            let mut noise = self.noise.lock().await;
            noise.uniform(self.config.ticker_seed_low, self.config.ticker_seed_high)
        };
        let ticker = Ticker::seeded(
            key.clone(),
            Decimal::from_f64_retain(seed).unwrap_or(Decimal::ZERO),
        );
        debug!("subscribed {} at seed price {}", key, ticker.price);
        session.tickers.insert(key, ticker);
        self.publish(&session);
    }

    /// Drop a ticker subscription. Absent symbols are a no-op.
    pub async fn unsubscribe_ticker(&self, symbol: &str) {
        let key = symbol.trim().to_uppercase();
        let mut session = self.session.lock().await;
        if session.tickers.remove(&key).is_some() {
            debug!("unsubscribed {}", key);
            self.publish(&session);
        }
    }

    /// Record an order: validates the draft, then assigns the next id,
    /// `Submitted` status, and a clock timestamp, and prepends the order to
    /// the log (newest first).
    ///
    /// A rejected draft leaves the session untouched - the id counter is
    /// not consumed.
    pub async fn place_order(&self, draft: OrderDraft) -> Result<Order> {
        validate(&draft)?;

        let mut session = self.session.lock().await;
        let order = Order {
            id: session.next_order_id,
            symbol: draft.normalized_symbol(),
            quantity: draft.quantity,
            side: draft.side,
            order_type: draft.order_type,
            limit_price: draft.limit_price,
            status: OrderStatus::Submitted,
            created_at: self.clock.now(),
        };
        session.next_order_id += 1;
        info!(
            "order {} submitted: {:?} {} {}",
            order.id, order.side, order.quantity, order.symbol
        );
        // Ids grow monotonically while the log reads newest-first
        session.orders.insert(0, order.clone());
        self.publish(&session);
        Ok(order)
    }

    fn publish(&self, session: &Session) {
        // Cannot fail: the engine holds a receiver, so the channel stays open
        let _ = self.snapshot_tx.send(session.clone());
    }

    fn tick_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.tick_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cancel any live tick task and spawn a fresh one
    fn restart_tick(&self) {
        let mut slot = self.tick_slot();
        if let Some(task) = slot.take() {
            task.abort();
        }

        let session = Arc::clone(&self.session);
        let noise = Arc::clone(&self.noise);
        let snapshot_tx = self.snapshot_tx.clone();
        let interval = self.config.tick_interval;
        let position_jitter = self.config.position_jitter;
        let ticker_jitter_pct = self.config.ticker_jitter_pct;

        *slot = Some(tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // An interval's first tick completes immediately; swallow it so
            // seeded state is observable before any perturbation.
            timer.tick().await;
            loop {
                timer.tick().await;
                let mut session = session.lock().await;
                if !session.connected {
                    // Liveness check: a firing racing a disconnect must not
                    // mutate the cleared session.
                    break;
                }
                let mut noise = noise.lock().await;
                advance_prices(
                    &mut session,
                    noise.as_mut(),
                    position_jitter,
                    ticker_jitter_pct,
                );
                drop(noise);
                // No await between the mutation above and this publish, so
                // a cancellation can never expose a half-applied tick.
                let _ = snapshot_tx.send(session.clone());
                debug!(
                    "tick applied to {} positions, {} tickers",
                    session.portfolio.len(),
                    session.tickers.len()
                );
            }
        }));
    }
}

impl Drop for SessionEngine {
    fn drop(&mut self) {
        // Teardown backstop: never leak a ticking task past the engine
        if let Some(task) = self.tick_slot().take() {
            task.abort();
        }
    }
}

/// One tick firing: every position drifts by a uniform amount in
/// `(-position_jitter, +position_jitter)` price units, every ticker by a
/// uniform fraction in `(-ticker_jitter_pct, +ticker_jitter_pct)` of its
/// current price. Flooring and rounding happen inside `mark`.
fn advance_prices(
    session: &mut Session,
    noise: &mut dyn PriceNoise,
    position_jitter: f64,
    ticker_jitter_pct: f64,
) {
    for position in &mut session.portfolio {
        let delta = noise.uniform(-position_jitter, position_jitter);
        let delta = Decimal::from_f64_retain(delta).unwrap_or(Decimal::ZERO);
        position.mark(position.current_price + delta);
    }
    for ticker in session.tickers.values_mut() {
        let fraction = noise.uniform(-ticker_jitter_pct, ticker_jitter_pct);
        let delta = ticker.price * Decimal::from_f64_retain(fraction).unwrap_or(Decimal::ZERO);
        ticker.mark(ticker.price + delta);
    }
}

fn validate(draft: &OrderDraft) -> Result<()> {
    if draft.symbol.trim().is_empty() {
        return Err(EngineError::EmptySymbol);
    }
    if draft.quantity <= 0 {
        return Err(EngineError::InvalidQuantity(draft.quantity));
    }
    match (draft.order_type, draft.limit_price) {
        (OrderType::Limit, None) => Err(EngineError::MissingLimitPrice),
        (OrderType::Limit, Some(price)) if price <= Decimal::ZERO => {
            Err(EngineError::InvalidLimitPrice(price))
        }
        (OrderType::Market, Some(_)) => Err(EngineError::UnexpectedLimitPrice),
        _ => Ok(()),
    }
}
