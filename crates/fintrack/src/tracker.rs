//! In-memory record store with persistence and derivation access.

use chrono::NaiveDate;
use tracing::warn;
use uuid::Uuid;

use fintrack_core::{
    CategorySlice, Clock, CoreError, GoalForm, GoalProgress, GoalService, MonthlyFlow,
    RecordStore, SummaryService, SystemClock, Totals, TransactionForm, TransactionService,
};
use fintrack_domain::{Goal, Transaction};
use fintrack_storage_json::JsonRecordStore;

use crate::TrackerConfig;

/// Owns the transaction and goal collections, persisting every mutation
/// through the configured record store.
///
/// Mutations take `&mut self`, so writes are serialized by construction.
/// All reads recompute from the current snapshot.
pub struct FinanceTracker {
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
    store: Box<dyn RecordStore>,
    clock: Box<dyn Clock>,
    storage_warnings: Vec<String>,
}

impl FinanceTracker {
    /// Loads both collections from the store. A collection that fails to
    /// parse falls back to empty on its own; the sibling is unaffected.
    pub fn open(store: Box<dyn RecordStore>, clock: Box<dyn Clock>) -> Self {
        let mut storage_warnings = Vec::new();
        let transactions = match store.load_transactions() {
            Ok(records) => records,
            Err(err) => {
                let message = format!("transaction collection could not be loaded: {err}");
                warn!("{message}");
                storage_warnings.push(message);
                Vec::new()
            }
        };
        let goals = match store.load_goals() {
            Ok(records) => records,
            Err(err) => {
                let message = format!("goal collection could not be loaded: {err}");
                warn!("{message}");
                storage_warnings.push(message);
                Vec::new()
            }
        };
        Self {
            transactions,
            goals,
            store,
            clock,
            storage_warnings,
        }
    }

    /// Opens the tracker over the JSON store rooted at the config's data
    /// directory, with the system clock.
    pub fn open_default(config: &TrackerConfig) -> Result<Self, CoreError> {
        let store = JsonRecordStore::new(config.resolve_data_root())?;
        Ok(Self::open(Box::new(store), Box::new(SystemClock)))
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validates and records a new transaction at the head of the log
    /// (newest-first canonical order), persists the collection, and resets
    /// the form. On rejection the log and the form are left untouched.
    pub fn add_transaction(&mut self, form: &mut TransactionForm) -> Result<Uuid, CoreError> {
        let transaction = TransactionService::create(form)?;
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.persist_transactions();
        form.reset(self.clock.today());
        Ok(id)
    }

    /// Validates and records a new goal at the tail of the list (creation
    /// order), persists the collection, and resets the form.
    pub fn add_goal(&mut self, form: &mut GoalForm) -> Result<Uuid, CoreError> {
        let goal = GoalService::create(form)?;
        let id = goal.id;
        self.goals.push(goal);
        self.persist_goals();
        form.reset();
        Ok(id)
    }

    /// Sets a goal's saved amount. This is the only mutation path for goal
    /// progress; it is never derived from transaction activity.
    pub fn set_goal_progress(&mut self, id: Uuid, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::Validation(
                "progress amount must be non-negative".into(),
            ));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| CoreError::Validation(format!("goal {id} not found")))?;
        goal.current = amount;
        self.persist_goals();
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Warnings collected from load fallbacks and failed persists. When one
    /// of these occurs the in-memory data stays authoritative; durability
    /// catches up on the next successful save.
    pub fn storage_warnings(&self) -> &[String] {
        &self.storage_warnings
    }

    pub fn totals(&self) -> Totals {
        SummaryService::totals(&self.transactions)
    }

    pub fn balance_percent(&self) -> f64 {
        SummaryService::balance_percent(&self.totals())
    }

    pub fn expenses_by_category(&self) -> Vec<CategorySlice> {
        SummaryService::expenses_by_category(&self.transactions)
    }

    pub fn monthly_trend(&self) -> Vec<MonthlyFlow> {
        SummaryService::monthly_trend(&self.transactions, self.clock.today())
    }

    pub fn recent_transactions(&self, count: usize) -> &[Transaction] {
        SummaryService::recent(&self.transactions, count)
    }

    pub fn goal_progress(&self, goal: &Goal) -> GoalProgress {
        GoalService::progress(goal, self.clock.today())
    }

    fn persist_transactions(&mut self) {
        if let Err(err) = self.store.save_transactions(&self.transactions) {
            self.record_save_failure("transaction", &err);
        }
    }

    fn persist_goals(&mut self) {
        if let Err(err) = self.store.save_goals(&self.goals) {
            self.record_save_failure("goal", &err);
        }
    }

    fn record_save_failure(&mut self, collection: &str, err: &CoreError) {
        let message = format!("{collection} collection could not be persisted: {err}");
        warn!("{message}");
        self.storage_warnings.push(message);
    }
}
