//! Ticket service
//!
//! `TicketService` keeps four views of the same tickets in step: the
//! registry, the undo history and the two dispatch queues. Adds fan out to
//! all four under one exclusion scope. Deletes and undos only touch the
//! registry, so the queues may still hand out tickets that are no longer
//! live.
//!
//! Lock order is fixed: registry, undo, priority, round robin. Every method
//! acquires the locks it needs in that order.

use crate::config::{DeskConfig, DuplicatePolicy};
use crate::core::{Priority, Ticket, TicketId};
use crate::dispatch::{DispatchQueue, PriorityDispatcher, QueueKind, RoundRobinDispatcher};
use crate::error::{DeskError, Result};
use crate::events::{DeskEvent, EventFeed};
use crate::storage::{InMemoryRegistry, TicketRepository};
use crate::undo::UndoHistory;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Result of `undo_last_add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "ticket_id", rename_all = "snake_case")]
pub enum UndoOutcome {
    /// The most recent add was reversed for this id
    Removed(TicketId),
    NothingToUndo,
}

/// Point-in-time sizes of every desk structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeskSnapshot {
    pub live_tickets: usize,
    pub undo_depth: usize,
    pub urgent_pending: usize,
    pub normal_pending: usize,
    pub round_robin_pending: usize,
}

/// Orchestrates the registry, undo history and dispatch queues
pub struct TicketService<R: TicketRepository = InMemoryRegistry> {
    settings: DeskConfig,
    registry: RwLock<R>,
    undo: Mutex<UndoHistory>,
    priority: Mutex<PriorityDispatcher>,
    round_robin: Mutex<RoundRobinDispatcher>,
    events: EventFeed,
}

impl<R: TicketRepository> std::fmt::Debug for TicketService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketService")
            .field("settings", &self.settings)
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl TicketService {
    /// Create a service backed by the in-memory registry
    pub fn new(settings: DeskConfig) -> Self {
        Self::with_repository(InMemoryRegistry::new(), settings)
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new(DeskConfig::default())
    }
}

impl<R: TicketRepository> TicketService<R> {
    /// Create a service around an existing registry
    pub fn with_repository(registry: R, settings: DeskConfig) -> Self {
        let events = EventFeed::new(settings.event_capacity);
        Self {
            settings,
            registry: RwLock::new(registry),
            undo: Mutex::new(UndoHistory::new()),
            priority: Mutex::new(PriorityDispatcher::new()),
            round_robin: Mutex::new(RoundRobinDispatcher::new()),
            events,
        }
    }

    /// Subscribe to desk events
    pub fn subscribe(&self) -> broadcast::Receiver<DeskEvent> {
        self.events.subscribe()
    }

    /// Create a ticket and register it with every structure
    ///
    /// Validation runs before anything is touched, so a rejected add leaves
    /// the desk exactly as it was.
    pub fn add_ticket(
        &self,
        id: TicketId,
        customer_name: impl Into<String>,
        issue: impl Into<String>,
        priority: Priority,
    ) -> Result<Arc<Ticket>> {
        if self.settings.strict_priority && !priority.is_in_range() {
            warn!(%id, %priority, "Rejected ticket with out-of-range priority");
            return Err(DeskError::InvalidPriority {
                priority: priority.value(),
            });
        }

        let ticket = Arc::new(Ticket::new(id, customer_name, issue, priority));

        let replaced = {
            let mut registry = self.write_registry();
            if self.settings.duplicate_policy == DuplicatePolicy::Reject && registry.contains(id) {
                warn!(%id, "Rejected duplicate ticket");
                return Err(DeskError::DuplicateTicket { id });
            }

            let mut undo = lock(&self.undo);
            let mut priority_queue = lock(&self.priority);
            let mut round_robin = lock(&self.round_robin);

            let replaced = registry.insert(Arc::clone(&ticket)).is_some();
            undo.record(id);
            priority_queue.enqueue(Arc::clone(&ticket));
            round_robin.enqueue(Arc::clone(&ticket));
            replaced
        };

        debug!(%id, tier = %ticket.tier(), replaced, "Added ticket");
        self.events.publish(DeskEvent::TicketAdded {
            ticket: Arc::clone(&ticket),
            replaced,
        });
        Ok(ticket)
    }

    /// Remove a ticket from the registry only
    ///
    /// Dispatch queues and the undo history keep whatever they hold.
    pub fn delete_ticket(&self, id: TicketId) -> bool {
        let removed = self.write_registry().delete(id);
        debug!(%id, removed, "Delete requested");
        if removed {
            self.events.publish(DeskEvent::TicketDeleted { ticket_id: id });
        }
        removed
    }

    pub fn find_ticket(&self, id: TicketId) -> Option<Arc<Ticket>> {
        self.read_registry().find(id)
    }

    /// Live tickets, most recently added first; empty when the desk is empty
    pub fn list_tickets(&self) -> Vec<Arc<Ticket>> {
        self.read_registry().list_all()
    }

    /// Reverse the most recent add
    ///
    /// The popped id is deleted from the registry even if it is already
    /// gone; that is not an error here.
    pub fn undo_last_add(&self) -> UndoOutcome {
        let (id, was_live) = {
            let mut registry = self.write_registry();
            let Some(id) = lock(&self.undo).undo_last() else {
                debug!("Nothing to undo");
                return UndoOutcome::NothingToUndo;
            };
            (id, registry.delete(id))
        };

        info!(%id, was_live, "Undid ticket add");
        self.events.publish(DeskEvent::AddUndone {
            ticket_id: id,
            was_live,
        });
        UndoOutcome::Removed(id)
    }

    /// Next ticket by priority tier, `None` when the queue is empty
    pub fn process_priority(&self) -> Option<Arc<Ticket>> {
        self.dispatch(&self.priority, QueueKind::Priority)
    }

    /// Next ticket in arrival order, `None` when the queue is empty
    pub fn process_round_robin(&self) -> Option<Arc<Ticket>> {
        self.dispatch(&self.round_robin, QueueKind::RoundRobin)
    }

    /// Sizes of every structure, taken under all locks at once
    pub fn snapshot(&self) -> DeskSnapshot {
        let registry = self.read_registry();
        let undo = lock(&self.undo);
        let priority = lock(&self.priority);
        let round_robin = lock(&self.round_robin);

        DeskSnapshot {
            live_tickets: registry.len(),
            undo_depth: undo.len(),
            urgent_pending: priority.urgent_len(),
            normal_pending: priority.normal_len(),
            round_robin_pending: round_robin.len(),
        }
    }

    // Dispatch never consults the registry: stale tickets are returned as-is.
    fn dispatch<Q: DispatchQueue>(&self, queue: &Mutex<Q>, kind: QueueKind) -> Option<Arc<Ticket>> {
        let Some(ticket) = lock(queue).dequeue() else {
            debug!(queue = %kind, "No tickets to dispatch");
            return None;
        };

        info!(queue = %kind, id = %ticket.id(), "Dispatched ticket");
        self.events.publish(DeskEvent::TicketDispatched {
            queue: kind,
            ticket: Arc::clone(&ticket),
        });
        Some(ticket)
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, R> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, R> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// Guarded updates cannot fail halfway, so a poisoned lock still holds
// consistent state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockTicketRepository;
    use crate::test_utils::{add_sample_tickets, service_with};

    #[test]
    fn test_add_fans_out_to_every_structure() {
        let service = TicketService::default();
        service
            .add_ticket(TicketId::new(1), "Alice", "printer jam", Priority::URGENT)
            .unwrap();

        let snapshot = service.snapshot();
        assert_eq!(
            snapshot,
            DeskSnapshot {
                live_tickets: 1,
                undo_depth: 1,
                urgent_pending: 1,
                normal_pending: 0,
                round_robin_pending: 1,
            }
        );
    }

    #[test]
    fn test_queues_share_the_registry_ticket() {
        let service = TicketService::default();
        let added = service
            .add_ticket(TicketId::new(1), "Alice", "printer jam", Priority::new(2))
            .unwrap();

        let from_priority = service.process_priority().unwrap();
        let from_round_robin = service.process_round_robin().unwrap();
        assert!(Arc::ptr_eq(&added, &from_priority));
        assert!(Arc::ptr_eq(&added, &from_round_robin));
    }

    #[test]
    fn test_duplicate_rejected_leaves_desk_untouched() {
        let service = TicketService::default();
        service
            .add_ticket(TicketId::new(1), "Alice", "printer jam", Priority::URGENT)
            .unwrap();
        let before = service.snapshot();

        let result = service.add_ticket(TicketId::new(1), "Mallory", "again", Priority::new(3));
        assert!(matches!(result, Err(DeskError::DuplicateTicket { .. })));
        assert_eq!(service.snapshot(), before);
        assert_eq!(
            service.find_ticket(TicketId::new(1)).unwrap().customer_name(),
            "Alice"
        );
    }

    #[test]
    fn test_deleted_id_can_be_added_again() {
        let service = TicketService::default();
        service
            .add_ticket(TicketId::new(1), "Alice", "first", Priority::new(2))
            .unwrap();
        assert!(service.delete_ticket(TicketId::new(1)));

        service
            .add_ticket(TicketId::new(1), "Alice", "second", Priority::new(2))
            .unwrap();
        assert_eq!(service.find_ticket(TicketId::new(1)).unwrap().issue(), "second");
    }

    #[test]
    fn test_replace_policy_overwrites_registry_entry() {
        let service = service_with(DeskConfig {
            duplicate_policy: DuplicatePolicy::Replace,
            ..DeskConfig::default()
        });
        service
            .add_ticket(TicketId::new(1), "Alice", "old", Priority::new(3))
            .unwrap();
        service
            .add_ticket(TicketId::new(1), "Alice", "new", Priority::URGENT)
            .unwrap();

        assert_eq!(service.list_tickets().len(), 1);
        assert_eq!(service.find_ticket(TicketId::new(1)).unwrap().issue(), "new");

        // Both versions were dispatched; the replaced one is now stale
        let snapshot = service.snapshot();
        assert_eq!(snapshot.undo_depth, 2);
        assert_eq!(snapshot.round_robin_pending, 2);
        assert_eq!(service.process_priority().unwrap().issue(), "new");
        assert_eq!(service.process_priority().unwrap().issue(), "old");
    }

    #[test]
    fn test_undo_after_replace_removes_id_entirely() {
        let service = service_with(DeskConfig {
            duplicate_policy: DuplicatePolicy::Replace,
            ..DeskConfig::default()
        });
        service
            .add_ticket(TicketId::new(1), "Alice", "old", Priority::new(3))
            .unwrap();
        service
            .add_ticket(TicketId::new(1), "Alice", "new", Priority::new(3))
            .unwrap();
        let mut events = service.subscribe();

        // The overwritten entry is gone for good; undo does not restore it
        assert_eq!(service.undo_last_add(), UndoOutcome::Removed(TicketId::new(1)));
        assert!(service.find_ticket(TicketId::new(1)).is_none());
        assert!(service.list_tickets().is_empty());

        assert_eq!(service.undo_last_add(), UndoOutcome::Removed(TicketId::new(1)));
        assert_eq!(service.undo_last_add(), UndoOutcome::NothingToUndo);

        let was_live: Vec<bool> = std::iter::from_fn(|| events.try_recv().ok())
            .filter_map(|event| match event {
                DeskEvent::AddUndone { was_live, .. } => Some(was_live),
                _ => None,
            })
            .collect();
        assert_eq!(was_live, vec![true, false]);
    }

    #[test]
    fn test_oversized_event_capacity_does_not_panic() {
        let service = service_with(DeskConfig {
            event_capacity: usize::MAX,
            ..DeskConfig::default()
        });
        let mut events = service.subscribe();
        service
            .add_ticket(TicketId::new(1), "A", "B", Priority::URGENT)
            .unwrap();
        assert!(events.try_recv().is_ok());
    }

    #[test]
    fn test_strict_priority_rejects_out_of_range() {
        let service = service_with(DeskConfig {
            strict_priority: true,
            ..DeskConfig::default()
        });

        for priority in [0, 6, -3] {
            let result = service.add_ticket(TicketId::new(1), "A", "B", Priority::new(priority));
            assert!(matches!(result, Err(DeskError::InvalidPriority { .. })));
        }
        assert_eq!(service.snapshot(), DeskSnapshot::default());

        assert!(
            service
                .add_ticket(TicketId::new(1), "A", "B", Priority::new(5))
                .is_ok()
        );
    }

    #[test]
    fn test_permissive_priority_is_normal_tier() {
        let service = TicketService::default();
        service
            .add_ticket(TicketId::new(1), "A", "B", Priority::new(42))
            .unwrap();
        let snapshot = service.snapshot();
        assert_eq!(snapshot.normal_pending, 1);
        assert_eq!(snapshot.urgent_pending, 0);
    }

    #[test]
    fn test_undo_after_delete_is_still_removed() {
        let service = TicketService::default();
        service
            .add_ticket(TicketId::new(7), "A", "B", Priority::new(2))
            .unwrap();
        assert!(service.delete_ticket(TicketId::new(7)));

        let mut events = service.subscribe();
        assert_eq!(service.undo_last_add(), UndoOutcome::Removed(TicketId::new(7)));
        match events.try_recv() {
            Ok(DeskEvent::AddUndone { ticket_id, was_live }) => {
                assert_eq!(ticket_id, TicketId::new(7));
                assert!(!was_live);
            },
            other => panic!("Expected AddUndone event, got {other:?}"),
        }
        assert_eq!(service.undo_last_add(), UndoOutcome::NothingToUndo);
    }

    #[test]
    fn test_undo_does_not_touch_queues() {
        let service = TicketService::default();
        add_sample_tickets(&service);
        let before = service.snapshot();

        service.undo_last_add();
        let after = service.snapshot();
        assert_eq!(after.live_tickets, before.live_tickets - 1);
        assert_eq!(after.undo_depth, before.undo_depth - 1);
        assert_eq!(after.round_robin_pending, before.round_robin_pending);
        assert_eq!(after.urgent_pending, before.urgent_pending);
        assert_eq!(after.normal_pending, before.normal_pending);
    }

    #[test]
    fn test_events_for_add_and_dispatch() {
        let service = TicketService::default();
        let mut events = service.subscribe();

        service
            .add_ticket(TicketId::new(3), "Carol", "vpn", Priority::new(4))
            .unwrap();
        service.process_round_robin();
        // Empty queue publishes nothing
        service.process_round_robin();
        // Failed delete publishes nothing
        service.delete_ticket(TicketId::new(99));

        assert!(matches!(
            events.try_recv(),
            Ok(DeskEvent::TicketAdded { replaced: false, .. })
        ));
        match events.try_recv() {
            Ok(DeskEvent::TicketDispatched { queue, ticket }) => {
                assert_eq!(queue, QueueKind::RoundRobin);
                assert_eq!(ticket.id(), TicketId::new(3));
            },
            other => panic!("Expected TicketDispatched event, got {other:?}"),
        }
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_delete_only_touches_registry() {
        let mut registry = MockTicketRepository::new();
        registry
            .expect_delete()
            .withf(|id| *id == TicketId::new(5))
            .times(1)
            .return_const(true);

        let service = TicketService::with_repository(registry, DeskConfig::default());
        assert!(service.delete_ticket(TicketId::new(5)));
    }

    #[test]
    fn test_add_consults_registry_once_under_reject_policy() {
        let mut registry = MockTicketRepository::new();
        registry.expect_contains().times(1).return_const(false);
        registry.expect_insert().times(1).returning(|_| None);

        let service = TicketService::with_repository(registry, DeskConfig::default());
        service
            .add_ticket(TicketId::new(1), "A", "B", Priority::URGENT)
            .unwrap();
        assert_eq!(service.process_priority().unwrap().id(), TicketId::new(1));
    }

    #[test]
    fn test_dispatch_never_reads_registry() {
        // The mock has no expectations: any registry call would panic
        let registry = MockTicketRepository::new();
        let service = TicketService::with_repository(registry, DeskConfig::default());
        assert!(service.process_priority().is_none());
        assert!(service.process_round_robin().is_none());
    }
}
