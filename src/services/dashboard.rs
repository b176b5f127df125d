//! Dashboard query layer
//!
//! Read-only aggregates for the role dashboards. Everything here is a pure
//! function of the store contents at call time: nothing is cached and
//! nothing is written, so two calls over unchanged state return equal
//! results.

use std::fmt;
use serde::Serialize;
use crate::models::event::{Event, EventId, EventStatus};
use crate::models::user::Role;
use crate::services::auth::{AuthContext, AuthService, Operation};
use crate::store::{EventRecord, EventStore, UserStore};
use crate::utils::errors::Result;

/// Number of events per lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub upcoming: u64,
    pub ongoing: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl StatusCounts {
    fn add(&mut self, status: EventStatus) {
        match status {
            EventStatus::Upcoming => self.upcoming += 1,
            EventStatus::Ongoing => self.ongoing += 1,
            EventStatus::Completed => self.completed += 1,
            EventStatus::Cancelled => self.cancelled += 1,
        }
    }

    pub fn get(&self, status: EventStatus) -> u64 {
        match status {
            EventStatus::Upcoming => self.upcoming,
            EventStatus::Ongoing => self.ongoing,
            EventStatus::Completed => self.completed,
            EventStatus::Cancelled => self.cancelled,
        }
    }

    pub fn total(&self) -> u64 {
        self.upcoming + self.ongoing + self.completed + self.cancelled
    }

    /// Upcoming plus ongoing
    pub fn active(&self) -> u64 {
        self.upcoming + self.ongoing
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationTotals {
    pub registrations: u64,
    pub capacity: u64,
}

impl RegistrationTotals {
    /// Taken places as a percentage of offered places
    pub fn fill_rate(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.registrations as f64 / self.capacity as f64 * 100.0
    }
}

/// Aggregates for one role's scope at one point in time. Keep one around
/// to compute trends on the next call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub role: Role,
    pub status_counts: StatusCounts,
    pub totals: RegistrationTotals,
    pub user_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Increase,
    Decrease,
    Flat,
}

/// Percentage change against a prior value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub percent: f64,
    pub direction: TrendDirection,
}

impl Trend {
    /// `None` when the prior value is zero and the current one is not,
    /// since no finite percentage describes that change.
    pub fn between(prior: f64, current: f64) -> Option<Trend> {
        if prior == 0.0 {
            return (current == 0.0).then_some(Trend {
                percent: 0.0,
                direction: TrendDirection::Flat,
            });
        }

        let percent = (current - prior) / prior.abs() * 100.0;
        let direction = if percent > 0.0 {
            TrendDirection::Increase
        } else if percent < 0.0 {
            TrendDirection::Decrease
        } else {
            TrendDirection::Flat
        };
        Some(Trend { percent, direction })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum StatValue {
    Count(u64),
    Percent(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            StatValue::Count(count) => *count as f64,
            StatValue::Percent(percent) => *percent,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(count) => write!(f, "{count}"),
            StatValue::Percent(percent) => write!(f, "{percent:.0}%"),
        }
    }
}

/// The metrics shown on dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatKind {
    EventsRegistered,
    UpcomingEvents,
    EventsAttended,
    EventsCreated,
    TotalRegistrations,
    ActiveEvents,
    AverageFillRate,
    TotalEvents,
    ActiveUsers,
    CancelledEvents,
}

impl StatKind {
    pub fn for_role(role: Role) -> &'static [StatKind] {
        match role {
            Role::Student => &[StatKind::EventsRegistered, StatKind::UpcomingEvents, StatKind::EventsAttended],
            Role::Organizer => &[
                StatKind::EventsCreated,
                StatKind::TotalRegistrations,
                StatKind::ActiveEvents,
                StatKind::AverageFillRate,
            ],
            Role::Admin => &[
                StatKind::TotalEvents,
                StatKind::ActiveUsers,
                StatKind::TotalRegistrations,
                StatKind::CancelledEvents,
            ],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StatKind::EventsRegistered => "Events Registered",
            StatKind::UpcomingEvents => "Upcoming Events",
            StatKind::EventsAttended => "Events Attended",
            StatKind::EventsCreated => "Events Created",
            StatKind::TotalRegistrations => "Total Registrations",
            StatKind::ActiveEvents => "Active Events",
            StatKind::AverageFillRate => "Avg. Fill Rate",
            StatKind::TotalEvents => "Total Events",
            StatKind::ActiveUsers => "Active Users",
            StatKind::CancelledEvents => "Cancelled Events",
        }
    }

    pub fn value(self, snapshot: &DashboardSnapshot) -> StatValue {
        let counts = &snapshot.status_counts;
        match self {
            StatKind::EventsRegistered | StatKind::EventsCreated | StatKind::TotalEvents => {
                StatValue::Count(counts.total())
            }
            StatKind::UpcomingEvents => StatValue::Count(counts.upcoming),
            StatKind::EventsAttended => StatValue::Count(counts.completed),
            StatKind::TotalRegistrations => StatValue::Count(snapshot.totals.registrations),
            StatKind::ActiveEvents => StatValue::Count(counts.active()),
            StatKind::AverageFillRate => StatValue::Percent(snapshot.totals.fill_rate()),
            StatKind::ActiveUsers => StatValue::Count(snapshot.user_count),
            StatKind::CancelledEvents => StatValue::Count(counts.cancelled),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub title: &'static str,
    pub value: StatValue,
    pub change: Option<Trend>,
}

/// Per-event figures for the organizer analytics view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventAnalytics {
    pub event_id: EventId,
    pub registrations: u32,
    pub max_capacity: u32,
    pub remaining: u32,
    pub fill_rate: f64,
    pub named_participants: usize,
}

/// What a user can do from an event card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardAction {
    View,
    Register { enabled: bool },
    Unregister { enabled: bool },
    Edit,
}

#[derive(Clone)]
pub struct DashboardService {
    events: EventStore,
    users: UserStore,
    auth: AuthService,
}

impl DashboardService {
    pub fn new(events: EventStore, users: UserStore, auth: AuthService) -> Self {
        Self { events, users, auth }
    }

    /// Events visible on the caller's dashboard: a student's registrations,
    /// an organizer's own events, or every event for an admin.
    fn scope(&self, ctx: &AuthContext) -> Result<Vec<EventRecord>> {
        let records = self.events.records();
        let scoped = match ctx.role {
            Role::Student => records.into_iter().filter(|r| r.is_registered(&ctx.user_id)).collect(),
            Role::Organizer => {
                self.auth.authorize(ctx, Operation::ViewAnalytics, Some(&ctx.user_id))?;
                records
                    .into_iter()
                    .filter(|r| r.event.is_organized_by(&ctx.user_id))
                    .collect()
            }
            Role::Admin => {
                self.auth.authorize(ctx, Operation::ViewAnalytics, None)?;
                records
            }
        };
        Ok(scoped)
    }

    pub fn status_counts(&self, ctx: &AuthContext) -> Result<StatusCounts> {
        Ok(count_statuses(&self.scope(ctx)?))
    }

    pub fn registration_totals(&self, ctx: &AuthContext) -> Result<RegistrationTotals> {
        Ok(sum_registrations(&self.scope(ctx)?))
    }

    pub fn snapshot(&self, ctx: &AuthContext) -> Result<DashboardSnapshot> {
        let scope = self.scope(ctx)?;
        Ok(DashboardSnapshot {
            role: ctx.role,
            status_counts: count_statuses(&scope),
            totals: sum_registrations(&scope),
            user_count: self.users.count() as u64,
        })
    }

    /// Cards for the caller's role, with trends against `prior` when given
    pub fn stat_cards(&self, ctx: &AuthContext, prior: Option<&DashboardSnapshot>) -> Result<Vec<StatCard>> {
        let current = self.snapshot(ctx)?;
        let cards = StatKind::for_role(ctx.role)
            .iter()
            .map(|&kind| {
                let value = kind.value(&current);
                let change = prior.and_then(|p| Trend::between(kind.value(p).as_f64(), value.as_f64()));
                StatCard {
                    kind,
                    title: kind.title(),
                    value,
                    change,
                }
            })
            .collect();
        Ok(cards)
    }

    /// Recommended events for students (open, not yet joined, soonest
    /// first); most recent events in scope for everyone else.
    pub fn featured_events(&self, ctx: &AuthContext, limit: usize) -> Result<Vec<Event>> {
        let mut events: Vec<Event> = match ctx.role {
            Role::Student => self
                .events
                .records()
                .into_iter()
                .filter(|r| r.event.is_registration_open() && !r.is_registered(&ctx.user_id))
                .map(|r| r.event)
                .collect(),
            Role::Organizer | Role::Admin => self.scope(ctx)?.into_iter().map(|r| r.event).collect(),
        };

        match ctx.role {
            Role::Student => events.sort_by(|a, b| a.starts_at.cmp(&b.starts_at)),
            Role::Organizer | Role::Admin => events.sort_by(|a, b| b.starts_at.cmp(&a.starts_at)),
        }
        events.truncate(limit);
        Ok(events)
    }

    /// Upcoming events across the campus, soonest first
    pub fn upcoming_events(&self, limit: usize) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .list()
            .into_iter()
            .filter(|e| e.status == EventStatus::Upcoming)
            .collect();
        events.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
        events.truncate(limit);
        events
    }

    pub fn event_analytics(&self, ctx: &AuthContext, event_id: &EventId) -> Result<EventAnalytics> {
        let record = self.events.record(event_id)?;
        self.auth
            .authorize(ctx, Operation::ViewAnalytics, Some(&record.event.organizer.user_id))?;

        let event = &record.event;
        Ok(EventAnalytics {
            event_id: event.id.clone(),
            registrations: event.registrations,
            max_capacity: event.max_capacity,
            remaining: event.remaining_capacity(),
            fill_rate: event.fill_ratio() * 100.0,
            named_participants: record.registrations().len(),
        })
    }

    /// Buttons shown on an event card for the caller
    pub fn card_actions(&self, ctx: &AuthContext, event_id: &EventId) -> Result<Vec<CardAction>> {
        let record = self.events.record(event_id)?;
        let mut actions = vec![CardAction::View];

        match ctx.role {
            Role::Student => {
                if record.is_registered(&ctx.user_id) {
                    actions.push(CardAction::Unregister {
                        enabled: record.event.status == EventStatus::Upcoming,
                    });
                } else {
                    actions.push(CardAction::Register {
                        enabled: record.event.is_registration_open(),
                    });
                }
            }
            Role::Organizer | Role::Admin => {
                if self
                    .auth
                    .is_allowed(ctx, Operation::EditEvent, Some(&record.event.organizer.user_id))
                {
                    actions.push(CardAction::Edit);
                }
            }
        }
        Ok(actions)
    }
}

fn count_statuses(records: &[EventRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records {
        counts.add(record.event.status);
    }
    counts
}

fn sum_registrations(records: &[EventRecord]) -> RegistrationTotals {
    records.iter().fold(RegistrationTotals::default(), |mut totals, record| {
        totals.registrations += u64::from(record.event.registrations);
        totals.capacity += u64::from(record.event.max_capacity);
        totals
    })
}
