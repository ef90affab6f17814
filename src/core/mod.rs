//! Core business logic - store-backed command operations and pure
//! derived-value calculators, independent of any presentation layer.

/// Role oracles and profile management backed by the profiles table
pub mod access;
/// Staff attendance: check-in, check-out, derived working hours
pub mod attendance;
/// Pure derived-value calculators (due amounts, statuses, remaining counts)
pub mod calc;
/// Client records and soft deactivation
pub mod client;
/// Enquiry funnel lifecycle
pub mod enquiry;
/// Fee records with derived due amount and settlement status
pub mod fee;
/// Membership lifecycle: append-only renewals, explicit cancellation
pub mod membership;
/// Personal training engagements
pub mod pt;
/// Dashboard and revenue aggregates
pub mod report;
/// Monthly staff salaries
pub mod salary;
/// Staff records
pub mod staff;
/// Advisory referential checks against the current data snapshot
pub mod validate;
