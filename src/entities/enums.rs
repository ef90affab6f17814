//! Closed status sets stored as string-valued database enums.
//!
//! Each set matches the hosted schema exactly. Parsing is strict: values are
//! matched verbatim with no coercion or case folding, and a miss reports the
//! offending field together with the accepted set.

use crate::errors::{Error, Result};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Funnel state of a prospective-member enquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum EnquiryStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "contacted")]
    Contacted,
    #[sea_orm(string_value = "converted")]
    Converted,
    #[sea_orm(string_value = "closed")]
    Closed,
}

impl EnquiryStatus {
    /// Accepted wire values, in schema order.
    pub const VALUES: &'static [&'static str] = &["pending", "contacted", "converted", "closed"];

    /// Parses a raw status string, rejecting anything outside the closed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "pending" => Ok(Self::Pending),
            "contacted" => Ok(Self::Contacted),
            "converted" => Ok(Self::Converted),
            "closed" => Ok(Self::Closed),
            _ => Err(Error::InvalidEnumValue {
                field: "enquiry_status",
                value: value.to_owned(),
                expected: Self::VALUES,
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Converted => "converted",
            Self::Closed => "closed",
        }
    }

    /// Terminal funnel states admit no further status or assignment changes.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Converted | Self::Closed)
    }

    /// Allowed funnel moves: pending may go anywhere forward, contacted may
    /// resolve either way, terminal states are frozen.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (
                Self::Pending,
                Self::Contacted | Self::Converted | Self::Closed
            ) | (Self::Contacted, Self::Converted | Self::Closed)
        )
    }
}

impl fmt::Display for EnquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a membership. Only `active` and `cancelled` are ever
/// stored; `expired` is derived at read time from the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl MembershipStatus {
    pub const VALUES: &'static [&'static str] = &["active", "expired", "cancelled"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(Error::InvalidEnumValue {
                field: "membership_status",
                value: value.to_owned(),
                expected: Self::VALUES,
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement state of a fee or salary, derived from paid versus total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "unpaid")]
    Unpaid,
    #[sea_orm(string_value = "partial")]
    Partial,
}

impl PaymentStatus {
    pub const VALUES: &'static [&'static str] = &["paid", "unpaid", "partial"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            "partial" => Ok(Self::Partial),
            _ => Err(Error::InvalidEnumValue {
                field: "payment_status",
                value: value.to_owned(),
                expected: Self::VALUES,
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Console role attached to profiles and staff records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "staff")]
    Staff,
}

impl UserRole {
    pub const VALUES: &'static [&'static str] = &["admin", "staff"];

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            _ => Err(Error::InvalidEnumValue {
                field: "user_role",
                value: value.to_owned(),
                expected: Self::VALUES,
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn parse_accepts_every_listed_value() {
        for value in EnquiryStatus::VALUES {
            assert_eq!(EnquiryStatus::parse(value).unwrap().as_str(), *value);
        }
        for value in MembershipStatus::VALUES {
            assert_eq!(MembershipStatus::parse(value).unwrap().as_str(), *value);
        }
        for value in PaymentStatus::VALUES {
            assert_eq!(PaymentStatus::parse(value).unwrap().as_str(), *value);
        }
        for value in UserRole::VALUES {
            assert_eq!(UserRole::parse(value).unwrap().as_str(), *value);
        }
    }

    #[test]
    fn parse_is_exact_match_only() {
        // No case folding, no trimming, no coercion
        for raw in ["Paid", "PAID", " paid", "paid ", "settled", ""] {
            let err = PaymentStatus::parse(raw).unwrap_err();
            match err {
                crate::errors::Error::InvalidEnumValue {
                    field,
                    value,
                    expected,
                } => {
                    assert_eq!(field, "payment_status");
                    assert_eq!(value, raw);
                    assert_eq!(expected, PaymentStatus::VALUES);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn enquiry_terminal_states_are_frozen() {
        for terminal in [EnquiryStatus::Converted, EnquiryStatus::Closed] {
            assert!(terminal.is_terminal());
            for target in [
                EnquiryStatus::Pending,
                EnquiryStatus::Contacted,
                EnquiryStatus::Converted,
                EnquiryStatus::Closed,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn enquiry_forward_transitions() {
        assert!(EnquiryStatus::Pending.can_transition_to(EnquiryStatus::Contacted));
        assert!(EnquiryStatus::Pending.can_transition_to(EnquiryStatus::Converted));
        assert!(EnquiryStatus::Pending.can_transition_to(EnquiryStatus::Closed));
        assert!(EnquiryStatus::Contacted.can_transition_to(EnquiryStatus::Converted));
        assert!(EnquiryStatus::Contacted.can_transition_to(EnquiryStatus::Closed));
        // No moving backwards through the funnel
        assert!(!EnquiryStatus::Contacted.can_transition_to(EnquiryStatus::Pending));
        assert!(!EnquiryStatus::Pending.can_transition_to(EnquiryStatus::Pending));
    }
}
