//! Dashboard and revenue aggregates.
//!
//! Every figure here is recomputed from the stored rows on each call;
//! nothing in this module is ever written back. Money stays in [`Decimal`]
//! end to end and is only rounded at the final per-member average.

use crate::entities::{
    client, enquiry, membership, pt_client, Client, Enquiry, EnquiryStatus, Fee, Membership,
    MembershipStatus, PtClient, Salary, Staff,
};
use crate::errors::Result;
use crate::store;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{prelude::*, QuerySelect};

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_clients: u64,
    pub total_staff: u64,
    pub pending_enquiries: u64,
    /// Uncancelled memberships ending within the reminder window
    pub memberships_expiring_soon: u64,
    pub active_pt_engagements: u64,
}

/// Income against outgoings across the whole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueReport {
    /// Collected membership fees plus collected personal-training fees
    pub total_revenue: Decimal,
    /// Billed but not yet collected, across fees and engagements
    pub outstanding_dues: Decimal,
    /// Salaries paid out
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    pub active_members: u64,
    /// Revenue divided by active members, rounded to two places;
    /// zero when there are no active members
    pub avg_revenue_per_member: Decimal,
}

/// Enquiry counts by lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnquiryFunnel {
    pub pending: u64,
    pub contacted: u64,
    pub converted: u64,
    pub closed: u64,
}

impl EnquiryFunnel {
    /// Share of enquiries that became clients, rounded to two places.
    #[must_use]
    pub fn conversion_rate(&self) -> Decimal {
        let total = self.pending + self.contacted + self.converted + self.closed;
        if total == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.converted) / Decimal::from(total)).round_dp(2)
    }
}

/// Computes the dashboard counters as of `today`, with memberships ending in
/// the next `expiry_window_days` flagged for renewal reminders.
pub async fn dashboard_stats(
    db: &DatabaseConnection,
    today: NaiveDate,
    expiry_window_days: u64,
) -> Result<DashboardStats> {
    let horizon = today + chrono::Days::new(expiry_window_days);

    let active_clients = store::count(
        db,
        Client::find().filter(client::Column::IsActive.eq(true)),
    )
    .await?;
    let total_staff = store::count(db, Staff::find()).await?;
    let pending_enquiries = store::count(
        db,
        Enquiry::find().filter(enquiry::Column::Status.eq(EnquiryStatus::Pending)),
    )
    .await?;
    let memberships_expiring_soon = store::count(
        db,
        Membership::find()
            .filter(membership::Column::Status.eq(MembershipStatus::Active))
            .filter(membership::Column::EndDate.gte(today))
            .filter(membership::Column::EndDate.lte(horizon)),
    )
    .await?;
    let active_pt_engagements = store::count(
        db,
        PtClient::find().filter(pt_client::Column::IsActive.eq(true)),
    )
    .await?;

    Ok(DashboardStats {
        active_clients,
        total_staff,
        pending_enquiries,
        memberships_expiring_soon,
        active_pt_engagements,
    })
}

/// Computes the revenue report over everything recorded so far.
///
/// Aggregation happens in Rust over the full row sets rather than in SQL so
/// the money columns stay in [`Decimal`] the whole way.
pub async fn revenue_report(db: &DatabaseConnection) -> Result<RevenueReport> {
    let fees = Fee::find().all(db).await?;
    let (fee_revenue, fee_dues) = fees.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(revenue, dues), fee| (revenue + fee.paid_amount, dues + fee.due_amount),
    );

    let engagements = PtClient::find().all(db).await?;
    let (pt_revenue, pt_dues) = engagements.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(revenue, dues), engagement| (revenue + engagement.paid_fee, dues + engagement.due_fee),
    );

    let salaries = Salary::find().all(db).await?;
    let total_expenses = salaries
        .iter()
        .fold(Decimal::ZERO, |sum, salary| sum + salary.paid_salary);

    let active_members = store::count(
        db,
        Client::find().filter(client::Column::IsActive.eq(true)),
    )
    .await?;

    let total_revenue = fee_revenue + pt_revenue;
    let avg_revenue_per_member = if active_members == 0 {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(active_members)).round_dp(2)
    };

    Ok(RevenueReport {
        total_revenue,
        outstanding_dues: fee_dues + pt_dues,
        total_expenses,
        net_profit: total_revenue - total_expenses,
        active_members,
        avg_revenue_per_member,
    })
}

/// Counts enquiries in each lifecycle state.
pub async fn enquiry_funnel(db: &DatabaseConnection) -> Result<EnquiryFunnel> {
    let statuses: Vec<EnquiryStatus> = Enquiry::find()
        .select_only()
        .column(enquiry::Column::Status)
        .into_tuple()
        .all(db)
        .await?;

    let mut funnel = EnquiryFunnel::default();
    for status in statuses {
        match status {
            EnquiryStatus::Pending => funnel.pending += 1,
            EnquiryStatus::Contacted => funnel.contacted += 1,
            EnquiryStatus::Converted => funnel.converted += 1,
            EnquiryStatus::Closed => funnel.closed += 1,
        }
    }
    Ok(funnel)
}
