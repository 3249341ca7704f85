//! Care dashboard filtering and ordering
//!
//! The two dashboard filters are independent: `priority` separates escalated
//! conversations from normal ones, `status` narrows to a single non-escalated
//! status. Escalated rows can only be selected through `priority`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entities::ConversationStatus;
use caredesk_common::Error;

/// Rank given to any status the dashboard does not know about
const FALLBACK_RANK: i32 = 3;

/// Priority dimension of the dashboard query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityFilter {
    #[default]
    All,
    Escalated,
    Normal,
}

impl PriorityFilter {
    pub fn admits(&self, status: ConversationStatus) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Escalated => status == ConversationStatus::Escalated,
            PriorityFilter::Normal => matches!(
                status,
                ConversationStatus::Open | ConversationStatus::Closed
            ),
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(PriorityFilter::All),
            "ESCALATED" => Ok(PriorityFilter::Escalated),
            "NORMAL" => Ok(PriorityFilter::Normal),
            other => Err(Error::Validation(format!(
                "Unknown priority filter '{other}' (expected ALL, ESCALATED or NORMAL)"
            ))),
        }
    }
}

/// Status dimension of the dashboard query. Never `ESCALATED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    pub fn admits(&self, status: ConversationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status == ConversationStatus::Open,
            StatusFilter::Closed => status == ConversationStatus::Closed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(StatusFilter::All),
            "OPEN" => Ok(StatusFilter::Open),
            "CLOSED" => Ok(StatusFilter::Closed),
            other => Err(Error::Validation(format!(
                "Unknown status filter '{other}' (expected ALL, OPEN or CLOSED)"
            ))),
        }
    }
}

/// Dashboard filter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationFilters {
    #[serde(default)]
    pub priority: PriorityFilter,
    #[serde(default)]
    pub status: StatusFilter,
}

impl ConversationFilters {
    pub fn new(priority: PriorityFilter, status: StatusFilter) -> Self {
        Self { priority, status }
    }

    /// Parse the raw query values supplied by the shell; absent means `ALL`
    pub fn parse(priority: Option<&str>, status: Option<&str>) -> Result<Self, Error> {
        Ok(Self {
            priority: priority
                .map(str::parse::<PriorityFilter>)
                .transpose()?
                .unwrap_or_default(),
            status: status
                .map(str::parse::<StatusFilter>)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// A row matches when both filters independently pass
    pub fn matches(&self, status: ConversationStatus) -> bool {
        self.priority.admits(status) && self.status.admits(status)
    }

    /// Statuses a matching row may have; empty when the filters exclude each other
    pub fn admissible_statuses(&self) -> Vec<ConversationStatus> {
        ConversationStatus::ALL
            .into_iter()
            .filter(|status| self.matches(*status))
            .collect()
    }
}

/// Dashboard rank: escalated first, then open, then closed
pub fn dashboard_rank(status: ConversationStatus) -> i32 {
    match status {
        ConversationStatus::Escalated => 0,
        ConversationStatus::Open => 1,
        ConversationStatus::Closed => 2,
    }
}

/// SQL `CASE` expression ranking `column` by [`dashboard_rank`]
pub fn dashboard_rank_sql(column: &str) -> String {
    let arms: String = ConversationStatus::ALL
        .iter()
        .map(|status| format!(" WHEN '{}' THEN {}", status, dashboard_rank(*status)))
        .collect();
    format!("CASE {column}{arms} ELSE {FALLBACK_RANK} END")
}
