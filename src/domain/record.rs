//! Records guarded by resource policies.
//!
//! Only the fields policies read are modelled here; the workflows that
//! create and mutate these records live elsewhere.

use super::user::UserId;
use serde::{Deserialize, Serialize};

/// Review state shared by submitted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
}

impl RecordStatus {
    pub fn is_pending(self) -> bool {
        self == RecordStatus::Pending
    }
}

/// A service attendance count submitted by an usher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub submitted_by: UserId,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    pub id: i64,
    pub created_by: UserId,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: i64,
    pub recorded_by: UserId,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub recorded_by: UserId,
    pub status: RecordStatus,
}

/// A first-time guest logged for follow-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub id: i64,
    pub assigned_to: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub leader_id: Option<UserId>,
}
