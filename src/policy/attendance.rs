//! Attendance records submitted by ushers and department leaders.

use super::ResourcePolicy;
use crate::domain::ability::*;
use crate::domain::{Attendance, User};
use crate::gate::Gate;

#[derive(Debug, Clone, Copy)]
pub struct AttendancePolicy<'a> {
    gate: &'a Gate,
}

impl<'a> AttendancePolicy<'a> {
    pub fn new(gate: &'a Gate) -> Self {
        Self { gate }
    }

    pub fn approve(&self, user: &User) -> bool {
        self.gate.allows(user, ATTENDANCE_APPROVE)
    }

    pub fn reject(&self, user: &User) -> bool {
        self.gate.allows(user, ATTENDANCE_REJECT)
    }

    pub fn export(&self, user: &User) -> bool {
        self.gate.allows(user, ATTENDANCE_EXPORT)
    }
}

impl ResourcePolicy for AttendancePolicy<'_> {
    type Resource = Attendance;

    fn view_any(&self, user: &User) -> bool {
        self.gate.allows(user, ATTENDANCE_VIEW)
    }

    /// The submitter can always read their own record.
    fn view(&self, user: &User, attendance: &Attendance) -> bool {
        user.id == attendance.submitted_by || self.gate.allows(user, ATTENDANCE_VIEW)
    }

    fn create(&self, user: &User) -> bool {
        self.gate.allows(user, ATTENDANCE_CREATE)
    }

    /// Only the submitter, only while pending. Editing is part of submitting,
    /// so the create ability is the one checked.
    fn update(&self, user: &User, attendance: &Attendance) -> bool {
        attendance.status.is_pending()
            && user.id == attendance.submitted_by
            && self.gate.allows(user, ATTENDANCE_CREATE)
    }

    fn delete(&self, user: &User, _attendance: &Attendance) -> bool {
        self.gate.allows(user, ATTENDANCE_DELETE)
    }
}
