//! The fixed set of external-service endpoints the mock answers.

use std::fmt;

/// An external service endpoint stood in for by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    DoctorCalendar,
    RoomReservation,
    EmailNotification,
}

impl Route {
    /// Every recognised route, in registration order.
    pub const ALL: [Route; 3] = [
        Route::DoctorCalendar,
        Route::RoomReservation,
        Route::EmailNotification,
    ];

    /// Request path the route is mounted at.
    pub const fn path(self) -> &'static str {
        match self {
            Route::DoctorCalendar => "/doctor-calendar",
            Route::RoomReservation => "/room-reservation",
            Route::EmailNotification => "/email-notification",
        }
    }

    /// Exact, case-sensitive path lookup.
    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
