//! Church leadership roster.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipRole {
    Eldership,
    Deacons,
}

impl LeadershipRole {
    /// Roles in the order the Leadership page lists them.
    pub const ALL: [LeadershipRole; 2] = [LeadershipRole::Eldership, LeadershipRole::Deacons];

    pub fn label(self) -> &'static str {
        match self {
            LeadershipRole::Eldership => "Eldership",
            LeadershipRole::Deacons => "Deacons",
        }
    }

    /// Introduction shown above the team.
    pub fn team_summary(self) -> &'static str {
        match self {
            LeadershipRole::Eldership => {
                "Our elders provide spiritual leadership, oversight, and pastoral care to our \
                 congregation. They are committed to teaching God's Word and shepherding our \
                 church family."
            }
            LeadershipRole::Deacons => {
                "Our deacons serve alongside the elders, focusing on the practical needs of our \
                 congregation and ensuring that our church operates smoothly and efficiently."
            }
        }
    }

    /// One-line description shown on each member's card.
    pub fn member_summary(self) -> &'static str {
        match self {
            LeadershipRole::Eldership => {
                "Providing spiritual oversight and guidance to our church family"
            }
            LeadershipRole::Deacons => "Serving our community with dedication and love",
        }
    }
}

impl fmt::Display for LeadershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadershipProfile {
    pub name: &'static str,
    pub role: LeadershipRole,
}

pub const LEADERSHIP_PROFILES: &[LeadershipProfile] = &[
    LeadershipProfile { name: "Rory & Liane Axcell", role: LeadershipRole::Eldership },
    LeadershipProfile { name: "Gary & Lisa-Marie Marques", role: LeadershipRole::Eldership },
    LeadershipProfile { name: "Graham & Tracy Lowry", role: LeadershipRole::Eldership },
    LeadershipProfile { name: "Brian & Mandy Capper", role: LeadershipRole::Deacons },
    LeadershipProfile { name: "Gareth & Ashleigh Axcell", role: LeadershipRole::Deacons },
    LeadershipProfile { name: "Greg & Natalie Downes", role: LeadershipRole::Deacons },
];

/// Profiles holding `role`, in roster order.
pub fn team(role: LeadershipRole) -> impl Iterator<Item = &'static LeadershipProfile> {
    LEADERSHIP_PROFILES.iter().filter(move |profile| profile.role == role)
}
