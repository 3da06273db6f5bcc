//! Link kinds shown next to a location, with their icon and title.

use std::fmt;
use std::str::FromStr;

/// A kind of resource attached to a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Web,
    Facebook,
    Instagram,
    Youtube,
    Location,
    Visited,
    Map,
}

impl ResourceKind {
    /// All kinds in display order.
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Web,
        ResourceKind::Facebook,
        ResourceKind::Instagram,
        ResourceKind::Youtube,
        ResourceKind::Location,
        ResourceKind::Visited,
        ResourceKind::Map,
    ];

    /// Looks up a kind by its key (`"web"`, `"facebook"`, ...).
    ///
    /// Keys are matched exactly; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::Web => "web",
            ResourceKind::Facebook => "facebook",
            ResourceKind::Instagram => "instagram",
            ResourceKind::Youtube => "youtube",
            ResourceKind::Location => "location",
            ResourceKind::Visited => "visited",
            ResourceKind::Map => "map",
        }
    }

    /// Icon identifier understood by the UI icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Web => "i-heroicons-globe-alt",
            ResourceKind::Facebook => "i-simple-icons-facebook",
            ResourceKind::Instagram => "i-simple-icons-instagram",
            ResourceKind::Youtube => "i-simple-icons-youtube",
            ResourceKind::Location => "i-heroicons-map-pin",
            ResourceKind::Visited => "i-heroicons-check-circle",
            ResourceKind::Map => "i-heroicons-map",
        }
    }

    /// Display title (Czech, as shown in the catalog UI).
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Web => "Webová stránka",
            ResourceKind::Facebook => "Facebook",
            ResourceKind::Instagram => "Instagram",
            ResourceKind::Youtube => "YouTube",
            ResourceKind::Location => "Lokace",
            ResourceKind::Visited => "Navštíveno",
            ResourceKind::Map => "Mapa",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown resource kind '{}'", s))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
